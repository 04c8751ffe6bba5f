use crate::error::Result;
use crate::format::ScoreTone;
use crate::model::{DerivedDataset, PlayerRecord};
use crate::ranking::Standings;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write players, sessions and leaderboards to an Excel file
pub fn write_standings_to_xlsx(
    dataset: &DerivedDataset,
    standings: &Standings,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_players_sheet(worksheet, &dataset.players)?;

    let worksheet = workbook.add_worksheet();
    write_games_sheet(worksheet, &dataset.players)?;

    let worksheet = workbook.add_worksheet();
    write_leaderboards_sheet(worksheet, standings)?;

    workbook.save(path)?;
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

/// Red for losses, default for gains and zero
fn score_format(score: f64) -> Format {
    let format = Format::new().set_align(FormatAlign::Center);
    match ScoreTone::of(score) {
        ScoreTone::Positive => format,
        ScoreTone::Negative => format.set_font_color(Color::Red),
    }
}

fn write_headers(sheet: &mut Worksheet, row: u32, headers: &[&str]) -> Result<()> {
    let format = header_format();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *header, &format)?;
    }
    Ok(())
}

/// Player summary values as they appear in the sheet
fn write_players_sheet(sheet: &mut Worksheet, players: &[PlayerRecord]) -> Result<()> {
    sheet.set_column_width(0, 20)?; // Name
    sheet.set_column_width(1, 8)?;  // Games
    sheet.set_column_width(2, 10)?; // Total
    sheet.set_column_width(3, 6)?;  // Wins
    sheet.set_column_width(4, 6)?;  // Losses
    sheet.set_column_width(5, 10)?; // Win %

    write_headers(sheet, 0, &["Player", "Games", "Total", "Wins", "Losses", "Win %"])?;

    let center_format = Format::new().set_align(FormatAlign::Center);
    let percent_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_num_format("0.0");

    for (idx, player) in players.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &player.name)?;
        sheet.write_number_with_format(row, 1, player.games_count, &center_format)?;
        sheet.write_number_with_format(
            row,
            2,
            player.total_score,
            &score_format(player.total_score),
        )?;
        sheet.write_number_with_format(row, 3, player.wins, &center_format)?;
        sheet.write_number_with_format(row, 4, player.losses, &center_format)?;
        if player.decided_games() > 0.0 {
            sheet.write_number_with_format(row, 5, player.win_rate(), &percent_format)?;
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.set_name("Players")?;
    Ok(())
}

/// One row per recorded session result
fn write_games_sheet(sheet: &mut Worksheet, players: &[PlayerRecord]) -> Result<()> {
    sheet.set_column_width(0, 20)?; // Player
    sheet.set_column_width(1, 8)?;  // Date
    sheet.set_column_width(2, 8)?;  // Score

    write_headers(sheet, 0, &["Player", "Date", "Score"])?;

    let center_format = Format::new().set_align(FormatAlign::Center);

    let mut row = 1u32;
    for player in players {
        for game in &player.games {
            sheet.write_string(row, 0, &player.name)?;
            sheet.write_string_with_format(row, 1, &game.date, &center_format)?;
            sheet.write_number_with_format(row, 2, game.score, &score_format(game.score))?;
            row += 1;
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.set_name("Games")?;
    Ok(())
}

/// All boards stacked vertically, each under its own title
fn write_leaderboards_sheet(sheet: &mut Worksheet, standings: &Standings) -> Result<()> {
    sheet.set_column_width(0, 6)?;  // Rank
    sheet.set_column_width(1, 20)?; // Player
    sheet.set_column_width(2, 10)?;
    sheet.set_column_width(3, 8)?;
    sheet.set_column_width(4, 8)?;

    let title_format = Format::new().set_bold().set_font_size(13);
    let center_format = Format::new().set_align(FormatAlign::Center);
    let percent_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_num_format("0.0");

    let mut row = 0u32;

    sheet.write_string_with_format(row, 0, "Total score", &title_format)?;
    write_headers(sheet, row + 1, &["Rank", "Player", "Total", "Wins", "Losses"])?;
    row += 2;
    for (i, e) in standings.by_score.iter().enumerate() {
        sheet.write_number_with_format(row, 0, (i + 1) as f64, &center_format)?;
        sheet.write_string(row, 1, &e.name)?;
        sheet.write_number_with_format(row, 2, e.total_score, &score_format(e.total_score))?;
        sheet.write_number_with_format(row, 3, e.wins, &center_format)?;
        sheet.write_number_with_format(row, 4, e.losses, &center_format)?;
        row += 1;
    }

    row += 1;
    sheet.write_string_with_format(row, 0, "Win rate", &title_format)?;
    write_headers(sheet, row + 1, &["Rank", "Player", "Win %", "Wins", "Losses", "Games"])?;
    row += 2;
    for (i, e) in standings.by_win_rate.iter().enumerate() {
        sheet.write_number_with_format(row, 0, (i + 1) as f64, &center_format)?;
        sheet.write_string(row, 1, &e.name)?;
        sheet.write_number_with_format(row, 2, e.win_rate, &percent_format)?;
        sheet.write_number_with_format(row, 3, e.wins, &center_format)?;
        sheet.write_number_with_format(row, 4, e.losses, &center_format)?;
        sheet.write_number_with_format(row, 5, e.total_games, &center_format)?;
        row += 1;
    }

    row += 1;
    sheet.write_string_with_format(row, 0, "Attendance", &title_format)?;
    write_headers(sheet, row + 1, &["Rank", "Player", "Games", "Wins", "Losses"])?;
    row += 2;
    for (i, e) in standings.by_attendance.iter().enumerate() {
        sheet.write_number_with_format(row, 0, (i + 1) as f64, &center_format)?;
        sheet.write_string(row, 1, &e.name)?;
        sheet.write_number_with_format(row, 2, e.games_count, &center_format)?;
        sheet.write_number_with_format(row, 3, e.wins, &center_format)?;
        sheet.write_number_with_format(row, 4, e.losses, &center_format)?;
        row += 1;
    }

    if !standings.hot_streak.is_empty() {
        row += 1;
        let title = format!("Hot streak (month {})", standings.month);
        sheet.write_string_with_format(row, 0, &title, &title_format)?;
        write_headers(sheet, row + 1, &["Rank", "Player", "Score", "Games"])?;
        row += 2;
        for (i, e) in standings.hot_streak.iter().enumerate() {
            sheet.write_number_with_format(row, 0, (i + 1) as f64, &center_format)?;
            sheet.write_string(row, 1, &e.name)?;
            sheet.write_number_with_format(row, 2, e.month_score, &score_format(e.month_score))?;
            sheet.write_number_with_format(row, 3, e.month_games as f64, &center_format)?;
            row += 1;
        }
    }

    sheet.set_name("Leaderboards")?;
    Ok(())
}
