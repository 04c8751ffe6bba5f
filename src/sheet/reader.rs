use super::layout::SheetLayout;
use crate::error::{Result, StandingsError};
use crate::grid::parse_grid;
use crate::model::{DerivedDataset, GameResult, PlayerRecord};
use std::path::Path;

/// A non-empty cell, if the row reaches that far
fn cell(row: &[String], column: usize) -> Option<&str> {
    row.get(column)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Parse a numeric cell; unparsable and non-finite values count as absent
fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Summary value at (`row`, `column`), 0 when missing or not a number
fn summary_value(grid: &[Vec<String>], row: usize, column: usize) -> f64 {
    grid.get(row)
        .and_then(|r| cell(r, column))
        .and_then(parse_number)
        .unwrap_or(0.0)
}

/// Build the player records from a parsed grid.
///
/// Never fails: missing summary cells read as 0, unreadable session cells
/// are skipped, and a grid too short to hold the name row gives an empty
/// dataset.
///
/// Session labels come from the first column that has a player name, not
/// from a fixed column index: if `first_player_column` is unnamed, the
/// next named column supplies the dates instead of the set staying empty.
/// A label is listed whenever both its date cell and that column's cell
/// are non-empty, zero scores included.
pub fn extract(grid: &[Vec<String>], layout: &SheetLayout) -> DerivedDataset {
    let mut dataset = DerivedDataset::default();

    let Some(names) = grid.get(layout.name_row) else {
        log::debug!(
            "Grid has {} rows, no name row at index {}",
            grid.len(),
            layout.name_row
        );
        return dataset;
    };

    for (column, name) in names.iter().enumerate() {
        if !layout.is_player_column(column) || name.is_empty() {
            continue;
        }

        // Session labels are collected once, from the first named player column
        let collect_dates = dataset.players.is_empty();

        let mut player = PlayerRecord::new(name.clone())
            .with_games_count(summary_value(grid, layout.games_count_row, column))
            .with_total_score(summary_value(grid, layout.total_score_row, column))
            .with_record(
                summary_value(grid, layout.wins_row, column),
                summary_value(grid, layout.losses_row, column),
            );

        for row in grid.iter().skip(layout.first_game_row) {
            let Some(date) = cell(row, layout.date_column) else {
                continue;
            };
            let Some(raw_score) = cell(row, column) else {
                continue;
            };

            if let Some(score) = parse_number(raw_score) {
                if score != 0.0 {
                    player.games.push(GameResult::new(date, score));
                }
            }

            if collect_dates && !dataset.dates.iter().any(|d| d == date) {
                dataset.dates.push(date.to_string());
            }
        }

        dataset.players.push(player);
    }

    log::info!(
        "Extracted {} players across {} sessions",
        dataset.players.len(),
        dataset.dates.len()
    );
    dataset
}

/// Like [`extract`], but rejects sheets that don't look like a score sheet.
///
/// Fails when the summary/name rows are missing, when no column carries a
/// player name, or when a name appears twice.
pub fn extract_strict(grid: &[Vec<String>], layout: &SheetLayout) -> Result<DerivedDataset> {
    let needed = layout.header_rows();
    if grid.len() < needed {
        return Err(StandingsError::Schema(format!(
            "expected at least {} header rows, found {}",
            needed,
            grid.len()
        )));
    }

    let dataset = extract(grid, layout);
    if dataset.players.is_empty() {
        return Err(StandingsError::Schema(format!(
            "no player names in row {}",
            layout.name_row + 1
        )));
    }

    for (idx, player) in dataset.players.iter().enumerate() {
        if dataset.players[..idx].iter().any(|p| p.name == player.name) {
            log::warn!("Player '{}' appears in more than one column", player.name);
            return Err(StandingsError::Schema(format!(
                "duplicate player name '{}'",
                player.name
            )));
        }
    }

    Ok(dataset)
}

/// Parse and extract raw sheet text with the default layout
pub fn read_dataset(raw: &str) -> DerivedDataset {
    extract(&parse_grid(raw), &SheetLayout::default())
}

/// Read a CSV export from disk
pub fn read_dataset_file(path: &Path) -> Result<DerivedDataset> {
    let content = std::fs::read_to_string(path)?;
    Ok(read_dataset(&content))
}
