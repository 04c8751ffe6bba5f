use super::context::RankingContext;
use crate::model::PlayerRecord;
use nom::{
    character::complete::{digit1, one_of, space0},
    combinator::{opt, recognize},
    sequence::{pair, preceded},
    IResult, Parser,
};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    pub total_score: f64,
    pub wins: f64,
    pub losses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRateEntry {
    pub name: String,
    /// Percentage, 0-100
    pub win_rate: f64,
    pub wins: f64,
    pub losses: f64,
    pub total_games: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    pub name: String,
    pub games_count: f64,
    pub wins: f64,
    pub losses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotStreakEntry {
    pub name: String,
    pub month_score: f64,
    pub month_games: usize,
}

// Stable sorts keep sheet column order among ties
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Top players by season total
pub fn score_leaderboard(players: &[PlayerRecord], ctx: &RankingContext) -> Vec<ScoreEntry> {
    let mut ranked: Vec<&PlayerRecord> = players.iter().collect();
    ranked.sort_by(|a, b| descending(a.total_score, b.total_score));

    ranked
        .into_iter()
        .take(ctx.score_top)
        .map(|p| ScoreEntry {
            name: p.name.clone(),
            total_score: p.total_score,
            wins: p.wins,
            losses: p.losses,
        })
        .collect()
}

/// Top players by win percentage over `wins + losses`
pub fn win_rate_leaderboard(players: &[PlayerRecord], ctx: &RankingContext) -> Vec<WinRateEntry> {
    let mut ranked: Vec<WinRateEntry> = players
        .iter()
        .map(|p| WinRateEntry {
            name: p.name.clone(),
            win_rate: p.win_rate(),
            wins: p.wins,
            losses: p.losses,
            total_games: p.decided_games(),
        })
        .filter(|e| e.total_games >= ctx.min_games_for_win_rate)
        .collect();

    ranked.sort_by(|a, b| descending(a.win_rate, b.win_rate));
    ranked.truncate(ctx.win_rate_top);
    ranked
}

/// Top players by the sheet's games-attended count
pub fn attendance_leaderboard(
    players: &[PlayerRecord],
    ctx: &RankingContext,
) -> Vec<AttendanceEntry> {
    let mut ranked: Vec<&PlayerRecord> = players.iter().collect();
    ranked.sort_by(|a, b| descending(a.games_count, b.games_count));

    ranked
        .into_iter()
        .take(ctx.attendance_top)
        .map(|p| AttendanceEntry {
            name: p.name.clone(),
            games_count: p.games_count,
            wins: p.wins,
            losses: p.losses,
        })
        .collect()
}

/// Optional sign and digits at the start of the input, after blanks
fn leading_integer(input: &str) -> IResult<&str, &str> {
    preceded(space0, recognize(pair(opt(one_of("+-")), digit1))).parse(input)
}

/// Month number of an `M/D` session label.
///
/// Reads the integer prefix of the text before the first `/` (the whole
/// label when there is none). Trailing junk after the digits is ignored.
pub fn date_month(date: &str) -> Option<i64> {
    let head = date.split('/').next().unwrap_or(date);
    let (_, digits) = leading_integer(head).ok()?;
    digits.parse().ok()
}

/// Top players by net score over sessions in `month` (1-12).
///
/// Players with no session that month are left out, so the board is empty
/// when nobody has played yet.
pub fn hot_streak_leaderboard(
    players: &[PlayerRecord],
    month: u32,
    ctx: &RankingContext,
) -> Vec<HotStreakEntry> {
    let month = i64::from(month);

    let mut ranked: Vec<HotStreakEntry> = players
        .iter()
        .map(|p| {
            let this_month = p
                .games
                .iter()
                .filter(|g| date_month(&g.date) == Some(month));

            let (month_score, month_games) =
                this_month.fold((0.0, 0), |(score, count), g| (score + g.score, count + 1));

            HotStreakEntry {
                name: p.name.clone(),
                month_score,
                month_games,
            }
        })
        .filter(|e| e.month_games > 0)
        .collect();

    ranked.sort_by(|a, b| descending(a.month_score, b.month_score));
    ranked.truncate(ctx.hot_streak_top);
    ranked
}
