//! Plain-text leaderboard output

use crate::error::Result;
use crate::format::{number, pad_name, signed_score, win_rate_percent};
use crate::model::DerivedDataset;
use crate::ranking::{RankingContext, Standings};
use std::fmt;

pub const LOADING_MESSAGE: &str = "Loading player records...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load player data";

/// What the caller has to show
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    /// Any failure to produce a dataset; the cause is only logged
    Failed,
    Ready(DerivedDataset),
}

impl LoadState {
    pub fn from_result(result: Result<DerivedDataset>) -> Self {
        match result {
            Ok(dataset) => LoadState::Ready(dataset),
            Err(e) => {
                log::error!("Error loading sheet data: {}", e);
                LoadState::Failed
            }
        }
    }
}

pub fn render_state(state: &LoadState, month: u32, ctx: &RankingContext) -> String {
    match state {
        LoadState::Loading => format!("{}\n", LOADING_MESSAGE),
        LoadState::Failed => format!("{}\n", LOAD_FAILED_MESSAGE),
        LoadState::Ready(dataset) => {
            let standings = Standings::compute(&dataset.players, month, ctx);
            render_standings(&standings, ctx)
        }
    }
}

fn record(wins: f64, losses: f64) -> String {
    format!("{}W {}L", number(wins), number(losses))
}

const NAME_WIDTH: usize = 20;

/// The four boards as a text block.
///
/// The hot-streak board is left out entirely when nobody has played this
/// month.
pub struct StandingsView<'a> {
    pub standings: &'a Standings,
    pub ctx: &'a RankingContext,
}

impl fmt::Display for StandingsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let standings = self.standings;
        let ctx = self.ctx;

        writeln!(f, "Mahjong standings")?;

        writeln!(f, "\nTop {} by total score", ctx.score_top)?;
        for (i, e) in standings.by_score.iter().enumerate() {
            writeln!(
                f,
                "  #{:<2} {} {:>8}   {}",
                i + 1,
                pad_name(&e.name, NAME_WIDTH),
                signed_score(e.total_score),
                record(e.wins, e.losses)
            )?;
        }

        writeln!(f, "\nTop {} by win rate", ctx.win_rate_top)?;
        for (i, e) in standings.by_win_rate.iter().enumerate() {
            writeln!(
                f,
                "  #{:<2} {} {:>8}   {} ({} games)",
                i + 1,
                pad_name(&e.name, NAME_WIDTH),
                win_rate_percent(e.win_rate),
                record(e.wins, e.losses),
                number(e.total_games)
            )?;
        }

        writeln!(f, "\nTop {} by attendance", ctx.attendance_top)?;
        for (i, e) in standings.by_attendance.iter().enumerate() {
            writeln!(
                f,
                "  #{:<2} {} {:>8}   {}",
                i + 1,
                pad_name(&e.name, NAME_WIDTH),
                format!("{} games", number(e.games_count)),
                record(e.wins, e.losses)
            )?;
        }

        if !standings.hot_streak.is_empty() {
            writeln!(f, "\nHottest players this month ({})", standings.month)?;
            for (i, e) in standings.hot_streak.iter().enumerate() {
                writeln!(
                    f,
                    "  #{:<2} {} {:>8}   {} games this month",
                    i + 1,
                    pad_name(&e.name, NAME_WIDTH),
                    signed_score(e.month_score),
                    e.month_games
                )?;
            }
        }

        Ok(())
    }
}

pub fn render_standings(standings: &Standings, ctx: &RankingContext) -> String {
    StandingsView { standings, ctx }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StandingsError;
    use crate::model::PlayerRecord;

    fn dataset() -> DerivedDataset {
        DerivedDataset {
            players: vec![
                PlayerRecord::new("Amy")
                    .with_games_count(4.0)
                    .with_total_score(12.0)
                    .with_record(3.0, 1.0)
                    .with_game("5/2", 12.0),
                PlayerRecord::new("Ben")
                    .with_games_count(6.0)
                    .with_total_score(0.0)
                    .with_record(2.0, 4.0),
            ],
            dates: vec!["5/2".to_string()],
        }
    }

    #[test]
    fn test_from_result() {
        assert_eq!(
            LoadState::from_result(Ok(dataset())),
            LoadState::Ready(dataset())
        );
        assert_eq!(
            LoadState::from_result(Err(StandingsError::Fetch("timed out".to_string()))),
            LoadState::Failed
        );
    }

    #[test]
    fn test_render_loading_and_failed() {
        let ctx = RankingContext::default();
        assert_eq!(
            render_state(&LoadState::Loading, 1, &ctx),
            "Loading player records...\n"
        );
        let failed = render_state(&LoadState::Failed, 1, &ctx);
        assert_eq!(failed, "Failed to load player data\n");
        assert!(!failed.contains("timed out"));
    }

    #[test]
    fn test_render_ready_with_hot_streak() {
        let ctx = RankingContext::default();
        let out = render_state(&LoadState::Ready(dataset()), 5, &ctx);

        assert!(out.contains("Top 5 by total score"));
        assert!(out.contains("+12"));
        assert!(out.contains("75.0%"));
        assert!(out.contains("6 games"));
        assert!(out.contains("Hottest players this month (5)"));
        assert!(out.contains("1 games this month"));
        // Ben's zero total carries no sign
        assert!(!out.contains("+0"));
    }

    #[test]
    fn test_render_ready_omits_empty_hot_streak() {
        let ctx = RankingContext::default();
        let out = render_state(&LoadState::Ready(dataset()), 9, &ctx);
        assert!(out.contains("Top 3 by attendance"));
        assert!(!out.contains("Hottest players"));
    }

    #[test]
    fn test_render_aligns_wide_names() {
        let ctx = RankingContext::default();
        let dataset = DerivedDataset {
            players: vec![
                PlayerRecord::new("阿明").with_total_score(10.0),
                PlayerRecord::new("Ben").with_total_score(5.0),
            ],
            dates: Vec::new(),
        };
        let out = render_state(&LoadState::Ready(dataset), 1, &ctx);

        let wide = out.lines().find(|l| l.contains("阿明")).unwrap();
        let ben = out.lines().find(|l| l.contains("Ben")).unwrap();
        assert_eq!(
            unicode_width::UnicodeWidthStr::width(wide),
            unicode_width::UnicodeWidthStr::width(ben)
        );
    }
}
