pub mod context;
pub mod leaderboard;

pub use context::RankingContext;
pub use leaderboard::{
    attendance_leaderboard, date_month, hot_streak_leaderboard, score_leaderboard,
    win_rate_leaderboard, AttendanceEntry, HotStreakEntry, ScoreEntry, WinRateEntry,
};

use crate::model::PlayerRecord;
use chrono::Datelike;
use serde::Serialize;

/// Calendar month (1-12) in local time
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

/// All four leaderboards for one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    /// Month the hot-streak board was computed for
    pub month: u32,
    pub by_score: Vec<ScoreEntry>,
    pub by_win_rate: Vec<WinRateEntry>,
    pub by_attendance: Vec<AttendanceEntry>,
    pub hot_streak: Vec<HotStreakEntry>,
}

impl Standings {
    pub fn compute(players: &[PlayerRecord], month: u32, ctx: &RankingContext) -> Self {
        let standings = Self {
            month,
            by_score: score_leaderboard(players, ctx),
            by_win_rate: win_rate_leaderboard(players, ctx),
            by_attendance: attendance_leaderboard(players, ctx),
            hot_streak: hot_streak_leaderboard(players, month, ctx),
        };
        log::debug!(
            "Standings: {} by score, {} by win rate, {} by attendance, {} hot in month {}",
            standings.by_score.len(),
            standings.by_win_rate.len(),
            standings.by_attendance.len(),
            standings.hot_streak.len(),
            month
        );
        standings
    }
}
