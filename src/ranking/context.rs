/// Sizes and thresholds for the leaderboards
#[derive(Debug, Clone, PartialEq)]
pub struct RankingContext {
    pub score_top: usize,
    pub win_rate_top: usize,
    pub attendance_top: usize,
    pub hot_streak_top: usize,

    /// Players with fewer decided games (`wins + losses`) are left off the win-rate board
    pub min_games_for_win_rate: f64,
}

impl Default for RankingContext {
    fn default() -> Self {
        Self {
            score_top: 5,
            win_rate_top: 5,
            attendance_top: 3,
            hot_streak_top: 3,

            min_games_for_win_rate: 1.0,
        }
    }
}
