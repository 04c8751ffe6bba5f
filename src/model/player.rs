use serde::Serialize;

/// One player's net result for a single session.
///
/// Only non-zero scores are ever recorded; a zero (or unreadable) cell means
/// the player sat out that session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    /// Session label in `M/D` form, no year
    pub date: String,
    pub score: f64,
}

impl GameResult {
    pub fn new(date: impl Into<String>, score: f64) -> Self {
        Self {
            date: date.into(),
            score,
        }
    }
}

/// Summary and per-session history for one named player.
///
/// The four summary fields come straight from the sheet's summary rows and
/// are not derived from `games`. They can disagree with the detail rows:
/// zero-score sessions count towards `games_count` but are never listed in
/// `games`, and `wins + losses` need not equal `games_count`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub games_count: f64,
    pub total_score: f64,
    pub wins: f64,
    pub losses: f64,
    /// Sessions in sheet row order
    pub games: Vec<GameResult>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_games_count(mut self, games_count: f64) -> Self {
        self.games_count = games_count;
        self
    }

    pub fn with_total_score(mut self, total_score: f64) -> Self {
        self.total_score = total_score;
        self
    }

    pub fn with_record(mut self, wins: f64, losses: f64) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }

    pub fn with_game(mut self, date: impl Into<String>, score: f64) -> Self {
        self.games.push(GameResult::new(date, score));
        self
    }

    /// Games with a recorded result (`wins + losses`)
    pub fn decided_games(&self) -> f64 {
        self.wins + self.losses
    }

    /// Win percentage over decided games, 0 when none were decided
    pub fn win_rate(&self) -> f64 {
        let decided = self.decided_games();
        if decided > 0.0 {
            self.wins / decided * 100.0
        } else {
            0.0
        }
    }

    /// Sum of the listed session scores.
    ///
    /// Display only; `total_score` stays the authoritative figure.
    pub fn detail_score(&self) -> f64 {
        // Start from +0.0 so an empty history never reads as -0
        self.games.iter().fold(0.0, |acc, g| acc + g.score)
    }
}

/// Everything extracted from one sheet export
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedDataset {
    /// Players in sheet column order
    pub players: Vec<PlayerRecord>,
    /// Distinct session labels in first-seen order
    pub dates: Vec<String>,
}
