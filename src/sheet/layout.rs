/// Where each piece of data sits in the score sheet.
///
/// The export has no header names to key off, so every lookup is by index.
/// Rows are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub games_count_row: usize,
    pub total_score_row: usize,
    pub wins_row: usize,
    pub losses_row: usize,
    pub name_row: usize,
    /// First per-session row; every row from here down is a session
    pub first_game_row: usize,
    /// Column holding the session date label
    pub date_column: usize,
    /// Columns before this one are row labels / the date axis
    pub first_player_column: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            games_count_row: 0,
            total_score_row: 1,
            wins_row: 2,
            losses_row: 3,
            name_row: 4,
            first_game_row: 5,
            date_column: 1,
            first_player_column: 2,
        }
    }
}

impl SheetLayout {
    /// Rows that must exist before any player can be read
    pub fn header_rows(&self) -> usize {
        [
            self.games_count_row,
            self.total_score_row,
            self.wins_row,
            self.losses_row,
            self.name_row,
        ]
        .into_iter()
        .max()
        .map_or(0, |row| row + 1)
    }

    /// Whether `column` can hold a player
    pub fn is_player_column(&self, column: usize) -> bool {
        column >= self.first_player_column
    }
}
