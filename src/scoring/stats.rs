//! Derived statistics and the CSV export.

use serde::{Deserialize, Serialize};

use super::achievements::{evaluate, Achievement};
use super::board::ScoreBoard;

/// Games needed to fill the games progress meter.
const GAMES_TARGET: u32 = 100;
/// Points needed to fill the score progress meter.
const SCORE_TARGET: u32 = 500;

/// The stats page, computed on demand from a [`ScoreBoard`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub games_played: u32,
    pub total_score: u32,
    pub average_score: f64,
    /// Percent, 0..=100.
    pub games_progress: u32,
    /// Percent, 0..=100.
    pub score_progress: u32,
    pub achievements: Vec<Achievement>,
}

impl SessionStats {
    #[must_use]
    pub fn from_board(board: &ScoreBoard) -> Self {
        Self {
            games_played: board.games_played(),
            total_score: board.total_score(),
            average_score: board.average_score(),
            games_progress: board.games_played().min(GAMES_TARGET),
            score_progress: (u64::from(board.total_score()) * 100 / u64::from(SCORE_TARGET))
                .min(100) as u32,
            achievements: evaluate(board).into_iter().collect(),
        }
    }

    /// Average formatted to one decimal place, as on the stats page.
    #[must_use]
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_score)
    }

    /// `Statistic,Value` table with three rows.
    #[must_use]
    pub fn to_csv(&self) -> String {
        format!(
            "Statistic,Value\nGames Played,{}\nTotal Score,{}\nAverage Score,{}\n",
            self.games_played,
            self.total_score,
            decimal(self.average_score)
        )
    }
}

/// Shortest round-trip decimal that always shows a fractional part.
fn decimal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

/// CSV export of `board`.
#[must_use]
pub fn export_csv(board: &ScoreBoard) -> String {
    SessionStats::from_board(board).to_csv()
}
