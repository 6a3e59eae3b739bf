//! The session score board.
//!
//! `record_completion` is the only way to add to the board and `reset` the
//! only way to clear it. Fields are private so nothing else can write them.

use serde::{Deserialize, Serialize};

/// Cumulative session totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    games_played: u32,
    total_score: u32,
}

impl ScoreBoard {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games_played: 0,
            total_score: 0,
        }
    }

    /// Completed games this session.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Points earned this session.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Count one completed game worth `points`.
    pub fn record_completion(&mut self, points: u32) {
        self.games_played = self.games_played.saturating_add(1);
        self.total_score = self.total_score.saturating_add(points);
    }

    /// Zero both totals.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `total_score / max(games_played, 1)`.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        f64::from(self.total_score) / f64::from(self.games_played.max(1))
    }

    /// A board with the given totals, for evaluating thresholds.
    #[cfg(test)]
    pub(crate) const fn with_totals(games_played: u32, total_score: u32) -> Self {
        Self {
            games_played,
            total_score,
        }
    }
}
