//! Achievements: labels derived from the score board, never stored.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::board::ScoreBoard;

/// An unlockable achievement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    /// Played 5+ games.
    GameEnthusiast,
    /// Earned 100+ points.
    ScoringStar,
    /// Played 10+ games.
    VeteranPlayer,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [
        Achievement::GameEnthusiast,
        Achievement::ScoringStar,
        Achievement::VeteranPlayer,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Achievement::GameEnthusiast => "Game Enthusiast",
            Achievement::ScoringStar => "Scoring Star",
            Achievement::VeteranPlayer => "Veteran Player",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Achievement::GameEnthusiast => "Played 5+ games",
            Achievement::ScoringStar => "100+ points",
            Achievement::VeteranPlayer => "10+ games",
        }
    }

    /// Whether `board` meets this achievement's threshold.
    #[must_use]
    pub const fn is_unlocked(self, board: &ScoreBoard) -> bool {
        match self {
            Achievement::GameEnthusiast => board.games_played() >= 5,
            Achievement::ScoringStar => board.total_score() >= 100,
            Achievement::VeteranPlayer => board.games_played() >= 10,
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Every achievement `board` currently unlocks.
#[must_use]
pub fn evaluate(board: &ScoreBoard) -> BTreeSet<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.is_unlocked(board))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(board: ScoreBoard) -> Vec<&'static str> {
        evaluate(&board).into_iter().map(Achievement::label).collect()
    }

    #[test]
    fn test_nothing_below_thresholds() {
        assert!(labels(ScoreBoard::with_totals(4, 0)).is_empty());
        assert!(labels(ScoreBoard::with_totals(4, 99)).is_empty());
    }

    #[test]
    fn test_enthusiast_and_star() {
        assert_eq!(
            labels(ScoreBoard::with_totals(5, 150)),
            vec!["Game Enthusiast", "Scoring Star"]
        );
    }

    #[test]
    fn test_all_three() {
        assert_eq!(
            labels(ScoreBoard::with_totals(10, 500)),
            vec!["Game Enthusiast", "Scoring Star", "Veteran Player"]
        );
    }

    #[test]
    fn test_thresholds_are_independent() {
        assert_eq!(labels(ScoreBoard::with_totals(0, 100)), vec!["Scoring Star"]);
        assert_eq!(
            labels(ScoreBoard::with_totals(10, 0)),
            vec!["Game Enthusiast", "Veteran Player"]
        );
    }
}
