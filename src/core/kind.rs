//! Game identifiers and the catalog shown on the home page.

use serde::{Deserialize, Serialize};

/// One of the five mini-games a session can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameKind {
    /// Guess a secret number between 1 and 100.
    NumberGuess,
    /// Multiple-choice general knowledge quiz.
    Quiz,
    /// Roll a die for tiered rewards.
    Dice,
    /// Find the eight pairs on a 4x4 board.
    Memory,
    /// Rock, paper, scissors against the computer.
    RockPaperScissors,
}

impl GameKind {
    /// Every game, in catalog order.
    pub const ALL: [GameKind; 5] = [
        GameKind::NumberGuess,
        GameKind::Quiz,
        GameKind::Dice,
        GameKind::Memory,
        GameKind::RockPaperScissors,
    ];

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "Number Guesser",
            GameKind::Quiz => "Quiz Game",
            GameKind::Dice => "Dice Roller",
            GameKind::Memory => "Memory Game",
            GameKind::RockPaperScissors => "Rock Paper Scissors",
        }
    }

    /// One-line description for the catalog card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "Guess the number between 1-100",
            GameKind::Quiz => "Test your knowledge",
            GameKind::Dice => "Roll and win prizes",
            GameKind::Memory => "Match the pairs",
            GameKind::RockPaperScissors => "Beat the computer",
        }
    }

    /// How the game pays out, for the catalog card.
    #[must_use]
    pub const fn scoring_summary(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "Up to 100 points",
            GameKind::Quiz => "10 points per correct answer",
            GameKind::Dice => "5, 20 or 50 points per roll",
            GameKind::Memory => "Up to 32 points, never below 5",
            GameKind::RockPaperScissors => "10 per win, 2 per tie",
        }
    }

    /// Short command name, the inverse of [`GameKind::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "guess",
            GameKind::Quiz => "quiz",
            GameKind::Dice => "dice",
            GameKind::Memory => "memory",
            GameKind::RockPaperScissors => "rps",
        }
    }

    /// Look up a game by short name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let kind = match name.as_str() {
            "guess" | "number" | "numberguess" => GameKind::NumberGuess,
            "quiz" => GameKind::Quiz,
            "dice" => GameKind::Dice,
            "memory" => GameKind::Memory,
            "rps" | "rockpaperscissors" => GameKind::RockPaperScissors,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
