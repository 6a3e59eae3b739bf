//! Rock, paper, scissors against a uniformly random computer.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameKind, RandomSource};
use crate::rules::{MiniGame, Phase, Transition};

/// Rules text shown next to the game.
pub const RULES: [&str; 3] = [
    "Rock beats Scissors",
    "Paper beats Rock",
    "Scissors beats Paper",
];

/// A hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices; the computer draws an index into this.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The shape this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Outcome for a player throwing `self` against `other`.
    #[must_use]
    pub fn against(self, other: Choice) -> RoundResult {
        if self == other {
            RoundResult::Tie
        } else if self.beats() == other {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Some(Choice::Rock),
            "paper" | "p" => Some(Choice::Paper),
            "scissors" | "s" => Some(Choice::Scissors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Result from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Tie,
}

impl RoundResult {
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            RoundResult::Win => 10,
            RoundResult::Tie => 2,
            RoundResult::Lose => 0,
        }
    }
}

/// One played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub user: Choice,
    pub computer: Choice,
    pub result: RoundResult,
}

impl Round {
    #[must_use]
    pub fn points(&self) -> u32 {
        self.result.points()
    }
}

/// What the player can see of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RpsView {
    pub last_round: Option<Round>,
    pub rules: [&'static str; 3],
}

/// Rock-paper-scissors state: the last round, for display.
#[derive(Clone, Debug, Default)]
pub struct RpsGame {
    last_round: Option<Round>,
}

impl RpsGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }
}

impl MiniGame for RpsGame {
    const KIND: GameKind = GameKind::RockPaperScissors;

    type Input = Choice;
    type Outcome = Round;
    type View = RpsView;

    fn phase(&self) -> Phase {
        Phase::Active
    }

    fn start<R: RandomSource>(&mut self, _rng: &mut R) {}

    fn act<R: RandomSource>(
        &mut self,
        user: Choice,
        rng: &mut R,
    ) -> Result<Transition<Round>, GameError> {
        let computer = Choice::ALL[rng.gen_inclusive(0, 2) as usize];
        let round = Round {
            user,
            computer,
            result: user.against(computer),
        };
        self.last_round = Some(round);
        Ok(Transition::completed(round, round.points()))
    }

    fn view(&self) -> RpsView {
        RpsView {
            last_round: self.last_round,
            rules: RULES,
        }
    }
}
