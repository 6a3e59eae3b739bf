//! Dice roller. Every roll is a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameKind, RandomSource};
use crate::rules::{MiniGame, Phase, Transition};

/// Payout tier for a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollTier {
    /// A six.
    Jackpot,
    /// Four or five.
    Good,
    /// One to three.
    Low,
}

impl RollTier {
    /// Tier for a face value in 1..=6.
    #[must_use]
    pub fn of(roll: u32) -> Self {
        match roll {
            6 => RollTier::Jackpot,
            4 | 5 => RollTier::Good,
            _ => RollTier::Low,
        }
    }

    /// Points paid by this tier.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            RollTier::Jackpot => 50,
            RollTier::Good => 20,
            RollTier::Low => 5,
        }
    }

    /// Feedback shown after the roll.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RollTier::Jackpot => "Jackpot! You rolled a 6!",
            RollTier::Good => "Good roll!",
            RollTier::Low => "Try again!",
        }
    }
}

/// Face value and the points it pays, 1 through 6.
#[must_use]
pub fn payout_table() -> [(u32, u32); 6] {
    [1, 2, 3, 4, 5, 6].map(|roll| (roll, RollTier::of(roll).points()))
}

/// The result of one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub value: u32,
    pub tier: RollTier,
}

/// What the player can see of the dice game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceView {
    pub last_roll: Option<u32>,
    pub payouts: [(u32, u32); 6],
}

/// Dice state: just the last roll.
#[derive(Clone, Debug, Default)]
pub struct DiceGame {
    last_roll: Option<u32>,
}

impl DiceGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u32> {
        self.last_roll
    }
}

impl MiniGame for DiceGame {
    const KIND: GameKind = GameKind::Dice;

    type Input = ();
    type Outcome = Roll;
    type View = DiceView;

    fn phase(&self) -> Phase {
        Phase::Active
    }

    fn start<R: RandomSource>(&mut self, _rng: &mut R) {}

    fn act<R: RandomSource>(
        &mut self,
        _input: (),
        rng: &mut R,
    ) -> Result<Transition<Roll>, GameError> {
        let value = rng.gen_inclusive(1, 6);
        let tier = RollTier::of(value);
        self.last_roll = Some(value);
        Ok(Transition::completed(Roll { value, tier }, tier.points()))
    }

    fn view(&self) -> DiceView {
        DiceView {
            last_roll: self.last_roll,
            payouts: payout_table(),
        }
    }
}
