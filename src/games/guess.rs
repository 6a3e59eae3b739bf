//! Number guessing game.
//!
//! A secret between 1 and 100 is drawn on `start()`. Each guess is
//! answered with "too low", "too high" or a win worth
//! `max(0, 100 - 5 * guesses)` points.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameKind, RandomSource};
use crate::rules::{MiniGame, Phase, Transition};

/// Smallest secret / guess.
pub const MIN_GUESS: u32 = 1;
/// Largest secret / guess.
pub const MAX_GUESS: u32 = 100;

const MAX_SCORE: u32 = 100;
const PENALTY_PER_GUESS: u32 = 5;

/// Points for solving in `guess_count` guesses.
#[must_use]
pub fn guess_score(guess_count: u32) -> u32 {
    MAX_SCORE.saturating_sub(PENALTY_PER_GUESS.saturating_mul(guess_count))
}

/// Result of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessFeedback {
    TooLow,
    TooHigh,
    Correct { secret: u32, guesses: u32 },
}

/// What the player can see of a number game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGuessView {
    pub active: bool,
    pub guess_count: u32,
    /// Score a correct answer would earn right now; `None` when idle.
    pub possible_score: Option<u32>,
}

/// Number guessing state.
#[derive(Clone, Debug, Default)]
pub struct NumberGuessGame {
    secret: Option<u32>,
    guess_count: u32,
}

impl NumberGuessGame {
    /// An idle game; call `start()` to draw a secret.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses made this round.
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }
}

impl MiniGame for NumberGuessGame {
    const KIND: GameKind = GameKind::NumberGuess;

    type Input = i64;
    type Outcome = GuessFeedback;
    type View = NumberGuessView;

    fn phase(&self) -> Phase {
        if self.secret.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    fn start<R: RandomSource>(&mut self, rng: &mut R) {
        self.secret = Some(rng.gen_inclusive(MIN_GUESS, MAX_GUESS));
        self.guess_count = 0;
    }

    fn act<R: RandomSource>(
        &mut self,
        guess: i64,
        _rng: &mut R,
    ) -> Result<Transition<GuessFeedback>, GameError> {
        GameError::check_range("guess", guess, i64::from(MIN_GUESS), i64::from(MAX_GUESS))?;
        let secret = self.secret.ok_or(GameError::NotStarted(Self::KIND))?;

        self.guess_count += 1;
        let guess = guess as u32;
        debug!("guess #{}: {guess}", self.guess_count);

        let transition = match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Transition::pending(GuessFeedback::TooLow),
            std::cmp::Ordering::Greater => Transition::pending(GuessFeedback::TooHigh),
            std::cmp::Ordering::Equal => {
                self.secret = None;
                Transition::completed(
                    GuessFeedback::Correct {
                        secret,
                        guesses: self.guess_count,
                    },
                    guess_score(self.guess_count),
                )
            }
        };
        Ok(transition)
    }

    fn view(&self) -> NumberGuessView {
        let active = self.secret.is_some();
        NumberGuessView {
            active,
            guess_count: self.guess_count,
            possible_score: active.then(|| guess_score(self.guess_count)),
        }
    }
}
