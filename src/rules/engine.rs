//! The `MiniGame` trait every game state machine implements.
//!
//! Games never touch the score board. A transition that completes a game
//! returns the points earned, and the session records them.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameKind, RandomSource};

/// Coarse lifecycle of a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `start()`.
    Idle,
    /// Accepting moves.
    Active,
    /// Scored; further moves are rejected until `start()`.
    Completed,
}

/// Result of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<O> {
    /// Game-specific description of what happened.
    pub outcome: O,
    /// `Some(points)` if this move completed the game.
    pub points: Option<u32>,
}

impl<O> Transition<O> {
    /// A move that leaves the game in play.
    #[must_use]
    pub fn pending(outcome: O) -> Self {
        Self {
            outcome,
            points: None,
        }
    }

    /// A move that completed the game for `points`.
    #[must_use]
    pub fn completed(outcome: O, points: u32) -> Self {
        Self {
            outcome,
            points: Some(points),
        }
    }

    /// Check if this move completed the game.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        self.points.is_some()
    }

    /// Convert the outcome, keeping the points.
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Transition<U> {
        Transition {
            outcome: f(self.outcome),
            points: self.points,
        }
    }
}

/// Game state machine.
///
/// ## Implementation Notes
///
/// - `act` must validate its input before mutating anything: an `Err`
///   leaves the game untouched
/// - `act` returns a completion at most once per round
/// - `view` exposes only what the player may see (no secrets)
pub trait MiniGame {
    /// Which catalog entry this is.
    const KIND: GameKind;

    /// A single player move.
    type Input;

    /// What a move produced, for feedback messages.
    type Outcome;

    /// Read-only rendering model.
    type View;

    /// Current lifecycle phase.
    fn phase(&self) -> Phase;

    /// Begin a new round, discarding any round in progress.
    fn start<R: RandomSource>(&mut self, rng: &mut R);

    /// Apply a move.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the move is out of range or not allowed
    /// in the current phase.
    fn act<R: RandomSource>(
        &mut self,
        input: Self::Input,
        rng: &mut R,
    ) -> Result<Transition<Self::Outcome>, GameError>;

    /// Snapshot for rendering.
    fn view(&self) -> Self::View;
}
