//! Error types.
//!
//! Every rejection leaves the session exactly as it was before the call.

use thiserror::Error;

use super::kind::GameKind;

/// A user action the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{0} has not been started")]
    NotStarted(GameKind),

    #[error("{0} is already completed; start a new round first")]
    AlreadyCompleted(GameKind),

    #[error("no game is selected")]
    NoActiveGame,

    #[error("{input} is a {target} action but {active} is active")]
    InputMismatch {
        active: GameKind,
        input: &'static str,
        target: GameKind,
    },
}

impl GameError {
    /// Reject `value` unless it lies within `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] naming `field` when out of bounds.
    pub fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(GameError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

/// An invalid [`SessionConfig`](super::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the quiz needs at least one question")]
    EmptyQuestionBank,

    #[error("question {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// A text command that could not be turned into a user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown game `{0}`")]
    UnknownGame(String),

    #[error("unknown choice `{0}`; expected rock, paper or scissors")]
    UnknownChoice(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not a whole number")]
    NotANumber(String),
}
