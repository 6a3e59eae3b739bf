//! Core engine types: game identifiers, RNG, errors, configuration.
//!
//! Everything here is game-agnostic; the games and the session build on it.

pub mod config;
pub mod error;
pub mod kind;
pub mod rng;

pub use config::SessionConfig;
pub use error::{ConfigError, GameError, ParseCommandError};
pub use kind::GameKind;
pub use rng::{GameRng, RandomSource, ScriptedRng};
