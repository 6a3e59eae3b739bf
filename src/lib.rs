//! # rust-arcade
//!
//! A session-scoped engine for a collection of casual single-player games.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: Games never touch the score board. A completing
//!    move returns its points and the session records them.
//!
//! 2. **Explicit State**: The session owns one `ScoreBoard` and one
//!    `ActiveGame` tagged by `GameKind`. No string-keyed stores.
//!
//! 3. **Injectable Randomness**: Every draw goes through `RandomSource`, so
//!    tests can force dice, shuffles and computer choices.
//!
//! ## Architecture
//!
//! - **Transitions, not re-renders**: each user action is a function from
//!   session state to an `ActionReport` carrying a fresh `SessionSnapshot`.
//!
//! - **Derived achievements**: unlocked labels are recomputed from the
//!   score board on demand and never stored.
//!
//! ## Modules
//!
//! - `core`: Game identifiers, RNG, errors, configuration
//! - `rules`: `MiniGame` trait for game implementations
//! - `games`: Number guesser, quiz, dice, memory match, rock-paper-scissors
//! - `scoring`: Score board, achievements, stats and CSV export
//! - `session`: Session container, user actions, view models

pub mod core;
pub mod games;
pub mod rules;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameError, GameKind, GameRng, ParseCommandError, RandomSource, ScriptedRng,
    SessionConfig,
};

pub use crate::rules::{MiniGame, Phase, Transition};

pub use crate::games::{
    Board, Choice, DiceGame, MemoryGame, NumberGuessGame, Question, QuizGame, RoundResult, RpsGame,
    Symbol,
};

pub use crate::scoring::{evaluate, export_csv, Achievement, ScoreBoard, SessionStats};

pub use crate::session::{
    ActionReport, ActiveGame, CompletionRecord, GameInput, GameOutcome, GameView, Session,
    SessionSnapshot, UserAction,
};
