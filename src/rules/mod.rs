//! State machine trait for game implementations.
//!
//! Games implement `MiniGame` to define:
//! - How a round starts
//! - Which moves are legal and what they do
//! - When a round completes and for how many points
//!
//! The session calls into `MiniGame` but never interprets
//! game-specific state directly.

pub mod engine;

pub use engine::{MiniGame, Phase, Transition};
