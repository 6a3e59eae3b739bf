//! Memory match: find the eight pairs on a shuffled 4x4 board.
//!
//! - Flip two cards per attempt; equal symbols stay matched
//! - Unequal cards go back face down straight away (the flip outcome
//!   carries both symbols so a front end can show them briefly)
//! - Clearing the board scores `max(5, 40 - attempts)`, where an attempt
//!   is a flip that completed a pair comparison

mod board;
mod game;

pub use board::{Board, Symbol, CARD_COUNT, PAIR_COUNT};
pub use game::{memory_score, CardFace, FlipOutcome, MemoryGame, MemoryView};
