//! Session scoring: the shared score board, achievements and statistics.
//!
//! - `ScoreBoard`: games played and total score, single writer
//! - `evaluate`: pure board → achievement set
//! - `SessionStats`: averages, progress meters, CSV export

pub mod achievements;
pub mod board;
pub mod stats;

pub use achievements::{evaluate, Achievement};
pub use board::ScoreBoard;
pub use stats::{export_csv, SessionStats};
