//! The five mini-game state machines.
//!
//! Each implements [`MiniGame`](crate::rules::MiniGame) and owns only its
//! own transient state. None of them can see the score board.

pub mod dice;
pub mod guess;
pub mod memory;
pub mod quiz;
pub mod rps;

pub use dice::{DiceGame, DiceView, Roll, RollTier};
pub use guess::{GuessFeedback, NumberGuessGame, NumberGuessView};
pub use memory::{Board, CardFace, FlipOutcome, MemoryGame, MemoryView, Symbol};
pub use quiz::{AnswerFeedback, Question, QuizGame, QuizInput, QuizOutcome, QuizView};
pub use rps::{Choice, Round, RoundResult, RpsGame, RpsView};
