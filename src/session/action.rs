//! User actions: what a front end can ask the session to do.

use serde::{Deserialize, Serialize};

use crate::core::GameKind;
use crate::games::Choice;

/// A move aimed at the active game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    /// Number guesser: guess a value (validated against 1..=100).
    Guess(i64),
    /// Quiz: select option `option` for question `question`.
    Answer { question: usize, option: usize },
    /// Quiz: score the selections.
    SubmitQuiz,
    /// Dice: roll once.
    Roll,
    /// Memory: flip card `index`.
    Flip(usize),
    /// Rock-paper-scissors: throw a shape.
    Play(Choice),
}

impl GameInput {
    /// The game this input belongs to.
    #[must_use]
    pub const fn target(&self) -> GameKind {
        match self {
            GameInput::Guess(_) => GameKind::NumberGuess,
            GameInput::Answer { .. } | GameInput::SubmitQuiz => GameKind::Quiz,
            GameInput::Roll => GameKind::Dice,
            GameInput::Flip(_) => GameKind::Memory,
            GameInput::Play(_) => GameKind::RockPaperScissors,
        }
    }

    /// Short name for messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameInput::Guess(_) => "guess",
            GameInput::Answer { .. } => "answer",
            GameInput::SubmitQuiz => "submit",
            GameInput::Roll => "roll",
            GameInput::Flip(_) => "flip",
            GameInput::Play(_) => "play",
        }
    }
}

/// Everything a front end can do to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    /// Switch to a game. Re-selecting the active game keeps its state.
    SelectGame(GameKind),
    /// Start (or restart) a round of the active game.
    Start,
    /// Make a move in the active game.
    Act(GameInput),
    /// Zero the score board.
    ResetSession,
}

/// One entry in the session's completion log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// 1-based position in the log.
    pub sequence: u32,
    pub game: GameKind,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(GameInput::Guess(3).target(), GameKind::NumberGuess);
        assert_eq!(GameInput::SubmitQuiz.target(), GameKind::Quiz);
        assert_eq!(GameInput::Answer { question: 0, option: 1 }.target(), GameKind::Quiz);
        assert_eq!(GameInput::Roll.target(), GameKind::Dice);
        assert_eq!(GameInput::Flip(4).target(), GameKind::Memory);
        assert_eq!(GameInput::Play(Choice::Paper).target(), GameKind::RockPaperScissors);
    }
}
