//! Read-only view models handed to the presentation layer.

use serde::Serialize;

use crate::core::GameKind;
use crate::games::{
    AnswerFeedback, DiceView, FlipOutcome, GuessFeedback, MemoryView, NumberGuessView,
    QuizOutcome, QuizView, Roll, Round, RoundResult, RpsView,
};
use crate::rules::Phase;
use crate::scoring::{Achievement, ScoreBoard, SessionStats};

use super::action::CompletionRecord;

/// What a move in any game produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Guess(GuessFeedback),
    Quiz(QuizOutcome),
    Dice(Roll),
    Memory(FlipOutcome),
    Rps(Round),
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Guess(GuessFeedback::TooLow) => {
                f.write_str("Too low! Try a higher number.")
            }
            GameOutcome::Guess(GuessFeedback::TooHigh) => {
                f.write_str("Too high! Try a lower number.")
            }
            GameOutcome::Guess(GuessFeedback::Correct { secret, guesses }) => {
                write!(f, "Correct! The number was {secret}. You guessed it in {guesses} tries!")
            }
            GameOutcome::Quiz(QuizOutcome::Answered { feedback, .. }) => match feedback {
                AnswerFeedback::Correct => f.write_str("Correct!"),
                AnswerFeedback::Wrong { correct_answer } => {
                    write!(f, "Wrong! Correct answer: {correct_answer}")
                }
            },
            GameOutcome::Quiz(QuizOutcome::Submitted { correct, total }) => {
                write!(f, "Quiz completed! {correct} of {total} correct.")
            }
            GameOutcome::Dice(roll) => {
                write!(f, "You rolled: {}. {}", roll.value, roll.tier.message())
            }
            GameOutcome::Memory(FlipOutcome::Revealed { index, symbol }) => {
                write!(f, "Card {index} is {}", symbol.glyph())
            }
            GameOutcome::Memory(FlipOutcome::Matched { first, second, symbol }) => {
                write!(f, "Match! Cards {first} and {second} are both {}", symbol.glyph())
            }
            GameOutcome::Memory(FlipOutcome::Mismatched {
                first_symbol,
                second_symbol,
                ..
            }) => write!(
                f,
                "No match: {} and {}",
                first_symbol.glyph(),
                second_symbol.glyph()
            ),
            GameOutcome::Memory(FlipOutcome::Ignored { index }) => {
                write!(f, "Card {index} is already face up")
            }
            GameOutcome::Rps(round) => {
                let verdict = match round.result {
                    RoundResult::Win => "You win!",
                    RoundResult::Lose => "Computer wins!",
                    RoundResult::Tie => "It's a tie!",
                };
                write!(f, "You: {}, computer: {}. {verdict}", round.user, round.computer)
            }
        }
    }
}

/// The active game as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameView {
    NumberGuess(NumberGuessView),
    Quiz(QuizView),
    Dice(DiceView),
    Memory(MemoryView),
    Rps(RpsView),
}

/// Header plus body for the active game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveGameView {
    pub kind: GameKind,
    pub phase: Phase,
    pub view: GameView,
}

/// Everything a front end needs to draw the page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub scores: ScoreBoard,
    pub active: Option<ActiveGameView>,
    /// Totals, progress meters and unlocked achievements.
    pub stats: SessionStats,
}

/// Result of one accepted user action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionReport {
    /// Set for game moves.
    pub outcome: Option<GameOutcome>,
    /// Set when the action completed a game.
    pub completion: Option<CompletionRecord>,
    /// Achievements unlocked by this action.
    pub newly_unlocked: Vec<Achievement>,
    /// Session state after the action.
    pub snapshot: SessionSnapshot,
}
