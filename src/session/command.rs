//! Text commands for line-oriented front ends.
//!
//! ```text
//! select <guess|quiz|dice|memory|rps>
//! start
//! guess <n>            answer <question> <option>      submit
//! roll                 flip <card>                     play <rock|paper|scissors>
//! reset
//! ```
//!
//! Indices are 0-based. Range checks happen in the games, not here.

use std::str::FromStr;

use crate::core::{GameKind, ParseCommandError};
use crate::games::Choice;

use super::action::{GameInput, UserAction};

impl FromStr for UserAction {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseCommandError::Empty)?.to_ascii_lowercase();
        let mut arg = |command: &'static str, expected: &'static str| {
            words
                .next()
                .ok_or(ParseCommandError::MissingArgument { command, expected })
        };

        let action = match command.as_str() {
            "select" => {
                let name = arg("select", "a game name")?;
                let kind = GameKind::from_name(name)
                    .ok_or_else(|| ParseCommandError::UnknownGame(name.to_string()))?;
                UserAction::SelectGame(kind)
            }
            "start" | "new" => UserAction::Start,
            "reset" => UserAction::ResetSession,
            "guess" => UserAction::Act(GameInput::Guess(number(arg("guess", "a number")?)?)),
            "answer" => {
                let question = number(arg("answer", "a question and an option")?)?;
                let option = number(arg("answer", "a question and an option")?)?;
                UserAction::Act(GameInput::Answer { question, option })
            }
            "submit" => UserAction::Act(GameInput::SubmitQuiz),
            "roll" => UserAction::Act(GameInput::Roll),
            "flip" => UserAction::Act(GameInput::Flip(number(arg("flip", "a card index")?)?)),
            "play" => {
                let name = arg("play", "rock, paper or scissors")?;
                let choice = Choice::from_name(name)
                    .ok_or_else(|| ParseCommandError::UnknownChoice(name.to_string()))?;
                UserAction::Act(GameInput::Play(choice))
            }
            other => match Choice::from_name(other) {
                Some(choice) if other.len() > 1 => UserAction::Act(GameInput::Play(choice)),
                _ => return Err(ParseCommandError::UnknownCommand(other.to_string())),
            },
        };
        Ok(action)
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::NotANumber(word.to_string()))
}
