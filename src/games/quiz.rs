//! Multiple-choice quiz.
//!
//! Answers can be changed freely until the quiz is submitted. Submitting
//! scores 10 points per correct answer and closes the quiz until the next
//! `start()`.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameKind, RandomSource};
use crate::rules::{MiniGame, Phase, Transition};

/// Options offered per question.
pub const OPTION_COUNT: usize = 4;

/// Points per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// A single quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    /// Text of the correct option.
    pub answer: String,
}

impl Question {
    /// Create a question. `answer` must be one of `options`.
    pub fn new(
        text: impl Into<String>,
        options: [&str; OPTION_COUNT],
        answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.map(String::from),
            answer: answer.into(),
        }
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }

    /// Check the question is well formed, describing the first problem.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(format!("option `{option}` appears twice"));
            }
        }
        if self.correct_index().is_none() {
            return Err(format!("answer `{}` is not one of the options", self.answer));
        }
        Ok(())
    }
}

/// The built-in question bank.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            "Paris",
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            "Mars",
        ),
        Question::new(
            "What is the largest mammal in the world?",
            ["Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
            "Blue Whale",
        ),
        Question::new(
            "Who painted the Mona Lisa?",
            ["Van Gogh", "Picasso", "Da Vinci", "Rembrandt"],
            "Da Vinci",
        ),
    ]
}

/// A quiz move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizInput {
    /// Select (or re-select) an option for a question.
    Answer { question: usize, option: usize },
    /// Score the current selections.
    Submit,
}

/// Immediate verdict on a selected option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerFeedback {
    Correct,
    Wrong { correct_answer: String },
}

/// What a quiz move produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizOutcome {
    Answered {
        question: usize,
        feedback: AnswerFeedback,
    },
    Submitted {
        correct: usize,
        total: usize,
    },
}

/// One question as rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub selected: Option<usize>,
    pub feedback: Option<AnswerFeedback>,
}

/// What the player can see of the quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizView {
    pub submitted: bool,
    pub questions: Vec<QuestionView>,
    /// Points the current selections would earn.
    pub pending_score: u32,
}

/// Quiz state: one answer slot per question.
#[derive(Clone, Debug)]
pub struct QuizGame {
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    submitted: bool,
}

impl QuizGame {
    /// An open quiz over `questions`.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            submitted: false,
        }
    }

    /// The questions in order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Selected option per question.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    fn is_correct(&self, question: usize, option: usize) -> bool {
        self.questions[question].correct_index() == Some(option)
    }

    fn feedback(&self, question: usize, option: usize) -> AnswerFeedback {
        if self.is_correct(question, option) {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Wrong {
                correct_answer: self.questions[question].answer.clone(),
            }
        }
    }

    fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .enumerate()
            .filter(|(i, selected)| selected.is_some_and(|option| self.is_correct(*i, option)))
            .count()
    }

    fn score(&self) -> u32 {
        self.correct_count() as u32 * POINTS_PER_CORRECT
    }
}

impl Default for QuizGame {
    fn default() -> Self {
        Self::new(default_questions())
    }
}

impl MiniGame for QuizGame {
    const KIND: GameKind = GameKind::Quiz;

    type Input = QuizInput;
    type Outcome = QuizOutcome;
    type View = QuizView;

    fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Completed
        } else {
            Phase::Active
        }
    }

    fn start<R: RandomSource>(&mut self, _rng: &mut R) {
        self.answers.iter_mut().for_each(|slot| *slot = None);
        self.submitted = false;
    }

    fn act<R: RandomSource>(
        &mut self,
        input: QuizInput,
        _rng: &mut R,
    ) -> Result<Transition<QuizOutcome>, GameError> {
        if self.submitted {
            return Err(GameError::AlreadyCompleted(Self::KIND));
        }

        match input {
            QuizInput::Answer { question, option } => {
                let last_question = self.questions.len() as i64 - 1;
                GameError::check_range("question", question as i64, 0, last_question)?;
                GameError::check_range("option", option as i64, 0, OPTION_COUNT as i64 - 1)?;

                self.answers[question] = Some(option);
                Ok(Transition::pending(QuizOutcome::Answered {
                    question,
                    feedback: self.feedback(question, option),
                }))
            }
            QuizInput::Submit => {
                self.submitted = true;
                let correct = self.correct_count();
                Ok(Transition::completed(
                    QuizOutcome::Submitted {
                        correct,
                        total: self.questions.len(),
                    },
                    self.score(),
                ))
            }
        }
    }

    fn view(&self) -> QuizView {
        let questions = self
            .questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(i, (question, selected))| QuestionView {
                text: question.text.clone(),
                options: question.options.clone(),
                selected: *selected,
                feedback: selected.map(|option| self.feedback(i, option)),
            })
            .collect();

        QuizView {
            submitted: self.submitted,
            questions,
            pending_score: self.score(),
        }
    }
}
