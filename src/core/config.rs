//! Session configuration.
//!
//! Front ends configure a session at startup by providing:
//! - an optional RNG seed (omit for OS entropy)
//! - the quiz question bank
//!
//! Configs can be built in code or loaded from JSON:
//!
//! ```
//! use rust_arcade::core::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.questions.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::games::quiz::{default_questions, Question};

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the session RNG. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Quiz questions in presentation order.
    pub questions: Vec<Question>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            questions: default_questions(),
        }
    }
}

impl SessionConfig {
    /// Default configuration: entropy seed, built-in quiz.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the quiz question bank.
    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or a validation
    /// error from [`SessionConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the question bank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyQuestionBank`] if there are no questions,
    /// or [`ConfigError::InvalidQuestion`] for the first malformed one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyQuestionBank);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question
                .check()
                .map_err(|reason| ConfigError::InvalidQuestion { index, reason })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::new();
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let question = Question::new("2 + 2?", ["3", "4", "5", "22"], "4");
        let config = SessionConfig::new()
            .with_seed(99)
            .with_questions(vec![question.clone()]);

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.questions, vec![question]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_bank_rejected() {
        let config = SessionConfig::new().with_questions(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyQuestionBank)));
    }

    #[test]
    fn test_bad_question_reports_index() {
        let good = Question::new("Sky colour?", ["Blue", "Green", "Red", "Pink"], "Blue");
        let bad = Question::new("Dupes?", ["A", "A", "B", "C"], "A");
        let config = SessionConfig::new().with_questions(vec![good, bad]);

        match config.validate() {
            Err(ConfigError::InvalidQuestion { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_with_questions() {
        let json = r#"{
            "questions": [
                { "text": "Largest ocean?",
                  "options": ["Atlantic", "Pacific", "Indian", "Arctic"],
                  "answer": "Pacific" }
            ]
        }"#;
        let config = SessionConfig::from_json(json).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.questions.len(), 1);
        assert_eq!(config.questions[0].correct_index(), Some(1));
    }

    #[test]
    fn test_from_json_rejects_unknown_answer() {
        let json = r#"{
            "questions": [
                { "text": "Q", "options": ["a", "b", "c", "d"], "answer": "e" }
            ]
        }"#;
        assert!(matches!(
            SessionConfig::from_json(json),
            Err(ConfigError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            SessionConfig::from_json("{ seed: }"),
            Err(ConfigError::Json(_))
        ));
    }
}
