use crate::error::QuizError;
use crate::models::Mode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_QUIZ_LENGTH: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_WORDS_PATH: &str = "words.json";
pub const DEFAULT_LOG_FILE: &str = "vocab_quiz.log";

/// How correct answers turn into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScoringPolicy {
    /// Only words answered correctly on their first presentation score.
    #[default]
    FirstAttempt,
    /// Every correct answer scores. With `--max-attempts 1` this is a plain
    /// single pass over the words.
    EveryCorrect,
}

impl ScoringPolicy {
    pub fn describe(self) -> &'static str {
        match self {
            ScoringPolicy::FirstAttempt => "first-attempt answers only",
            ScoringPolicy::EveryCorrect => "every correct answer",
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vocab-quiz", version, about = "English/Japanese vocabulary quiz")]
pub struct QuizConfig {
    /// Word list to load (.json or .csv)
    #[arg(long, default_value = DEFAULT_WORDS_PATH)]
    pub words: PathBuf,

    /// Questions per session
    #[arg(long, default_value_t = DEFAULT_QUIZ_LENGTH)]
    pub quiz_length: usize,

    /// Maximum times a word is asked before it is dropped
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, value_enum, default_value_t = ScoringPolicy::FirstAttempt)]
    pub scoring: ScoringPolicy,

    /// Start straight away in this direction instead of showing the menu
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Seed for the question shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from(DEFAULT_WORDS_PATH),
            quiz_length: DEFAULT_QUIZ_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            scoring: ScoringPolicy::default(),
            mode: None,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.quiz_length == 0 {
            return Err(QuizError::InvalidConfig(
                "quiz length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(QuizError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_quiz_constants() {
        let config = QuizConfig::default();
        assert_eq!(config.quiz_length, 10);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.scoring, ScoringPolicy::FirstAttempt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_without_arguments_equals_default() {
        let parsed = QuizConfig::try_parse_from(["vocab-quiz"]).unwrap();
        let default = QuizConfig::default();
        assert_eq!(parsed.words, default.words);
        assert_eq!(parsed.quiz_length, default.quiz_length);
        assert_eq!(parsed.max_attempts, default.max_attempts);
        assert_eq!(parsed.mode, None);
    }

    #[test]
    fn test_parse_all_flags() {
        let config = QuizConfig::try_parse_from([
            "vocab-quiz",
            "--words",
            "decks/n5.csv",
            "--quiz-length",
            "5",
            "--max-attempts",
            "1",
            "--scoring",
            "every-correct",
            "--mode",
            "jto-e",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(config.words, PathBuf::from("decks/n5.csv"));
        assert_eq!(config.quiz_length, 5);
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.scoring, ScoringPolicy::EveryCorrect);
        assert_eq!(config.mode, Some(Mode::JapaneseToEnglish));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(QuizConfig::try_parse_from(["vocab-quiz", "--mode", "e2j"]).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = QuizConfig {
            quiz_length: 0,
            ..QuizConfig::default()
        };
        assert!(matches!(config.validate(), Err(QuizError::InvalidConfig(_))));

        let config = QuizConfig {
            max_attempts: 0,
            ..QuizConfig::default()
        };
        assert!(matches!(config.validate(), Err(QuizError::InvalidConfig(_))));
    }
}
