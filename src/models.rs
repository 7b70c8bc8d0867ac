use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static::lazy_static! {
    // ASCII comma or the Japanese ideographic comma.
    static ref TRANSLATION_SEPARATOR: Regex = Regex::new("[,、]").unwrap();
}

/// One entry of the word list. `japanese` may hold several accepted
/// translations; the first one is what gets shown as a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub english: String,
    pub japanese: String,
}

impl WordPair {
    pub fn new(english: impl Into<String>, japanese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            japanese: japanese.into(),
        }
    }

    pub fn translations(&self) -> Vec<&str> {
        TRANSLATION_SEPARATOR
            .split(&self.japanese)
            .map(str::trim)
            .collect()
    }

    pub fn display_japanese(&self) -> &str {
        TRANSLATION_SEPARATOR
            .split(&self.japanese)
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Mode {
    #[serde(rename = "eto-j")]
    #[value(name = "eto-j")]
    EnglishToJapanese,
    #[serde(rename = "jto-e")]
    #[value(name = "jto-e")]
    JapaneseToEnglish,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::EnglishToJapanese, Mode::JapaneseToEnglish];

    pub fn token(self) -> &'static str {
        match self {
            Mode::EnglishToJapanese => "eto-j",
            Mode::JapaneseToEnglish => "jto-e",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::EnglishToJapanese => "English → Japanese",
            Mode::JapaneseToEnglish => "Japanese → English",
        }
    }

    pub fn prompt_for(self, word: &WordPair) -> &str {
        match self {
            Mode::EnglishToJapanese => &word.english,
            Mode::JapaneseToEnglish => word.display_japanese(),
        }
    }

    /// The full, unsplit field shown after an answer.
    pub fn reference_answer(self, word: &WordPair) -> &str {
        match self {
            Mode::EnglishToJapanese => &word.japanese,
            Mode::JapaneseToEnglish => &word.english,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub word: WordPair,
    pub attempts: u32,
}

impl QuizItem {
    pub fn new(word: WordPair) -> Self {
        Self { word, attempts: 1 }
    }

    pub fn retry(&self) -> Self {
        Self {
            word: self.word.clone(),
            attempts: self.attempts + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: String,
    /// 1-based position in the live queue.
    pub position: usize,
    pub total: usize,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Prompt(QuestionView),
    Complete(FinalScore),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_split_on_both_commas() {
        let word = WordPair::new("cat", "猫、ねこ, ネコ");
        assert_eq!(word.translations(), vec!["猫", "ねこ", "ネコ"]);
    }

    #[test]
    fn test_display_japanese_is_first_translation() {
        let word = WordPair::new("cat", " 猫 、ねこ");
        assert_eq!(word.display_japanese(), "猫");

        let single = WordPair::new("dog", "犬");
        assert_eq!(single.display_japanese(), "犬");
    }

    #[test]
    fn test_mode_prompt_and_reference() {
        let word = WordPair::new("cat", "猫、ねこ");
        assert_eq!(Mode::EnglishToJapanese.prompt_for(&word), "cat");
        assert_eq!(Mode::JapaneseToEnglish.prompt_for(&word), "猫");
        assert_eq!(Mode::EnglishToJapanese.reference_answer(&word), "猫、ねこ");
        assert_eq!(Mode::JapaneseToEnglish.reference_answer(&word), "cat");
    }

    #[test]
    fn test_mode_tokens() {
        assert_eq!(Mode::EnglishToJapanese.to_string(), "eto-j");
        assert_eq!(Mode::JapaneseToEnglish.to_string(), "jto-e");
    }

    #[test]
    fn test_mode_serde_uses_tokens() {
        let json = serde_json::to_string(&Mode::EnglishToJapanese).unwrap();
        assert_eq!(json, "\"eto-j\"");
        let mode: Mode = serde_json::from_str("\"jto-e\"").unwrap();
        assert_eq!(mode, Mode::JapaneseToEnglish);
    }

    #[test]
    fn test_retry_increments_attempts() {
        let item = QuizItem::new(WordPair::new("dog", "犬"));
        assert_eq!(item.attempts, 1);
        let again = item.retry();
        assert_eq!(again.attempts, 2);
        assert_eq!(again.word, item.word);
    }

    #[test]
    fn test_final_score_display() {
        let score = FinalScore { score: 7, total: 10 };
        assert_eq!(score.to_string(), "7/10");
    }
}
