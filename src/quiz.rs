use crate::config::{QuizConfig, ScoringPolicy};
use crate::error::QuizError;
use crate::models::{AnswerResult, FinalScore, Mode, Question, QuestionView, QuizItem, WordPair};
use rand::Rng;
use rand::seq::SliceRandom;

/// Trim and lower-case a typed answer or a reference field.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Unanswered,
    Answered(AnswerResult),
}

/// State of one quiz run. `queue` only grows; `cursor` only moves forward.
#[derive(Debug, Clone)]
pub struct SessionState {
    mode: Mode,
    queue: Vec<QuizItem>,
    cursor: usize,
    score: usize,
    quiz_length: usize,
    max_attempts: u32,
    scoring: ScoringPolicy,
    verdict: Verdict,
}

impl SessionState {
    pub fn initialize<R: Rng + ?Sized>(
        words: &[WordPair],
        mode: Mode,
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if words.is_empty() {
            return Err(QuizError::EmptyWordStore);
        }
        config.validate()?;

        let mut shuffled = words.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(config.quiz_length);
        let queue: Vec<QuizItem> = shuffled.into_iter().map(QuizItem::new).collect();

        tracing::info!(
            mode = %mode,
            questions = queue.len(),
            quiz_length = config.quiz_length,
            max_attempts = config.max_attempts,
            "session started"
        );

        Ok(Self {
            mode,
            queue,
            cursor: 0,
            score: 0,
            quiz_length: config.quiz_length,
            max_attempts: config.max_attempts,
            scoring: config.scoring,
            verdict: Verdict::Unanswered,
        })
    }

    pub fn current_question(&self) -> Question {
        match self.queue.get(self.cursor) {
            Some(item) => Question::Prompt(QuestionView {
                prompt: self.mode.prompt_for(&item.word).to_string(),
                position: self.cursor + 1,
                total: self.queue.len(),
                attempts: item.attempts,
            }),
            None => Question::Complete(self.final_score()),
        }
    }

    /// Judge `raw` against the current item. Does not move the cursor.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerResult, QuizError> {
        let answer = normalize_answer(raw);
        if answer.is_empty() {
            return Err(QuizError::EmptyInput);
        }
        if matches!(self.verdict, Verdict::Answered(_)) {
            return Err(QuizError::AlreadyAnswered);
        }
        let item = self
            .queue
            .get(self.cursor)
            .cloned()
            .ok_or(QuizError::NoActiveQuestion)?;

        let correct = match self.mode {
            Mode::EnglishToJapanese => item
                .word
                .translations()
                .into_iter()
                .any(|candidate| candidate.to_lowercase() == answer),
            Mode::JapaneseToEnglish => normalize_answer(&item.word.english) == answer,
        };

        if correct {
            let credited = match self.scoring {
                ScoringPolicy::FirstAttempt => item.attempts == 1,
                ScoringPolicy::EveryCorrect => true,
            };
            if credited {
                self.score += 1;
            }
            tracing::debug!(
                word = %item.word.english,
                attempts = item.attempts,
                credited,
                "correct answer"
            );
        } else if item.attempts < self.max_attempts {
            let retry = item.retry();
            tracing::debug!(
                word = %item.word.english,
                next_attempt = retry.attempts,
                "incorrect answer, word queued again"
            );
            self.queue.push(retry);
        } else {
            tracing::debug!(
                word = %item.word.english,
                attempts = item.attempts,
                "incorrect answer, attempt limit reached"
            );
        }

        let result = AnswerResult {
            correct,
            correct_answer: self.mode.reference_answer(&item.word).to_string(),
        };
        self.verdict = Verdict::Answered(result.clone());
        Ok(result)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.queue.len() {
            self.cursor += 1;
        }
        self.verdict = Verdict::Unanswered;
        if self.is_complete() {
            tracing::info!(score = %self.final_score(), "session complete");
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Scored against the configured quiz length, not the grown queue.
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            score: self.score,
            total: self.quiz_length,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn queue(&self) -> &[QuizItem] {
        &self.queue
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.queue.get(self.cursor)
    }
}
