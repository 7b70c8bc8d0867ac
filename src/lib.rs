pub mod app;
pub mod config;
pub mod csv;
pub mod error;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;
pub mod words;


// Re-exports for convenience
pub use app::{Action, App, Dispatch};
pub use config::{QuizConfig, ScoringPolicy};
pub use error::{LoadError, QuizError};
pub use models::{AnswerResult, AppState, FinalScore, Mode, Question, QuestionView, QuizItem, WordPair};
pub use quiz::{SessionState, Verdict, normalize_answer};
pub use session::{InputBuffer, handle_key};
pub use ui::draw;
pub use words::{WordSource, WordStore, poll_word_loader, spawn_word_loader};
