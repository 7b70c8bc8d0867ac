use std::path::PathBuf;
use thiserror::Error;

/// Why a word list could not be turned into pairs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported word list format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum QuizError {
    /// The word source could not be retrieved or parsed.
    #[error("failed to load word data from {}: {source}", .path.display())]
    DataLoadFailure {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// A session was started before the word list arrived, or the list is empty.
    #[error("word data is not ready yet")]
    EmptyWordStore,

    /// Blank answer. The shell ignores this one.
    #[error("answer is empty")]
    EmptyInput,

    #[error("the session has no current question")]
    NoActiveQuestion,

    #[error("the current question has already been answered")]
    AlreadyAnswered,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Errors the shell swallows instead of showing to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, QuizError::EmptyInput | QuizError::AlreadyAnswered)
    }
}
