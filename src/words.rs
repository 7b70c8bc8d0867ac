use crate::csv::parse_word_csv;
use crate::error::{LoadError, QuizError};
use crate::models::WordPair;
use crossbeam_channel::{Receiver, TryRecvError, bounded};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

/// The canonical word list. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<WordPair>,
}

impl WordStore {
    pub fn new(words: Vec<WordPair>) -> Self {
        Self { words }
    }

    pub fn load(path: &Path) -> Result<Self, QuizError> {
        read_words(path).map_err(|source| QuizError::DataLoadFailure {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_words(path: &Path) -> Result<WordStore, LoadError> {
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let (words, skipped) = match extension.as_str() {
        "json" => parse_word_json(&content)?,
        "csv" => parse_word_csv(&content),
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "skipped incomplete word entries");
    }
    tracing::info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(WordStore::new(words))
}

/// `[{ "english": ..., "japanese": ... }, ...]`
pub fn parse_word_json(content: &str) -> Result<(Vec<WordPair>, usize), serde_json::Error> {
    let raw: Vec<WordPair> = serde_json::from_str(content)?;
    let total = raw.len();
    let words: Vec<WordPair> = raw
        .into_iter()
        .filter(|word| !word.english.trim().is_empty() && !word.japanese.trim().is_empty())
        .collect();
    let skipped = total - words.len();
    Ok((words, skipped))
}

/// Where the shell's word list currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Loading,
    Ready(WordStore),
    Failed(String),
}

impl WordSource {
    pub fn store(&self) -> Option<&WordStore> {
        match self {
            WordSource::Ready(store) => Some(store),
            _ => None,
        }
    }
}

/// Load the word list on a background thread. The receiver yields exactly one
/// result.
pub fn spawn_word_loader(path: PathBuf) -> Result<Receiver<Result<WordStore, QuizError>>, QuizError> {
    let (tx, rx) = bounded(1);
    thread::Builder::new()
        .name("vocab-quiz::word_loader".to_string())
        .spawn(move || {
            tracing::debug!(path = %path.display(), "loading word list");
            let result = WordStore::load(&path);
            if tx.send(result).is_err() {
                tracing::debug!("word loader receiver dropped before load finished");
            }
        })?;
    Ok(rx)
}

/// Non-blocking check on the loader. `None` while it is still working; a
/// loader that went away without sending counts as a load failure for `path`.
pub fn poll_word_loader(
    rx: &Receiver<Result<WordStore, QuizError>>,
    path: &Path,
) -> Option<Result<WordStore, QuizError>> {
    match rx.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(QuizError::DataLoadFailure {
            path: path.to_path_buf(),
            source: LoadError::Io(io::Error::other("word loader stopped unexpectedly")),
        })),
    }
}
