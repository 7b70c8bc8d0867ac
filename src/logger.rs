use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "VOCAB_QUIZ_LOG";

/// Route `tracing` output to `path`. The terminal belongs to the quiz screen,
/// so nothing is written to stdout or stderr. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logger_init() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiz.log");
        init(&path).unwrap();
        init(&path).unwrap();
        tracing::info!("logger initialised twice");
        assert!(path.exists());
    }

    #[test]
    fn test_logger_init_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("quiz.log");
        assert!(init(&path).is_err());
    }
}
