use clap::Parser;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::time::Duration;
use vocab_quiz::{
    App, Dispatch, QuizConfig, QuizError, WordStore, draw, handle_key, logger, poll_word_loader,
    spawn_word_loader,
};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<(), QuizError> {
    let config = QuizConfig::parse();
    config.validate()?;
    logger::init(&config.log_file)?;
    tracing::info!(words = %config.words.display(), "starting vocab-quiz");

    let words_rx = spawn_word_loader(config.words.clone())?;
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal, &mut app, &words_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting with error");
    }
    result
}

/// Raw mode plus alternate screen. Any step that fails undoes the ones before
/// it, so the shell is never left in raw mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, QuizError> {
    enable_raw_mode()?;
    let terminal = undo_on_error(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            undo_on_error(
                || Terminal::new(CrosstermBackend::new(io::stdout())),
                || execute!(io::stdout(), LeaveAlternateScreen),
            )
        },
        disable_raw_mode,
    )?;
    Ok(terminal)
}

fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    step().inspect_err(|err| {
        tracing::error!(error = %err, "terminal setup failed");
        if let Err(undo_err) = undo() {
            tracing::warn!(error = %undo_err, "could not restore terminal");
        }
    })
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    words_rx: &Receiver<Result<WordStore, QuizError>>,
) -> Result<(), QuizError> {
    let mut words_pending = true;

    loop {
        if words_pending && let Some(result) = poll_word_loader(words_rx, &app.config.words) {
            app.on_words_loaded(result);
            words_pending = false;
        }

        terminal.draw(|f| draw(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = handle_key(app, key)
            && app.dispatch(action) == Dispatch::Exit
        {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_undo_runs_when_step_fails() {
        let undone = Cell::new(false);
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no tty")),
            || {
                undone.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_undo_skipped_when_step_succeeds() {
        let undone = Cell::new(false);
        let result = undo_on_error(
            || Ok(7),
            || {
                undone.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }

    #[test]
    fn test_failed_undo_keeps_original_error() {
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no tty")),
            || Err(io::Error::other("still raw")),
        );
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }
}
