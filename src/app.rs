use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::models::{AppState, Mode};
use crate::quiz::{SessionState, Verdict};
use crate::session::InputBuffer;
use crate::words::{WordSource, WordStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything the shell can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPrevious,
    SelectNext,
    StartSelected,
    Start(Mode),
    Submit(String),
    Advance,
    RequestRestart,
    CancelRestart,
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Exit,
}

/// Shell state. Owns the only [`SessionState`]; dropping it is a restart.
pub struct App {
    pub state: AppState,
    pub config: QuizConfig,
    pub words: WordSource,
    pub session: Option<SessionState>,
    pub input: InputBuffer,
    pub selected_mode: usize,
    /// Blocking message shown on the mode selection screen.
    pub notice: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selected_mode = config
            .mode
            .and_then(|mode| Mode::ALL.iter().position(|m| *m == mode))
            .unwrap_or(0);
        Self {
            state: AppState::Menu,
            config,
            words: WordSource::Loading,
            session: None,
            input: InputBuffer::default(),
            selected_mode,
            notice: None,
            rng,
        }
    }

    /// Record the background load result. A preselected mode starts right away.
    pub fn on_words_loaded(&mut self, result: Result<WordStore, QuizError>) {
        match result {
            Ok(store) => {
                self.words = WordSource::Ready(store);
                if let Some(mode) = self.config.mode
                    && self.state == AppState::Menu
                    && self.session.is_none()
                {
                    self.dispatch(Action::Start(mode));
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "word data unavailable");
                self.notice = Some(err.to_string());
                self.words = WordSource::Failed(err.to_string());
            }
        }
    }

    pub fn selected(&self) -> Mode {
        Mode::ALL[self.selected_mode % Mode::ALL.len()]
    }

    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        match action {
            Action::SelectPrevious => {
                self.selected_mode = self.selected_mode.saturating_sub(1);
            }
            Action::SelectNext => {
                if self.selected_mode + 1 < Mode::ALL.len() {
                    self.selected_mode += 1;
                }
            }
            Action::StartSelected => return self.dispatch(Action::Start(self.selected())),
            Action::Start(mode) => self.start(mode),
            Action::Submit(text) => self.submit(&text),
            Action::Advance => self.advance(),
            Action::RequestRestart => {
                if self.state == AppState::Quiz {
                    self.state = AppState::QuizQuitConfirm;
                }
            }
            Action::CancelRestart => {
                if self.state == AppState::QuizQuitConfirm {
                    self.state = AppState::Quiz;
                }
            }
            Action::Restart => self.restart(),
            Action::Quit => return Dispatch::Exit,
        }
        Dispatch::Continue
    }

    fn start(&mut self, mode: Mode) {
        let result = match self.words.store() {
            Some(store) => SessionState::initialize(store.words(), mode, &self.config, &mut self.rng),
            None => Err(QuizError::EmptyWordStore),
        };
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.input.clear();
                self.notice = None;
                self.state = AppState::Quiz;
            }
            Err(err) => {
                tracing::warn!(mode = %mode, error = %err, "session not started");
                self.notice = Some(match err {
                    QuizError::EmptyWordStore => "Word data is not ready yet.".to_string(),
                    other => other.to_string(),
                });
            }
        }
    }

    fn submit(&mut self, text: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.submit_answer(text) {
            Ok(result) => {
                tracing::info!(correct = result.correct, "answer judged");
            }
            Err(err) if err.is_silent() => {}
            Err(err) => {
                tracing::warn!(error = %err, "answer not judged");
            }
        }
    }

    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !matches!(session.verdict(), Verdict::Answered(_)) {
            return;
        }
        session.advance();
        self.input.clear();
        if session.is_complete() {
            self.state = AppState::Summary;
        }
    }

    fn restart(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("session discarded");
        }
        self.input.clear();
        self.notice = None;
        self.state = AppState::Menu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::models::{Question, WordPair};
    use std::path::PathBuf;

    fn seeded_config() -> QuizConfig {
        QuizConfig {
            seed: Some(99),
            ..QuizConfig::default()
        }
    }

    fn dog_store() -> WordStore {
        WordStore::new(vec![WordPair::new("dog", "犬")])
    }

    fn ready_app() -> App {
        let mut app = App::new(seeded_config());
        app.on_words_loaded(Ok(dog_store()));
        app
    }

    #[test]
    fn test_start_before_words_loaded_is_rejected() {
        let mut app = App::new(seeded_config());
        assert_eq!(app.dispatch(Action::Start(Mode::EnglishToJapanese)), Dispatch::Continue);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session.is_none());
        assert_eq!(app.notice.as_deref(), Some("Word data is not ready yet."));
    }

    #[test]
    fn test_start_with_empty_store_is_rejected() {
        let mut app = App::new(seeded_config());
        app.on_words_loaded(Ok(WordStore::default()));
        app.dispatch(Action::Start(Mode::JapaneseToEnglish));
        assert_eq!(app.state, AppState::Menu);
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_load_failure_becomes_notice() {
        let mut app = App::new(seeded_config());
        app.on_words_loaded(Err(QuizError::DataLoadFailure {
            path: PathBuf::from("words.json"),
            source: LoadError::UnsupportedFormat("txt".to_string()),
        }));
        assert!(matches!(app.words, WordSource::Failed(_)));
        assert!(app.notice.as_deref().unwrap().contains("words.json"));

        app.dispatch(Action::Start(Mode::EnglishToJapanese));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_preselected_mode_starts_on_load() {
        let config = QuizConfig {
            mode: Some(Mode::JapaneseToEnglish),
            ..seeded_config()
        };
        let mut app = App::new(config);
        assert_eq!(app.selected(), Mode::JapaneseToEnglish);
        app.on_words_loaded(Ok(dog_store()));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.as_ref().unwrap().mode(), Mode::JapaneseToEnglish);
    }

    #[test]
    fn test_menu_selection() {
        let mut app = ready_app();
        app.dispatch(Action::SelectPrevious);
        assert_eq!(app.selected(), Mode::EnglishToJapanese);
        app.dispatch(Action::SelectNext);
        app.dispatch(Action::SelectNext);
        assert_eq!(app.selected(), Mode::JapaneseToEnglish);
        app.dispatch(Action::StartSelected);
        assert_eq!(app.session.as_ref().unwrap().mode(), Mode::JapaneseToEnglish);
    }

    #[test]
    fn test_full_round_trip_through_dispatch() {
        let mut app = ready_app();
        app.dispatch(Action::Start(Mode::EnglishToJapanese));
        assert_eq!(app.state, AppState::Quiz);

        // advance is ignored until the question has a verdict
        app.dispatch(Action::Advance);
        assert_eq!(app.session.as_ref().unwrap().cursor(), 0);

        app.dispatch(Action::Submit("   ".to_string()));
        assert_eq!(app.session.as_ref().unwrap().verdict(), &Verdict::Unanswered);

        app.dispatch(Action::Submit("inu".to_string()));
        app.dispatch(Action::Advance);
        assert_eq!(app.state, AppState::Quiz);

        app.dispatch(Action::Submit("犬".to_string()));
        app.dispatch(Action::Advance);
        assert_eq!(app.state, AppState::Summary);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.final_score().to_string(), "0/10");
        assert!(matches!(session.current_question(), Question::Complete(_)));
    }

    #[test]
    fn test_restart_discards_session() {
        let mut app = ready_app();
        app.dispatch(Action::Start(Mode::EnglishToJapanese));
        app.input.insert('x');
        app.dispatch(Action::RequestRestart);
        assert_eq!(app.state, AppState::QuizQuitConfirm);
        app.dispatch(Action::CancelRestart);
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.session.is_some());

        app.dispatch(Action::RequestRestart);
        app.dispatch(Action::Restart);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session.is_none());
        assert_eq!(app.input.text(), "");
    }

    #[test]
    fn test_quit_exits() {
        let mut app = ready_app();
        assert_eq!(app.dispatch(Action::Quit), Dispatch::Exit);
    }
}
