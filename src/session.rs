use crate::app::{Action, App};
use crate::models::{AppState, Mode};
use crate::quiz::Verdict;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Answer being typed. The cursor counts chars, not bytes, so kana and kanji
/// edit correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1).min(self.char_count());
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Translate a key press into an [`Action`], editing the answer buffer in
/// place when the key is plain typing.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match app.state {
        AppState::Menu => handle_menu_input(key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(key),
        AppState::Summary => handle_summary_input(key),
    }
}

pub fn handle_menu_input(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Enter => Some(Action::StartSelected),
        KeyCode::Char('1') | KeyCode::Char('e') => Some(Action::Start(Mode::EnglishToJapanese)),
        KeyCode::Char('2') | KeyCode::Char('j') => Some(Action::Start(Mode::JapaneseToEnglish)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) -> Option<Action> {
    let answered = app
        .session
        .as_ref()
        .is_some_and(|session| matches!(session.verdict(), Verdict::Answered(_)));

    if key.code == KeyCode::Esc {
        return Some(Action::RequestRestart);
    }

    if answered {
        return match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => Some(Action::Advance),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            app.input.clear();
        }
        return None;
    }

    match key.code {
        KeyCode::Enter if app.input.is_blank() => None,
        KeyCode::Enter => Some(Action::Submit(app.input.text().to_string())),
        KeyCode::Left => {
            app.input.move_left();
            None
        }
        KeyCode::Right => {
            app.input.move_right();
            None
        }
        KeyCode::Home => {
            app.input.move_home();
            None
        }
        KeyCode::End => {
            app.input.move_end();
            None
        }
        KeyCode::Backspace => {
            app.input.backspace();
            None
        }
        KeyCode::Delete => {
            app.input.delete();
            None
        }
        KeyCode::Char(c) => {
            app.input.insert(c);
            None
        }
        _ => None,
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelRestart),
        _ => None,
    }
}

pub fn handle_summary_input(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('m') | KeyCode::Enter => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
