pub mod layout;
mod menu;
mod quiz;
mod summary;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Quiz => draw_quiz(f, app),
        AppState::QuizQuitConfirm => {
            draw_quiz(f, app);
            draw_quit_confirmation(f);
        }
        AppState::Summary => draw_summary(f, app),
    }
}
