use crate::app::App;
use crate::models::Mode;
use crate::words::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn word_source_line(words: &WordSource) -> Line<'static> {
    match words {
        WordSource::Loading => Line::from(Span::styled(
            "Loading word data...",
            Style::default().fg(Color::Yellow),
        )),
        WordSource::Ready(store) => Line::from(Span::styled(
            format!("{} words loaded", store.len()),
            Style::default().fg(Color::Green),
        )),
        WordSource::Failed(_) => Line::from(Span::styled(
            "Word data failed to load",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    }
}

pub fn draw_menu(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Vocabulary Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if i == app.selected_mode {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("[{}] {}", i + 1, mode.label())).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose a direction"),
    );
    f.render_widget(list, chunks[1]);

    let mut status = vec![word_source_line(&app.words)];
    if let Some(notice) = &app.notice {
        status.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Navigate  "),
        key_hint("Enter/1/2"),
        Span::from(" Start  "),
        key_hint("q"),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
