use crate::app::App;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(f: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let layout = calculate_summary_chunks(f.area());
    let final_score = session.final_score();

    let title = Paragraph::new(format!("Results - {}", session.mode().label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_color = if final_score.score * 2 >= final_score.total {
        Color::Green
    } else {
        Color::Yellow
    };
    let score = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {} / {}", final_score.score, final_score.total),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let width = layout.details_area.width.saturating_sub(4) as usize;
    let mut details = Text::default();
    details.push_line(Line::from(format!(
        "Scoring: {}",
        session.scoring().describe()
    )));
    details.push_line(Line::from(format!(
        "Questions asked: {} (including retries)",
        session.queue().len()
    )));
    let mut retried: Vec<&str> = session
        .queue()
        .iter()
        .filter(|item| item.attempts > 1)
        .map(|item| item.word.english.as_str())
        .collect();
    if !retried.is_empty() {
        retried.sort_unstable();
        retried.dedup();
        details.push_line(Line::from(""));
        details.push_line(Line::from(truncate_string(
            &format!("Asked again: {}", retried.join(", ")),
            width,
        )));
    }
    let details = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Details"));
    f.render_widget(details, layout.details_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
