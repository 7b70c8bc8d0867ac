use crate::app::App;
use crate::models::Question;
use crate::quiz::{SessionState, Verdict};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{cursor_column, horizontal_scroll};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn feedback_text(verdict: &Verdict) -> Text<'_> {
    match verdict {
        Verdict::Unanswered => Text::default(),
        Verdict::Answered(result) if result.correct => Text::from(Line::from(Span::styled(
            "Correct! ✅",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        Verdict::Answered(result) => {
            let mut text = Text::default();
            text.push_line(Line::from(Span::styled(
                "Incorrect... ❌",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(vec![
                Span::from("The answer is: "),
                Span::styled(
                    result.correct_answer.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            text
        }
    }
}

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Question::Prompt(view) = session.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area());

    let mut progress = format!(
        "Question {} / {} - {}",
        view.position,
        view.total,
        session.mode().label()
    );
    if view.attempts > 1 {
        progress.push_str(&format!(" (attempt {})", view.attempts));
    }
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(view.prompt.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let answered = matches!(session.verdict(), Verdict::Answered(_));
    let answer_content = if app.input.text().is_empty() && !answered {
        Text::from(Span::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(app.input.text())
    };
    let answer_style = if answered {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    // one line, scrolled sideways so the cursor never leaves the box
    let text_width = layout.answer_area.width.saturating_sub(2) as usize;
    let cursor_col = cursor_column(app.input.text(), app.input.cursor());
    let scroll = if answered {
        0
    } else {
        horizontal_scroll(cursor_col, text_width)
    };
    let answer = Paragraph::new(answer_content)
        .style(answer_style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, layout.answer_area);

    if !answered && text_width > 0 {
        let visible_col = (cursor_col - scroll).min(text_width - 1);
        let cursor_x = layout.answer_area.x + 1 + visible_col as u16;
        let cursor_y = layout.answer_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let feedback = Paragraph::new(feedback_text(session.verdict()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(feedback, layout.feedback_area);

    let help = Paragraph::new(help_line(session))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn help_line(session: &SessionState) -> Line<'static> {
    let mut spans = Vec::new();
    if matches!(session.verdict(), Verdict::Answered(_)) {
        spans.extend([key_hint("Enter"), Span::from(" Next  ")]);
    } else {
        spans.extend([key_hint("Enter"), Span::from(" Submit  ")]);
    }
    spans.extend([
        key_hint("Esc"),
        Span::from(" Back to Menu  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ]);
    Line::from(spans)
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = f.area();
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area)[1];
    let popup = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(popup)[1];

    let text = vec![
        Line::from("Abandon this quiz and return to mode selection?"),
        Line::from("Progress and score will be discarded."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Yes  "),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(" No (Continue Quiz)"),
        ]),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quit to Menu")
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}
