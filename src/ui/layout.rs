use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub details_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        details_area: chunks[2],
        footer_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 80, 30));

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.answer_area.height, 3);
        assert_eq!(layout.feedback_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        // margin 1 on both sides leaves 28 rows, 14 taken by fixed rows
        assert_eq!(layout.question_area.height, 14);
    }

    #[test]
    fn test_summary_layout() {
        let layout = calculate_summary_chunks(Rect::new(0, 0, 80, 30));

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.score_area.height, 5);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.details_area.height, 28 - 11);
    }
}
