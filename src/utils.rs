use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` terminal columns, ending in "..." when
/// shortened. Full-width kana and kanji count as two columns.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Display column of a char-indexed cursor in one line of `text`. A cursor
/// after "ねこ" sits at column 4.
pub fn cursor_column(text: &str, cursor_index: usize) -> usize {
    text.chars()
        .take(cursor_index)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

/// Columns a one-line field `visible_width` wide must scroll so that `column`
/// stays on screen, keeping the last cell free for the cursor.
pub fn horizontal_scroll(column: usize, visible_width: usize) -> usize {
    column.saturating_sub(visible_width.saturating_sub(1))
}
