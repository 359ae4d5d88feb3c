//! Small layout helpers shared by the overlays.

use crate::state::TextInput;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Blank spacer line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Rect of the given percentage of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    fixed_centered_rect(width, height, area)
}

/// Rect of a fixed size centered in `area`, shrunk to fit when `area` is
/// smaller.
pub fn fixed_centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One-line rendering of `input` with a block cursor, scrolled so the
/// cursor stays inside `width` display columns.
pub fn cursor_line(input: &TextInput, width: u16, cursor_style: Style) -> Line<'static> {
    let (before, after) = input.split_at_cursor();
    let mut rest = after.chars();
    // Block cursor: the char under the cursor, or a space at the end
    let under = rest.next().unwrap_or(' ');
    let budget = usize::from(width).saturating_sub(under.width().unwrap_or(1));

    // Drop leading chars until the text before the cursor fits.
    let mut visible = before;
    while visible.width() > budget {
        let mut chars = visible.chars();
        chars.next();
        visible = chars.as_str();
    }

    Line::from(vec![
        Span::raw(visible.to_string()),
        Span::styled(under.to_string(), cursor_style),
        Span::raw(rest.as_str().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn fixed_rect_shrinks_to_area() {
        let rect = fixed_centered_rect(60, 14, Rect::new(2, 1, 40, 10));
        assert_eq!(rect, Rect::new(2, 1, 40, 10));
    }

    #[test]
    fn short_input_is_not_scrolled() {
        let input = TextInput::with_text("love");
        let line = cursor_line(&input, 20, Style::default());
        assert_eq!(text_of(&line), "love ");
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn long_input_scrolls_to_keep_cursor_visible() {
        let input = TextInput::with_text("abcdefghij");
        let line = cursor_line(&input, 5, Style::default());
        assert_eq!(line.spans[0].content, "ghij");
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn wide_chars_count_double() {
        let input = TextInput::with_text("日本語");
        let line = cursor_line(&input, 5, Style::default());
        assert_eq!(line.spans[0].content, "本語");
    }
}
