//! Search input widget for rendering the search bar.

use super::helpers::cursor_line;
use crate::state::SearchState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the search bar while the user is typing a query.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Widget over the current bar state.
    pub fn new(search_state: &'a SearchState, palette: &'a Palette) -> Self {
        Self {
            search_state,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let SearchState::Typing(input) = self.search_state else {
            return;
        };

        let line = cursor_line(
            input,
            area.width.saturating_sub(2),
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        );

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search (Enter apply, empty clears, Esc cancel) ")
                    .border_style(self.palette.focused_border),
            )
            .render(area, buf);
    }
}
