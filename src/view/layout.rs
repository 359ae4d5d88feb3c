//! Screen layout rendering.
//!
//! Pure layout logic: header line, the active screen, the search bar while
//! it is open, the status bar, and whichever overlay is up.

use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::config::KeyBindings;
use crate::state::{AppState, BrowseMode, DashboardState, Overlay, Screen};
use crate::view::styles::Palette;
use crate::view::{confirm, editor, help, recipes, search_input::SearchInput, table};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, bindings: &KeyBindings, palette: &Palette) {
    let search_height = if state.search().is_typing() {
        SEARCH_INPUT_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, palette);

    if state.search().is_typing() {
        frame.render_widget(SearchInput::new(state.search(), palette), chunks[1]);
    }

    match state.screen() {
        Screen::Dashboard => table::render_posts_table(frame, chunks[2], state.dashboard(), palette),
        Screen::Recipes => recipes::render_recipes(frame, chunks[2], state.recipes(), palette),
    }

    render_status_bar(frame, chunks[3], state, palette);

    match state.overlay() {
        Overlay::None => {}
        Overlay::Editor(editor) => editor::render_editor(frame, editor, palette),
        Overlay::ConfirmDelete => {
            if let Some(post) = state.dashboard().selected_for_delete() {
                confirm::render_confirm_delete(frame, post, palette);
            }
        }
        Overlay::Help => help::render_help_overlay(frame, bindings, palette),
    }
}

/// App name, screen and loading indicator on the left, greeting on the
/// right.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let screen = match state.screen() {
        Screen::Dashboard => "Posts",
        Screen::Recipes => "Recipes",
    };
    let mut spans = vec![
        Span::styled(" postdeck ", palette.header),
        Span::styled(format!("| {screen}"), palette.muted),
    ];
    if state.is_loading() {
        spans.push(Span::styled("  loading...", palette.loading));
    }
    let left = Paragraph::new(Line::from(spans));
    let right = Paragraph::new(Line::from(Span::styled(
        format!("Hello, {} ", state.user().email()),
        palette.header,
    )))
    .alignment(Alignment::Right);

    frame.render_widget(left, area);
    frame.render_widget(right, area);
}

/// Status bar: paging summary on the left; the current notice, or a short
/// key hint, on the right.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let summary = match state.screen() {
        Screen::Dashboard => pagination_status(state.dashboard()),
        Screen::Recipes => format!("{} recipes", state.recipes().recipes().len()),
    };
    frame.render_widget(Paragraph::new(format!(" {summary}")), area);

    let right = match state.dashboard().notice() {
        Some(notice) => Span::styled(
            format!("{} ", notice.message()),
            palette.notice(notice.kind()),
        ),
        None => Span::styled("? help  q quit ", palette.muted),
    };
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}

/// One-line summary of what the table shows, e.g.
/// `Page 2/26 | 10 per page | 251 posts`.
pub fn pagination_status(dashboard: &DashboardState) -> String {
    match dashboard.mode() {
        BrowseMode::Browsing => format!(
            "Page {}/{} | {} per page | {} posts",
            dashboard.page_index() + 1,
            dashboard.page_count(),
            dashboard.page_size(),
            dashboard.total_count()
        ),
        BrowseMode::Searching { query } => format!(
            "{} results for \"{}\" | Esc to clear",
            dashboard.total_count(),
            query.as_str()
        ),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
