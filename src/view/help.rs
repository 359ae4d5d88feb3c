//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?', dismissed by any key.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Categories and the actions listed under them, with descriptions.
const SECTIONS: &[(&str, &[(KeyAction, &str)])] = &[
    (
        "Posts",
        &[
            (KeyAction::RowDown, "Next row"),
            (KeyAction::RowUp, "Previous row"),
            (KeyAction::NextPage, "Next page"),
            (KeyAction::PrevPage, "Previous page"),
            (KeyAction::CyclePageSize, "Rows per page (5/10/25)"),
            (KeyAction::Refresh, "Reload"),
        ],
    ),
    (
        "Search",
        &[
            (KeyAction::StartSearch, "Search (empty clears)"),
            (KeyAction::ClearSearch, "Leave search results"),
        ],
    ),
    (
        "Edit",
        &[
            (KeyAction::NewPost, "New post"),
            (KeyAction::EditPost, "Edit selected post"),
            (KeyAction::DeletePost, "Delete selected post"),
        ],
    ),
    (
        "Application",
        &[
            (KeyAction::SwitchScreen, "Posts / recipes"),
            (KeyAction::Help, "This help"),
            (KeyAction::Quit, "Quit"),
        ],
    ),
];

/// Width of the key column, so descriptions line up.
const KEY_COLUMN: usize = 18;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, palette: &Palette) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press any key to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(bindings: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, actions)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, palette.header)));
        for (action, description) in actions.iter() {
            let keys = bindings.keys_for(*action).join("/");
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN), palette.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
