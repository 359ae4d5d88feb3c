//! Post editor dialog.
//!
//! Title field on top, the selectable tags as a checkbox list below, the
//! validation message (if any) and key hints at the bottom.

use super::constants::{EDITOR_HEIGHT, EDITOR_WIDTH};
use super::helpers::{cursor_line, fixed_centered_rect};
use crate::model::SELECTABLE_TAGS;
use crate::state::{EditorFocus, EditorMode, EditorState};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centered create/edit dialog.
pub fn render_editor(frame: &mut Frame, editor: &EditorState, palette: &Palette) {
    let area = fixed_centered_rect(EDITOR_WIDTH, EDITOR_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let title = match editor.mode() {
        EditorMode::Create => " New post ".to_string(),
        EditorMode::Edit(id) => format!(" Edit post {id} "),
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(palette.focused_border);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // title field
            Constraint::Length(SELECTABLE_TAGS.len() as u16 + 2), // tag list
            Constraint::Length(1),                              // error
            Constraint::Min(0),                                 // hints
        ])
        .split(inner);

    let focus_style = |focus: EditorFocus| {
        if editor.focus() == focus {
            palette.focused_border
        } else {
            palette.border
        }
    };

    // Title field with a block cursor while focused
    let title_line = if editor.focus() == EditorFocus::Title {
        cursor_line(
            editor.title(),
            chunks[0].width.saturating_sub(2),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        Line::from(editor.title().text().to_string())
    };
    frame.render_widget(
        Paragraph::new(title_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Title ")
                .border_style(focus_style(EditorFocus::Title)),
        ),
        chunks[0],
    );

    // Tag checkboxes
    let tag_lines: Vec<Line> = SELECTABLE_TAGS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mark = if editor.tags().contains(label) { "[x]" } else { "[ ]" };
            let text = format!(" {mark} {label}");
            if editor.focus() == EditorFocus::Tags && i == editor.tag_cursor() {
                Line::from(Span::styled(text, palette.selected_row))
            } else {
                Line::from(text)
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(tag_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tags ")
                .border_style(focus_style(EditorFocus::Tags)),
        ),
        chunks[1],
    );

    if let Some(error) = editor.error() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(error.to_string(), palette.error))),
            chunks[2],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Tab", palette.key),
            Span::styled(" field  ", palette.muted),
            Span::styled("Space", palette.key),
            Span::styled(" toggle tag  ", palette.muted),
            Span::styled("Enter", palette.key),
            Span::styled(" save  ", palette.muted),
            Span::styled("Esc", palette.key),
            Span::styled(" cancel", palette.muted),
        ])),
        chunks[3],
    );
}
