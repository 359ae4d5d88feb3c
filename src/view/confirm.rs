//! Delete confirmation dialog.

use super::constants::{CONFIRM_HEIGHT, CONFIRM_WIDTH};
use super::helpers::fixed_centered_rect;
use crate::model::Post;
use crate::view::styles::Palette;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered y/n dialog naming the post about to be deleted.
pub fn render_confirm_delete(frame: &mut Frame, post: &Post, palette: &Palette) {
    let area = fixed_centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Delete post {}?", post.id)),
        Line::from(Span::styled(format!("\"{}\"", post.title), palette.muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", palette.key),
            Span::raw(" delete   "),
            Span::styled("n", palette.key),
            Span::raw(" keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(palette.danger),
        );
    frame.render_widget(paragraph, area);
}
