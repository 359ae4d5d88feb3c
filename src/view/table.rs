//! Posts table.

use crate::model::{Post, TagSet};
use crate::state::DashboardState;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Comma-separated tag labels, sorted.
pub fn tags_label(tags: &TagSet) -> String {
    tags.labels().join(", ")
}

/// View count or a dash when the server sent none.
pub fn views_label(views: Option<u64>) -> String {
    views.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn title(dashboard: &DashboardState) -> Line<'static> {
    let mut spans = vec![Span::raw(if dashboard.is_searching() {
        format!(" Search: \"{}\" ", dashboard.query())
    } else {
        " Posts ".to_string()
    })];
    if dashboard.is_loading() {
        spans.push(Span::raw("[loading...] "));
    }
    Line::from(spans)
}

fn row<'a>(post: &'a Post, palette: &Palette) -> Row<'a> {
    Row::new(vec![
        Cell::from(post.id.to_string()),
        Cell::from(post.title.as_str()),
        Cell::from(tags_label(&post.tags)).style(palette.tag),
        Cell::from(views_label(post.view_count)),
    ])
}

/// Render the working set with the row cursor highlighted.
pub fn render_posts_table(
    frame: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title(dashboard))
        .border_style(palette.border);

    if dashboard.items().is_empty() {
        let message = if dashboard.is_loading() {
            "Loading..."
        } else if dashboard.is_searching() {
            "No posts match the search"
        } else {
            "No posts"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, palette.muted)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["ID", "Title", "Tags", "Views"]).style(palette.table_header);
    let rows: Vec<Row> = dashboard.items().iter().map(|p| row(p, palette)).collect();
    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Percentage(30),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(palette.selected_row)
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(dashboard.cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}
