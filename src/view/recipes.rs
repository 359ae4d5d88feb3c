//! Recipe catalogue screen: name list on the left, selected recipe on the
//! right.

use super::constants::RECIPE_LIST_PERCENT;
use crate::state::{RecipeBookState, RecipeStatus};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the recipe screen. A status message replaces the list until a
/// catalogue has arrived; afterwards a refresh or failure only shows in the
/// list title.
pub fn render_recipes(frame: &mut Frame, area: Rect, book: &RecipeBookState, palette: &Palette) {
    let block = |title: String| {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(palette.border)
    };

    if book.recipes().is_empty() {
        let message = match book.status() {
            RecipeStatus::NotLoaded | RecipeStatus::Loading => {
                Line::from(Span::styled("Loading recipes...", palette.loading))
            }
            RecipeStatus::Failed(error) => Line::from(Span::styled(
                format!("Couldn't load recipes: {error} (r to retry)"),
                palette.error,
            )),
            RecipeStatus::Loaded => Line::from(Span::styled("No recipes", palette.muted)),
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block(" Recipes ".to_string()));
        frame.render_widget(paragraph, area);
        return;
    }

    let list_title = match book.status() {
        RecipeStatus::Loading => " Recipes (refreshing...) ".to_string(),
        RecipeStatus::Failed(error) => format!(" Recipes (refresh failed: {error}) "),
        RecipeStatus::NotLoaded | RecipeStatus::Loaded => " Recipes ".to_string(),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(RECIPE_LIST_PERCENT),
            Constraint::Percentage(100 - RECIPE_LIST_PERCENT),
        ])
        .split(area);

    let items: Vec<ListItem> = book
        .recipes()
        .iter()
        .map(|r| ListItem::new(r.name.as_str()))
        .collect();
    let list = List::new(items)
        .block(block(list_title))
        .highlight_style(palette.selected_row)
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(book.cursor()));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let Some(recipe) = book.selected() else {
        return;
    };
    let mut lines = vec![Line::from(Span::styled(recipe.name.clone(), palette.header))];
    if !recipe.tags.is_empty() {
        lines.push(Line::from(Span::styled(recipe.tags.join(", "), palette.tag)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(recipe.instructions_text()));
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block(" Details ".to_string()));
    frame.render_widget(detail, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoryRecipes, RecipeApi};
    use crate::state::Outcome;
    use crate::view::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(book: &RecipeBookState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        let palette = Palette::default();
        terminal
            .draw(|frame| render_recipes(frame, frame.area(), book, &palette))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn loading_message_before_first_load() {
        let mut book = RecipeBookState::new();
        book.open();
        assert!(render(&book).contains("Loading recipes..."));
    }

    #[test]
    fn loaded_book_lists_names_and_details() {
        let recipes = MemoryRecipes::seeded().recipes().unwrap();
        let first = recipes[0].name.clone();
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(Outcome::Recipes(recipes));

        let text = render(&book);
        assert!(text.contains("Details"), "{text}");
        assert!(text.matches(first.as_str()).count() >= 2, "list and detail: {text}");
    }

    #[test]
    fn failed_refresh_keeps_list_and_flags_title() {
        let recipes = MemoryRecipes::seeded().recipes().unwrap();
        let first = recipes[0].name.clone();
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(Outcome::Recipes(recipes));
        book.refresh();
        assert!(render(&book).contains("refreshing..."));

        book.apply(Outcome::Failed {
            operation: "load recipes",
            error: crate::model::ClientError::Status {
                url: "https://dummyjson.com/recipes".to_string(),
                status: 500,
            },
        });
        let text = render(&book);
        assert!(text.contains("refresh failed"), "{text}");
        assert!(text.contains(first.as_str()), "{text}");
        assert!(!text.contains("Couldn't load recipes"), "{text}");
    }
}
