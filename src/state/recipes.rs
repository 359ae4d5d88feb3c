//! Recipe catalogue screen state.
//!
//! The catalogue is fetched once, the first time the screen opens.
//! After that it is only re-fetched on an explicit refresh or after a failure.
//! The last catalogue that arrived stays on screen while a refresh runs and
//! after a refresh fails.

use crate::model::Recipe;
use crate::state::request::{Operation, Outcome};
use tracing::warn;

/// Where the catalogue fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecipeStatus {
    /// The screen has never been opened.
    #[default]
    NotLoaded,
    /// A fetch is running.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// Display message of the failure.
    Failed(String),
}

/// State of the recipe screen: fetch status, the last catalogue received,
/// and the list cursor.
#[derive(Debug, Clone, Default)]
pub struct RecipeBookState {
    status: RecipeStatus,
    /// Survives refreshes and failed refreshes.
    recipes: Vec<Recipe>,
    cursor: usize,
}

impl RecipeBookState {
    /// Empty book; nothing is fetched until [`RecipeBookState::open`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fetch status.
    pub fn status(&self) -> &RecipeStatus {
        &self.status
    }

    /// Index of the highlighted recipe.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, RecipeStatus::Loading)
    }

    /// Last catalogue received, empty before the first success.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe under the cursor, shown in the detail pane.
    pub fn selected(&self) -> Option<&Recipe> {
        self.recipes.get(self.cursor)
    }

    /// Screen entry. Fetches unless already loaded or loading.
    pub fn open(&mut self) -> Option<Operation> {
        match self.status {
            RecipeStatus::NotLoaded | RecipeStatus::Failed(_) => Some(self.load()),
            RecipeStatus::Loading | RecipeStatus::Loaded => None,
        }
    }

    /// Explicit refresh. `None` while a load is already running.
    pub fn refresh(&mut self) -> Option<Operation> {
        if self.is_loading() {
            return None;
        }
        Some(self.load())
    }

    /// Move the cursor down, stopping at the last recipe.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.recipes.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, stopping at the first recipe.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Fold a finished catalogue fetch in. A failure keeps the previous
    /// catalogue.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Recipes(recipes) => {
                self.cursor = self.cursor.min(recipes.len().saturating_sub(1));
                self.recipes = recipes;
                self.status = RecipeStatus::Loaded;
            }
            Outcome::Failed { error, .. } => {
                warn!(%error, kept = self.recipes.len(), "recipe fetch failed");
                self.status = RecipeStatus::Failed(error.to_string());
            }
            other => warn!(?other, "unexpected outcome for recipe catalogue"),
        }
    }

    fn load(&mut self) -> Operation {
        self.status = RecipeStatus::Loading;
        Operation::LoadRecipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryRecipes;
    use crate::client::RecipeApi;
    use crate::model::ClientError;

    fn failed() -> Outcome {
        Outcome::Failed {
            operation: "load recipes",
            error: ClientError::Transport {
                url: "https://example.test/recipes".to_string(),
                message: "connection refused".to_string(),
            },
        }
    }

    #[test]
    fn open_loads_once() {
        let mut book = RecipeBookState::new();
        assert_eq!(book.open(), Some(Operation::LoadRecipes));
        assert!(book.is_loading());
        assert_eq!(book.open(), None);

        book.apply(Outcome::Recipes(MemoryRecipes::seeded().recipes().unwrap()));
        assert_eq!(book.open(), None);
        assert_eq!(book.recipes().len(), 3);
    }

    #[test]
    fn failure_is_reported_and_retried_on_open() {
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(failed());
        match book.status() {
            RecipeStatus::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(book.open(), Some(Operation::LoadRecipes));
    }

    #[test]
    fn cursor_is_bounded_by_loaded_list() {
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(Outcome::Recipes(MemoryRecipes::seeded().recipes().unwrap()));
        for _ in 0..10 {
            book.cursor_down();
        }
        assert_eq!(book.cursor(), 2);
        assert_eq!(book.selected().map(|r| r.id), book.recipes().last().map(|r| r.id));
    }

    #[test]
    fn refresh_while_loading_is_none() {
        let mut book = RecipeBookState::new();
        book.open();
        assert_eq!(book.refresh(), None);
    }

    #[test]
    fn refresh_keeps_catalogue_while_loading_and_after_failure() {
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(Outcome::Recipes(MemoryRecipes::seeded().recipes().unwrap()));
        book.cursor_down();

        assert_eq!(book.refresh(), Some(Operation::LoadRecipes));
        assert!(book.is_loading());
        assert_eq!(book.recipes().len(), 3);

        book.apply(failed());
        assert!(matches!(book.status(), RecipeStatus::Failed(_)));
        assert_eq!(book.recipes().len(), 3);
        assert_eq!(book.cursor(), 1);
        assert!(book.selected().is_some());
    }

    #[test]
    fn successful_refresh_replaces_catalogue_and_clamps_cursor() {
        let mut book = RecipeBookState::new();
        book.open();
        book.apply(Outcome::Recipes(MemoryRecipes::seeded().recipes().unwrap()));
        book.cursor_down();
        book.cursor_down();

        book.refresh();
        let first = MemoryRecipes::seeded().recipes().unwrap().remove(0);
        book.apply(Outcome::Recipes(vec![first]));
        assert_eq!(book.status(), &RecipeStatus::Loaded);
        assert_eq!(book.recipes().len(), 1);
        assert_eq!(book.cursor(), 0);
    }
}
