//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions following Elm architecture:
//! they may return a [`Request`] for the shell to run, and the shell feeds
//! the matching [`Completion`] back through [`AppState::complete`].

use crate::model::KeyAction;
use crate::session::User;
use crate::state::dashboard::DashboardState;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::notice::DEFAULT_NOTICE_TTL;
use crate::state::recipes::RecipeBookState;
use crate::state::request::{Completion, Operation, Request, RequestId, RequestIds};
use crate::state::search::SearchState;
use crate::state::search_input_handler::{
    activate_search_input, cancel_search, handle_backspace, handle_char_input,
    handle_cursor_left, handle_cursor_right, submit_search,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

// ===== Screen / Overlay =====

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Posts table.
    #[default]
    Dashboard,
    /// Recipe catalogue.
    Recipes,
}

/// Modal layered over the dashboard. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Nothing open.
    #[default]
    None,
    /// Create or edit dialog.
    Editor(EditorState),
    /// Delete confirmation for the selected post.
    ConfirmDelete,
    /// Key binding reference.
    Help,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Screen**: Dashboard ⇄ Recipes (via `SwitchScreen`)
/// - **Overlay**: None → Editor | ConfirmDelete | Help → None
/// - **Search bar**: Inactive → Typing → Inactive (submit or cancel)
///
/// Key input reaches at most one of these: an open overlay first, then the
/// search bar, then the screen's own actions.
#[derive(Debug, Clone)]
pub struct AppState {
    user: User,
    screen: Screen,
    dashboard: DashboardState,
    recipes: RecipeBookState,
    search: SearchState,
    overlay: Overlay,
    ids: RequestIds,
    /// Requests whose completion belongs to the recipe catalogue.
    recipe_requests: HashSet<RequestId>,
    notice_ttl: Duration,
    should_quit: bool,
}

impl AppState {
    /// Fresh state on the dashboard. Nothing is fetched until [`AppState::start`].
    pub fn new(user: User, page_size: usize) -> Self {
        Self {
            user,
            screen: Screen::Dashboard,
            dashboard: DashboardState::new(page_size),
            recipes: RecipeBookState::new(),
            search: SearchState::Inactive,
            overlay: Overlay::None,
            ids: RequestIds::default(),
            recipe_requests: HashSet::new(),
            notice_ttl: DEFAULT_NOTICE_TTL,
            should_quit: false,
        }
    }

    /// Override how long notices stay visible.
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    // ===== Accessors =====

    /// Signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Posts view-model.
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Recipe catalogue state.
    pub fn recipes(&self) -> &RecipeBookState {
        &self.recipes
    }

    /// Search bar state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Open modal, if any.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Set once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Any request of the visible screen still in flight.
    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::Dashboard => self.dashboard.is_loading(),
            Screen::Recipes => self.recipes.is_loading(),
        }
    }

    // ===== Lifecycle =====

    /// First request after startup. A non-blank `initial_query` starts in
    /// search mode.
    pub fn start(&mut self, initial_query: Option<&str>) -> Request {
        let operation = match initial_query {
            Some(query) if !query.trim().is_empty() => self.dashboard.set_search_query(query),
            _ => self.dashboard.enter(),
        };
        self.issue(operation)
    }

    /// Route a finished request to the state that issued it.
    pub fn complete(&mut self, completion: Completion) {
        debug!(id = %completion.id, "applying completion");
        if self.recipe_requests.remove(&completion.id) {
            self.recipes.apply(completion.outcome);
        } else {
            self.dashboard.apply(completion.outcome);
        }
    }

    /// Periodic housekeeping.
    pub fn tick(&mut self, now: Instant) {
        self.dashboard.expire_notice(now, self.notice_ttl);
    }

    // ===== Key actions =====

    /// Apply a bound key action. Text entry (search bar, editor, delete
    /// confirmation) is handled by the dedicated methods below instead.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<Request> {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return None;
        }
        if self.overlay == Overlay::Help {
            self.overlay = Overlay::None;
            return None;
        }
        if action == KeyAction::Help {
            self.overlay = Overlay::Help;
            return None;
        }
        match self.screen {
            Screen::Dashboard => self.dashboard_action(action),
            Screen::Recipes => self.recipes_action(action),
        }
    }

    fn dashboard_action(&mut self, action: KeyAction) -> Option<Request> {
        let operation = match action {
            KeyAction::RowDown => {
                self.dashboard.cursor_down();
                None
            }
            KeyAction::RowUp => {
                self.dashboard.cursor_up();
                None
            }
            KeyAction::NextPage => self.dashboard.next_page(),
            KeyAction::PrevPage => self.dashboard.prev_page(),
            KeyAction::CyclePageSize => self.dashboard.cycle_page_size(),
            KeyAction::StartSearch => {
                let search = std::mem::take(&mut self.search);
                self.search = activate_search_input(search, self.dashboard.query());
                None
            }
            KeyAction::ClearSearch if self.dashboard.is_searching() => {
                Some(self.dashboard.set_search_query(""))
            }
            KeyAction::ClearSearch => None,
            KeyAction::NewPost => {
                self.overlay = Overlay::Editor(EditorState::create());
                None
            }
            KeyAction::EditPost => {
                let id = self.dashboard.current_post()?.id;
                let editor = EditorState::edit(self.dashboard.select_for_edit(id)?);
                self.overlay = Overlay::Editor(editor);
                None
            }
            KeyAction::DeletePost => {
                let id = self.dashboard.current_post()?.id;
                self.dashboard.select_for_delete(id)?;
                self.overlay = Overlay::ConfirmDelete;
                None
            }
            KeyAction::Refresh => Some(self.dashboard.refresh()),
            KeyAction::SwitchScreen => {
                self.screen = Screen::Recipes;
                return self.recipes.open().map(|op| self.issue_recipe(op));
            }
            KeyAction::Help | KeyAction::Quit => None,
        };
        operation.map(|op| self.issue(op))
    }

    fn recipes_action(&mut self, action: KeyAction) -> Option<Request> {
        match action {
            KeyAction::RowDown => self.recipes.cursor_down(),
            KeyAction::RowUp => self.recipes.cursor_up(),
            KeyAction::Refresh => {
                return self.recipes.refresh().map(|op| self.issue_recipe(op));
            }
            KeyAction::SwitchScreen | KeyAction::ClearSearch => self.screen = Screen::Dashboard,
            _ => {}
        }
        None
    }

    // ===== Search bar =====

    /// Type into the search bar.
    pub fn search_input(&mut self, ch: char) {
        self.search = handle_char_input(std::mem::take(&mut self.search), ch);
    }

    /// Delete before the search cursor.
    pub fn search_backspace(&mut self) {
        self.search = handle_backspace(std::mem::take(&mut self.search));
    }

    /// Move the search cursor left.
    pub fn search_left(&mut self) {
        self.search = handle_cursor_left(std::mem::take(&mut self.search));
    }

    /// Move the search cursor right.
    pub fn search_right(&mut self) {
        self.search = handle_cursor_right(std::mem::take(&mut self.search));
    }

    /// Close the search bar, keeping the active filter.
    pub fn cancel_search(&mut self) {
        self.search = cancel_search(std::mem::take(&mut self.search));
    }

    /// Close the bar and apply its text as the filter. Submitting the filter
    /// that is already active does nothing.
    pub fn submit_search(&mut self) -> Option<Request> {
        let (search, query) = submit_search(std::mem::take(&mut self.search));
        self.search = search;
        let query = query?;
        if query.trim() == self.dashboard.query() {
            return None;
        }
        let operation = self.dashboard.set_search_query(&query);
        Some(self.issue(operation))
    }

    // ===== Editor dialog =====

    /// The open editor dialog.
    pub fn editor_mut(&mut self) -> Option<&mut EditorState> {
        match &mut self.overlay {
            Overlay::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    /// Validate and send the editor contents. The dialog stays open with an
    /// inline message when validation fails.
    pub fn submit_editor(&mut self) -> Option<Request> {
        let editor = self.editor_mut()?;
        let mode = editor.mode();
        let draft = editor.submit()?;
        self.overlay = Overlay::None;
        let operation = match mode {
            EditorMode::Create => Some(self.dashboard.create(draft)),
            EditorMode::Edit(_) => self.dashboard.submit_edit(draft),
        }?;
        Some(self.issue(operation))
    }

    /// Close the editor without sending anything.
    pub fn cancel_editor(&mut self) {
        let editing = match &self.overlay {
            Overlay::Editor(editor) => matches!(editor.mode(), EditorMode::Edit(_)),
            _ => return,
        };
        if editing {
            self.dashboard.cancel_edit();
        }
        self.overlay = Overlay::None;
    }

    // ===== Delete confirmation =====

    /// Send the delete the confirmation dialog asked about.
    pub fn confirm_delete(&mut self) -> Option<Request> {
        if self.overlay != Overlay::ConfirmDelete {
            return None;
        }
        self.overlay = Overlay::None;
        let operation = self.dashboard.confirm_delete()?;
        Some(self.issue(operation))
    }

    /// Dismiss the confirmation dialog.
    pub fn cancel_delete(&mut self) {
        if self.overlay == Overlay::ConfirmDelete {
            self.dashboard.cancel_delete();
            self.overlay = Overlay::None;
        }
    }

    // ===== Internals =====

    fn issue(&mut self, operation: Operation) -> Request {
        let request = self.ids.issue(operation);
        debug!(id = %request.id, operation = request.operation.label(), "issuing request");
        request
    }

    fn issue_recipe(&mut self, operation: Operation) -> Request {
        let request = self.issue(operation);
        self.recipe_requests.insert(request.id);
        request
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
