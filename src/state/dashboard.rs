//! Paginated collection view-model.
//!
//! DashboardState holds the working set shown in the posts table and the
//! rules for changing it. It is pure: transitions that need the server return
//! an [`Operation`] for the shell to run, and [`DashboardState::apply`] folds
//! the result back in.
//!
//! # State Machine
//!
//! Two orthogonal dimensions:
//!
//! - **Loading**: `is_loading()` while any issued operation has not completed
//! - **Browse mode**: `Browsing` (server-side paging, `total_count` is the
//!   server total) or `Searching` (unpaged result set, `total_count` is its
//!   length)
//!
//! # Transitions
//!
//! - page index/size change while Browsing → `List`; page size change always
//!   resets the page index
//! - non-empty query → Searching + `Search`; empty query → Browsing + `List`
//!   for the page that was current before the search
//! - create/update/delete mutate the working set only after success
//! - failures leave `items`/`total_count` untouched and raise an error notice
//!
//! Completions are applied in arrival order. Two overlapping list requests
//! are not reconciled: whichever completes last defines the working set.

use crate::model::{Post, PostDraft, PostId};
use crate::state::notice::Notice;
use crate::state::request::{Operation, Outcome};
use crate::state::search::SearchQuery;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Rows-per-page choices offered by the page size toggle.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Rows per page on startup.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ===== BrowseMode =====

/// Whether the table shows a server page or a search result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseMode {
    /// Paged listing via `list(limit, offset)`.
    Browsing,
    /// Unpaged search results for `query`.
    Searching {
        /// Active filter.
        query: SearchQuery,
    },
}

// ===== DashboardState =====

/// View-model for the posts table.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Current page, or the whole search result set. Ids are unique.
    items: Vec<Post>,
    page_index: usize,
    page_size: usize,
    /// Server total while Browsing, result length while Searching. Goes
    /// stale by one after a create or delete until the next list.
    total_count: usize,
    mode: BrowseMode,
    selected_for_edit: Option<Post>,
    selected_for_delete: Option<Post>,
    /// Operations issued and not yet completed.
    in_flight: usize,
    /// Row under the table cursor.
    cursor: usize,
    notice: Option<Notice>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DashboardState {
    /// Empty view-model. A zero page size falls back to the default.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            total_count: 0,
            mode: BrowseMode::Browsing,
            selected_for_edit: None,
            selected_for_delete: None,
            in_flight: 0,
            cursor: 0,
            notice: None,
        }
    }

    // ===== Accessors =====

    /// Posts in the table, in display order.
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Server total while browsing, result count while searching.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Server offset for the current page.
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    /// Number of pages the server total spans (at least 1).
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size).max(1)
    }

    /// Browsing or searching.
    pub fn mode(&self) -> &BrowseMode {
        &self.mode
    }

    /// Active filter text, empty while Browsing.
    pub fn query(&self) -> &str {
        match &self.mode {
            BrowseMode::Browsing => "",
            BrowseMode::Searching { query } => query.as_str(),
        }
    }

    /// Whether a filter is active.
    pub fn is_searching(&self) -> bool {
        matches!(self.mode, BrowseMode::Searching { .. })
    }

    /// Whether any issued operation is still running.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Post the editor dialog is editing.
    pub fn selected_for_edit(&self) -> Option<&Post> {
        self.selected_for_edit.as_ref()
    }

    /// Post waiting for delete confirmation.
    pub fn selected_for_delete(&self) -> Option<&Post> {
        self.selected_for_delete.as_ref()
    }

    /// Row under the table cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Post under the table cursor.
    pub fn current_post(&self) -> Option<&Post> {
        self.items.get(self.cursor)
    }

    /// Last success or error message.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ===== Lifecycle =====

    /// Screen entry: fetch the first page.
    pub fn enter(&mut self) -> Operation {
        self.fetch_current()
    }

    /// Re-issue whatever produced the current working set.
    pub fn refresh(&mut self) -> Operation {
        self.fetch_current()
    }

    // ===== Pagination =====

    /// Jump to `index`.
    ///
    /// Returns `None` (and changes nothing) while Searching, when the index
    /// is unchanged, or when it lies past the last page.
    pub fn set_page(&mut self, index: usize) -> Option<Operation> {
        if self.is_searching() {
            debug!(index, "page change ignored while searching");
            return None;
        }
        if index == self.page_index || index >= self.page_count() {
            return None;
        }
        self.page_index = index;
        Some(self.list_current_page())
    }

    /// Go one page forward. `None` on the last page or while searching.
    pub fn next_page(&mut self) -> Option<Operation> {
        self.set_page(self.page_index + 1)
    }

    /// Go one page back. `None` on the first page.
    pub fn prev_page(&mut self) -> Option<Operation> {
        let index = self.page_index.checked_sub(1)?;
        self.set_page(index)
    }

    /// Change rows per page. Resets the page index to 0.
    ///
    /// Returns `None` for a zero or unchanged size. While Searching the new
    /// size is remembered for when paging resumes but nothing is fetched.
    pub fn set_page_size(&mut self, size: usize) -> Option<Operation> {
        if size == 0 || size == self.page_size {
            return None;
        }
        self.page_size = size;
        self.page_index = 0;
        if self.is_searching() {
            return None;
        }
        Some(self.list_current_page())
    }

    /// Step to the next entry of [`PAGE_SIZE_OPTIONS`], wrapping around.
    pub fn cycle_page_size(&mut self) -> Option<Operation> {
        let next = PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .find(|&s| s > self.page_size)
            .unwrap_or(PAGE_SIZE_OPTIONS[0]);
        self.set_page_size(next)
    }

    // ===== Search =====

    /// Apply a filter. Blank text clears it and resumes paging at the page
    /// that was current before the search started.
    pub fn set_search_query(&mut self, raw: &str) -> Operation {
        self.cursor = 0;
        match SearchQuery::new(raw) {
            Some(query) => {
                let operation = Operation::Search {
                    query: query.as_str().to_string(),
                };
                self.mode = BrowseMode::Searching { query };
                self.begin(operation)
            }
            None => {
                self.mode = BrowseMode::Browsing;
                self.list_current_page()
            }
        }
    }

    // ===== Row cursor =====

    /// Move the row cursor down, stopping at the last row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Move the row cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    // ===== Create / edit / delete =====

    /// Create a post from a validated draft.
    pub fn create(&mut self, draft: PostDraft) -> Operation {
        self.begin(Operation::Create { draft })
    }

    /// Mark the post with `id` for editing. Returns it so the editor can
    /// prefill its fields.
    pub fn select_for_edit(&mut self, id: PostId) -> Option<&Post> {
        let post = self.items.iter().find(|p| p.id == id)?.clone();
        self.selected_for_edit = Some(post);
        self.selected_for_edit.as_ref()
    }

    /// Drop the edit selection.
    pub fn cancel_edit(&mut self) {
        self.selected_for_edit = None;
    }

    /// Update the post selected for editing. `None` without a selection.
    pub fn submit_edit(&mut self, draft: PostDraft) -> Option<Operation> {
        let id = self.selected_for_edit.as_ref()?.id;
        Some(self.begin(Operation::Update { id, draft }))
    }

    /// Mark the post with `id` for deletion, pending confirmation.
    pub fn select_for_delete(&mut self, id: PostId) -> Option<&Post> {
        let post = self.items.iter().find(|p| p.id == id)?.clone();
        self.selected_for_delete = Some(post);
        self.selected_for_delete.as_ref()
    }

    /// Drop the delete selection.
    pub fn cancel_delete(&mut self) {
        self.selected_for_delete = None;
    }

    /// Delete the post selected for deletion. `None` without a selection.
    pub fn confirm_delete(&mut self) -> Option<Operation> {
        let id = self.selected_for_delete.as_ref()?.id;
        Some(self.begin(Operation::Delete { id }))
    }

    // ===== Completions =====

    /// Fold a completed operation into the working set. Outcomes of
    /// requests the dashboard never issued leave the loading count alone.
    pub fn apply(&mut self, outcome: Outcome) {
        if let Outcome::Recipes(_) = outcome {
            warn!("recipe outcome routed to dashboard");
            return;
        }
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Outcome::Listed(page) => {
                self.items = unique_by_id(page.items);
                self.total_count = page.total;
            }
            Outcome::Searched(items) => {
                self.items = unique_by_id(items);
                self.total_count = self.items.len();
            }
            Outcome::Created { mut post, tags } => {
                post.tags = tags;
                // the demo API hands out the same id for every create
                self.items.retain(|p| p.id != post.id);
                self.items.insert(0, post);
                self.notice = Some(Notice::success("Created post"));
            }
            Outcome::Updated(post) => {
                if self.selected_for_edit.as_ref().map(|p| p.id) == Some(post.id) {
                    self.selected_for_edit = None;
                }
                match self.items.iter_mut().find(|p| p.id == post.id) {
                    Some(slot) => *slot = post,
                    None => debug!(id = %post.id, "updated post is not in the working set"),
                }
                self.notice = Some(Notice::success("Updated post"));
            }
            Outcome::Deleted(id) => {
                if self.selected_for_delete.as_ref().map(|p| p.id) == Some(id) {
                    self.selected_for_delete = None;
                }
                self.items.retain(|p| p.id != id);
                self.notice = Some(Notice::success("Deleted post"));
            }
            Outcome::Failed { operation, error } => {
                warn!(operation, %error, "request failed");
                self.notice = Some(Notice::error(format!("Couldn't {operation}: {error}")));
            }
            Outcome::Recipes(_) => {}
        }

        self.clamp_cursor();
    }

    /// Drop the notice once it has been up for `ttl`.
    pub fn expire_notice(&mut self, now: std::time::Instant, ttl: std::time::Duration) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now, ttl)) {
            self.notice = None;
        }
    }

    // ===== Internals =====

    fn fetch_current(&mut self) -> Operation {
        let operation = match &self.mode {
            BrowseMode::Browsing => Operation::List {
                limit: self.page_size,
                offset: self.offset(),
            },
            BrowseMode::Searching { query } => Operation::Search {
                query: query.as_str().to_string(),
            },
        };
        self.begin(operation)
    }

    fn list_current_page(&mut self) -> Operation {
        let operation = Operation::List {
            limit: self.page_size,
            offset: self.offset(),
        };
        self.begin(operation)
    }

    fn begin(&mut self, operation: Operation) -> Operation {
        self.in_flight += 1;
        operation
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}

/// Keep the first occurrence of each id.
fn unique_by_id(items: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|p| seen.insert(p.id)).collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
