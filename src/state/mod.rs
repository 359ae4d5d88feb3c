//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Remote
//! calls leave this module as [`Request`]s and come back as [`Completion`]s.

pub mod app_state;
pub mod dashboard;
pub mod editor;
pub mod notice;
pub mod recipes;
pub mod request;
pub mod search;
pub mod search_input_handler;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, Overlay, Screen};
pub use dashboard::{BrowseMode, DashboardState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use editor::{EditorFocus, EditorMode, EditorState};
pub use notice::{Notice, NoticeKind, DEFAULT_NOTICE_TTL};
pub use recipes::{RecipeBookState, RecipeStatus};
pub use request::{Completion, Operation, Outcome, Request, RequestId, RequestIds};
pub use search::{SearchQuery, SearchState};
pub use text_input::TextInput;
