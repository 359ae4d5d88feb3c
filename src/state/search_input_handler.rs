//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.

use crate::state::SearchState;
use crate::state::text_input::TextInput;

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing(mut input) => {
            input.insert(ch);
            SearchState::Typing(input)
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing(mut input) => {
            input.backspace();
            SearchState::Typing(input)
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing(mut input) => {
            input.left();
            SearchState::Typing(input)
        }
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing(mut input) => {
            input.right();
            SearchState::Typing(input)
        }
        other => other,
    }
}

/// Activate search input mode.
/// Transitions from Inactive to Typing, prefilled with the filter currently
/// applied so it can be refined.
///
/// No-op if already in Typing state.
pub fn activate_search_input(state: SearchState, current_query: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing(TextInput::with_text(current_query)),
        other => other,
    }
}

/// Cancel search input.
/// Closes the bar without touching the active filter.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Submit search query.
/// Closes the bar and returns the raw text typed. An empty result means
/// "clear the filter"; the dashboard decides what that implies.
///
/// Returns `None` as the query if the bar was not open.
pub fn submit_search(state: SearchState) -> (SearchState, Option<String>) {
    match state {
        SearchState::Typing(input) => (SearchState::Inactive, Some(input.into_text())),
        SearchState::Inactive => (SearchState::Inactive, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
