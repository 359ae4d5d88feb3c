//! Tests for search input handler.
//!
//! Tests verify runtime behavior of search input state transitions.

use super::*;

fn typing(text: &str) -> SearchState {
    SearchState::Typing(TextInput::with_text(text))
}

fn text_of(state: &SearchState) -> &str {
    match state {
        SearchState::Typing(input) => input.text(),
        SearchState::Inactive => panic!("Expected Typing state, got Inactive"),
    }
}

// ===== activate_search_input tests =====

#[test]
fn activate_from_inactive_creates_empty_typing_state() {
    let result = activate_search_input(SearchState::Inactive, "");

    match result {
        SearchState::Typing(input) => {
            assert_eq!(input.text(), "", "Query should start empty");
            assert_eq!(input.cursor(), 0, "Cursor should start at 0");
        }
        other => panic!("Expected Typing state, got {:?}", other),
    }
}

#[test]
fn activate_prefills_current_filter() {
    let result = activate_search_input(SearchState::Inactive, "history");

    match result {
        SearchState::Typing(input) => {
            assert_eq!(input.text(), "history");
            assert_eq!(input.cursor(), 7, "Cursor should sit at the end");
        }
        other => panic!("Expected Typing state, got {:?}", other),
    }
}

#[test]
fn activate_from_typing_is_noop() {
    let result = activate_search_input(typing("existing"), "other");
    assert_eq!(text_of(&result), "existing", "Query should be unchanged");
}

// ===== typing tests =====

#[test]
fn char_input_appends() {
    let state = handle_char_input(typing("his"), 't');
    assert_eq!(text_of(&state), "hist");
}

#[test]
fn char_input_when_inactive_is_noop() {
    let state = handle_char_input(SearchState::Inactive, 'x');
    assert_eq!(state, SearchState::Inactive);
}

#[test]
fn backspace_removes_last_char() {
    let state = handle_backspace(typing("abc"));
    assert_eq!(text_of(&state), "ab");
}

#[test]
fn cursor_moves_then_inserts_mid_query() {
    let state = handle_cursor_left(typing("ac"));
    let state = handle_char_input(state, 'b');
    assert_eq!(text_of(&state), "abc");
    let state = handle_cursor_right(state);
    let state = handle_char_input(state, 'd');
    assert_eq!(text_of(&state), "abcd");
}

// ===== cancel_search tests =====

#[test]
fn cancel_from_typing_returns_inactive() {
    let result = cancel_search(typing("partial"));
    assert!(
        matches!(result, SearchState::Inactive),
        "Should transition to Inactive"
    );
}

// ===== submit_search tests =====

#[test]
fn submit_returns_raw_text_and_closes_bar() {
    let (state, query) = submit_search(typing("history"));
    assert_eq!(state, SearchState::Inactive);
    assert_eq!(query.as_deref(), Some("history"));
}

#[test]
fn submit_empty_returns_empty_text() {
    let (state, query) = submit_search(typing(""));
    assert_eq!(state, SearchState::Inactive);
    assert_eq!(query.as_deref(), Some(""), "Empty submit means clear filter");
}

#[test]
fn submit_when_inactive_returns_none() {
    let (state, query) = submit_search(SearchState::Inactive);
    assert_eq!(state, SearchState::Inactive);
    assert!(query.is_none());
}
