//! Search bar state machine.
//!
//! SearchState is a sum type for the search bar:
//! - Inactive: bar hidden (a filter may still be active on the dashboard)
//! - Typing: user is editing a query
//!
//! The filter itself lives in the dashboard's browse mode; submitting the bar
//! hands the raw text over and closes it.

use crate::state::text_input::TextInput;

// ===== SearchState =====

/// Search bar state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Bar hidden.
    #[default]
    Inactive,
    /// User is typing a query.
    Typing(TextInput),
}

impl SearchState {
    /// Whether the bar is open.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing(_))
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The trimmed query.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rejects_empty() {
        assert!(SearchQuery::new("").is_none());
    }

    #[test]
    fn query_rejects_whitespace_only() {
        assert!(SearchQuery::new("  \t ").is_none());
    }

    #[test]
    fn query_trims_surrounding_whitespace() {
        assert_eq!(SearchQuery::new(" history ").unwrap().as_str(), "history");
    }

    #[test]
    fn default_state_is_inactive() {
        assert!(!SearchState::default().is_typing());
    }
}
