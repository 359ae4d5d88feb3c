//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry inside the search bar and the editor dialog bypasses this
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor down. Default: j/↓
    RowDown,
    /// Move the row cursor up. Default: k/↑
    RowUp,

    // Pagination
    /// Next page of the collection. Default: ]/Page Down/→
    NextPage,
    /// Previous page of the collection. Default: [/Page Up/←
    PrevPage,
    /// Cycle rows per page through 5, 10, 25. Default: p
    CyclePageSize,

    // Search
    /// Open the search bar. Default: //Ctrl+f
    StartSearch,
    /// Drop the active search filter and return to paging. Default: Esc
    ClearSearch,

    // Records
    /// Open the editor for a new post. Default: n
    NewPost,
    /// Open the editor for the post under the cursor. Default: e/Enter
    EditPost,
    /// Ask to delete the post under the cursor. Default: d/Delete
    DeletePost,
    /// Re-issue the current list or search. Default: r
    Refresh,

    // Application
    /// Switch between the dashboard and the recipe catalogue. Default: Tab
    SwitchScreen,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::NextPage,
            KeyAction::PrevPage,
            KeyAction::NextPage,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }
}
