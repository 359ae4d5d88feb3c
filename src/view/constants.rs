//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header line (app name and greeting).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Pagination summary on the left, notice or key hints on the right.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Editor dialog width in cells.
pub const EDITOR_WIDTH: u16 = 60;

/// Editor dialog height: title field, tag list, error line, hints.
pub const EDITOR_HEIGHT: u16 = 14;

/// Delete confirmation dialog width in cells.
pub const CONFIRM_WIDTH: u16 = 50;

/// Delete confirmation dialog height in cells.
pub const CONFIRM_HEIGHT: u16 = 7;

/// Width of the recipe list column in the recipe screen, as a percentage.
pub const RECIPE_LIST_PERCENT: u16 = 40;

/// How long the event loop waits for input before draining completions and
/// expiring notices.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
