//! Color palette for the dashboard.
//!
//! Every widget takes its styles from [`Palette`] so `--no-color` and
//! `NO_COLOR` switch the whole UI to plain text in one place.

use crate::state::NoticeKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used across the UI.
///
/// Without colors, emphasis falls back to modifiers (bold, reversed) so the
/// selected row and the focused field stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title bar and detail headings.
    pub header: Style,
    /// Secondary text.
    pub muted: Style,
    /// Unfocused block borders.
    pub border: Style,
    /// Border of the field with input focus.
    pub focused_border: Style,
    /// Column headings.
    pub table_header: Style,
    /// Row under the cursor.
    pub selected_row: Style,
    /// Tag labels.
    pub tag: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Success notices.
    pub success: Style,
    /// Error notices and validation messages.
    pub error: Style,
    /// Loading indicator.
    pub loading: Style,
    /// Destructive actions.
    pub danger: Style,
}

impl Palette {
    /// Colored styles, or modifier-only styles when colors are off.
    pub fn new(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::Gray),
                focused_border: Style::default().fg(Color::Cyan),
                table_header: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                selected_row: Style::default().bg(Color::Blue).fg(Color::White),
                tag: Style::default().fg(Color::Magenta),
                key: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                success: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                loading: Style::default().fg(Color::Yellow),
                danger: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                header: bold,
                muted: Style::default(),
                border: Style::default(),
                focused_border: bold,
                table_header: bold,
                selected_row: Style::default().add_modifier(Modifier::REVERSED),
                tag: Style::default(),
                key: bold,
                success: Style::default(),
                error: bold,
                loading: Style::default(),
                danger: bold,
            }
        }
    }

    /// Style for a notice of `kind`.
    pub fn notice(&self, kind: NoticeKind) -> Style {
        match kind {
            NoticeKind::Success => self.success,
            NoticeKind::Error => self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

// ===== Tests =====
