//! Transient status notices (snackbar).

use std::time::{Duration, Instant};

/// How long a notice stays up unless configured otherwise.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(6);

/// Picks the status line color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A request succeeded.
    Success,
    /// A request failed.
    Error,
}

/// One message shown in the status line until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
    shown_at: Instant,
}

impl Notice {
    /// Green notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    /// Red notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Success or error.
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Text shown in the status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the notice has been up for at least `ttl` at `now`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}
