//! Top-level error for the binary.
//!
//! Every layer keeps its own error enum; `AppError` only exists so `main`
//! can compose them with `?`. Client and validation errors never reach it:
//! the view-model turns those into notices.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::{AuthError, ClientError};
use crate::view::TuiError;
use thiserror::Error;

/// Fatal startup or runtime failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// No usable user; the dashboard never opens.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Building an HTTP client failed (bad base URL, TLS setup).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Terminal setup or event loop failure.
    #[error(transparent)]
    Tui(#[from] TuiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_keeps_sign_in_hint() {
        let err: AppError = AuthError::NoSession.into();
        assert!(matches!(err, AppError::Auth(_)));
        assert!(err.to_string().contains("--user"));
    }

    #[test]
    fn config_error_converts() {
        let err: AppError = ConfigError::InvalidValue {
            key: "page_size",
            reason: "must be positive".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid value for 'page_size': must be positive");
    }
}
