//! Error types for postdeck.
//!
//! This module defines the domain error taxonomy using `thiserror`. Each layer
//! owns its errors; they compose via `?` and `From` at the edges.
//!
//! # Error Hierarchy
//!
//! - [`ClientError`] - Remote collection failures (transport, non-2xx, decode)
//! - [`ValidationError`] - Form payload rejected before it reaches the view-model
//! - [`AuthError`] - No current user; handled before the dashboard opens
//!
//! # Error Recovery Strategy
//!
//! Client errors are **non-fatal**: the view-model catches them at the call
//! site, reports them as an error notice, clears its loading flag and leaves
//! the working set untouched. There is no retry policy; the user repeats the
//! action. Validation errors stay inside the editor dialog. Auth errors are
//! fatal for the dashboard and end the program with a sign-in hint.

use super::post::PostId;
use thiserror::Error;

/// Failures talking to the remote collection.
///
/// Carries strings rather than `reqwest::Error` so completions can be cloned,
/// compared in tests and moved across the dispatcher channel freely.
///
/// # Recovery
///
/// All variants are user-visible and recoverable by retrying the action.
/// None of them is treated as fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    ///
    /// DNS failure, refused connection, TLS failure, timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use postdeck::model::error::ClientError;
    ///
    /// let err = ClientError::Transport {
    ///     url: "https://dummyjson.com/posts".to_string(),
    ///     message: "connection refused".to_string(),
    /// };
    /// assert!(err.to_string().contains("connection refused"));
    /// ```
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Transport error text.
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// An update targeted an id the server does not know.
    ///
    /// Deletes never produce this: deleting a missing id counts as success.
    #[error("Post {id} not found")]
    NotFound {
        /// The id that was not found.
        id: PostId,
    },

    /// The configured collection URL can't be used as a request base.
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL text.
        url: String,
        /// Why it was rejected.
        message: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Unexpected response from {url}: {message}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder error text.
        message: String,
    },
}

/// Form payload rejected by schema validation.
///
/// Raised by [`crate::model::PostDraft::new`]; shown inline in the editor
/// dialog and never forwarded to the view-model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    #[error("'{field}' is required")]
    MissingField {
        /// Field name as shown in the form.
        field: &'static str,
    },
}

/// The auth provider has no usable current user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Nobody is signed in.
    #[error("Not signed in: pass --user, set POSTDECK_USER, or set user_email in the config file")]
    NoSession,

    /// A user identity was supplied but is not an email address.
    #[error("Invalid user email '{raw}'")]
    InvalidEmail {
        /// The rejected value.
        raw: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_includes_url_and_message() {
        let err = ClientError::Transport {
            url: "https://example.test/posts".to_string(),
            message: "timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.test/posts"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn status_display_includes_code() {
        let err = ClientError::Status {
            url: "https://example.test/posts".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn not_found_display_includes_id() {
        let err = ClientError::NotFound {
            id: PostId::new(252),
        };
        assert_eq!(err.to_string(), "Post 252 not found");
    }

    #[test]
    fn validation_display_names_field() {
        let err = ValidationError::MissingField { field: "title" };
        assert_eq!(err.to_string(), "'title' is required");
    }

    #[test]
    fn auth_no_session_mentions_how_to_sign_in() {
        let msg = AuthError::NoSession.to_string();
        assert!(msg.contains("--user"));
        assert!(msg.contains("POSTDECK_USER"));
    }
}
