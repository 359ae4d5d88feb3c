//! Who is using the dashboard.
//!
//! There is no sign-in flow: the identity comes from configuration. The
//! dashboard refuses to start without one.

use crate::model::AuthError;
use std::fmt;

/// The signed-in user, shown in the header greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
}

impl User {
    /// Validate a user email. Requires a non-empty local part and a domain
    /// containing a dot.
    pub fn from_email(raw: &str) -> Result<Self, AuthError> {
        let email = raw.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            });
        if !valid || email.chars().any(char::is_whitespace) {
            return Err(AuthError::InvalidEmail {
                raw: raw.to_string(),
            });
        }
        Ok(Self {
            email: email.to_string(),
        })
    }

    /// Normalized email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// Source of the current user.
pub trait AuthProvider {
    /// The signed-in user, or why there is none.
    fn current_user(&self) -> Result<User, AuthError>;
}

/// Identity taken from CLI, environment or config file.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredUser {
    email: Option<String>,
}

impl ConfiguredUser {
    /// Provider over an optional configured email.
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }
}

impl AuthProvider for ConfiguredUser {
    fn current_user(&self) -> Result<User, AuthError> {
        match self.email.as_deref().map(str::trim) {
            None | Some("") => Err(AuthError::NoSession),
            Some(email) => User::from_email(email),
        }
    }
}
