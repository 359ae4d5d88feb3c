//! Validated form payload for creating or updating a post.

use super::error::ValidationError;
use super::post::{Post, TagSet};

/// A post payload that passed form validation.
///
/// Smart constructor enforces a non-empty title; the view-model only ever
/// accepts drafts, never raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    tags: TagSet,
}

impl PostDraft {
    /// Validate raw form fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if the title is blank.
    pub fn new(title: impl Into<String>, tags: TagSet) -> Result<Self, ValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        Ok(Self {
            title: trimmed.to_string(),
            tags,
        })
    }

    /// Prefill a draft from an existing post (edit flow).
    ///
    /// Posts always carry a title, so this cannot fail on server data; a
    /// blank server title is still rejected.
    pub fn from_post(post: &Post) -> Result<Self, ValidationError> {
        Self::new(post.title.clone(), post.tags.clone())
    }

    /// Trimmed, non-empty title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Selected tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}
