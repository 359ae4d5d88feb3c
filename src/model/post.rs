//! Post domain types.
//!
//! A post is one record of the remote collection (the dashboard calls them
//! tasks as well). Identity is server-assigned; everything else is data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ===== PostId =====

/// Server-assigned post identifier.
///
/// Immutable once assigned. Two posts in a working set never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wrap a raw server id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Tags =====

/// Labels the editor lets a user attach to a post.
///
/// Server data may carry other labels; those are displayed but can't be
/// chosen here.
pub const SELECTABLE_TAGS: [&str; 5] = ["history", "american", "crime", "science", "technology"];

/// A single tag label. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Smart constructor: trims and rejects empty labels.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The trimmed label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label is one of [`SELECTABLE_TAGS`].
    pub fn is_selectable(&self) -> bool {
        SELECTABLE_TAGS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered, duplicate-free set of tags.
///
/// Backed by a `BTreeSet` so iteration (and the wire payload) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `label` is in the set.
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == label)
    }

    /// Add a label if absent, remove it if present.
    pub fn toggle(&mut self, label: &str) {
        if let Some(tag) = Tag::new(label) {
            if !self.0.remove(&tag) {
                self.0.insert(tag);
            }
        }
    }

    /// Add a label; blank labels are ignored.
    pub fn insert(&mut self, label: &str) {
        if let Some(tag) = Tag::new(label) {
            self.0.insert(tag);
        }
    }

    /// Tags in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels as owned strings, in stable order.
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|t| t.0.clone()).collect()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(raw: Vec<String>) -> Self {
        Self(raw.into_iter().filter_map(Tag::new).collect())
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.labels()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(Tag::new).collect())
    }
}

// ===== Post =====

/// One record of the managed collection.
///
/// Deserializes straight from the remote JSON: unknown fields (`body`,
/// `reactions`, `userId`, ...) are ignored, a missing `tags` array becomes an
/// empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned id.
    pub id: PostId,
    /// Title shown in the table.
    pub title: String,
    /// Attached labels.
    #[serde(default)]
    pub tags: TagSet,
    /// View counter, when the server reports one.
    #[serde(default, rename = "views", alias = "viewCount")]
    pub view_count: Option<u64>,
}

impl Post {
    /// Untagged post with no view count.
    pub fn new(id: PostId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags: TagSet::new(),
            view_count: None,
        }
    }

    /// Builder-style tag attachment.
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Builder-style view count.
    pub fn with_view_count(mut self, views: u64) -> Self {
        self.view_count = Some(views);
        self
    }
}
