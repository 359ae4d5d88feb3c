//! Requests emitted by state transitions and their completions.
//!
//! Transitions never perform I/O. They return a [`Request`] describing the
//! remote call; the shell runs it and feeds the [`Completion`] back into the
//! state. Completions are applied in arrival order, whatever order the
//! requests were issued in.

use crate::client::ListPage;
use crate::model::{ClientError, Post, PostDraft, PostId, Recipe, TagSet};
use std::fmt;

/// Monotonic id tying a completion to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A remote call to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Fetch one page of posts.
    List {
        /// Rows per page.
        limit: usize,
        /// Index of the first row.
        offset: usize,
    },
    /// Full-text search.
    Search {
        /// Trimmed, non-empty query.
        query: String,
    },
    /// Create a post.
    Create {
        /// Validated form contents.
        draft: PostDraft,
    },
    /// Replace title and tags of a post.
    Update {
        /// Post to update.
        id: PostId,
        /// Validated form contents.
        draft: PostDraft,
    },
    /// Delete a post.
    Delete {
        /// Post to delete.
        id: PostId,
    },
    /// Fetch the recipe catalogue.
    LoadRecipes,
}

impl Operation {
    /// Short label for logs and error notices.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::List { .. } => "load posts",
            Operation::Search { .. } => "search posts",
            Operation::Create { .. } => "create post",
            Operation::Update { .. } => "update post",
            Operation::Delete { .. } => "delete post",
            Operation::LoadRecipes => "load recipes",
        }
    }
}

/// An operation tagged with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Id echoed by the completion.
    pub id: RequestId,
    /// Call to perform.
    pub operation: Operation,
}

/// Result of a remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A page of posts.
    Listed(ListPage),
    /// Search results.
    Searched(Vec<Post>),
    /// Server post plus the tags supplied with the create request.
    Created {
        /// Post as the server returned it.
        post: Post,
        /// Tags chosen in the editor.
        tags: TagSet,
    },
    /// The post after a successful update.
    Updated(Post),
    /// Id of the deleted post.
    Deleted(PostId),
    /// The recipe catalogue.
    Recipes(Vec<Recipe>),
    /// Any operation that failed.
    Failed {
        /// [`Operation::label`] of the failed operation.
        operation: &'static str,
        /// What went wrong.
        error: ClientError,
    },
}

/// A finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Id of the originating request.
    pub id: RequestId,
    /// What happened.
    pub outcome: Outcome,
}

/// Hands out increasing request ids.
#[derive(Debug, Clone, Default)]
pub struct RequestIds {
    next: u64,
}

impl RequestIds {
    /// Tag `operation` with the next id.
    pub fn issue(&mut self, operation: Operation) -> Request {
        self.next += 1;
        Request {
            id: RequestId(self.next),
            operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase() {
        let mut ids = RequestIds::default();
        let a = ids.issue(Operation::LoadRecipes);
        let b = ids.issue(Operation::LoadRecipes);
        assert!(b.id > a.id);
        assert_eq!(a.id.to_string(), "#1");
    }

    #[test]
    fn labels_name_the_action() {
        assert_eq!(Operation::Delete { id: PostId::new(1) }.label(), "delete post");
        assert_eq!(
            Operation::List {
                limit: 10,
                offset: 0
            }
            .label(),
            "load posts"
        );
    }
}
