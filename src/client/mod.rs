//! Remote collection clients.
//!
//! The view-model never talks HTTP itself. It emits requests; the dispatcher
//! runs them against a [`CollectionApi`] (posts) or a [`RecipeApi`] (recipe
//! catalogue). Two implementations of each exist:
//! - HTTP clients over reqwest's blocking API
//! - in-memory stand-ins with the same contract (tests, `--offline`)

use crate::model::{ClientError, Post, PostId, Recipe, TagSet};

pub mod http;
pub mod memory;
pub mod recipes;

pub use http::HttpCollectionClient;
pub use memory::{MemoryCollection, MemoryRecipes};
pub use recipes::HttpRecipeClient;

/// One page of the collection as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Posts on this page, in server order.
    pub items: Vec<Post>,
    /// Size of the whole unfiltered collection.
    pub total: usize,
}

/// Operations the dashboard needs from the remote collection.
///
/// Implementations are shared across dispatcher worker threads.
pub trait CollectionApi: Send + Sync {
    /// Fetch `limit` posts starting at `offset`. `limit` is always > 0.
    fn list(&self, limit: usize, offset: usize) -> Result<ListPage, ClientError>;

    /// Full-text search. The result set is unpaged and carries no total.
    fn search(&self, query: &str) -> Result<Vec<Post>, ClientError>;

    /// Create a post. The returned post has a fresh id and no tags.
    fn create(&self, title: &str) -> Result<Post, ClientError>;

    /// Replace title and tags of an existing post.
    ///
    /// Fails with [`ClientError::NotFound`] for an unknown id.
    fn update(&self, id: PostId, title: &str, tags: &TagSet) -> Result<Post, ClientError>;

    /// Delete a post. Deleting an unknown id succeeds.
    fn delete(&self, id: PostId) -> Result<(), ClientError>;
}

/// Read-only recipe catalogue.
pub trait RecipeApi: Send + Sync {
    /// Fetch the whole catalogue in one request.
    fn recipes(&self) -> Result<Vec<Recipe>, ClientError>;
}
