//! In-memory collection with the remote contract.
//!
//! Backs `--offline` mode and the test suite. Unlike the remote demo API it
//! actually persists writes for the lifetime of the process.

use super::{CollectionApi, ListPage, RecipeApi};
use crate::model::{ClientError, Post, PostId, Recipe, TagSet};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<Post>,
    next_id: u64,
    /// Errors handed out by the next calls, oldest first.
    injected: VecDeque<ClientError>,
    calls: Vec<String>,
}

/// Thread-safe in-process [`CollectionApi`].
#[derive(Debug, Default)]
pub struct MemoryCollection {
    inner: Mutex<Inner>,
}

impl MemoryCollection {
    /// Empty collection; the first created post gets id 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Collection holding `posts` in order. New ids continue after the
    /// highest existing one.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                posts,
                next_id,
                ..Inner::default()
            }),
        }
    }

    /// A small demo collection for offline mode.
    pub fn seeded() -> Self {
        let titles: [(&str, &[&str], u64); 12] = [
            ("His mother had always taught him", &["history", "american", "crime"], 305),
            ("He was an expert but not in a discipline", &["science", "technology"], 4884),
            ("Dave watched as the forest burned up on the hill.", &["history"], 4152),
            ("All he wanted was a candy bar.", &["american", "crime"], 4548),
            ("Hopes and dreams were dashed that day.", &["crime"], 626),
            ("Dave wasn't exactly sure how he had ended up", &["technology"], 1114),
            ("This is important to remember.", &["science"], 1499),
            ("One can cook on and with an open fire.", &["history", "science"], 1798),
            ("There are different types of secrets.", &["crime", "american"], 870),
            ("They rushed out the door.", &["american"], 3107),
            ("It wasn't quite yet time to panic.", &["technology", "history"], 2009),
            ("She was aware that things could go wrong.", &["science"], 1425),
        ];
        let posts = titles
            .iter()
            .enumerate()
            .map(|(i, (title, tags, views))| {
                Post::new(PostId::new(i as u64 + 1), *title)
                    .with_tags(tags.iter().copied().collect())
                    .with_view_count(*views)
            })
            .collect();
        Self::with_posts(posts)
    }

    /// Make the next call fail with `error`. Stacks in FIFO order.
    pub fn fail_next(&self, error: ClientError) {
        self.lock().injected.push_back(error);
    }

    /// Snapshot of the stored posts.
    pub fn posts(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    /// Calls received so far, e.g. `"list 10 0"`, `"delete 5"`.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and pop an injected failure, if any.
    fn begin(&self, call: String) -> Result<MutexGuard<'_, Inner>, ClientError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        match inner.injected.pop_front() {
            Some(err) => Err(err),
            None => Ok(inner),
        }
    }
}

impl CollectionApi for MemoryCollection {
    fn list(&self, limit: usize, offset: usize) -> Result<ListPage, ClientError> {
        let inner = self.begin(format!("list {limit} {offset}"))?;
        Ok(ListPage {
            items: inner.posts.iter().skip(offset).take(limit).cloned().collect(),
            total: inner.posts.len(),
        })
    }

    fn search(&self, query: &str) -> Result<Vec<Post>, ClientError> {
        let inner = self.begin(format!("search {query}"))?;
        let needle = query.to_lowercase();
        Ok(inner
            .posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.as_str().to_lowercase() == needle)
            })
            .cloned()
            .collect())
    }

    fn create(&self, title: &str) -> Result<Post, ClientError> {
        let mut inner = self.begin(format!("create {title}"))?;
        let post = Post::new(PostId::new(inner.next_id), title);
        inner.next_id += 1;
        inner.posts.push(post.clone());
        // the remote API does not echo tags, neither do we
        Ok(post)
    }

    fn update(&self, id: PostId, title: &str, tags: &TagSet) -> Result<Post, ClientError> {
        let mut inner = self.begin(format!("update {id}"))?;
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ClientError::NotFound { id })?;
        post.title = title.to_string();
        post.tags = tags.clone();
        Ok(post.clone())
    }

    fn delete(&self, id: PostId) -> Result<(), ClientError> {
        let mut inner = self.begin(format!("delete {id}"))?;
        inner.posts.retain(|p| p.id != id);
        Ok(())
    }
}

/// Fixed recipe catalogue for offline mode and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecipes {
    recipes: Vec<Recipe>,
}

impl MemoryRecipes {
    /// Catalogue serving exactly `recipes`.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Three-recipe catalogue used by `--offline`.
    pub fn seeded() -> Self {
        let recipe = |id: u64, name: &str, steps: &[&str], tags: &[&str]| Recipe {
            id,
            name: name.to_string(),
            instructions: steps.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            image: None,
        };
        Self::new(vec![
            recipe(
                1,
                "Classic Margherita Pizza",
                &[
                    "Preheat the oven to 475°F (245°C).",
                    "Roll out the pizza dough and spread tomato sauce evenly.",
                    "Top with slices of fresh mozzarella and fresh basil leaves.",
                    "Bake for 12-15 minutes or until the crust is golden brown.",
                ],
                &["Pizza", "Italian"],
            ),
            recipe(
                2,
                "Vegetarian Stir-Fry",
                &[
                    "Heat sesame oil in a wok over medium-high heat.",
                    "Stir-fry the vegetables until tender-crisp.",
                    "Add tofu and soy sauce; cook until heated through.",
                ],
                &["Vegetarian", "Stir-fry", "Asian"],
            ),
            recipe(
                3,
                "Chocolate Chip Cookies",
                &[
                    "Cream together butter and sugar.",
                    "Beat in eggs and vanilla, then mix in the dry ingredients.",
                    "Fold in chocolate chips and bake at 375°F for 10 minutes.",
                ],
                &["Cookies", "Dessert", "Baking"],
            ),
        ])
    }
}

impl RecipeApi for MemoryRecipes {
    fn recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        Ok(self.recipes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_posts() -> MemoryCollection {
        MemoryCollection::with_posts(vec![
            Post::new(PostId::new(1), "alpha"),
            Post::new(PostId::new(2), "beta history"),
            Post::new(PostId::new(3), "gamma"),
        ])
    }

    #[test]
    fn list_pages_with_offset_and_limit() {
        let api = three_posts();
        let page = api.list(2, 1).unwrap();
        assert_eq!(page.total, 3);
        let ids: Vec<u64> = page.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn list_past_the_end_is_empty() {
        let page = three_posts().list(10, 30).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let found = three_posts().search("HISTORY").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, PostId::new(2));
    }

    #[test]
    fn create_assigns_next_id_without_tags() {
        let api = three_posts();
        let post = api.create("delta").unwrap();
        assert_eq!(post.id, PostId::new(4));
        assert!(post.tags.is_empty());
        assert_eq!(api.posts().len(), 4);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let err = three_posts()
            .update(PostId::new(99), "x", &TagSet::new())
            .unwrap_err();
        assert_eq!(err, ClientError::NotFound { id: PostId::new(99) });
    }

    #[test]
    fn update_replaces_title_and_tags() {
        let api = three_posts();
        let tags: TagSet = ["crime"].into_iter().collect();
        let post = api.update(PostId::new(1), "alpha 2", &tags).unwrap();
        assert_eq!(post.title, "alpha 2");
        assert!(post.tags.contains("crime"));
    }

    #[test]
    fn delete_is_idempotent() {
        let api = three_posts();
        api.delete(PostId::new(2)).unwrap();
        api.delete(PostId::new(2)).unwrap();
        assert_eq!(api.posts().len(), 2);
    }

    #[test]
    fn injected_failure_is_returned_once() {
        let api = three_posts();
        api.fail_next(ClientError::Status {
            url: "memory".to_string(),
            status: 500,
        });
        assert!(api.list(10, 0).is_err());
        assert!(api.list(10, 0).is_ok());
        assert_eq!(api.calls(), vec!["list 10 0", "list 10 0"]);
    }

    #[test]
    fn seeded_catalogues_are_not_empty() {
        assert!(MemoryCollection::seeded().posts().len() > 10);
        assert_eq!(MemoryRecipes::seeded().recipes().unwrap().len(), 3);
    }
}
