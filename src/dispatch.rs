//! Request execution (impure shell).
//!
//! The event loop never blocks on the network. Each [`Request`] runs on its
//! own short-lived worker thread, and the [`Completion`] comes back over an
//! mpsc channel that the loop drains once per tick. Completions therefore
//! arrive in finish order, not issue order.

use crate::client::{CollectionApi, RecipeApi};
use crate::state::request::{Completion, Operation, Outcome, Request};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info_span};

/// Spawns request workers and hands back their completions.
pub struct Dispatcher {
    posts: Arc<dyn CollectionApi>,
    recipes: Arc<dyn RecipeApi>,
    tx: Sender<Completion>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiver its completions arrive on.
    pub fn new(
        posts: Arc<dyn CollectionApi>,
        recipes: Arc<dyn RecipeApi>,
    ) -> (Self, Receiver<Completion>) {
        let (tx, rx) = mpsc::channel();
        (Self { posts, recipes, tx }, rx)
    }

    /// Run `request` in the background.
    ///
    /// If the worker thread cannot be spawned the request fails immediately
    /// and the failure is delivered like any other completion.
    pub fn dispatch(&self, request: Request) {
        let posts = Arc::clone(&self.posts);
        let recipes = Arc::clone(&self.recipes);
        let tx = self.tx.clone();
        let id = request.id;
        let label = request.operation.label();

        let spawned = thread::Builder::new()
            .name(format!("request-{}", id.get()))
            .spawn(move || {
                let completion = execute(posts.as_ref(), recipes.as_ref(), request);
                // Receiver gone means the app is shutting down.
                let _ = tx.send(completion);
            });

        if let Err(err) = spawned {
            error!(%id, operation = label, error = %err, "failed to spawn request worker");
            let _ = self.tx.send(Completion {
                id,
                outcome: Outcome::Failed {
                    operation: label,
                    error: crate::model::ClientError::Transport {
                        url: String::new(),
                        message: format!("could not start request: {err}"),
                    },
                },
            });
        }
    }
}

/// Run one request synchronously against the given clients.
pub fn execute(posts: &dyn CollectionApi, recipes: &dyn RecipeApi, request: Request) -> Completion {
    let span = info_span!("request", id = %request.id, operation = request.operation.label());
    let _enter = span.enter();
    let label = request.operation.label();

    let result = match request.operation {
        Operation::List { limit, offset } => posts.list(limit, offset).map(Outcome::Listed),
        Operation::Search { query } => posts.search(&query).map(Outcome::Searched),
        Operation::Create { draft } => posts.create(draft.title()).map(|post| Outcome::Created {
            post,
            tags: draft.tags().clone(),
        }),
        Operation::Update { id, draft } => posts
            .update(id, draft.title(), draft.tags())
            .map(Outcome::Updated),
        Operation::Delete { id } => posts.delete(id).map(|()| Outcome::Deleted(id)),
        Operation::LoadRecipes => recipes.recipes().map(Outcome::Recipes),
    };

    let outcome = result.unwrap_or_else(|error| Outcome::Failed {
        operation: label,
        error,
    });
    debug!(failed = matches!(outcome, Outcome::Failed { .. }), "request finished");

    Completion {
        id: request.id,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoryCollection, MemoryRecipes};
    use crate::model::{ClientError, PostDraft, PostId, TagSet};
    use crate::state::request::RequestIds;
    use std::time::Duration;

    fn run(posts: &MemoryCollection, operation: Operation) -> Outcome {
        let request = RequestIds::default().issue(operation);
        execute(posts, &MemoryRecipes::seeded(), request).outcome
    }

    #[test]
    fn list_returns_page_and_total() {
        let posts = MemoryCollection::seeded();
        match run(&posts, Operation::List { limit: 5, offset: 10 }) {
            Outcome::Listed(page) => {
                assert_eq!(page.items.len(), 2);
                assert_eq!(page.total, 12);
            }
            other => panic!("expected Listed, got {other:?}"),
        }
    }

    #[test]
    fn create_carries_draft_tags() {
        let posts = MemoryCollection::seeded();
        let tags: TagSet = ["science"].into_iter().collect();
        let draft = PostDraft::new("New", tags.clone()).unwrap();
        match run(&posts, Operation::Create { draft }) {
            Outcome::Created { post, tags: carried } => {
                assert_eq!(post.title, "New");
                assert!(post.tags.is_empty(), "server does not echo tags");
                assert_eq!(carried, tags);
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    #[test]
    fn client_error_becomes_failed_with_label() {
        let posts = MemoryCollection::seeded();
        posts.fail_next(ClientError::Status {
            url: "https://example.test/posts".to_string(),
            status: 500,
        });
        match run(&posts, Operation::Delete { id: PostId::new(1) }) {
            Outcome::Failed { operation, error } => {
                assert_eq!(operation, "delete post");
                assert!(matches!(error, ClientError::Status { status: 500, .. }));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn update_of_unknown_id_fails_not_found() {
        let posts = MemoryCollection::seeded();
        let draft = PostDraft::new("x", TagSet::new()).unwrap();
        let outcome = run(
            &posts,
            Operation::Update {
                id: PostId::new(999),
                draft,
            },
        );
        assert!(matches!(
            outcome,
            Outcome::Failed {
                error: ClientError::NotFound { .. },
                ..
            }
        ));
    }

    #[test]
    fn dispatch_delivers_completion_with_request_id() {
        let (dispatcher, rx) = Dispatcher::new(
            Arc::new(MemoryCollection::seeded()),
            Arc::new(MemoryRecipes::seeded()),
        );
        let request = RequestIds::default().issue(Operation::LoadRecipes);
        let id = request.id;
        dispatcher.dispatch(request);

        let completion = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(completion.id, id);
        assert!(matches!(completion.outcome, Outcome::Recipes(ref r) if r.len() == 3));
    }
}
