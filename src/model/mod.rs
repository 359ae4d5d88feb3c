//! Domain model (pure data, no I/O).

pub mod draft;
pub mod error;
pub mod key_action;
pub mod post;
pub mod recipe;

pub use draft::PostDraft;
pub use error::{AuthError, ClientError, ValidationError};
pub use key_action::KeyAction;
pub use post::{Post, PostId, SELECTABLE_TAGS, Tag, TagSet};
pub use recipe::Recipe;
