//! postdeck
//!
//! Terminal dashboard for a remote posts collection: a paginated, searchable
//! table with create, edit and delete dialogs, plus a read-only recipe
//! catalogue.
//!
//! Pure Core / Impure Shell: `model` and `state` never do I/O; `client`,
//! `dispatch` and `view` run requests and draw the terminal.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod model;
pub mod session;
pub mod state;
pub mod view;

pub use error::AppError;
