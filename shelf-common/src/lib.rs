//! shelf-common - Domain types and client-side state for the bookshelf app
//!
//! Nothing in this crate touches the DOM. The web app renders [`AppState`],
//! turns user intents into [`Action`]s, and lets the [`Controller`] talk to
//! the remote API.

pub mod api;
pub mod comments;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod session;
pub mod state;

pub use api::{BookstoreApi, NewBook};
pub use comments::{CommentAction, CommentEdit, CommentThread};
pub use config::{ApiConfig, Endpoints, PLACEHOLDER_COVER_URL, SESSION_STORAGE_KEY};
pub use controller::Controller;
pub use error::{ApiError, SessionError, ValidationError};
pub use model::{
    AuthMode, Book, BookDraft, Comment, CommentPayload, Credentials, DraftField, FileSelection,
    FormMode, Session, View,
};
pub use session::{MemorySessionStore, SessionStore};
pub use state::{Action, AppState, FormSnapshot, Notice};
