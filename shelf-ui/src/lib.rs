//! shelf-ui - View components for the bookshelf app
//!
//! Every component here is pure: it renders props and reports user intent
//! through callbacks. State and network calls live in the web crate.

pub mod components;

pub use components::*;
