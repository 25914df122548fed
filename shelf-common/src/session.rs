//! Persisted login marker
//!
//! The session is injected at startup through a [`SessionStore`] and only
//! changed by the controller's login/logout handlers.

use crate::error::SessionError;
use std::cell::RefCell;

/// Where the logged-in username is kept between page loads
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, username: &str) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory store for tests and hosts without browser storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    username: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(username: impl Into<String>) -> Self {
        Self {
            username: RefCell::new(Some(username.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.username.borrow().clone()
    }

    fn save(&self, username: &str) -> Result<(), SessionError> {
        *self.username.borrow_mut() = Some(username.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.username.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), None);
        store.save("alice").unwrap();
        assert_eq!(store.load().as_deref(), Some("alice"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }
}
