//! Session persisted in browser local storage

use shelf_common::{SessionError, SessionStore, SESSION_STORAGE_KEY};

fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Stores the logged-in username under a single local storage key
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn load(&self) -> Option<String> {
        get_storage()
            .and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten())
            .filter(|user| !user.is_empty())
    }

    fn save(&self, username: &str) -> Result<(), SessionError> {
        let storage = get_storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(SESSION_STORAGE_KEY, username)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), SessionError> {
        let storage = get_storage().ok_or(SessionError::Unavailable)?;
        storage
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}
