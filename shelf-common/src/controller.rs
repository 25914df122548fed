//! Root controller: every network round-trip the app makes
//!
//! Handlers read a snapshot of the state they need, talk to the API, and hand
//! back the action describing the outcome. `None` means the failure was only
//! logged and the state stays as it was. The caller dispatches whatever comes
//! back, so a handler never holds state across an await.

use crate::api::{BookstoreApi, NewBook};
use crate::comments::{CommentAction, CommentThread};
use crate::model::{AuthMode, CommentPayload, Credentials, Session};
use crate::session::SessionStore;
use crate::state::{Action, AppState, FormSnapshot};
use tracing::{error, info, warn};

pub const AUTH_FAILED_MESSAGE: &str = "Invalid credentials or sign-up error.";
pub const INVALID_DRAFT_MESSAGE: &str = "Please fill in all fields correctly.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add book. Check console for details.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete book.";

pub struct Controller<A, S> {
    api: A,
    session: S,
}

impl<A: BookstoreApi, S: SessionStore> Controller<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self { api, session }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session_store(&self) -> &S {
        &self.session
    }

    /// Initial state from the persisted session. Read once at startup.
    pub fn restore(&self) -> AppState {
        let session = Session::from_stored(self.session.load());
        if let Some(user) = session.username() {
            info!("Restored session for {user}");
        }
        AppState::restore(session)
    }

    pub async fn fetch_books(&self) -> Option<Action> {
        match self.api.list_books().await {
            Ok(books) => {
                info!("Loaded {} books", books.len());
                Some(Action::BooksLoaded(books))
            }
            Err(e) => {
                error!("Error fetching books: {e}");
                None
            }
        }
    }

    pub async fn authenticate(&self, credentials: &Credentials, mode: AuthMode) -> Option<Action> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            warn!("Ignoring {mode:?} with empty credentials");
            return None;
        }

        let result = match mode {
            AuthMode::Login => self.api.login(credentials).await,
            AuthMode::Signup => self.api.signup(credentials).await,
        };

        match result {
            Ok(()) => match mode {
                AuthMode::Signup => {
                    info!("Created account {}", credentials.username);
                    Some(Action::SignedUp)
                }
                AuthMode::Login => {
                    if let Err(e) = self.session.save(&credentials.username) {
                        warn!("Logged in but could not persist session: {e}");
                    }
                    info!("Logged in as {}", credentials.username);
                    Some(Action::LoggedIn(credentials.username.clone()))
                }
            },
            Err(e) if e.is_status() => {
                warn!("{mode:?} rejected: {e}");
                Some(Action::Alert(AUTH_FAILED_MESSAGE.to_string()))
            }
            Err(e) => {
                error!("Error during authentication: {e}");
                None
            }
        }
    }

    pub fn logout(&self) -> Action {
        if let Err(e) = self.session.clear() {
            warn!("Could not clear persisted session: {e}");
        }
        info!("Logged out");
        Action::LoggedOut
    }

    /// Validate the draft and create the book with its attachments
    pub async fn add_book(&self, form: &FormSnapshot) -> Option<Action> {
        if !form.session.is_logged_in() {
            warn!("Ignoring add book without a session");
            return None;
        }

        let book = match form.draft.validate() {
            Ok(book) => book,
            Err(e) => {
                warn!("Rejected new book: {e}");
                return Some(Action::Alert(INVALID_DRAFT_MESSAGE.to_string()));
            }
        };

        let request = NewBook {
            title: book.title,
            author: book.author,
            price: book.price,
            image: form.image_file.clone(),
            pdf: form.pdf_file.clone(),
        };

        match self.api.create_book(&request).await {
            Ok(created) => {
                info!("Added book {:?} ({})", created.id, created.title);
                Some(Action::BookAdded(created))
            }
            Err(e) if e.is_status() => {
                error!("Server response: {e}");
                let reason = e
                    .server_message()
                    .unwrap_or_else(|| "Unknown error".to_string());
                Some(Action::Alert(format!("Failed to add book: {reason}")))
            }
            Err(e) => {
                error!("Request failed: {e}");
                Some(Action::Alert(ADD_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// PUT the whole draft; newly picked files replace the stored payloads
    pub async fn save_edit(&self, form: &FormSnapshot) -> Option<Action> {
        if !form.session.is_logged_in() {
            warn!("Ignoring edit without a session");
            return None;
        }
        let id = match form.draft.existing_id() {
            Ok(id) => id.to_string(),
            Err(e) => {
                warn!("Cannot save edit: {e}");
                return None;
            }
        };

        let mut book = match form.draft.validate() {
            Ok(book) => book,
            Err(e) => {
                warn!("Rejected edit of book {id}: {e}");
                return Some(Action::Alert(INVALID_DRAFT_MESSAGE.to_string()));
            }
        };
        if let Some(file) = &form.image_file {
            book.image_base64 = Some(file.to_base64());
        }
        if let Some(file) = &form.pdf_file {
            book.pdf_base64 = Some(file.to_base64());
        }

        match self.api.update_book(&id, &book).await {
            Ok(()) => {
                info!("Updated book {id}");
                Some(Action::BookUpdated(book))
            }
            Err(e) if e.is_status() => {
                error!("Error updating book {id}: {e}");
                let text = e.body().unwrap_or_default();
                Some(Action::Alert(format!("Failed to update the book: {text}")))
            }
            Err(e) => {
                error!("Error updating book {id}: {e}");
                None
            }
        }
    }

    /// Send the delete once the user has confirmed it
    pub async fn delete_book(&self, session: &Session, id: &str) -> Option<Action> {
        if !session.is_logged_in() {
            warn!("Ignoring delete without a session");
            return None;
        }

        match self.api.delete_book(id).await {
            Ok(()) => {
                info!("Deleted book {id}");
                Some(Action::BookDeleted(id.to_string()))
            }
            Err(e) if e.is_status() => {
                error!("Error deleting book {id}: {e}");
                Some(Action::Alert(DELETE_FAILED_MESSAGE.to_string()))
            }
            Err(e) => {
                error!("Error deleting book {id}: {e}");
                None
            }
        }
    }

    pub async fn load_comments(&self, book_id: &str) -> Option<CommentAction> {
        if book_id.is_empty() {
            return None;
        }
        match self.api.list_comments(book_id).await {
            Ok(comments) => Some(CommentAction::Loaded {
                book_id: book_id.to_string(),
                comments,
            }),
            Err(e) => {
                error!("Error fetching comments for {book_id}: {e}");
                None
            }
        }
    }

    pub async fn add_comment(
        &self,
        thread: &CommentThread,
        session: &Session,
    ) -> Option<CommentAction> {
        if thread.new_text.trim().is_empty() {
            return None;
        }
        let Some(user) = session.username() else {
            warn!("Ignoring comment without a session");
            return None;
        };

        let payload = CommentPayload {
            book_id: thread.book_id.clone(),
            user: user.to_string(),
            text: thread.new_text.clone(),
        };
        match self.api.create_comment(&payload).await {
            Ok(comment) => Some(CommentAction::Added(comment)),
            Err(e) => {
                error!("Error adding comment: {e}");
                None
            }
        }
    }

    pub async fn save_comment_edit(
        &self,
        thread: &CommentThread,
        session: &Session,
    ) -> Option<CommentAction> {
        let edit = thread.editing.as_ref()?;
        if !thread.can_modify(&edit.id, session) {
            warn!("Refusing to edit comment {} not owned by session", edit.id);
            return None;
        }
        let user = session.username()?;

        let payload = CommentPayload {
            book_id: thread.book_id.clone(),
            user: user.to_string(),
            text: edit.text.clone(),
        };
        match self.api.update_comment(&edit.id, &payload).await {
            Ok(()) => Some(CommentAction::Edited {
                id: edit.id.clone(),
                text: edit.text.clone(),
            }),
            Err(e) => {
                error!("Error editing comment {}: {e}", edit.id);
                None
            }
        }
    }

    pub async fn delete_comment(
        &self,
        thread: &CommentThread,
        id: &str,
        session: &Session,
    ) -> Option<CommentAction> {
        if !thread.can_modify(id, session) {
            warn!("Refusing to delete comment {id} not owned by session");
            return None;
        }
        match self.api.delete_comment(id).await {
            Ok(()) => Some(CommentAction::Deleted(id.to_string())),
            Err(e) => {
                error!("Error deleting comment {id}: {e}");
                None
            }
        }
    }
}
