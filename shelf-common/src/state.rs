//! Application state and its reducer
//!
//! `AppState` is owned by the root page. Views never mutate it directly: they
//! emit [`Action`]s and the page feeds them to [`AppState::apply`].

use crate::model::{
    Book, BookDraft, Credentials, DraftField, FileSelection, FormMode, Session, View,
};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created! Please log in.";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this book?";

/// Modal message raised by an action
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Informational or error message with a single dismiss button
    Alert { message: String },
    /// Delete confirmation; the delete request is only sent once confirmed
    ConfirmDelete { book_id: String, message: String },
}

impl Notice {
    pub fn alert(message: impl Into<String>) -> Self {
        Notice::Alert {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Alert { message } | Notice::ConfirmDelete { message, .. } => message,
        }
    }
}

/// Every state transition the app knows about
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Navigate(View),
    SetUsername(String),
    SetPassword(String),
    EditDraft(DraftField, String),
    SelectImage(FileSelection),
    SelectPdf(FileSelection),
    BeginEdit(Book),
    BooksLoaded(Vec<Book>),
    SignedUp,
    LoggedIn(String),
    LoggedOut,
    BookAdded(Book),
    BookUpdated(Book),
    RequestDelete(String),
    BookDeleted(String),
    Alert(String),
    DismissNotice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub books: Vec<Book>,
    pub draft: BookDraft,
    pub image_file: Option<FileSelection>,
    pub pdf_file: Option<FileSelection>,
    pub credentials: Credentials,
    pub session: Session,
    pub view: View,
    pub notice: Option<Notice>,
}

/// What a book form submission reads, without the book collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub session: Session,
    pub draft: BookDraft,
    pub image_file: Option<FileSelection>,
    pub pdf_file: Option<FileSelection>,
}

impl AppState {
    /// Initial state for a page load with the given persisted session
    pub fn restore(session: Session) -> Self {
        let view = if session.is_logged_in() {
            View::Books
        } else {
            View::Login
        };
        Self {
            session,
            view,
            ..Default::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn form(&self) -> FormSnapshot {
        FormSnapshot {
            session: self.session.clone(),
            draft: self.draft.clone(),
            image_file: self.image_file.clone(),
            pdf_file: self.pdf_file.clone(),
        }
    }

    /// Identity of the mounted book form. It changes whenever the form has to
    /// start over, so file inputs never keep a stale selection.
    pub fn form_key(&self) -> Option<String> {
        match self.view.form_mode()? {
            FormMode::Add => Some("add".to_string()),
            FormMode::Edit => Some(format!(
                "edit-{}",
                self.draft.id.as_deref().unwrap_or_default()
            )),
        }
    }

    /// Cover preview: a freshly picked file wins over the stored payload
    pub fn image_preview(&self) -> Option<String> {
        self.image_file.as_ref().map(FileSelection::data_url).or_else(|| {
            self.draft
                .image_base64
                .as_ref()
                .map(|b64| format!("data:image/png;base64,{b64}"))
        })
    }

    pub fn pdf_preview(&self) -> Option<String> {
        self.pdf_file.as_ref().map(FileSelection::data_url).or_else(|| {
            self.draft
                .pdf_base64
                .as_ref()
                .map(|b64| format!("data:application/pdf;base64,{b64}"))
        })
    }

    fn reset_form(&mut self) {
        self.draft = BookDraft::default();
        self.image_file = None;
        self.pdf_file = None;
    }

    fn navigate(&mut self, view: View) {
        if view.requires_session() && !self.is_logged_in() {
            self.view = View::Login;
            return;
        }
        if view == View::Add {
            self.reset_form();
        }
        self.view = view;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(view) => self.navigate(view),
            Action::SetUsername(username) => self.credentials.username = username,
            Action::SetPassword(password) => self.credentials.password = password,
            Action::EditDraft(field, value) => self.draft.set(field, value),
            Action::SelectImage(file) => self.image_file = Some(file),
            Action::SelectPdf(file) => self.pdf_file = Some(file),
            Action::BeginEdit(book) => {
                if !self.is_logged_in() {
                    self.view = View::Login;
                    return;
                }
                self.reset_form();
                self.draft = BookDraft::from_book(&book);
                self.view = View::Edit;
            }
            Action::BooksLoaded(books) => self.books = books,
            Action::SignedUp => {
                self.view = View::Login;
                self.notice = Some(Notice::alert(SIGNUP_SUCCESS_MESSAGE));
            }
            Action::LoggedIn(username) => {
                self.session = Session::User(username);
                self.view = View::Books;
            }
            Action::LoggedOut => {
                self.session = Session::Anonymous;
                self.view = View::Login;
                self.reset_form();
            }
            Action::BookAdded(book) => {
                let existing = book
                    .id
                    .as_deref()
                    .and_then(|id| self.books.iter().position(|b| b.has_id(id)));
                match existing {
                    Some(index) => self.books[index] = book,
                    None => self.books.push(book),
                }
                self.reset_form();
                self.view = View::Books;
            }
            Action::BookUpdated(book) => {
                if let Some(id) = book.id.clone() {
                    for entry in self.books.iter_mut().filter(|b| b.has_id(&id)) {
                        *entry = book.clone();
                    }
                }
                self.reset_form();
                self.view = View::Books;
            }
            Action::RequestDelete(book_id) => {
                self.notice = Some(Notice::ConfirmDelete {
                    book_id,
                    message: DELETE_CONFIRM_MESSAGE.to_string(),
                });
            }
            Action::BookDeleted(book_id) => self.books.retain(|b| !b.has_id(&book_id)),
            Action::Alert(message) => self.notice = Some(Notice::alert(message)),
            Action::DismissNotice => self.notice = None,
        }
    }
}
