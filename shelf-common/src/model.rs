//! Domain types shared by the controller and the views
//!
//! Optional payloads (identifier, cover image, PDF) are `Option`s end to end.
//! The server is loose about them, so empty strings and `null` both read as
//! absent, and identifiers may arrive as JSON numbers.

use crate::config::PLACEHOLDER_COVER_URL;
use crate::error::ValidationError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_id(self) -> Option<String> {
        match self {
            RawId::Text(s) if s.is_empty() => None,
            RawId::Text(s) => Some(s),
            RawId::Number(n) => Some(n.to_string()),
        }
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.and_then(RawId::into_id))
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?
        .into_id()
        .ok_or_else(|| serde::de::Error::custom("empty identifier"))
}

fn optional_payload<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A book record as the API stores it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(
        default,
        deserialize_with = "optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "optional_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_base64: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_base64: Option<String>,
}

impl Book {
    /// Image source for the card: inline cover or the shared placeholder
    pub fn cover_src(&self) -> String {
        match &self.image_base64 {
            Some(b64) => format!("data:image/png;base64,{b64}"),
            None => PLACEHOLDER_COVER_URL.to_string(),
        }
    }

    pub fn pdf_src(&self) -> Option<String> {
        self.pdf_base64
            .as_ref()
            .map(|b64| format!("data:application/pdf;base64,{b64}"))
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Field of the book form a text edit applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    Price,
}

/// In-progress values of the add/edit form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookDraft {
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    /// Price as typed; parsed on submit
    pub price: String,
    pub image_base64: Option<String>,
    pub pdf_base64: Option<String>,
}

impl BookDraft {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            image_base64: book.image_base64.clone(),
            pdf_base64: book.pdf_base64.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
            DraftField::Price => self.price = value,
        }
    }

    /// Identifier of the book being edited; a new draft has none
    pub fn existing_id(&self) -> Result<&str, ValidationError> {
        self.id.as_deref().ok_or(ValidationError::MissingId)
    }

    /// Check the draft and turn it into a submittable book.
    pub fn validate(&self) -> Result<Book, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(ValidationError::MissingAuthor);
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(Book {
            id: self.id.clone(),
            title: title.to_string(),
            author: author.to_string(),
            price,
            image_base64: self.image_base64.clone(),
            pdf_base64: self.pdf_base64.clone(),
        })
    }
}

/// A file picked in the browser, read into memory
#[derive(Clone, PartialEq)]
pub struct FileSelection {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileSelection {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// MIME type to declare, falling back to a generic binary type
    pub fn content_type(&self) -> &str {
        if self.mime.is_empty() {
            "application/octet-stream"
        } else {
            &self.mime
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:` URL used for the local preview
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type(), self.to_base64())
    }
}

impl fmt::Debug for FileSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSelection")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A comment on one book
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "required_id")]
    pub id: String,
    #[serde(deserialize_with = "required_id")]
    pub book_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Comment {
    /// Only the logged-in author may edit or delete a comment
    pub fn is_authored_by(&self, session: &Session) -> bool {
        session.username() == Some(self.user.as_str())
    }
}

/// Body of comment create/update requests
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub book_id: String,
    pub user: String,
    pub text: String,
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Who is using the app
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    User(String),
}

impl Session {
    /// Build a session from the stored username, if any
    pub fn from_stored(username: Option<String>) -> Self {
        match username {
            Some(name) if !name.is_empty() => Session::User(name),
            _ => Session::Anonymous,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::User(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::User(name) => Some(name),
            Session::Anonymous => None,
        }
    }
}

/// Which screen is mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Login,
    Signup,
    Books,
    Add,
    Edit,
}

impl View {
    pub fn auth_mode(self) -> Option<AuthMode> {
        match self {
            View::Login => Some(AuthMode::Login),
            View::Signup => Some(AuthMode::Signup),
            _ => None,
        }
    }

    pub fn form_mode(self) -> Option<FormMode> {
        match self {
            View::Add => Some(FormMode::Add),
            View::Edit => Some(FormMode::Edit),
            _ => None,
        }
    }

    /// Views that need a logged-in user
    pub fn requires_session(self) -> bool {
        matches!(self, View::Add | View::Edit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}
