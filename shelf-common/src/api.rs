//! Remote bookstore API seam
//!
//! The browser client implements this over HTTP; tests script it in memory.
//! Futures are not `Send` because browser fetch futures are not.

use crate::error::ApiError;
use crate::model::{Book, Comment, CommentPayload, Credentials, FileSelection};
use async_trait::async_trait;

/// Multipart create request: text fields plus optional raw attachments
#[derive(Clone, Debug, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub image: Option<FileSelection>,
    pub pdf: Option<FileSelection>,
}

impl NewBook {
    /// Multipart part carrying the cover image
    pub const IMAGE_PART: &'static str = "imageFile";
    /// Multipart part carrying the PDF
    pub const PDF_PART: &'static str = "pdfFile";

    /// Text form fields in submission order
    pub fn text_fields(&self) -> [(&'static str, String); 3] {
        [
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("price", self.price.to_string()),
        ]
    }

    /// File parts that were picked, with the part name each is sent under
    pub fn attachments(&self) -> impl Iterator<Item = (&'static str, &FileSelection)> {
        [
            (Self::IMAGE_PART, self.image.as_ref()),
            (Self::PDF_PART, self.pdf.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, file)| file.map(|file| (name, file)))
    }
}

#[async_trait(?Send)]
pub trait BookstoreApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError>;
    async fn update_book(&self, id: &str, book: &Book) -> Result<(), ApiError>;
    async fn delete_book(&self, id: &str) -> Result<(), ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError>;

    async fn list_comments(&self, book_id: &str) -> Result<Vec<Comment>, ApiError>;
    async fn create_comment(&self, comment: &CommentPayload) -> Result<Comment, ApiError>;
    async fn update_comment(&self, id: &str, comment: &CommentPayload) -> Result<(), ApiError>;
    async fn delete_comment(&self, id: &str) -> Result<(), ApiError>;
}
