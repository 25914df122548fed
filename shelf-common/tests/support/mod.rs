#![allow(dead_code)]

use async_trait::async_trait;
use shelf_common::{ApiError, Book, BookstoreApi, Comment, CommentPayload, Credentials, NewBook};
use std::cell::{Cell, RefCell};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn tracing_init() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn book(id: &str, title: &str, price: f64) -> Book {
    Book {
        id: Some(id.to_string()),
        title: title.to_string(),
        author: "Author".to_string(),
        price,
        image_base64: None,
        pdf_base64: None,
    }
}

pub fn comment(id: &str, user: &str, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        book_id: "1".to_string(),
        user: user.to_string(),
        text: text.to_string(),
    }
}

/// In-memory API that records every call and can be told to fail the next one
#[derive(Default)]
pub struct ScriptedApi {
    pub calls: RefCell<Vec<String>>,
    pub books: RefCell<Vec<Book>>,
    pub comments: RefCell<Vec<Comment>>,
    pub created: RefCell<Vec<NewBook>>,
    pub updated: RefCell<Vec<Book>>,
    pub comment_payloads: RefCell<Vec<CommentPayload>>,
    next_failure: RefCell<Option<ApiError>>,
    next_id: Cell<u32>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        let api = Self::new();
        *api.books.borrow_mut() = books;
        api
    }

    pub fn fail_next(&self, error: ApiError) {
        *self.next_failure.borrow_mut() = Some(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.next_failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id.to_string()
    }
}

#[async_trait(?Send)]
impl BookstoreApi for ScriptedApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.record("GET /api/books".to_string())?;
        Ok(self.books.borrow().clone())
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.record("POST /api/books".to_string())?;
        self.created.borrow_mut().push(book.clone());
        let created = Book {
            id: Some(self.next_id()),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            image_base64: book.image.as_ref().map(|f| f.to_base64()),
            pdf_base64: book.pdf.as_ref().map(|f| f.to_base64()),
        };
        self.books.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_book(&self, id: &str, book: &Book) -> Result<(), ApiError> {
        self.record(format!("PUT /api/books/{id}"))?;
        self.updated.borrow_mut().push(book.clone());
        Ok(())
    }

    async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/books/{id}"))?;
        self.books.borrow_mut().retain(|b| !b.has_id(id));
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(format!("POST /api/auth/login {}", credentials.username))
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(format!("POST /api/auth/signup {}", credentials.username))
    }

    async fn list_comments(&self, book_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.record(format!("GET /api/Comments/{book_id}"))?;
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn create_comment(&self, comment: &CommentPayload) -> Result<Comment, ApiError> {
        self.record("POST /api/Comments".to_string())?;
        self.comment_payloads.borrow_mut().push(comment.clone());
        Ok(Comment {
            id: format!("n{}", self.next_id()),
            book_id: comment.book_id.clone(),
            user: comment.user.clone(),
            text: comment.text.clone(),
        })
    }

    async fn update_comment(&self, id: &str, comment: &CommentPayload) -> Result<(), ApiError> {
        self.record(format!("PUT /api/Comments/{id}"))?;
        self.comment_payloads.borrow_mut().push(comment.clone());
        Ok(())
    }

    async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/Comments/{id}"))
    }
}
