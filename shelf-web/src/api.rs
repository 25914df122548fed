//! HTTP client for the bookstore API

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shelf_common::{
    ApiConfig, ApiError, Book, BookstoreApi, Comment, CommentPayload, Credentials, Endpoints,
    FileSelection, NewBook,
};
use tracing::debug;

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Non-2xx responses become `ApiError::Status` carrying the raw body text
async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn attachment(file: &FileSelection) -> Result<Part, ApiError> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(file.content_type())
        .map_err(network)
}

fn book_form(book: &NewBook) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in book.text_fields() {
        form = form.text(name, value);
    }
    for (name, file) in book.attachments() {
        form = form.part(name, attachment(file)?);
    }
    Ok(form)
}

/// `BookstoreApi` over `fetch`, rooted at one origin
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            endpoints: config.endpoints(),
        }
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(&ApiConfig::from_build_env())
    }
}

#[async_trait(?Send)]
impl BookstoreApi for HttpApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let resp = self
            .client
            .get(self.endpoints.books())
            .send()
            .await
            .map_err(network)?;
        decode(check(resp).await?).await
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        debug!("POST book {:?}", book.title);
        let resp = self
            .client
            .post(self.endpoints.books())
            .multipart(book_form(book)?)
            .send()
            .await
            .map_err(network)?;
        decode(check(resp).await?).await
    }

    async fn update_book(&self, id: &str, book: &Book) -> Result<(), ApiError> {
        let resp = self
            .client
            .put(self.endpoints.book(id))
            .json(book)
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }

    async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.endpoints.book(id))
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoints.login())
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoints.signup())
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }

    async fn list_comments(&self, book_id: &str) -> Result<Vec<Comment>, ApiError> {
        let resp = self
            .client
            .get(self.endpoints.comments_for_book(book_id))
            .send()
            .await
            .map_err(network)?;
        decode(check(resp).await?).await
    }

    async fn create_comment(&self, comment: &CommentPayload) -> Result<Comment, ApiError> {
        let resp = self
            .client
            .post(self.endpoints.comments())
            .json(comment)
            .send()
            .await
            .map_err(network)?;
        decode(check(resp).await?).await
    }

    async fn update_comment(&self, id: &str, comment: &CommentPayload) -> Result<(), ApiError> {
        let resp = self
            .client
            .put(self.endpoints.comment(id))
            .json(comment)
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }

    async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.endpoints.comment(id))
            .send()
            .await
            .map_err(network)?;
        check(resp).await.map(|_| ())
    }
}
