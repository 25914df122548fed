mod bookstore;
mod comments;

pub use bookstore::{AppController, Bookstore};
pub use comments::BookComments;
