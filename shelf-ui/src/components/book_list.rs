//! Book list view - pure rendering, no data fetching

use crate::components::icons::{FileTextIcon, PencilIcon, TrashIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use shelf_common::Book;
use std::rc::Rc;

/// Renders the comment thread for a book id inside its card.
/// PartialEq returns false to ensure re-renders when the closure might have changed.
pub struct CommentsSlot(pub Rc<dyn Fn(String) -> Element>);

impl Clone for CommentsSlot {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl PartialEq for CommentsSlot {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// Grid of book cards
///
/// Edit and delete controls are only rendered for logged-in users. Delete
/// reports the book id; the caller asks for confirmation.
#[component]
pub fn BookListView(
    books: Vec<Book>,
    logged_in: bool,
    on_edit: EventHandler<Book>,
    on_delete: EventHandler<String>,
    #[props(default)] comments: Option<CommentsSlot>,
) -> Element {
    if books.is_empty() {
        return rsx! {
            p { class: "text-center text-gray-600 py-12", "No books yet." }
        };
    }

    // Unsaved books have no id yet; fall back to position for a stable key
    let cards = books.into_iter().enumerate().map(|(index, book)| {
        let key = book
            .id
            .clone()
            .unwrap_or_else(|| format!("unsaved-{index}"));
        (key, book)
    });

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mt-2",
            for (key, book) in cards {
                BookCard {
                    key: "{key}",
                    book,
                    logged_in,
                    on_edit,
                    on_delete,
                    comments: comments.clone(),
                }
            }
        }
    }
}

/// Single book card with optional inline PDF viewer
#[component]
pub fn BookCard(
    book: Book,
    logged_in: bool,
    on_edit: EventHandler<Book>,
    on_delete: EventHandler<String>,
    #[props(default)] comments: Option<CommentsSlot>,
) -> Element {
    let mut show_pdf = use_signal(|| false);

    let cover_src = book.cover_src();
    let pdf_src = book.pdf_src();
    let title = book.title.clone();
    let author = book.author.clone();
    let price = book.price;
    let book_id = book.id.clone();

    rsx! {
        div { class: "bg-white p-4 shadow-md rounded-lg", "data-testid": "book-card",
            img {
                src: "{cover_src}",
                alt: "{title}",
                class: "w-full h-48 object-cover rounded",
            }
            h2 { class: "text-xl font-bold mt-2", "{title}" }
            p { class: "text-gray-700", "Author: {author}" }
            p { class: "text-gray-700", "Price: ${price}" }

            if let Some(src) = pdf_src {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    class: "mt-2".to_string(),
                    onclick: move |_| show_pdf.set(!show_pdf()),
                    FileTextIcon { class: "w-4 h-4" }
                    if show_pdf() {
                        "Hide PDF"
                    } else {
                        "View PDF"
                    }
                }
                if show_pdf() {
                    iframe {
                        src: "{src}",
                        title: "{title} PDF",
                        class: "w-full h-96 mt-2 border rounded",
                    }
                }
            }

            if logged_in {
                div { class: "flex justify-between mt-4",
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Small,
                        onclick: {
                            let book = book.clone();
                            move |_| on_edit.call(book.clone())
                        },
                        PencilIcon { class: "w-4 h-4" }
                        "Edit"
                    }
                    if let Some(id) = book_id.clone() {
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            onclick: move |_| on_delete.call(id.clone()),
                            TrashIcon { class: "w-4 h-4" }
                            "Delete"
                        }
                    }
                }
            }

            if let (Some(slot), Some(id)) = (comments, book_id) {
                div { class: "mt-4 border-t pt-4", {(slot.0)(id)} }
            }
        }
    }
}
