//! Shared UI components

pub mod app_layout;
pub mod auth_form;
pub mod book_comments;
pub mod book_form;
pub mod book_list;
pub mod button;
pub mod icons;
pub mod navbar;
pub mod notice_dialog;
pub mod text_input;

pub use app_layout::AppLayoutView;
pub use auth_form::AuthFormView;
pub use book_comments::BookCommentsView;
pub use book_form::{BookFormView, IMAGE_INPUT_ID, PDF_INPUT_ID};
pub use book_list::{BookCard, BookListView, CommentsSlot};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use icons::{CheckIcon, FileTextIcon, ImageIcon, PencilIcon, TrashIcon, XIcon};
pub use navbar::NavbarView;
pub use notice_dialog::NoticeDialogView;
pub use text_input::{TextInput, TextInputSize};
