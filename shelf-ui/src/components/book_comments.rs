//! Comment thread shown under each book card

use crate::components::{
    Button, ButtonSize, ButtonVariant, CheckIcon, ChromelessButton, PencilIcon, TextInput,
    TextInputSize, TrashIcon, XIcon,
};
use dioxus::prelude::*;
use shelf_common::{CommentEdit, CommentThread, Session};

/// Comment list view (pure, props-based)
///
/// Edit and delete controls only appear on the viewer's own comments. The
/// input row is hidden for anonymous visitors.
#[component]
pub fn BookCommentsView(
    thread: CommentThread,
    session: Session,
    on_new_text: EventHandler<String>,
    on_add: EventHandler<()>,
    on_start_edit: EventHandler<CommentEdit>,
    on_edit_text: EventHandler<String>,
    on_save_edit: EventHandler<()>,
    on_cancel_edit: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let logged_in = session.is_logged_in();
    let new_text = thread.new_text.clone();
    let blank = new_text.trim().is_empty();

    rsx! {
        div { class: "mt-4 border-t pt-3",
            h3 { class: "font-semibold text-gray-800 mb-2", "Comments" }

            if thread.comments.is_empty() {
                p { class: "text-sm text-gray-500", "No comments yet." }
            }

            ul { class: "flex flex-col gap-2",
                for comment in thread.comments.iter().cloned() {
                    {
                        let own = comment.is_authored_by(&session);
                        let editing = thread.editing.as_ref().filter(|e| e.id == comment.id).cloned();
                        let bg = if own { "bg-blue-200" } else { "bg-gray-200" };
                        let id = comment.id.clone();
                        let text = comment.text.clone();

                        rsx! {
                            li { key: "{comment.id}", class: "{bg} rounded p-2 text-sm",
                                span { class: "font-semibold mr-1", "{comment.user}:" }
                                if let Some(edit) = editing {
                                    div { class: "flex gap-2 items-center mt-1",
                                        TextInput {
                                            value: edit.text,
                                            on_input: move |value| on_edit_text.call(value),
                                            size: TextInputSize::Small,
                                            autofocus: true,
                                        }
                                        ChromelessButton {
                                            class: Some("text-green-700 hover:text-green-900".to_string()),
                                            aria_label: Some("Save comment".to_string()),
                                            title: Some("Save comment".to_string()),
                                            onclick: move |_| on_save_edit.call(()),
                                            CheckIcon { class: "w-4 h-4" }
                                        }
                                        ChromelessButton {
                                            class: Some("text-gray-600 hover:text-gray-900".to_string()),
                                            aria_label: Some("Cancel edit".to_string()),
                                            title: Some("Cancel edit".to_string()),
                                            onclick: move |_| on_cancel_edit.call(()),
                                            XIcon { class: "w-4 h-4" }
                                        }
                                    }
                                } else {
                                    span { "{comment.text}" }
                                    if own {
                                        span { class: "inline-flex gap-2 ml-2 align-middle",
                                            ChromelessButton {
                                                class: Some("text-blue-700 hover:text-blue-900".to_string()),
                                                aria_label: Some("Edit comment".to_string()),
                                                title: Some("Edit comment".to_string()),
                                                onclick: {
                                                    let id = id.clone();
                                                    move |_| {
                                                        on_start_edit.call(CommentEdit {
                                                            id: id.clone(),
                                                            text: text.clone(),
                                                        })
                                                    }
                                                },
                                                PencilIcon { class: "w-4 h-4" }
                                            }
                                            ChromelessButton {
                                                class: Some("text-red-600 hover:text-red-800".to_string()),
                                                aria_label: Some("Delete comment".to_string()),
                                                title: Some("Delete comment".to_string()),
                                                onclick: move |_| on_delete.call(id.clone()),
                                                TrashIcon { class: "w-4 h-4" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if logged_in {
                form {
                    class: "flex gap-2 mt-3",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_add.call(());
                    },
                    TextInput {
                        value: new_text,
                        on_input: move |value| on_new_text.call(value),
                        size: TextInputSize::Small,
                        placeholder: "Write a comment...",
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        r#type: "submit",
                        disabled: blank,
                        onclick: |_| {},
                        "Add"
                    }
                }
            }
        }
    }
}
