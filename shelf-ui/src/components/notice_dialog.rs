//! Modal for alerts and delete confirmations

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use shelf_common::Notice;

/// Blocks the page until the user answers the notice.
///
/// Alerts only offer a dismiss button. Delete confirmations call `on_confirm`
/// with the book id; cancelling (or clicking the backdrop) dismisses.
#[component]
pub fn NoticeDialogView(
    notice: Notice,
    on_dismiss: EventHandler<()>,
    on_confirm: EventHandler<String>,
) -> Element {
    let message = notice.message().to_string();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000]",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "bg-white rounded-lg shadow-lg p-6 max-w-md w-full mx-4",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                p { class: "text-gray-800 mb-6", "{message}" }

                div { class: "flex gap-3 justify-end",
                    match notice {
                        Notice::Alert { .. } => rsx! {
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                onclick: move |_| on_dismiss.call(()),
                                "OK"
                            }
                        },
                        Notice::ConfirmDelete { book_id, .. } => rsx! {
                            Button {
                                variant: ButtonVariant::Secondary,
                                size: ButtonSize::Medium,
                                onclick: move |_| on_dismiss.call(()),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                size: ButtonSize::Medium,
                                onclick: move |_| on_confirm.call(book_id.clone()),
                                "Delete"
                            }
                        },
                    }
                }
            }
        }
    }
}
