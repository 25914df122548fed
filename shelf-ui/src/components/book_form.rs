//! Add/edit book form - pure view over the draft
//!
//! File pickers only report that a selection happened; the web app reads the
//! file out of the input (looked up by id) and feeds the bytes back as a
//! preview.

use crate::components::icons::{FileTextIcon, ImageIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use dioxus::prelude::*;
use shelf_common::{BookDraft, DraftField, FormMode};

/// DOM id of the cover image file input
pub const IMAGE_INPUT_ID: &str = "book-image-input";
/// DOM id of the PDF file input
pub const PDF_INPUT_ID: &str = "book-pdf-input";

#[component]
pub fn BookFormView(
    mode: FormMode,
    draft: BookDraft,
    image_preview: Option<String>,
    pdf_preview: Option<String>,
    on_field_change: EventHandler<(DraftField, String)>,
    on_image_selected: EventHandler<()>,
    on_pdf_selected: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let (heading, submit_label) = match mode {
        FormMode::Add => ("Add a New Book", "Add Book"),
        FormMode::Edit => ("Edit Book", "Save Changes"),
    };

    rsx! {
        div { class: "bg-white p-6 rounded-lg shadow-md",
            h2 { class: "text-xl font-semibold mb-4", "{heading}" }

            FormField { label: "Title",
                TextInput {
                    value: draft.title.clone(),
                    on_input: move |v| on_field_change.call((DraftField::Title, v)),
                    size: TextInputSize::Medium,
                    name: "title",
                }
            }
            FormField { label: "Author",
                TextInput {
                    value: draft.author.clone(),
                    on_input: move |v| on_field_change.call((DraftField::Author, v)),
                    size: TextInputSize::Medium,
                    name: "author",
                }
            }
            FormField { label: "Price ($)",
                TextInput {
                    value: draft.price.clone(),
                    on_input: move |v| on_field_change.call((DraftField::Price, v)),
                    size: TextInputSize::Medium,
                    input_type: "number",
                    name: "price",
                }
            }

            FormField { label: "Book Cover",
                input {
                    r#type: "file",
                    id: IMAGE_INPUT_ID,
                    accept: "image/*",
                    class: "w-full border p-2 rounded",
                    onchange: move |_| on_image_selected.call(()),
                }
                if let Some(src) = image_preview {
                    img {
                        src: "{src}",
                        alt: "Preview",
                        class: "mt-2 w-32 h-32 object-cover rounded",
                    }
                } else {
                    div { class: "mt-2 w-32 h-32 flex items-center justify-center bg-gray-100 text-gray-400 rounded",
                        ImageIcon { class: "w-8 h-8" }
                    }
                }
            }

            FormField { label: "Book PDF",
                input {
                    r#type: "file",
                    id: PDF_INPUT_ID,
                    accept: "application/pdf",
                    class: "w-full border p-2 rounded",
                    onchange: move |_| on_pdf_selected.call(()),
                }
                if let Some(href) = pdf_preview {
                    div { class: "mt-2 flex items-center gap-2",
                        FileTextIcon { class: "w-4 h-4 text-gray-500" }
                        span { "PDF Preview: " }
                        a {
                            href: "{href}",
                            target: "_blank",
                            class: "text-blue-600",
                            "View PDF"
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_submit.call(()),
                "{submit_label}"
            }
        }
    }
}

#[component]
fn FormField(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700", "{label}" }
            {children}
        }
    }
}
