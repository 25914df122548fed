//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Compact padding, used inline in comment rows
    Small,
    /// Standard padding
    Medium,
}

/// Controlled text input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] name: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2 py-1",
        TextInputSize::Medium => "p-2",
    };

    let class = format!("w-full border rounded {padding}");

    rsx! {
        input {
            r#type: input_type,
            class: "{class}",
            id: id.as_deref(),
            name,
            value: "{value}",
            placeholder,
            required,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
