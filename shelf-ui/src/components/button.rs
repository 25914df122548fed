//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for icon buttons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue background - for primary actions
    Primary,
    /// Light gray background - for cancel actions
    Secondary,
    /// Green background - for edit actions
    Success,
    /// Red background - for destructive actions
    Danger,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
///
/// Submit buttons pass `r#type: "submit"` with a no-op `onclick` so the
/// enclosing form handles the event.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Small => "px-3 py-1 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
        ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-800",
        ButtonVariant::Success => "bg-green-500 hover:bg-green-600 text-white",
        ButtonVariant::Danger => "bg-red-500 hover:bg-red-600 text-white",
        ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100",
    };

    let base = "inline-flex items-center justify-center gap-2 rounded transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            r#type,
            onclick,
            {children}
        }
    }
}
