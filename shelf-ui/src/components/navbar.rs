//! Top navigation bar

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use shelf_common::View;

/// Navigation actions; which ones appear depends on the session
#[component]
pub fn NavbarView(logged_in: bool, on_navigate: EventHandler<View>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "flex justify-between bg-white shadow-lg p-4 rounded-lg mb-6",
            div { class: "flex gap-4",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_navigate.call(View::Books),
                    "View Books"
                }
                if logged_in {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        class: "bg-purple-500 hover:bg-purple-600".to_string(),
                        onclick: move |_| on_navigate.call(View::Add),
                        "Add Book"
                    }
                }
            }
            if logged_in {
                Button {
                    variant: ButtonVariant::Danger,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_logout.call(()),
                    "Logout"
                }
            } else {
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_navigate.call(View::Login),
                        "Login"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_navigate.call(View::Signup),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
