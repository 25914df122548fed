//! Login / sign-up form - pure view with callbacks

use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use dioxus::prelude::*;
use shelf_common::AuthMode;

#[component]
pub fn AuthFormView(
    mode: AuthMode,
    username: String,
    password: String,
    on_username_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    // Called with the form's mode on submit
    on_submit: EventHandler<AuthMode>,
) -> Element {
    let title = mode.title();

    rsx! {
        div { class: "max-w-md mx-auto bg-white p-6 shadow-md rounded-lg",
            h2 { class: "text-2xl font-bold mb-4", "{title}" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(mode);
                },
                label { class: "block mb-2", r#for: "auth-username", "Username" }
                div { class: "mb-4",
                    TextInput {
                        value: username,
                        on_input: move |v| on_username_change.call(v),
                        size: TextInputSize::Medium,
                        name: "username",
                        id: "auth-username".to_string(),
                        required: true,
                        autofocus: true,
                    }
                }
                label { class: "block mb-2", r#for: "auth-password", "Password" }
                div { class: "mb-4",
                    TextInput {
                        value: password,
                        on_input: move |v| on_password_change.call(v),
                        size: TextInputSize::Medium,
                        input_type: "password",
                        name: "password",
                        id: "auth-password".to_string(),
                        required: true,
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    class: "w-full".to_string(),
                    onclick: |_| {},
                    "{title}"
                }
            }
        }
    }
}
