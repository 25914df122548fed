//! App layout view component
//!
//! Centered page column with slots for the navbar and overlays.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Active page content
    children: Element,
    /// Navigation bar at the top
    #[props(default)]
    navbar: Option<Element>,
    /// Dialogs rendered above everything else
    #[props(default)]
    overlay: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-100 p-6",
            div { class: "max-w-6xl mx-auto",
                if let Some(nav) = navbar {
                    {nav}
                }
                main { {children} }
            }
            if let Some(ov) = overlay {
                {ov}
            }
        }
    }
}
