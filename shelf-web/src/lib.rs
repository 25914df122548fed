pub mod api;
pub mod files;
pub mod pages;
pub mod session;

use dioxus::prelude::*;
use pages::Bookstore;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Bookstore" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        Bookstore {}
    }
}
