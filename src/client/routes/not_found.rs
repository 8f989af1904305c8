use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page not found | Enzonic Games" }
        Page { class: "centered",
            div { class: "glass-panel hero",
                h1 { class: "neon-text", "404" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
            }
        }
    )
}
