use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No page at /{}", path);

    rsx! {
        section {
            class: "hero",
            h1 { "404" }
            p { class: "hero-lead", "The page /{path} was not found." }
            Link { class: "btn btn-primary", to: Route::Welcome {}, "Back to home" }
        }
    }
}
