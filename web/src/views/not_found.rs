use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "page",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
