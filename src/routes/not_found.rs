use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section {
            class: "max-w-xl",
            h2 {
                class: "text-3xl font-bold mb-2",
                "Page not found"
            }
            p {
                class: "text-gray-600 dark:text-gray-400 mb-6",
                "Nothing lives at {path}."
            }
            Link {
                to: Route::Dashboard {},
                class: "px-4 py-2 rounded-xl bg-gradient-to-r from-purple-500 to-pink-500 text-white text-sm font-medium hover:opacity-90 transition-opacity",
                "Back to dashboard"
            }
        }
    }
}
