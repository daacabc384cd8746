use dioxus::prelude::*;

use crate::components::nav_entries::{NavIconGlyph, DEFAULT_TAB, NAV_ENTRIES};
use crate::components::{SignInButton, SignInMode};
use crate::stores::auth_store;

#[component]
pub fn Dashboard() -> Element {
    let greeting = match auth_store::current_session() {
        Some(session) => format!("Welcome back, {}", session.display_name),
        None => "Welcome to NeuroNest".to_string(),
    };

    rsx! {
        section {
            h2 {
                class: "text-3xl font-bold mb-2",
                "{greeting}"
            }
            div {
                class: "flex items-center gap-4 mb-8",
                p {
                    class: "text-gray-600 dark:text-gray-400",
                    "Pick up where you left off."
                }
                SignInButton {
                    mode: SignInMode::Redirect,
                    button {
                        class: "text-sm font-medium text-purple-500 hover:underline",
                        "Sign in to personalize"
                    }
                }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-4",
                for entry in NAV_ENTRIES.iter().filter(|entry| entry.id != DEFAULT_TAB) {
                    Link {
                        key: "{entry.id}",
                        to: entry.route.clone(),
                        class: "group flex items-center gap-4 p-5 rounded-2xl bg-white dark:bg-gray-900 shadow hover:shadow-lg transition",
                        div {
                            class: "p-3 rounded-xl bg-gradient-to-br {entry.gradient} text-white",
                            NavIconGlyph { icon: entry.icon, class: "h-5 w-5" }
                        }
                        span {
                            class: "font-medium",
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
