use dioxus::prelude::*;

use crate::components::SignInForm;
use crate::stores::{auth_store, theme_store};
use crate::stores::theme_store::Theme;

const SELECTED: &str = "flex-1 px-4 py-3 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-xl font-medium";
const UNSELECTED: &str = "flex-1 px-4 py-3 bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-xl hover:bg-gray-300 dark:hover:bg-gray-600 transition";

#[component]
pub fn Settings() -> Element {
    let theme = *theme_store::THEME.read();
    let auth = auth_store::AUTH_STATE.read();

    rsx! {
        div {
            class: "max-w-2xl space-y-6",
            h2 {
                class: "text-3xl font-bold",
                "Settings"
            }

            // Appearance
            div {
                class: "bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6",
                h3 {
                    class: "text-xl font-semibold mb-4",
                    "Appearance"
                }
                div {
                    class: "flex gap-3",
                    for (option, label) in [(Theme::Light, "Light"), (Theme::Dark, "Dark"), (Theme::System, "System")] {
                        button {
                            key: "{label}",
                            class: if theme == option { SELECTED } else { UNSELECTED },
                            onclick: move |_| theme_store::set_theme(option),
                            "{label}"
                        }
                    }
                }
            }

            // Account
            div {
                class: "bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6",
                h3 {
                    class: "text-xl font-semibold mb-4",
                    "Account"
                }
                if let Some(session) = auth.session.as_ref() {
                    div {
                        class: "flex items-center justify-between",
                        div {
                            p { class: "font-medium", "{session.display_name}" }
                            p { class: "text-sm text-gray-500 dark:text-gray-400", "{session.email}" }
                        }
                        button {
                            class: "px-4 py-2 rounded-xl bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 transition text-sm",
                            onclick: move |_| auth_store::sign_out(),
                            "Sign out"
                        }
                    }
                } else {
                    SignInForm {}
                }
            }
        }
    }
}
