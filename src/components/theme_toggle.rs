use dioxus::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::stores::theme_store;

#[component]
pub fn ThemeToggle(is_dark_mode: bool) -> Element {
    let (label, button_class) = if is_dark_mode {
        ("Switch to light mode", "text-gray-300 hover:bg-gray-800")
    } else {
        ("Switch to dark mode", "text-gray-600 hover:bg-gray-100")
    };

    rsx! {
        button {
            class: "p-2 rounded-xl transition {button_class}",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| theme_store::toggle_theme(),
            if is_dark_mode {
                SunIcon { class: "w-5 h-5" }
            } else {
                MoonIcon { class: "w-5 h-5" }
            }
        }
    }
}
