use dioxus::prelude::*;

use crate::components::auth_widgets::{SignInButton, SignInMode, UserButton};
use crate::components::icons::BrainIcon;
use crate::components::nav_entries::{
    activate, location_pathname, panel_class, rows_for_location, NavIconGlyph,
};
use crate::routes::Route;

/// Fixed left panel: brand, account controls and the route list.
///
/// Highlighting follows the browser's current pathname. `active_tab` is only
/// written back through `set_active_tab` and exposed as a data attribute.
#[component]
pub fn NavigationSidebar(
    active_tab: String,
    set_active_tab: EventHandler<String>,
    is_dark_mode: bool,
) -> Element {
    // Subscribes to route changes; matching itself uses the raw pathname
    let route_path = use_route::<Route>().to_string();
    let rows = rows_for_location(location_pathname(), &route_path, is_dark_mode);
    let panel = panel_class(is_dark_mode);

    rsx! {
        div {
            class: "{panel}",
            "data-active-tab": "{active_tab}",

            // Header
            div {
                class: "sticky top-0 z-10 p-6 border-b border-gray-100/10 backdrop-blur-xl bg-opacity-90",
                div {
                    class: "flex items-center justify-between mb-6",
                    div {
                        class: "flex items-center space-x-3",
                        div {
                            class: "p-2.5 rounded-2xl bg-gradient-to-br from-purple-500 to-pink-500 shadow-lg shadow-purple-500/20",
                            BrainIcon { class: "h-6 w-6 text-white animate-pulse" }
                        }
                        h1 {
                            class: "text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-purple-400 to-pink-400",
                            "NeuroNest"
                        }
                    }
                }

                div {
                    class: "flex items-center justify-between",
                    UserButton {
                        after_sign_out: Route::Dashboard {},
                        avatar_class: "h-10 w-10",
                    }
                    SignInButton {
                        mode: SignInMode::Modal,
                        button {
                            class: "px-4 py-2 rounded-xl bg-gradient-to-r from-purple-500 to-pink-500 text-white text-sm font-medium hover:opacity-90 transition-opacity",
                            "Sign in"
                        }
                    }
                }
            }

            nav {
                class: "p-4",
                div {
                    class: "space-y-2",
                    for row in rows {
                        Link {
                            key: "{row.entry.id}",
                            to: row.entry.route.clone(),
                            class: "{row.link_class}",
                            onclick: move |_| {
                                let target = activate(row.entry, |id| set_active_tab.call(id));
                                log::debug!("Sidebar selected {}", target);
                            },
                            div { class: "{row.overlay_class}" }
                            div {
                                class: "{row.item_class}",
                                NavIconGlyph { icon: row.entry.icon, class: row.icon_class.clone() }
                                span { class: "font-medium text-sm", "{row.entry.label}" }
                                if row.active {
                                    div { class: "absolute right-2 w-2 h-2 rounded-full bg-white/50" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
