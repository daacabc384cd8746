use dioxus::prelude::*;

pub mod dashboard;
pub mod features;
pub mod not_found;
pub mod settings;

use dashboard::Dashboard;
use features::{
    Activities, Chat, Medication, MoodTracker, MusicTherapy, Recognition, Reminders, SafetyZones,
    Tasks, VoiceNotes,
};
use not_found::PageNotFound;
use settings::Settings;

use crate::components::nav_entries::{location_pathname, tab_for_path};
use crate::components::{NavigationSidebar, ThemeToggle};
use crate::stores::theme_store;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},

        #[route("/recognition")]
        Recognition {},

        #[route("/safety-zones")]
        SafetyZones {},

        #[route("/activities")]
        Activities {},

        #[route("/chat")]
        Chat {},

        #[route("/tasks")]
        Tasks {},

        #[route("/medication")]
        Medication {},

        #[route("/mood-tracker")]
        MoodTracker {},

        #[route("/reminders")]
        Reminders {},

        #[route("/music-therapy")]
        MusicTherapy {},

        #[route("/voice-notes")]
        VoiceNotes {},

        #[route("/settings")]
        Settings {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Owns the tab bookkeeping and the resolved theme for the sidebar
#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let initial_path = location_pathname().unwrap_or_else(|| current_route.to_string());
    let mut active_tab = use_signal(|| tab_for_path(&initial_path).to_string());
    let is_dark_mode = theme_store::is_dark_mode();

    let shell_class = if is_dark_mode {
        "bg-gray-950 text-gray-100"
    } else {
        "bg-gray-50 text-gray-900"
    };

    rsx! {
        div {
            class: "min-h-screen transition-colors {shell_class}",

            NavigationSidebar {
                active_tab: active_tab(),
                set_active_tab: move |id: String| {
                    log::debug!("Active tab: {}", id);
                    active_tab.set(id);
                },
                is_dark_mode,
            }

            main {
                class: "ml-72 min-h-screen p-8",
                div {
                    class: "flex justify-end mb-6",
                    ThemeToggle { is_dark_mode }
                }
                Outlet::<Route> {}
            }
        }
    }
}
