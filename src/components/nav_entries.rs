//! Static navigation table and the pure styling rules the sidebar renders from.

use dioxus::prelude::*;

use crate::components::icons::{
    CalendarIcon, CameraIcon, ClockIcon, Gamepad2Icon, HomeIcon, MapIcon, MessageCircleIcon,
    MicIcon, MusicIcon, PillIcon, SettingsIcon, SmileIcon,
};
use crate::routes::Route;

/// Tab selected when the current path matches no entry
pub const DEFAULT_TAB: &str = "dashboard";

/// Glyph shown next to an entry's label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Camera,
    Map,
    Gamepad2,
    MessageCircle,
    Calendar,
    Pill,
    Smile,
    Clock,
    Music,
    Mic,
    Settings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub icon: NavIcon,
    pub label: &'static str,
    pub id: &'static str,
    pub path: &'static str,
    /// Tailwind gradient stops, e.g. `from-cyan-500 to-teal-500`
    pub gradient: &'static str,
    pub route: Route,
}

pub static NAV_ENTRIES: [NavEntry; 12] = [
    NavEntry { icon: NavIcon::Home, label: "Dashboard", id: "dashboard", path: "/", gradient: "from-violet-500 to-purple-500", route: Route::Dashboard {} },
    NavEntry { icon: NavIcon::Camera, label: "Recognition", id: "recognition", path: "/recognition", gradient: "from-purple-500 to-indigo-500", route: Route::Recognition {} },
    NavEntry { icon: NavIcon::Map, label: "Safety Zones", id: "safety", path: "/safety-zones", gradient: "from-indigo-500 to-blue-500", route: Route::SafetyZones {} },
    NavEntry { icon: NavIcon::Gamepad2, label: "Activities", id: "activities", path: "/activities", gradient: "from-blue-500 to-cyan-500", route: Route::Activities {} },
    NavEntry { icon: NavIcon::MessageCircle, label: "Chat", id: "chat", path: "/chat", gradient: "from-cyan-500 to-teal-500", route: Route::Chat {} },
    NavEntry { icon: NavIcon::Calendar, label: "Tasks", id: "tasks", path: "/tasks", gradient: "from-teal-500 to-emerald-500", route: Route::Tasks {} },
    NavEntry { icon: NavIcon::Pill, label: "Medication", id: "medication", path: "/medication", gradient: "from-emerald-500 to-green-500", route: Route::Medication {} },
    NavEntry { icon: NavIcon::Smile, label: "Mood Tracker", id: "mood", path: "/mood-tracker", gradient: "from-rose-500 to-pink-500", route: Route::MoodTracker {} },
    NavEntry { icon: NavIcon::Clock, label: "Reminders", id: "reminders", path: "/reminders", gradient: "from-pink-500 to-fuchsia-500", route: Route::Reminders {} },
    NavEntry { icon: NavIcon::Music, label: "Music Therapy", id: "music", path: "/music-therapy", gradient: "from-fuchsia-500 to-purple-500", route: Route::MusicTherapy {} },
    NavEntry { icon: NavIcon::Mic, label: "Voice Notes", id: "voice", path: "/voice-notes", gradient: "from-purple-500 to-violet-500", route: Route::VoiceNotes {} },
    NavEntry { icon: NavIcon::Settings, label: "Settings", id: "settings", path: "/settings", gradient: "from-gray-500 to-slate-500", route: Route::Settings {} },
];

/// Look up an entry by its stable id
pub fn entry_by_id(id: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.id == id)
}

/// Exact string match; `/chat/` does not match `/chat`.
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.path == current_path
}

/// Tab id for a path, falling back to [`DEFAULT_TAB`]
pub fn tab_for_path(current_path: &str) -> &'static str {
    NAV_ENTRIES
        .iter()
        .find(|entry| is_active(entry, current_path))
        .map(|entry| entry.id)
        .unwrap_or(DEFAULT_TAB)
}

/// Report the selection to the host and hand back the link target.
pub fn activate(entry: &NavEntry, set_active_tab: impl FnOnce(String)) -> Route {
    set_active_tab(entry.id.to_string());
    entry.route.clone()
}

/// Theme-dependent style tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub inactive_text: &'static str,
    pub hover_opacity: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: "bg-gray-900/95",
        border: "border-gray-800",
        inactive_text: "text-gray-400 hover:text-white",
        hover_opacity: "opacity-10",
    };

    pub const LIGHT: Palette = Palette {
        background: "bg-white/95",
        border: "border-gray-100",
        inactive_text: "text-gray-600 hover:text-gray-900",
        hover_opacity: "opacity-5",
    };

    pub fn for_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

pub fn panel_class(is_dark_mode: bool) -> String {
    let palette = Palette::for_mode(is_dark_mode);
    format!(
        "fixed left-0 top-0 h-full w-72 {} shadow-xl overflow-y-auto border-r backdrop-blur-md {}",
        palette.background, palette.border
    )
}

/// Everything the sidebar needs to draw one entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavRow {
    pub entry: &'static NavEntry,
    pub active: bool,
    pub link_class: String,
    pub overlay_class: String,
    pub item_class: String,
    pub icon_class: String,
}

impl NavRow {
    fn new(entry: &'static NavEntry, active: bool, palette: Palette) -> Self {
        let link_class = if active {
            "block w-full group relative scale-[1.02]".to_string()
        } else {
            "block w-full group relative".to_string()
        };

        let overlay_class = format!(
            "absolute inset-0 rounded-xl opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-gradient-to-r {} {}",
            entry.gradient, palette.hover_opacity
        );

        let state_class = if active {
            format!("bg-gradient-to-r {} text-white shadow-lg", entry.gradient)
        } else {
            palette.inactive_text.to_string()
        };
        let item_class = format!(
            "relative flex items-center px-4 py-3 rounded-xl transition-all duration-300 ease-out {}",
            state_class
        );

        let icon_class = if active {
            "h-5 w-5 mr-3 transition-all duration-300 group-hover:scale-110 group-hover:rotate-3 text-white".to_string()
        } else {
            "h-5 w-5 mr-3 transition-all duration-300 group-hover:scale-110 group-hover:rotate-3".to_string()
        };

        Self {
            entry,
            active,
            link_class,
            overlay_class,
            item_class,
            icon_class,
        }
    }
}

/// One row per entry, in declared order
pub fn nav_rows(current_path: &str, is_dark_mode: bool) -> Vec<NavRow> {
    let palette = Palette::for_mode(is_dark_mode);
    NAV_ENTRIES
        .iter()
        .map(|entry| NavRow::new(entry, is_active(entry, current_path), palette))
        .collect()
}

/// Rows for the path the browser actually shows.
///
/// `raw_pathname` is the unparsed location path; the router's rendered path is
/// only used when no raw path is available.
pub fn rows_for_location(raw_pathname: Option<String>, route_path: &str, is_dark_mode: bool) -> Vec<NavRow> {
    let path = raw_pathname.unwrap_or_else(|| route_path.to_string());
    nav_rows(&path, is_dark_mode)
}

/// `window.location.pathname`, unnormalized
pub fn location_pathname() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(pathname) = window.location().pathname() {
                return Some(pathname);
            }
        }
    }
    None
}

#[component]
pub fn NavIconGlyph(icon: NavIcon, class: String) -> Element {
    match icon {
        NavIcon::Home => rsx! { HomeIcon { class } },
        NavIcon::Camera => rsx! { CameraIcon { class } },
        NavIcon::Map => rsx! { MapIcon { class } },
        NavIcon::Gamepad2 => rsx! { Gamepad2Icon { class } },
        NavIcon::MessageCircle => rsx! { MessageCircleIcon { class } },
        NavIcon::Calendar => rsx! { CalendarIcon { class } },
        NavIcon::Pill => rsx! { PillIcon { class } },
        NavIcon::Smile => rsx! { SmileIcon { class } },
        NavIcon::Clock => rsx! { ClockIcon { class } },
        NavIcon::Music => rsx! { MusicIcon { class } },
        NavIcon::Mic => rsx! { MicIcon { class } },
        NavIcon::Settings => rsx! { SettingsIcon { class } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(rows: &[NavRow]) -> Vec<&'static str> {
        rows.iter().map(|row| row.entry.id).collect()
    }

    #[test]
    fn test_twelve_entries_in_declared_order() {
        let ids: Vec<_> = NAV_ENTRIES.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "dashboard", "recognition", "safety", "activities", "chat", "tasks",
                "medication", "mood", "reminders", "music", "voice", "settings",
            ]
        );
        assert_eq!(nav_rows("/", false).len(), 12);
    }

    #[test]
    fn test_ids_and_paths_are_distinct() {
        let ids: HashSet<_> = NAV_ENTRIES.iter().map(|e| e.id).collect();
        let paths: HashSet<_> = NAV_ENTRIES.iter().map(|e| e.path).collect();
        assert_eq!(ids.len(), NAV_ENTRIES.len());
        assert_eq!(paths.len(), NAV_ENTRIES.len());
    }

    #[test]
    fn test_route_renders_entry_path() {
        for entry in NAV_ENTRIES.iter() {
            assert_eq!(entry.route.to_string(), entry.path, "entry {}", entry.id);
        }
    }

    #[test]
    fn test_exactly_one_active_per_entry_path() {
        for entry in NAV_ENTRIES.iter() {
            let rows = nav_rows(entry.path, false);
            let active: Vec<_> = rows.iter().filter(|r| r.active).map(|r| r.entry.id).collect();
            assert_eq!(active, vec![entry.id]);
        }
    }

    #[test]
    fn test_chat_path_highlights_only_chat() {
        let rows = nav_rows("/chat", true);
        for row in &rows {
            if row.entry.id == "chat" {
                assert!(row.active);
                assert!(row.item_class.contains("bg-gradient-to-r from-cyan-500 to-teal-500 text-white shadow-lg"));
                assert!(row.link_class.contains("scale-[1.02]"));
                assert!(row.icon_class.ends_with("text-white"));
            } else {
                assert!(!row.active);
                assert!(!row.item_class.contains("text-white shadow-lg"));
                assert!(row.item_class.contains("text-gray-400 hover:text-white"));
            }
        }
    }

    #[test]
    fn test_no_prefix_or_trailing_slash_matching() {
        assert!(nav_rows("/chat/", false).iter().all(|r| !r.active));
        assert!(nav_rows("/chat/history", false).iter().all(|r| !r.active));
        assert!(nav_rows("/Chat", false).iter().all(|r| !r.active));
        assert!(nav_rows("/unknown", false).iter().all(|r| !r.active));
        assert!(nav_rows("", false).iter().all(|r| !r.active));
    }

    #[test]
    fn test_location_path_is_not_normalized_by_router() {
        // "/chat/" parses to Route::Chat, which renders as "/chat"
        let route_path = Route::Chat {}.to_string();
        let rows = rows_for_location(Some("/chat/".to_string()), &route_path, false);
        assert!(rows.iter().all(|r| !r.active));

        let rows = rows_for_location(Some("/chat".to_string()), &route_path, false);
        let active: Vec<_> = rows.iter().filter(|r| r.active).map(|r| r.entry.id).collect();
        assert_eq!(active, vec!["chat"]);
    }

    #[test]
    fn test_location_falls_back_to_route_path() {
        let rows = rows_for_location(None, "/tasks", true);
        let active: Vec<_> = rows.iter().filter(|r| r.active).map(|r| r.entry.id).collect();
        assert_eq!(active, vec!["tasks"]);
    }

    #[test]
    fn test_dark_mode_changes_only_styles() {
        let light = nav_rows("/tasks", false);
        let dark = nav_rows("/tasks", true);
        assert_eq!(ids(&light), ids(&dark));
        assert_eq!(
            light.iter().map(|r| r.active).collect::<Vec<_>>(),
            dark.iter().map(|r| r.active).collect::<Vec<_>>()
        );

        let inactive_light = &light[0];
        let inactive_dark = &dark[0];
        assert!(inactive_light.item_class.contains("text-gray-600 hover:text-gray-900"));
        assert!(inactive_dark.item_class.contains("text-gray-400 hover:text-white"));
        assert!(inactive_light.overlay_class.ends_with("opacity-5"));
        assert!(inactive_dark.overlay_class.ends_with("opacity-10"));
    }

    #[test]
    fn test_panel_palette() {
        let dark = panel_class(true);
        assert!(dark.contains("bg-gray-900/95"));
        assert!(dark.contains("border-gray-800"));

        let light = panel_class(false);
        assert!(light.contains("bg-white/95"));
        assert!(light.contains("border-gray-100"));
        assert!(light.starts_with("fixed left-0 top-0 h-full w-72"));
    }

    #[test]
    fn test_activate_reports_id_once_and_targets_path() {
        for entry in NAV_ENTRIES.iter() {
            let mut calls = Vec::new();
            let target = activate(entry, |id| calls.push(id));
            assert_eq!(calls, vec![entry.id.to_string()]);
            assert_eq!(target.to_string(), entry.path);
        }

        let tasks = entry_by_id("tasks").unwrap();
        let mut selected = None;
        let target = activate(tasks, |id| selected = Some(id));
        assert_eq!(selected.as_deref(), Some("tasks"));
        assert_eq!(target, Route::Tasks {});
        assert_eq!(target.to_string(), "/tasks");
    }

    #[test]
    fn test_tab_for_path() {
        assert_eq!(tab_for_path("/"), "dashboard");
        assert_eq!(tab_for_path("/mood-tracker"), "mood");
        assert_eq!(tab_for_path("/voice-notes"), "voice");
        assert_eq!(tab_for_path("/nowhere"), DEFAULT_TAB);
    }

    #[test]
    fn test_entry_by_id() {
        assert_eq!(entry_by_id("safety").map(|e| e.path), Some("/safety-zones"));
        assert!(entry_by_id("missing").is_none());
    }
}
