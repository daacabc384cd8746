use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Explicit themes flip; `System` always toggles into dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::System => Theme::Dark,
        }
    }

    /// Resolve to a dark/light decision given the OS preference.
    pub fn resolve_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => system_prefers_dark,
        }
    }
}

/// Global theme state
pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

const STORAGE_KEY: &str = "neuronest_theme";
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Initialize theme from localStorage or system preference
pub fn init_theme() {
    if let Ok(theme_str) = LocalStorage::get::<String>(STORAGE_KEY) {
        let theme = Theme::from_str(&theme_str);
        *THEME.write() = theme;
        log::info!("Loaded theme from storage: {:?}", theme);
    } else {
        *THEME.write() = Theme::System;
        log::info!("Using system theme preference");
    }

    apply_theme();
}

/// Set theme, persist it and apply it to the document
pub fn set_theme(theme: Theme) {
    if *THEME.read() == theme {
        return;
    }

    *THEME.write() = theme;
    if let Err(e) = LocalStorage::set(STORAGE_KEY, theme.as_str()) {
        log::warn!("Failed to persist theme: {}", e);
    }
    log::info!("Theme changed to: {:?}", theme);
    apply_theme();
}

/// Toggle between light and dark themes
pub fn toggle_theme() {
    let current = *THEME.read();
    set_theme(current.toggled());
}

/// Check if dark mode is active
pub fn is_dark_mode() -> bool {
    THEME.read().resolve_dark(system_prefers_dark())
}

/// Apply theme to document
pub fn apply_theme() {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|document| document.document_element());

        if let Some(root) = root {
            // peek: applying must not subscribe the caller to THEME
            let dark = THEME.peek().resolve_dark(system_prefers_dark());
            let class = if dark { "dark" } else { "" };
            root.set_attribute("class", class).ok();
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media)) = window.match_media(DARK_QUERY) {
                return media.matches();
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_str("sepia"), Theme::System);
        assert_eq!(Theme::from_str(""), Theme::System);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::System.toggled(), Theme::Dark);
    }

    #[test]
    fn test_resolve_dark() {
        assert!(Theme::Dark.resolve_dark(false));
        assert!(!Theme::Light.resolve_dark(true));
        assert!(Theme::System.resolve_dark(true));
        assert!(!Theme::System.resolve_dark(false));
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Theme::default(), Theme::System);
    }
}
