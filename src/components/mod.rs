// UI Components
// This module contains all reusable UI components

pub mod auth_widgets;
pub mod icons;
pub mod nav_entries;
pub mod sidebar;
pub mod theme_toggle;

pub use auth_widgets::{SignInButton, SignInForm, SignInMode};
pub use sidebar::NavigationSidebar;
pub use theme_toggle::ThemeToggle;
