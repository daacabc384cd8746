use dioxus::prelude::*;

use crate::components::nav_entries::{entry_by_id, NavIconGlyph};

/// Header card shared by the feature pages
#[component]
fn FeaturePage(id: &'static str, description: &'static str) -> Element {
    let Some(entry) = entry_by_id(id) else {
        log::warn!("No navigation entry for page id {}", id);
        return rsx! {};
    };

    rsx! {
        section {
            class: "max-w-3xl",
            div {
                class: "flex items-center gap-4 mb-4",
                div {
                    class: "p-3 rounded-2xl bg-gradient-to-br {entry.gradient} text-white shadow-lg",
                    NavIconGlyph { icon: entry.icon, class: "h-6 w-6" }
                }
                h2 {
                    class: "text-3xl font-bold",
                    "{entry.label}"
                }
            }
            p {
                class: "text-gray-600 dark:text-gray-400",
                "{description}"
            }
        }
    }
}

#[component]
pub fn Recognition() -> Element {
    rsx! {
        FeaturePage {
            id: "recognition",
            description: "Recognize familiar faces and objects with the camera.",
        }
    }
}

#[component]
pub fn SafetyZones() -> Element {
    rsx! {
        FeaturePage {
            id: "safety",
            description: "Define safe areas on the map and get notified when they are left.",
        }
    }
}

#[component]
pub fn Activities() -> Element {
    rsx! {
        FeaturePage {
            id: "activities",
            description: "Memory games and exercises to keep the mind active.",
        }
    }
}

#[component]
pub fn Chat() -> Element {
    rsx! {
        FeaturePage {
            id: "chat",
            description: "Talk with a companion assistant any time of day.",
        }
    }
}

#[component]
pub fn Tasks() -> Element {
    rsx! {
        FeaturePage {
            id: "tasks",
            description: "Plan the day with simple, step-by-step tasks.",
        }
    }
}

#[component]
pub fn Medication() -> Element {
    rsx! {
        FeaturePage {
            id: "medication",
            description: "Keep track of doses and schedules.",
        }
    }
}

#[component]
pub fn MoodTracker() -> Element {
    rsx! {
        FeaturePage {
            id: "mood",
            description: "Log how you feel and spot patterns over time.",
        }
    }
}

#[component]
pub fn Reminders() -> Element {
    rsx! {
        FeaturePage {
            id: "reminders",
            description: "Gentle reminders for appointments and routines.",
        }
    }
}

#[component]
pub fn MusicTherapy() -> Element {
    rsx! {
        FeaturePage {
            id: "music",
            description: "Familiar music to calm, focus and recall.",
        }
    }
}

#[component]
pub fn VoiceNotes() -> Element {
    rsx! {
        FeaturePage {
            id: "voice",
            description: "Record short notes to listen back to later.",
        }
    }
}
