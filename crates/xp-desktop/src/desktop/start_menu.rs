//! Start menu entries

use serde::{Deserialize, Serialize};

use crate::types::WindowId;

/// Intent raised by a start menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "window")]
pub enum StartMenuAction {
    /// Open a window
    Open(WindowId),
    /// End the session and return to the boot screen
    LogOff,
    /// Show the turn-off dialog
    ShutDown,
}

/// Session-level request the desktop hands back to its owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    LogOff,
    ShutDown,
}

/// One actionable start menu entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StartMenuEntry {
    pub label: &'static str,
    pub action: StartMenuAction,
}

/// Actionable entries in menu order
pub fn start_menu_entries() -> Vec<StartMenuEntry> {
    vec![
        StartMenuEntry {
            label: "My Projects",
            action: StartMenuAction::Open(WindowId::Projects),
        },
        StartMenuEntry {
            label: "Contact Me",
            action: StartMenuAction::Open(WindowId::Contact),
        },
        StartMenuEntry {
            label: "About Me",
            action: StartMenuAction::Open(WindowId::About),
        },
        StartMenuEntry {
            label: "Video Player",
            action: StartMenuAction::Open(WindowId::Video),
        },
        StartMenuEntry {
            label: "Music Player",
            action: StartMenuAction::Open(WindowId::Audio),
        },
        StartMenuEntry {
            label: "My Resume",
            action: StartMenuAction::Open(WindowId::Resume),
        },
        StartMenuEntry {
            label: "Log Off",
            action: StartMenuAction::LogOff,
        },
        StartMenuEntry {
            label: "Turn Off Computer",
            action: StartMenuAction::ShutDown,
        },
    ]
}
