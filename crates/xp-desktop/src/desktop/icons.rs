//! Desktop shortcut icons

use serde::Serialize;

use crate::types::WindowId;
use crate::window::icon_url;

/// Shortcut drawn on the desktop background
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopIcon {
    pub id: WindowId,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Shortcuts in top-to-bottom order
pub fn desktop_icons() -> Vec<DesktopIcon> {
    [
        (WindowId::About, "About Me"),
        (WindowId::Projects, "My Projects"),
        (WindowId::Contact, "My Contact"),
        (WindowId::Skills, "Skills"),
    ]
    .into_iter()
    .map(|(id, label)| DesktopIcon {
        id,
        icon: icon_url(id),
        label,
    })
    .collect()
}
