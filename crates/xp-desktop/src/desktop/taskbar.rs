//! Taskbar read model

use serde::Serialize;

use crate::types::WindowId;

/// One open window's button on the taskbar
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarItem {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
}

/// Everything the taskbar needs to draw itself
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarView {
    /// Open windows (minimized included) in catalogue order
    pub items: Vec<TaskbarItem>,
    /// Topmost visible window, drawn pressed
    pub active: Option<WindowId>,
    pub start_menu_open: bool,
}
