//! Window control bindings
//!
//! Content panes never touch window geometry. They receive a
//! [`WindowControls`] record whose four slots (exit, minimize, maximize,
//! restore) each name the [`WindowAction`] the window container performs.
//!
//! The slot-to-action mapping is chosen per window by a [`ControlBinding`].
//! Most panes use [`ControlBinding::Standard`], where the pane's "Minimize"
//! collapses a maximized window back to its remembered rectangle and its
//! "Restore" hides the window to the taskbar. The resume pane uses
//! [`ControlBinding::Toolbar`], where "Minimize" hides to the taskbar.

use serde::{Deserialize, Serialize};

use crate::types::WindowId;

/// Operation the window container performs on behalf of a pane or button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowAction {
    /// Close the window
    Close,
    /// Hide the window while keeping it in the taskbar
    MinimizeToTaskbar,
    /// Fill the desktop above the taskbar (no-op when already maximized)
    Maximize,
    /// Return a maximized window to its saved rectangle (no-op otherwise)
    ToggleMaximizeOff,
}

/// Slot of the controls record injected into a content pane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSlot {
    Exit,
    Minimize,
    Maximize,
    Restore,
}

/// Buttons drawn in the window chrome's title bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleBarButton {
    Minimize,
    Maximize,
    Close,
}

/// Strategy mapping control slots to window actions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlBinding {
    /// Pane toolbar: Minimize un-maximizes, Restore hides to the taskbar
    #[default]
    Standard,
    /// Menu toolbar: Minimize hides to the taskbar, Restore un-maximizes
    Toolbar,
}

impl ControlBinding {
    /// Action bound to a slot
    pub fn action(self, slot: ControlSlot) -> WindowAction {
        match (self, slot) {
            (_, ControlSlot::Exit) => WindowAction::Close,
            (_, ControlSlot::Maximize) => WindowAction::Maximize,
            (ControlBinding::Standard, ControlSlot::Minimize) => WindowAction::ToggleMaximizeOff,
            (ControlBinding::Standard, ControlSlot::Restore) => WindowAction::MinimizeToTaskbar,
            (ControlBinding::Toolbar, ControlSlot::Minimize) => WindowAction::MinimizeToTaskbar,
            (ControlBinding::Toolbar, ControlSlot::Restore) => WindowAction::ToggleMaximizeOff,
        }
    }

    /// Whether the pane should offer a slot's menu entry
    pub fn is_enabled(self, slot: ControlSlot, is_maximized: bool) -> bool {
        match slot {
            ControlSlot::Exit => true,
            ControlSlot::Restore => false,
            ControlSlot::Maximize => !is_maximized,
            ControlSlot::Minimize => match self {
                ControlBinding::Standard => is_maximized,
                ControlBinding::Toolbar => true,
            },
        }
    }
}

/// Controls record handed to a content pane
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowControls {
    pub id: WindowId,
    pub title: String,
    pub is_maximized: bool,
    pub binding: ControlBinding,
    pub on_exit: WindowAction,
    pub on_minimize: WindowAction,
    pub on_maximize: WindowAction,
    pub on_restore: WindowAction,
}

impl WindowControls {
    /// Build the record for a window under a binding
    pub fn new(id: WindowId, title: &str, is_maximized: bool, binding: ControlBinding) -> Self {
        Self {
            id,
            title: title.to_string(),
            is_maximized,
            binding,
            on_exit: binding.action(ControlSlot::Exit),
            on_minimize: binding.action(ControlSlot::Minimize),
            on_maximize: binding.action(ControlSlot::Maximize),
            on_restore: binding.action(ControlSlot::Restore),
        }
    }

    /// Action bound to a slot
    pub fn action(&self, slot: ControlSlot) -> WindowAction {
        match slot {
            ControlSlot::Exit => self.on_exit,
            ControlSlot::Minimize => self.on_minimize,
            ControlSlot::Maximize => self.on_maximize,
            ControlSlot::Restore => self.on_restore,
        }
    }

    /// Whether a slot's menu entry is enabled
    pub fn is_enabled(&self, slot: ControlSlot) -> bool {
        self.binding.is_enabled(slot, self.is_maximized)
    }
}
