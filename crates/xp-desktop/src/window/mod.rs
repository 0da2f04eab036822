//! Window module
//!
//! Provides the per-window pieces of the window manager: the static
//! descriptor of each application window, the live window entity that owns
//! geometry and gestures, the control bindings injected into content panes,
//! and the pointer-capture guard held for the duration of a gesture.

mod capture;
mod controls;
mod descriptor;
mod entity;

pub use capture::{CaptureGuard, CaptureTracker, PointerCapture};
pub use controls::{ControlBinding, ControlSlot, TitleBarButton, WindowAction, WindowControls};
pub use descriptor::{catalogue, WindowDescriptor};
pub(crate) use descriptor::icon_url;
pub use entity::{GestureKind, WindowEntity, WindowGeometry};

pub use crate::types::WindowId;

use serde::{Deserialize, Serialize};

/// Derived lifecycle state of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Closed,
    Normal,
    Minimized,
    Maximized,
}
