//! Window Manager Core for the XP Portfolio Desktop
//!
//! This crate provides the state behind a Windows XP-style portfolio shell:
//! - Window lifecycle (open, close, minimize, focus, z-order)
//! - Drag and eight-direction resize gestures with a minimum size
//! - Maximize and restore with a remembered rectangle
//! - Taskbar, start menu and desktop icon read models
//! - Boot, login and shutdown sequencing
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Pure drag and resize calculations
//! - [`window`]: Window descriptors, entities, controls and pointer capture
//! - [`desktop`]: The [`DesktopController`] and its render read models
//! - [`session`]: Shell phases driven by an injected clock
//! - [`preferences`]: Persisted display settings
//!
//! ## Example
//!
//! ```rust
//! use xp_desktop::{DesktopController, Vec2, WindowId};
//!
//! let mut desktop = DesktopController::default();
//! desktop.open_window(WindowId::Projects);
//! desktop.open_window(WindowId::Contact);
//!
//! desktop.begin_drag(WindowId::Projects, Vec2::new(200.0, 90.0));
//! desktop.pointer_move(Vec2::new(260.0, 120.0));
//! desktop.pointer_up();
//!
//! assert_eq!(desktop.active_window_id(), Some(WindowId::Projects));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state lives in plain structs, testable without a browser
//! 2. **Time Abstraction**: Timed steps take `now_ms` from the host
//! 3. **Single Owner**: Geometry belongs to the window entity, stacking to the controller

pub mod config;
pub mod desktop;
pub mod error;
pub mod geometry;
pub mod math;
pub mod preferences;
pub mod session;
pub mod types;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::DesktopConfig;
pub use desktop::{
    desktop_icons, start_menu_entries, DesktopController, DesktopIcon, FavoritesSet,
    SessionIntent, StartMenuAction, StartMenuEntry, TaskbarItem, TaskbarView, WindowFrame,
};
pub use error::{DesktopError, DesktopResult};
pub use geometry::{compute_drag_position, compute_resize, ResizeDirection};
pub use math::{Rect, Size, Vec2};
pub use preferences::{DisplayPreferences, MemoryPreferenceStore, PreferenceStore};
pub use session::{Session, SessionPhase, ShutdownChoice, ShutdownDialog};
pub use types::{WindowId, ZIndex};
pub use window::{
    CaptureGuard, CaptureTracker, ControlBinding, ControlSlot, GestureKind, PointerCapture,
    TitleBarButton, WindowAction, WindowControls, WindowDescriptor, WindowEntity, WindowGeometry,
    WindowState,
};
