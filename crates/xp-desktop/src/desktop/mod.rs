//! Desktop management module
//!
//! The [`DesktopController`] owns every window descriptor and entity and
//! mediates all cross-window concerns: z-order, the taskbar toggle, the
//! start menu, desktop icons and the shared favorites list. The remaining
//! submodules are read models handed to the renderer.

mod controller;
mod favorites;
mod frames;
mod icons;
mod start_menu;
mod taskbar;

pub use controller::DesktopController;
pub use favorites::FavoritesSet;
pub use frames::WindowFrame;
pub use icons::{desktop_icons, DesktopIcon};
pub use start_menu::{start_menu_entries, SessionIntent, StartMenuAction, StartMenuEntry};
pub use taskbar::{TaskbarItem, TaskbarView};
