//! Window descriptors
//!
//! One descriptor exists per application window for the whole desktop
//! session. Descriptors are toggled open and closed, never destroyed.

use serde::Serialize;

use crate::math::Size;
use crate::types::{WindowId, ZIndex};

/// Static and lifecycle data of one application window
///
/// The lifecycle fields (`is_open`, `is_minimized`, `z_index`) are only
/// changed by the desktop controller.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    /// Size used whenever the window opens fresh
    pub initial_size: Size,
    /// Whether the maximize button is live
    pub allow_maximize: bool,
    pub(crate) is_open: bool,
    pub(crate) is_minimized: bool,
    pub(crate) z_index: ZIndex,
}

impl WindowDescriptor {
    /// Create a closed descriptor
    pub fn new(id: WindowId, title: &str, icon: &str, initial_size: Size) -> Self {
        Self {
            id,
            title: title.to_string(),
            icon: icon.to_string(),
            initial_size,
            allow_maximize: true,
            is_open: false,
            is_minimized: false,
            z_index: 0,
        }
    }

    /// Whether the window is on the desktop or taskbar at all
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the window is hidden to the taskbar
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    /// Whether the window is drawn on the desktop
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Stacking order
    #[inline]
    pub fn z_index(&self) -> ZIndex {
        self.z_index
    }
}

const ICON_ABOUT: &str = "https://icons.iconarchive.com/icons/arrioch/blawb/128/folder-icon.png";
const ICON_PROJECTS: &str =
    "https://icons.iconarchive.com/icons/flameia/xrabbit/128/Folder-Flower-Blue-icon.png";
const ICON_CONTACT: &str = "https://icons.iconarchive.com/icons/arrioch/blawb/128/rss-icon.png";
const ICON_SKILLS: &str = "https://icons.iconarchive.com/icons/arrioch/blawb/128/gameboid-icon.png";
const ICON_RESUME: &str =
    "https://icons.iconarchive.com/icons/hopstarter/sleek-xp-basic/128/Document-icon.png";
const ICON_VIDEO: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/5/51/Media_Player_Windows_11_logo.svg/960px-Media_Player_Windows_11_logo.svg.png";
const ICON_AUDIO: &str =
    "https://icons.iconarchive.com/icons/dtafalonso/yosemite-flat/128/Music-icon.png";

/// Icon shown in a window's taskbar button and desktop shortcut
pub(crate) fn icon_url(id: WindowId) -> &'static str {
    match id {
        WindowId::About => ICON_ABOUT,
        WindowId::Projects => ICON_PROJECTS,
        WindowId::Contact => ICON_CONTACT,
        WindowId::Skills => ICON_SKILLS,
        WindowId::Resume => ICON_RESUME,
        WindowId::Video => ICON_VIDEO,
        WindowId::Audio => ICON_AUDIO,
    }
}

/// Default size of a window when it opens
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(700.0, 500.0);

/// The portfolio's windows, in catalogue order
pub fn catalogue() -> Vec<WindowDescriptor> {
    WindowId::all()
        .iter()
        .map(|&id| {
            let (title, size) = match id {
                WindowId::About => ("About Me", Size::new(900.0, 600.0)),
                WindowId::Projects => ("My Projects", DEFAULT_WINDOW_SIZE),
                WindowId::Contact => ("Contact Me", DEFAULT_WINDOW_SIZE),
                WindowId::Skills => ("Skills", DEFAULT_WINDOW_SIZE),
                WindowId::Resume => ("My Resume", DEFAULT_WINDOW_SIZE),
                WindowId::Video => ("Video Player", DEFAULT_WINDOW_SIZE),
                WindowId::Audio => ("Music Player", Size::new(500.0, 350.0)),
            };
            WindowDescriptor::new(id, title, icon_url(id), size)
        })
        .collect()
}
