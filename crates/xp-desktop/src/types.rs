//! Core type definitions for the window manager
//!
//! This module centralizes the identifiers shared by every layer of the
//! crate: the stable window ids and the stacking-order integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Stacking order of a window
///
/// Higher values draw on top. Values are handed out by a monotonically
/// increasing counter owned by the desktop controller and are never reused.
pub type ZIndex = u64;

/// Stable identifier of one logical application window
///
/// Every window exists for the whole desktop session; ids are never created
/// or destroyed at runtime, only their windows opened and closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    About,
    Projects,
    Contact,
    Skills,
    Resume,
    Video,
    Audio,
}

impl WindowId {
    /// All window ids in catalogue order
    pub fn all() -> &'static [WindowId] {
        &[
            WindowId::About,
            WindowId::Projects,
            WindowId::Contact,
            WindowId::Skills,
            WindowId::Resume,
            WindowId::Video,
            WindowId::Audio,
        ]
    }

    /// Position of this id in catalogue order
    pub fn index(self) -> usize {
        match self {
            WindowId::About => 0,
            WindowId::Projects => 1,
            WindowId::Contact => 2,
            WindowId::Skills => 3,
            WindowId::Resume => 4,
            WindowId::Video => 5,
            WindowId::Audio => 6,
        }
    }

    /// Get the string ID for this window (e.g., "about", "resume")
    pub fn as_str(self) -> &'static str {
        match self {
            WindowId::About => "about",
            WindowId::Projects => "projects",
            WindowId::Contact => "contact",
            WindowId::Skills => "skills",
            WindowId::Resume => "resume",
            WindowId::Video => "video",
            WindowId::Audio => "audio",
        }
    }

    /// Parse from string ID, ignoring case
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "about" => Some(WindowId::About),
            "projects" => Some(WindowId::Projects),
            "contact" => Some(WindowId::Contact),
            "skills" => Some(WindowId::Skills),
            "resume" => Some(WindowId::Resume),
            "video" => Some(WindowId::Video),
            "audio" => Some(WindowId::Audio),
            _ => None,
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| DesktopError::UnknownWindow(s.to_string()))
    }
}
