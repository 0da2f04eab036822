//! Window frames for rendering

use serde::Serialize;

use crate::math::Rect;
use crate::types::{WindowId, ZIndex};

/// A visible window with the rectangle it should be drawn at
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub id: WindowId,
    pub title: String,
    pub z_index: ZIndex,
    /// Drawn with the active title bar
    pub active: bool,
    /// Effective rectangle (fullscreen in compact viewports)
    pub rect: Rect,
    pub maximized: bool,
    /// Whether edge and corner handles are shown
    pub resizable: bool,
}
