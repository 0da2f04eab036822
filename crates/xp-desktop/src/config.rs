//! Desktop configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};
use crate::window::ControlBinding;

/// Height reserved for the taskbar at the bottom of the screen
pub const TASKBAR_HEIGHT: f32 = 30.0;

/// Smallest size a resize gesture can produce
pub const MIN_WINDOW_SIZE: Size = Size::new(300.0, 200.0);

/// Viewport width below which every window renders fullscreen
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Stacking order every descriptor starts with
pub const INITIAL_Z_INDEX: ZIndex = 10;

/// Configuration for a desktop controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Screen size in pixels, taskbar included
    pub viewport: Size,
    /// Height of the taskbar strip
    pub taskbar_height: f32,
    /// Minimum window size enforced by resize gestures
    pub min_window_size: Size,
    /// Viewport width below which windows render fullscreen
    pub compact_breakpoint: f32,
    /// Initial position of the first catalogue window
    pub cascade_origin: Vec2,
    /// Diagonal offset between consecutive catalogue windows
    pub cascade_step: f32,
    /// Starting value of the z-order counter
    pub initial_z_index: ZIndex,
    /// Control binding per window; missing ids use the standard binding
    pub control_bindings: BTreeMap<WindowId, ControlBinding>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let mut control_bindings = BTreeMap::new();
        control_bindings.insert(WindowId::Resume, ControlBinding::Toolbar);
        Self {
            viewport: Size::new(1920.0, 1080.0),
            taskbar_height: TASKBAR_HEIGHT,
            min_window_size: MIN_WINDOW_SIZE,
            compact_breakpoint: COMPACT_BREAKPOINT,
            cascade_origin: Vec2::new(100.0, 50.0),
            cascade_step: 30.0,
            initial_z_index: INITIAL_Z_INDEX,
            control_bindings,
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Binding used for a window's pane controls
    pub fn binding_for(&self, id: WindowId) -> ControlBinding {
        self.control_bindings.get(&id).copied().unwrap_or_default()
    }

    /// Area a maximized window fills: the viewport minus the taskbar
    pub fn maximize_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport.width,
            (self.viewport.height - self.taskbar_height).max(0.0),
        )
    }

    /// Whether the viewport is narrow enough to force fullscreen windows
    pub fn is_compact(&self) -> bool {
        self.viewport.width < self.compact_breakpoint
    }

    /// Position a window opens at, cascading by catalogue index
    pub fn initial_position(&self, index: usize) -> Vec2 {
        let offset = self.cascade_step * index as f32;
        Vec2::new(self.cascade_origin.x + offset, self.cascade_origin.y + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DesktopConfig::default();
        assert_eq!(config.binding_for(WindowId::Resume), ControlBinding::Toolbar);
        assert_eq!(config.binding_for(WindowId::About), ControlBinding::Standard);
        assert_eq!(config.maximize_bounds(), Rect::new(0.0, 0.0, 1920.0, 1050.0));
        assert!(!config.is_compact());
    }

    #[test]
    fn test_cascade() {
        let config = DesktopConfig::default();
        assert_eq!(config.initial_position(0), Vec2::new(100.0, 50.0));
        assert_eq!(config.initial_position(3), Vec2::new(190.0, 140.0));
    }

    #[test]
    fn test_from_json_partial() {
        let config = DesktopConfig::from_json(
            r#"{ "viewport": { "width": 600.0, "height": 900.0 }, "controlBindings": { "about": "toolbar" } }"#,
        )
        .unwrap();
        assert!(config.is_compact());
        assert!((config.taskbar_height - 30.0).abs() < 0.001);
        assert_eq!(config.binding_for(WindowId::About), ControlBinding::Toolbar);
        // An explicit table replaces the default one
        assert_eq!(config.binding_for(WindowId::Resume), ControlBinding::Standard);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DesktopConfig::from_json("{ not json").is_err());
    }
}
