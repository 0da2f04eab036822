//! Browser exports
//!
//! Thin wasm-bindgen wrapper over [`Session`]. Ids and enum names cross the
//! boundary as the same lowercase strings the serde representation uses;
//! read models are returned as JSON strings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::desktop::{desktop_icons, start_menu_entries, DesktopController};
use crate::error::{DesktopError, DesktopResult};
use crate::geometry::ResizeDirection;
use crate::math::{Size, Vec2};
use crate::preferences::{DisplayPreferences, PreferenceStore, PREFERENCES_KEY};
use crate::session::Session;
use crate::types::WindowId;
use crate::window::{ControlSlot, TitleBarButton};

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(e.into()))
}

fn parse_id(id: &str) -> Result<WindowId, JsValue> {
    id.parse().map_err(to_js)
}

/// Parse a unit enum from its serde name
fn parse_name<T: DeserializeOwned>(name: &str) -> Result<T, JsValue> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|e| to_js(e.into()))
}

/// `window.localStorage` preference store
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self {
            key: PREFERENCES_KEY.to_string(),
        }
    }

    fn storage(&self) -> DesktopResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| DesktopError::persistence("no window object"))?;
        window
            .local_storage()
            .map_err(|_| DesktopError::persistence("localStorage access denied"))?
            .ok_or_else(|| DesktopError::persistence("localStorage unavailable"))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> DesktopResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|_| DesktopError::persistence("localStorage read failed"))
    }

    fn save(&self, value: &str) -> DesktopResult<()> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|_| DesktopError::persistence("localStorage write failed"))
    }
}

/// Desktop shell handle exported to JavaScript
#[wasm_bindgen]
pub struct XpDesktop {
    session: Session,
    preferences: DisplayPreferences,
    store: LocalStorageStore,
}

impl XpDesktop {
    fn desktop(&mut self) -> Option<&mut DesktopController> {
        self.session.desktop_mut()
    }

    fn with_window(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut DesktopController, WindowId),
    ) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        if let Some(desktop) = self.desktop() {
            f(desktop, id);
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl XpDesktop {
    /// Boot a new session
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, now_ms: f64) -> XpDesktop {
        let config = DesktopConfig {
            viewport: Size::new(width, height),
            ..Default::default()
        };
        let store = LocalStorageStore::new();
        let preferences = DisplayPreferences::load(&store);
        XpDesktop {
            session: Session::new(config, now_ms),
            preferences,
            store,
        }
    }

    /// Advance timed transitions; returns whether a re-render is needed
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.session.tick(now_ms)
    }

    /// Current phase name ("boot", "login", "welcome", "desktop")
    #[wasm_bindgen]
    pub fn phase(&self) -> String {
        self.session.phase().as_str().to_string()
    }

    #[wasm_bindgen]
    pub fn log_in(&mut self, now_ms: f64) -> bool {
        self.session.log_in(now_ms)
    }

    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.session.set_viewport(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.open_window(id))
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.close_window(id))
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.click_window(id))
    }

    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.handle_taskbar_click(id))
    }

    /// Title-bar button ("minimize", "maximize", "close")
    #[wasm_bindgen]
    pub fn title_bar_button(&mut self, id: &str, button: &str) -> Result<(), JsValue> {
        let button: TitleBarButton = parse_name(button)?;
        self.with_window(id, |d, id| d.press_title_bar_button(id, button))
    }

    /// Pane control slot ("exit", "minimize", "maximize", "restore")
    #[wasm_bindgen]
    pub fn invoke_control(&mut self, id: &str, slot: &str) -> Result<(), JsValue> {
        let slot: ControlSlot = parse_name(slot)?;
        self.with_window(id, |d, id| d.invoke_control(id, slot))
    }

    #[wasm_bindgen]
    pub fn controls_json(&self, id: &str) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        let controls = self.session.desktop().and_then(|d| d.controls(id));
        to_json(&controls)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    #[wasm_bindgen]
    pub fn begin_drag(&mut self, id: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        let id = parse_id(id)?;
        Ok(self
            .desktop()
            .is_some_and(|d| d.begin_drag(id, Vec2::new(x, y))))
    }

    /// Edge or corner handle pressed ("n", "se", ...)
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        let id = parse_id(id)?;
        let direction: ResizeDirection = direction.parse().map_err(to_js)?;
        Ok(self
            .desktop()
            .is_some_and(|d| d.begin_resize(id, direction, Vec2::new(x, y))))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.desktop()
            .is_some_and(|d| d.pointer_move(Vec2::new(x, y)))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.desktop().is_some_and(|d| d.pointer_up())
    }

    #[wasm_bindgen]
    pub fn cancel_gesture(&mut self) -> bool {
        self.desktop().is_some_and(|d| d.cancel_gesture())
    }

    // =========================================================================
    // Shell
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        if let Some(d) = self.desktop() {
            d.toggle_start_menu();
        }
    }

    /// Activate the start menu entry at `index`
    #[wasm_bindgen]
    pub fn start_menu_entry(&mut self, index: usize, now_ms: f64) -> Result<(), JsValue> {
        let entry = start_menu_entries().into_iter().nth(index).ok_or_else(|| {
            to_js(DesktopError::InvalidOperation {
                op: "start_menu_entry",
                reason: "index out of range",
            })
        })?;
        self.session.activate_start_menu(entry.action, now_ms);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn click_desktop(&mut self) {
        if let Some(d) = self.desktop() {
            d.click_desktop();
        }
    }

    #[wasm_bindgen]
    pub fn select_icon(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.select_icon(id))
    }

    #[wasm_bindgen]
    pub fn open_icon(&mut self, id: &str) -> Result<(), JsValue> {
        self.with_window(id, |d, id| d.open_icon(id))
    }

    #[wasm_bindgen]
    pub fn toggle_favorite(&mut self, project_id: &str) -> bool {
        self.desktop()
            .is_some_and(|d| d.toggle_favorite(project_id))
    }

    #[wasm_bindgen]
    pub fn show_balloon(&mut self, now_ms: f64) {
        self.session.show_balloon(now_ms);
    }

    #[wasm_bindgen]
    pub fn dismiss_balloon(&mut self) {
        self.session.dismiss_balloon();
    }

    #[wasm_bindgen]
    pub fn follow_balloon_link(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.session.follow_balloon_link(id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn balloon_visible(&self) -> bool {
        self.session.is_balloon_visible()
    }

    #[wasm_bindgen]
    pub fn cancel_shutdown(&mut self) {
        self.session.cancel_shutdown();
    }

    #[wasm_bindgen]
    pub fn shut_down(&mut self, now_ms: f64) -> bool {
        self.session.shut_down(now_ms)
    }

    #[wasm_bindgen]
    pub fn restart(&mut self, now_ms: f64) -> bool {
        self.session.restart(now_ms)
    }

    #[wasm_bindgen]
    pub fn shutdown_dialog_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.shutdown_dialog())
    }

    // =========================================================================
    // Display preference
    // =========================================================================

    #[wasm_bindgen]
    pub fn crt_enabled(&self) -> bool {
        self.preferences.crt_enabled
    }

    #[wasm_bindgen]
    pub fn toggle_crt(&mut self) -> Result<bool, JsValue> {
        self.preferences.toggle_crt(&self.store).map_err(to_js)
    }

    // =========================================================================
    // Read models
    // =========================================================================

    #[wasm_bindgen]
    pub fn frames_json(&self) -> Result<String, JsValue> {
        let frames = self
            .session
            .desktop()
            .map(|d| d.window_frames())
            .unwrap_or_default();
        to_json(&frames)
    }

    #[wasm_bindgen]
    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.desktop().map(|d| d.taskbar()))
    }

    #[wasm_bindgen]
    pub fn favorites_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.desktop().map(|d| d.favorites()))
    }

    #[wasm_bindgen]
    pub fn start_menu_json(&self) -> Result<String, JsValue> {
        to_json(&start_menu_entries())
    }

    #[wasm_bindgen]
    pub fn icons_json(&self) -> Result<String, JsValue> {
        to_json(&desktop_icons())
    }

    #[wasm_bindgen]
    pub fn selected_icon(&self) -> Option<String> {
        self.session
            .desktop()
            .and_then(|d| d.selected_icon())
            .map(|id| id.as_str().to_string())
    }
}
