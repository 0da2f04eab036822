//! Desktop controller
//!
//! Authoritative owner of window lifecycle and stacking order. Geometry
//! stays inside each [`WindowEntity`]; the controller only asks entities to
//! maximize, restore or run gestures, and never writes positions itself.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::DesktopConfig;
use crate::geometry::ResizeDirection;
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};
use crate::window::{
    catalogue, CaptureTracker, ControlSlot, PointerCapture, TitleBarButton, WindowAction,
    WindowControls, WindowDescriptor, WindowEntity, WindowState,
};

use super::favorites::FavoritesSet;
use super::frames::WindowFrame;
use super::start_menu::{SessionIntent, StartMenuAction};
use super::taskbar::{TaskbarItem, TaskbarView};

/// Window manager for one desktop session
///
/// All descriptors are created closed at construction and live until the
/// controller is dropped. The z-order counter only ever grows, so the most
/// recently opened or focused window always has the strictly highest
/// z-index.
pub struct DesktopController {
    config: DesktopConfig,
    descriptors: BTreeMap<WindowId, WindowDescriptor>,
    /// Live geometry, present exactly for open windows
    entities: BTreeMap<WindowId, WindowEntity>,
    z_counter: ZIndex,
    start_menu_open: bool,
    selected_icon: Option<WindowId>,
    favorites: FavoritesSet,
    capture: Rc<dyn PointerCapture>,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopController {
    /// Create a controller with the portfolio's window catalogue
    pub fn new(config: DesktopConfig) -> Self {
        Self::with_descriptors(config, catalogue())
    }

    /// Create a controller over an explicit set of descriptors
    pub fn with_descriptors(
        config: DesktopConfig,
        descriptors: impl IntoIterator<Item = WindowDescriptor>,
    ) -> Self {
        let z = config.initial_z_index;
        let descriptors = descriptors
            .into_iter()
            .map(|mut d| {
                d.is_open = false;
                d.is_minimized = false;
                d.z_index = z;
                (d.id, d)
            })
            .collect();
        Self {
            config,
            descriptors,
            entities: BTreeMap::new(),
            z_counter: z,
            start_menu_open: false,
            selected_icon: None,
            favorites: FavoritesSet::new(),
            capture: Rc::new(CaptureTracker::new()),
        }
    }

    /// Route gesture capture through a host-provided hook
    pub fn with_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Update the screen size used for maximizing and compact layout
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport = Size::new(width, height);
    }

    /// Last z-index handed out
    pub fn z_counter(&self) -> ZIndex {
        self.z_counter
    }

    fn next_z(&mut self) -> ZIndex {
        self.z_counter += 1;
        self.z_counter
    }

    fn known(&self, id: WindowId, op: &'static str) -> bool {
        let known = self.descriptors.contains_key(&id);
        if !known {
            tracing::warn!(window = %id, op, "operation on unknown window ignored");
        }
        known
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window (or raise it if already open) and close the start menu
    pub fn open_window(&mut self, id: WindowId) {
        if !self.known(id, "open_window") {
            return;
        }
        let z = self.next_z();
        let min_size = self.config.min_window_size;
        let initial = match self.descriptors.get_mut(&id) {
            Some(d) => {
                d.is_open = true;
                d.is_minimized = false;
                d.z_index = z;
                Rect::from_pos_size(self.config.initial_position(id.index()), d.initial_size)
            }
            None => return,
        };
        self.entities
            .entry(id)
            .or_insert_with(|| WindowEntity::new(id, initial, min_size));
        self.start_menu_open = false;
        tracing::debug!(window = %id, z, "window opened");
    }

    /// Close a window, discarding its geometry
    pub fn close_window(&mut self, id: WindowId) {
        if let Some(d) = self.descriptors.get_mut(&id) {
            d.is_open = false;
            self.entities.remove(&id);
            tracing::debug!(window = %id, "window closed");
        } else {
            self.known(id, "close_window");
        }
    }

    /// Hide a window while keeping it in the taskbar
    pub fn minimize_window(&mut self, id: WindowId) {
        if let Some(d) = self.descriptors.get_mut(&id) {
            d.is_minimized = true;
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.end_gesture();
            }
            tracing::debug!(window = %id, "window minimized");
        } else {
            self.known(id, "minimize_window");
        }
    }

    /// Un-minimize a window and raise it above every other window
    pub fn focus_window(&mut self, id: WindowId) {
        if !self.known(id, "focus_window") {
            return;
        }
        let z = self.next_z();
        if let Some(d) = self.descriptors.get_mut(&id) {
            d.is_minimized = false;
            d.z_index = z;
        }
        tracing::debug!(window = %id, z, "window focused");
    }

    /// Topmost open, non-minimized window
    ///
    /// Ties (unreachable with the monotonic counter) resolve to the later
    /// window in catalogue order.
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.descriptors
            .values()
            .filter(|d| d.is_visible())
            .max_by_key(|d| d.z_index)
            .map(|d| d.id)
    }

    /// Taskbar button click: restore, hide the active window, or raise
    pub fn handle_taskbar_click(&mut self, id: WindowId) {
        let (minimized, z) = match self.descriptors.get(&id) {
            Some(d) => (d.is_minimized, d.z_index),
            None => {
                self.known(id, "handle_taskbar_click");
                return;
            }
        };
        let top = self.descriptors.values().map(|d| d.z_index).max();
        tracing::debug!(window = %id, minimized, "taskbar click");

        if minimized {
            self.focus_window(id);
        } else if top == Some(z) {
            self.minimize_window(id);
        } else {
            self.focus_window(id);
        }
    }

    /// Click anywhere on a window's frame
    pub fn click_window(&mut self, id: WindowId) {
        self.focus_window(id);
    }

    /// Derived lifecycle state of a window
    pub fn window_state(&self, id: WindowId) -> WindowState {
        match self.descriptors.get(&id) {
            Some(d) if !d.is_open => WindowState::Closed,
            Some(d) if d.is_minimized => WindowState::Minimized,
            Some(_) => match self.entities.get(&id) {
                Some(e) if e.is_maximized() => WindowState::Maximized,
                _ => WindowState::Normal,
            },
            None => WindowState::Closed,
        }
    }

    /// Descriptor of a window
    pub fn descriptor(&self, id: WindowId) -> Option<&WindowDescriptor> {
        self.descriptors.get(&id)
    }

    /// All descriptors in catalogue order
    pub fn descriptors(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.descriptors.values()
    }

    /// Live entity of an open window
    pub fn entity(&self, id: WindowId) -> Option<&WindowEntity> {
        self.entities.get(&id)
    }

    // =========================================================================
    // Maximize and pane controls
    // =========================================================================

    /// Fill the desktop above the taskbar
    pub fn maximize_window(&mut self, id: WindowId) {
        let allowed = match self.descriptors.get(&id) {
            Some(d) => d.allow_maximize,
            None => {
                self.known(id, "maximize_window");
                return;
            }
        };
        if !allowed {
            tracing::debug!(window = %id, "maximize disabled for window");
            return;
        }
        let bounds = self.config.maximize_bounds();
        if let Some(entity) = self.entities.get_mut(&id) {
            if entity.maximize(bounds) {
                tracing::debug!(window = %id, "window maximized");
            }
        }
    }

    /// Return a maximized window to the rectangle it had before
    pub fn toggle_maximize_off(&mut self, id: WindowId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            if entity.restore_from_maximize() {
                tracing::debug!(window = %id, "window restored from maximize");
            }
        }
    }

    /// Hide a window to the taskbar
    pub fn minimize_to_taskbar(&mut self, id: WindowId) {
        self.minimize_window(id);
    }

    /// Maximize a normal window or restore a maximized one
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let maximized = self.entities.get(&id).is_some_and(|e| e.is_maximized());
        if maximized {
            self.toggle_maximize_off(id);
        } else {
            self.maximize_window(id);
        }
    }

    /// Perform a window action
    pub fn dispatch(&mut self, id: WindowId, action: WindowAction) {
        match action {
            WindowAction::Close => self.close_window(id),
            WindowAction::MinimizeToTaskbar => self.minimize_to_taskbar(id),
            WindowAction::Maximize => self.maximize_window(id),
            WindowAction::ToggleMaximizeOff => self.toggle_maximize_off(id),
        }
    }

    /// Controls record for an open window's content pane
    pub fn controls(&self, id: WindowId) -> Option<WindowControls> {
        let d = self.descriptors.get(&id).filter(|d| d.is_open)?;
        let maximized = self.entities.get(&id).is_some_and(|e| e.is_maximized());
        Some(WindowControls::new(
            id,
            &d.title,
            maximized,
            self.config.binding_for(id),
        ))
    }

    /// Invoke a pane control slot through the window's binding
    pub fn invoke_control(&mut self, id: WindowId, slot: ControlSlot) {
        if let Some(controls) = self.controls(id) {
            self.dispatch(id, controls.action(slot));
        }
    }

    /// Press a title-bar button of the window chrome
    pub fn press_title_bar_button(&mut self, id: WindowId, button: TitleBarButton) {
        match button {
            TitleBarButton::Minimize => self.minimize_to_taskbar(id),
            TitleBarButton::Maximize => self.toggle_maximize(id),
            TitleBarButton::Close => self.close_window(id),
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start dragging a window by its title bar
    ///
    /// Returns `false` (and changes nothing) for hidden or maximized windows.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Vec2) -> bool {
        if !self.can_begin_gesture(id) {
            return false;
        }
        self.cancel_gesture();
        let capture = Rc::clone(&self.capture);
        let started = self
            .entities
            .get_mut(&id)
            .is_some_and(|e| e.begin_drag(pointer, &capture));
        if started {
            self.focus_window(id);
        }
        started
    }

    /// Start resizing a window from an edge or corner
    ///
    /// Returns `false` (and changes nothing) for hidden or maximized windows.
    pub fn begin_resize(&mut self, id: WindowId, direction: ResizeDirection, pointer: Vec2) -> bool {
        if !self.can_begin_gesture(id) {
            return false;
        }
        self.cancel_gesture();
        let capture = Rc::clone(&self.capture);
        let started = self
            .entities
            .get_mut(&id)
            .is_some_and(|e| e.begin_resize(direction, pointer, &capture));
        if started {
            self.focus_window(id);
        }
        started
    }

    fn can_begin_gesture(&self, id: WindowId) -> bool {
        let visible = self.descriptors.get(&id).is_some_and(|d| d.is_visible());
        let maximized = self.entities.get(&id).is_some_and(|e| e.is_maximized());
        if !visible || maximized {
            tracing::debug!(window = %id, visible, maximized, "gesture not started");
            return false;
        }
        true
    }

    /// Window whose gesture currently holds pointer capture
    pub fn gesture_owner(&self) -> Option<WindowId> {
        self.entities
            .values()
            .find(|e| e.gesture().is_some())
            .map(|e| e.id())
    }

    /// Global pointer move, routed to the gesture owner
    ///
    /// A moving window is raised if something else became active meanwhile.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let owner = match self.gesture_owner() {
            Some(owner) => owner,
            None => return false,
        };
        let moved = self
            .entities
            .get_mut(&owner)
            .is_some_and(|e| e.update(pointer));
        if moved && self.active_window_id() != Some(owner) {
            self.focus_window(owner);
        }
        moved
    }

    /// Global pointer release: completes the gesture in flight
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.end_gestures();
        if ended {
            tracing::debug!("gesture completed");
        }
        ended
    }

    /// Force-complete any gesture (e.g. the page lost focus mid-drag)
    ///
    /// Geometry keeps its last applied value; nothing is reverted.
    pub fn cancel_gesture(&mut self) -> bool {
        let ended = self.end_gestures();
        if ended {
            tracing::debug!("gesture cancelled");
        }
        ended
    }

    fn end_gestures(&mut self) -> bool {
        let mut ended = false;
        for entity in self.entities.values_mut() {
            ended |= entity.end_gesture();
        }
        ended
    }

    // =========================================================================
    // Start menu, desktop icons, favorites
    // =========================================================================

    /// Whether the start menu is showing
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Start button click
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Close the start menu
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Run a start menu entry
    ///
    /// Window entries are handled here; session entries close the menu and
    /// are handed back to the caller.
    pub fn activate_start_menu(&mut self, action: StartMenuAction) -> Option<SessionIntent> {
        match action {
            StartMenuAction::Open(id) => {
                self.open_window(id);
                None
            }
            StartMenuAction::LogOff => {
                self.close_start_menu();
                Some(SessionIntent::LogOff)
            }
            StartMenuAction::ShutDown => {
                self.close_start_menu();
                Some(SessionIntent::ShutDown)
            }
        }
    }

    /// Click on the desktop background
    pub fn click_desktop(&mut self) {
        self.selected_icon = None;
        self.start_menu_open = false;
    }

    /// Single click on a desktop icon
    pub fn select_icon(&mut self, id: WindowId) {
        self.selected_icon = Some(id);
    }

    /// Currently highlighted desktop icon
    pub fn selected_icon(&self) -> Option<WindowId> {
        self.selected_icon
    }

    /// Double click on a desktop icon
    pub fn open_icon(&mut self, id: WindowId) {
        self.open_window(id);
    }

    /// Favorite projects
    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Toggle a project's favorite status
    pub fn toggle_favorite(&mut self, project_id: &str) -> bool {
        self.favorites.toggle(project_id)
    }

    // =========================================================================
    // Read models
    // =========================================================================

    /// Taskbar contents
    pub fn taskbar(&self) -> TaskbarView {
        TaskbarView {
            items: self
                .descriptors
                .values()
                .filter(|d| d.is_open)
                .map(|d| TaskbarItem {
                    id: d.id,
                    title: d.title.clone(),
                    icon: d.icon.clone(),
                })
                .collect(),
            active: self.active_window_id(),
            start_menu_open: self.start_menu_open,
        }
    }

    /// Visible windows from bottom to top
    pub fn window_frames(&self) -> Vec<WindowFrame> {
        let active = self.active_window_id();
        let compact = self.config.is_compact();
        let mut visible: Vec<&WindowDescriptor> =
            self.descriptors.values().filter(|d| d.is_visible()).collect();
        visible.sort_by_key(|d| d.z_index);

        visible
            .into_iter()
            .filter_map(|d| {
                let entity = self.entities.get(&d.id)?;
                let maximized = entity.is_maximized();
                let rect = if compact {
                    self.config.maximize_bounds()
                } else {
                    entity.rect()
                };
                Some(WindowFrame {
                    id: d.id,
                    title: d.title.clone(),
                    z_index: d.z_index,
                    active: active == Some(d.id),
                    rect,
                    maximized,
                    resizable: !compact && !maximized,
                })
            })
            .collect()
    }

    /// Topmost visible window under a desktop point
    pub fn window_at(&self, point: Vec2) -> Option<WindowId> {
        self.window_frames()
            .into_iter()
            .rev()
            .find(|f| f.rect.contains(point))
            .map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DesktopController {
        DesktopController::default()
    }

    #[test]
    fn test_initial_state() {
        let desk = controller();
        assert_eq!(desk.z_counter(), 10);
        assert_eq!(desk.active_window_id(), None);
        assert!(desk.taskbar().items.is_empty());
        assert!(desk.window_frames().is_empty());
        for d in desk.descriptors() {
            assert_eq!(d.z_index(), 10);
            assert_eq!(desk.window_state(d.id), WindowState::Closed);
        }
    }

    #[test]
    fn test_open_assigns_fresh_z_and_closes_start_menu() {
        let mut desk = controller();
        desk.toggle_start_menu();
        assert!(desk.is_start_menu_open());

        desk.open_window(WindowId::Projects);
        let d = desk.descriptor(WindowId::Projects).unwrap();
        assert!(d.is_open());
        assert!(!d.is_minimized());
        assert_eq!(d.z_index(), 11);
        assert!(!desk.is_start_menu_open());
        assert_eq!(desk.active_window_id(), Some(WindowId::Projects));
    }

    #[test]
    fn test_open_uses_cascade_placement() {
        let mut desk = controller();
        desk.open_window(WindowId::Skills);
        let rect = desk.entity(WindowId::Skills).unwrap().rect();
        assert_eq!(rect, Rect::new(190.0, 140.0, 700.0, 500.0));
    }

    #[test]
    fn test_reopen_while_open_keeps_geometry() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.begin_drag(WindowId::About, Vec2::new(150.0, 60.0));
        desk.pointer_move(Vec2::new(350.0, 160.0));
        desk.pointer_up();
        let moved = desk.entity(WindowId::About).unwrap().rect();

        desk.open_window(WindowId::About);
        assert_eq!(desk.entity(WindowId::About).unwrap().rect(), moved);
    }

    #[test]
    fn test_close_discards_geometry() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.maximize_window(WindowId::About);
        desk.close_window(WindowId::About);
        assert!(desk.entity(WindowId::About).is_none());
        assert_eq!(desk.window_state(WindowId::About), WindowState::Closed);

        desk.open_window(WindowId::About);
        assert_eq!(desk.window_state(WindowId::About), WindowState::Normal);
        assert_eq!(
            desk.entity(WindowId::About).unwrap().rect(),
            Rect::new(100.0, 50.0, 900.0, 600.0)
        );
    }

    #[test]
    fn test_close_keeps_z_index() {
        let mut desk = controller();
        desk.open_window(WindowId::Contact);
        desk.close_window(WindowId::Contact);
        assert_eq!(desk.descriptor(WindowId::Contact).unwrap().z_index(), 11);
        assert_eq!(desk.active_window_id(), None);
    }

    #[test]
    fn test_minimized_window_stays_in_taskbar() {
        let mut desk = controller();
        desk.open_window(WindowId::Video);
        desk.minimize_window(WindowId::Video);

        assert_eq!(desk.window_state(WindowId::Video), WindowState::Minimized);
        assert_eq!(desk.active_window_id(), None);
        let taskbar = desk.taskbar();
        assert_eq!(taskbar.items.len(), 1);
        assert_eq!(taskbar.items[0].id, WindowId::Video);
        assert_eq!(taskbar.active, None);
        assert!(desk.window_frames().is_empty());
    }

    #[test]
    fn test_taskbar_click_raises_background_window() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.open_window(WindowId::Skills);

        desk.handle_taskbar_click(WindowId::About);
        assert_eq!(desk.active_window_id(), Some(WindowId::About));
        assert_eq!(desk.window_state(WindowId::Skills), WindowState::Normal);
    }

    #[test]
    fn test_minimize_keeps_maximized_geometry() {
        let mut desk = controller();
        desk.open_window(WindowId::Resume);
        desk.maximize_window(WindowId::Resume);
        desk.minimize_to_taskbar(WindowId::Resume);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Minimized);

        desk.handle_taskbar_click(WindowId::Resume);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Maximized);
    }

    #[test]
    fn test_maximize_fills_viewport_above_taskbar() {
        let mut desk = controller();
        desk.set_viewport(1280.0, 800.0);
        desk.open_window(WindowId::Contact);
        desk.maximize_window(WindowId::Contact);
        assert_eq!(
            desk.entity(WindowId::Contact).unwrap().rect(),
            Rect::new(0.0, 0.0, 1280.0, 770.0)
        );
    }

    #[test]
    fn test_maximize_respects_allow_flag() {
        let mut descriptors = catalogue();
        descriptors[WindowId::Audio.index()].allow_maximize = false;
        let mut desk = DesktopController::with_descriptors(DesktopConfig::default(), descriptors);
        desk.open_window(WindowId::Audio);

        desk.press_title_bar_button(WindowId::Audio, TitleBarButton::Maximize);
        assert_eq!(desk.window_state(WindowId::Audio), WindowState::Normal);
    }

    #[test]
    fn test_title_bar_buttons() {
        let mut desk = controller();
        desk.open_window(WindowId::Projects);

        desk.press_title_bar_button(WindowId::Projects, TitleBarButton::Maximize);
        assert_eq!(desk.window_state(WindowId::Projects), WindowState::Maximized);
        desk.press_title_bar_button(WindowId::Projects, TitleBarButton::Maximize);
        assert_eq!(desk.window_state(WindowId::Projects), WindowState::Normal);

        desk.press_title_bar_button(WindowId::Projects, TitleBarButton::Minimize);
        assert_eq!(desk.window_state(WindowId::Projects), WindowState::Minimized);

        desk.press_title_bar_button(WindowId::Projects, TitleBarButton::Close);
        assert_eq!(desk.window_state(WindowId::Projects), WindowState::Closed);
    }

    #[test]
    fn test_standard_pane_controls() {
        let mut desk = controller();
        desk.open_window(WindowId::About);

        desk.invoke_control(WindowId::About, ControlSlot::Maximize);
        assert_eq!(desk.window_state(WindowId::About), WindowState::Maximized);

        // Minimize collapses the maximized window instead of hiding it
        desk.invoke_control(WindowId::About, ControlSlot::Minimize);
        assert_eq!(desk.window_state(WindowId::About), WindowState::Normal);

        // Restore hides to the taskbar
        desk.invoke_control(WindowId::About, ControlSlot::Restore);
        assert_eq!(desk.window_state(WindowId::About), WindowState::Minimized);
    }

    #[test]
    fn test_resume_pane_controls() {
        let mut desk = controller();
        desk.open_window(WindowId::Resume);

        desk.invoke_control(WindowId::Resume, ControlSlot::Maximize);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Maximized);

        desk.invoke_control(WindowId::Resume, ControlSlot::Restore);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Normal);

        desk.invoke_control(WindowId::Resume, ControlSlot::Minimize);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Minimized);

        desk.focus_window(WindowId::Resume);
        desk.invoke_control(WindowId::Resume, ControlSlot::Exit);
        assert_eq!(desk.window_state(WindowId::Resume), WindowState::Closed);
    }

    #[test]
    fn test_controls_only_for_open_windows() {
        let mut desk = controller();
        assert!(desk.controls(WindowId::Skills).is_none());
        desk.open_window(WindowId::Skills);
        let controls = desk.controls(WindowId::Skills).unwrap();
        assert_eq!(controls.title, "Skills");
        assert!(!controls.is_maximized);
        assert_eq!(controls.on_restore, WindowAction::MinimizeToTaskbar);
    }

    #[test]
    fn test_drag_focuses_and_moves() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.open_window(WindowId::Contact);

        assert!(desk.begin_drag(WindowId::About, Vec2::new(120.0, 60.0)));
        assert_eq!(desk.active_window_id(), Some(WindowId::About));
        assert_eq!(desk.gesture_owner(), Some(WindowId::About));

        assert!(desk.pointer_move(Vec2::new(20.0, -40.0)));
        assert_eq!(
            desk.entity(WindowId::About).unwrap().position(),
            Vec2::new(0.0, -50.0)
        );

        assert!(desk.pointer_up());
        assert_eq!(desk.gesture_owner(), None);
        assert!(!desk.pointer_move(Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn test_drag_update_does_not_bump_topmost_window() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.begin_drag(WindowId::About, Vec2::ZERO);
        let z = desk.z_counter();
        desk.pointer_move(Vec2::new(5.0, 5.0));
        desk.pointer_move(Vec2::new(10.0, 10.0));
        assert_eq!(desk.z_counter(), z);
    }

    #[test]
    fn test_gestures_rejected_when_maximized_or_hidden() {
        let mut desk = controller();
        desk.open_window(WindowId::Projects);
        desk.maximize_window(WindowId::Projects);
        let z = desk.z_counter();

        assert!(!desk.begin_drag(WindowId::Projects, Vec2::ZERO));
        assert!(!desk.begin_resize(WindowId::Projects, ResizeDirection::E, Vec2::ZERO));
        assert_eq!(desk.z_counter(), z);

        assert!(!desk.begin_drag(WindowId::Skills, Vec2::ZERO));
    }

    #[test]
    fn test_close_mid_gesture_releases_capture() {
        let tracker = Rc::new(CaptureTracker::new());
        let mut desk = DesktopController::default().with_capture(tracker.clone());
        desk.open_window(WindowId::Audio);
        desk.begin_resize(WindowId::Audio, ResizeDirection::SW, Vec2::ZERO);
        assert_eq!(tracker.owner(), Some(WindowId::Audio));

        desk.close_window(WindowId::Audio);
        assert!(!tracker.is_captured());
    }

    #[test]
    fn test_new_gesture_replaces_old_one() {
        let tracker = Rc::new(CaptureTracker::new());
        let mut desk = DesktopController::default().with_capture(tracker.clone());
        desk.open_window(WindowId::About);
        desk.open_window(WindowId::Skills);

        desk.begin_drag(WindowId::About, Vec2::ZERO);
        desk.begin_drag(WindowId::Skills, Vec2::ZERO);
        assert_eq!(desk.gesture_owner(), Some(WindowId::Skills));
        assert_eq!(tracker.owner(), Some(WindowId::Skills));
        assert_eq!(desk.entity(WindowId::About).unwrap().gesture(), None);
    }

    #[test]
    fn test_cancel_keeps_last_geometry() {
        let mut desk = controller();
        desk.open_window(WindowId::Contact);
        desk.begin_resize(WindowId::Contact, ResizeDirection::E, Vec2::ZERO);
        desk.pointer_move(Vec2::new(100.0, 0.0));
        assert!(desk.cancel_gesture());
        assert!((desk.entity(WindowId::Contact).unwrap().size().width - 800.0).abs() < 0.001);
        assert!(!desk.cancel_gesture());
    }

    #[test]
    fn test_unknown_window_is_noop() {
        let config = DesktopConfig::default();
        let only_about: Vec<_> = catalogue()
            .into_iter()
            .filter(|d| d.id == WindowId::About)
            .collect();
        let mut desk = DesktopController::with_descriptors(config, only_about);

        desk.open_window(WindowId::Skills);
        desk.focus_window(WindowId::Skills);
        desk.minimize_window(WindowId::Skills);
        desk.handle_taskbar_click(WindowId::Skills);
        desk.close_window(WindowId::Skills);

        assert_eq!(desk.z_counter(), 10);
        assert!(desk.descriptor(WindowId::Skills).is_none());
        assert_eq!(desk.window_state(WindowId::Skills), WindowState::Closed);
    }

    #[test]
    fn test_start_menu_actions() {
        let mut desk = controller();
        desk.toggle_start_menu();
        assert_eq!(
            desk.activate_start_menu(StartMenuAction::Open(WindowId::Video)),
            None
        );
        assert!(!desk.is_start_menu_open());
        assert_eq!(desk.window_state(WindowId::Video), WindowState::Normal);

        desk.toggle_start_menu();
        assert_eq!(
            desk.activate_start_menu(StartMenuAction::LogOff),
            Some(SessionIntent::LogOff)
        );
        assert!(!desk.is_start_menu_open());
    }

    #[test]
    fn test_desktop_click_clears_selection_and_menu() {
        let mut desk = controller();
        desk.select_icon(WindowId::Contact);
        desk.toggle_start_menu();
        desk.click_desktop();
        assert_eq!(desk.selected_icon(), None);
        assert!(!desk.is_start_menu_open());

        desk.toggle_start_menu();
        desk.toggle_start_menu();
        assert!(!desk.is_start_menu_open());
    }

    #[test]
    fn test_icon_double_click_opens() {
        let mut desk = controller();
        desk.select_icon(WindowId::Skills);
        desk.open_icon(WindowId::Skills);
        assert_eq!(desk.active_window_id(), Some(WindowId::Skills));
    }

    #[test]
    fn test_frames_in_z_order_with_active_flag() {
        let mut desk = controller();
        desk.open_window(WindowId::Audio);
        desk.open_window(WindowId::About);
        desk.focus_window(WindowId::Audio);

        let frames = desk.window_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].id, WindowId::About);
        assert_eq!(frames[1].id, WindowId::Audio);
        assert!(frames[1].active);
        assert!(!frames[0].active);
        assert!(frames[1].resizable);
    }

    #[test]
    fn test_compact_viewport_renders_fullscreen() {
        let mut desk = controller();
        desk.set_viewport(400.0, 800.0);
        desk.open_window(WindowId::Projects);

        let frames = desk.window_frames();
        assert_eq!(frames[0].rect, Rect::new(0.0, 0.0, 400.0, 770.0));
        assert!(!frames[0].resizable);
        // Stored geometry is untouched
        assert_eq!(
            desk.entity(WindowId::Projects).unwrap().rect(),
            Rect::new(130.0, 80.0, 700.0, 500.0)
        );
    }

    #[test]
    fn test_window_at_prefers_topmost() {
        let mut desk = controller();
        desk.open_window(WindowId::About);
        desk.open_window(WindowId::Projects);

        assert_eq!(desk.window_at(Vec2::new(200.0, 200.0)), Some(WindowId::Projects));
        assert_eq!(desk.window_at(Vec2::new(110.0, 60.0)), Some(WindowId::About));
        assert_eq!(desk.window_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_favorites_pass_through() {
        let mut desk = controller();
        assert!(desk.toggle_favorite("xp-shell"));
        assert!(desk.favorites().contains("xp-shell"));
        assert!(!desk.toggle_favorite("xp-shell"));
        assert!(desk.favorites().is_empty());
    }
}
