//! Live window entity
//!
//! A [`WindowEntity`] exists while its window is open. It exclusively owns
//! the window's geometry: position, size, the maximized flag and the
//! rectangle saved before maximizing. Gestures are three-phase
//! (`begin` → `update`* → `end`) and hold pointer capture for their whole
//! lifetime.

use std::rc::Rc;

use serde::Serialize;

use crate::geometry::{compute_drag_position, compute_resize, ResizeDirection};
use crate::math::{Rect, Size, Vec2};
use crate::types::WindowId;

use super::capture::{CaptureGuard, PointerCapture};

/// Kind of an in-flight gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    /// Moving the window by its title bar
    Drag,
    /// Resizing from an edge or corner
    Resize(ResizeDirection),
}

/// Snapshot of a window's geometry
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowGeometry {
    pub position: Vec2,
    pub size: Size,
    pub is_maximized: bool,
    /// Present exactly while maximized
    pub saved_geometry: Option<Rect>,
}

#[derive(Debug)]
struct Gesture {
    kind: GestureKind,
    pointer_start: Vec2,
    /// Window rectangle when the gesture began
    origin: Rect,
    _capture: CaptureGuard,
}

/// Geometry and gesture state of one open window
#[derive(Debug)]
pub struct WindowEntity {
    id: WindowId,
    position: Vec2,
    size: Size,
    min_size: Size,
    /// Rectangle captured by `maximize`; `Some` exactly while maximized
    saved: Option<Rect>,
    gesture: Option<Gesture>,
}

impl WindowEntity {
    /// Create an entity at its initial placement
    pub fn new(id: WindowId, initial: Rect, min_size: Size) -> Self {
        Self {
            id,
            position: initial.position(),
            size: initial.size(),
            min_size,
            saved: None,
            gesture: None,
        }
    }

    /// Window id
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Top-left corner in desktop coordinates
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current size
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window fills the desktop
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.saved.is_some()
    }

    /// Rectangle to return to on un-maximize
    pub fn saved_geometry(&self) -> Option<Rect> {
        self.saved
    }

    /// Geometry snapshot
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            position: self.position,
            size: self.size,
            is_maximized: self.is_maximized(),
            saved_geometry: self.saved,
        }
    }

    /// In-flight gesture, if any
    pub fn gesture(&self) -> Option<GestureKind> {
        self.gesture.as_ref().map(|g| g.kind)
    }

    /// Snapshot the current rectangle and fill `bounds`
    ///
    /// Returns `false` when already maximized.
    pub fn maximize(&mut self, bounds: Rect) -> bool {
        if self.is_maximized() {
            return false;
        }
        self.end_gesture();
        self.saved = Some(self.rect());
        self.position = bounds.position();
        self.size = bounds.size();
        true
    }

    /// Return to the rectangle saved by `maximize`
    ///
    /// Returns `false` when not maximized.
    pub fn restore_from_maximize(&mut self) -> bool {
        match self.saved.take() {
            Some(saved) => {
                self.position = saved.position();
                self.size = saved.size();
                true
            }
            None => false,
        }
    }

    /// Start moving the window
    ///
    /// Ignored while maximized. Replaces any gesture already in flight.
    pub fn begin_drag(&mut self, pointer: Vec2, capture: &Rc<dyn PointerCapture>) -> bool {
        self.begin(GestureKind::Drag, pointer, capture)
    }

    /// Start resizing from an edge or corner
    ///
    /// Ignored while maximized. Replaces any gesture already in flight.
    pub fn begin_resize(
        &mut self,
        direction: ResizeDirection,
        pointer: Vec2,
        capture: &Rc<dyn PointerCapture>,
    ) -> bool {
        self.begin(GestureKind::Resize(direction), pointer, capture)
    }

    fn begin(&mut self, kind: GestureKind, pointer: Vec2, capture: &Rc<dyn PointerCapture>) -> bool {
        if self.is_maximized() {
            tracing::debug!(window = %self.id, "gesture ignored on maximized window");
            return false;
        }
        // Release the previous gesture before acquiring again
        self.gesture = None;
        self.gesture = Some(Gesture {
            kind,
            pointer_start: pointer,
            origin: self.rect(),
            _capture: CaptureGuard::acquire(capture, self.id),
        });
        true
    }

    /// Apply a drag pointer move; `false` when no drag is in flight
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        match self.gesture() {
            Some(GestureKind::Drag) => self.update(pointer),
            _ => false,
        }
    }

    /// Apply a resize pointer move; `false` when no resize is in flight
    pub fn update_resize(&mut self, pointer: Vec2) -> bool {
        match self.gesture() {
            Some(GestureKind::Resize(_)) => self.update(pointer),
            _ => false,
        }
    }

    /// Apply a pointer move to whichever gesture is in flight
    pub fn update(&mut self, pointer: Vec2) -> bool {
        if self.is_maximized() {
            return false;
        }
        let (kind, pointer_start, origin) = match &self.gesture {
            Some(gesture) => (gesture.kind, gesture.pointer_start, gesture.origin),
            None => return false,
        };
        match kind {
            GestureKind::Drag => {
                self.position = compute_drag_position(pointer_start, pointer, origin.position());
            }
            GestureKind::Resize(direction) => {
                let rect = compute_resize(direction, pointer_start, pointer, origin, self.min_size);
                self.position = rect.position();
                self.size = rect.size();
            }
        }
        tracing::trace!(
            window = %self.id,
            x = self.position.x,
            y = self.position.y,
            width = self.size.width,
            height = self.size.height,
            "gesture update"
        );
        true
    }

    /// Finish a drag; a resize in flight is left alone
    pub fn end_drag(&mut self) {
        if self.gesture() == Some(GestureKind::Drag) {
            self.end_gesture();
        }
    }

    /// Finish a resize; a drag in flight is left alone
    pub fn end_resize(&mut self) {
        if matches!(self.gesture(), Some(GestureKind::Resize(_))) {
            self.end_gesture();
        }
    }

    /// Finish whatever gesture is in flight, keeping the current geometry
    ///
    /// Returns whether a gesture was running.
    pub fn end_gesture(&mut self) -> bool {
        self.gesture.take().is_some()
    }
}
