//! Pointer capture for window gestures
//!
//! A drag or resize keeps receiving pointer events after the pointer leaves
//! the window's rectangle, so the host routes every move/up event to the
//! gesture owner while capture is held. Capture is acquired when a gesture
//! begins and released when its [`CaptureGuard`] is dropped: on pointer up,
//! on forced cancellation, when the window closes, and when the controller
//! itself is torn down.

use std::cell::Cell;
use std::rc::Rc;

use crate::types::WindowId;

/// Host hook for exclusive pointer capture
///
/// Implementations typically attach document-level move/up listeners on
/// `acquire` and detach them on `release`.
pub trait PointerCapture {
    /// Start routing all pointer events to `owner`
    fn acquire(&self, owner: WindowId);

    /// Stop routing pointer events to `owner`
    fn release(&self, owner: WindowId);
}

/// Scoped capture: released exactly once when dropped
pub struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
    owner: WindowId,
}

impl CaptureGuard {
    /// Acquire capture for `owner`
    pub fn acquire(capture: &Rc<dyn PointerCapture>, owner: WindowId) -> Self {
        capture.acquire(owner);
        tracing::trace!(window = %owner, "pointer capture acquired");
        Self {
            capture: Rc::clone(capture),
            owner,
        }
    }

    /// Window holding the capture
    pub fn owner(&self) -> WindowId {
        self.owner
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release(self.owner);
        tracing::trace!(window = %self.owner, "pointer capture released");
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard").field("owner", &self.owner).finish()
    }
}

/// Default capture that records the current owner
///
/// Hosts that attach listeners lazily can poll [`CaptureTracker::owner`]
/// after each event instead of implementing [`PointerCapture`] themselves.
#[derive(Debug, Default)]
pub struct CaptureTracker {
    owner: Cell<Option<WindowId>>,
    acquisitions: Cell<u64>,
    releases: Cell<u64>,
}

impl CaptureTracker {
    /// Create a tracker with no owner
    pub fn new() -> Self {
        Self::default()
    }

    /// Window currently holding capture
    pub fn owner(&self) -> Option<WindowId> {
        self.owner.get()
    }

    /// Whether a gesture currently holds capture
    pub fn is_captured(&self) -> bool {
        self.owner.get().is_some()
    }

    /// Number of times capture was acquired
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.get()
    }

    /// Number of times capture was released
    pub fn releases(&self) -> u64 {
        self.releases.get()
    }
}

impl PointerCapture for CaptureTracker {
    fn acquire(&self, owner: WindowId) {
        self.owner.set(Some(owner));
        self.acquisitions.set(self.acquisitions.get() + 1);
    }

    fn release(&self, owner: WindowId) {
        if self.owner.get() == Some(owner) {
            self.owner.set(None);
        }
        self.releases.set(self.releases.get() + 1);
    }
}
