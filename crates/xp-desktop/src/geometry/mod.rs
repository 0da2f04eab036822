//! Geometry engine for window gestures
//!
//! Pure, stateless calculations used by the drag and resize handlers of a
//! window. Nothing here clamps to the screen: windows may be placed fully
//! or partially off the desktop. The only constraint is the minimum window
//! size, which is enforced by clamping and never by rejecting the gesture.

mod calculate;
mod direction;

pub use calculate::{compute_drag_position, compute_resize};
pub use direction::ResizeDirection;
