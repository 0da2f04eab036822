//! Drag and resize calculations

use super::ResizeDirection;
use crate::math::{Rect, Size, Vec2};

/// Translate a window by the pointer delta of a drag gesture
#[inline]
pub fn compute_drag_position(pointer_start: Vec2, pointer_current: Vec2, original: Vec2) -> Vec2 {
    original + (pointer_current - pointer_start)
}

/// Calculate the new window rectangle for a resize gesture
///
/// East and south edges follow the raw pointer delta, floored at `min_size`.
/// West and north edges move the window origin instead, with the delta
/// capped so the dimension stops at `min_size` while the opposite edge stays
/// put. Diagonal handles apply the horizontal and vertical rules
/// independently.
pub fn compute_resize(
    direction: ResizeDirection,
    pointer_start: Vec2,
    pointer_current: Vec2,
    original: Rect,
    min_size: Size,
) -> Rect {
    let delta = pointer_current - pointer_start;
    let mut rect = original;

    if direction.has_east() {
        rect.width = min_size.width.max(original.width + delta.x);
    }
    if direction.has_west() {
        let change = delta.x.min(original.width - min_size.width);
        rect.width = original.width - change;
        rect.x = original.x + change;
    }
    if direction.has_south() {
        rect.height = min_size.height.max(original.height + delta.y);
    }
    if direction.has_north() {
        let change = delta.y.min(original.height - min_size.height);
        rect.height = original.height - change;
        rect.y = original.y + change;
    }

    rect
}
