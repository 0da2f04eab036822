//! Core geometry types for the desktop
//!
//! These types provide the basic 2D math used for window positions,
//! sizes and the maximize area.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
