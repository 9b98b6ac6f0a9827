//! Pure geometry for AnyWindow
//!
//! Float points for pointer and path math, integer points, sizes and
//! rectangles for window placement.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{IntPoint, IntRect, IntSize, Point};
}
