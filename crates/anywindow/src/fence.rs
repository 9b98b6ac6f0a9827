//! Bounding rectangle for overlay positions.

use crate::GeometryError;
use anywindow_ui_graphics::{IntPoint, IntRect, IntSize};

/// Usable display area. Positions handed to the window host always lie
/// inside it (inclusive on every edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    rect: IntRect,
}

impl Fence {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, GeometryError> {
        Self::from_rect(IntRect::new(left, top, right, bottom))
    }

    /// Fence covering a display of the given size, anchored at the origin.
    pub fn from_display(size: IntSize) -> Result<Self, GeometryError> {
        Self::from_rect(IntRect::from_size(size))
    }

    pub fn from_rect(rect: IntRect) -> Result<Self, GeometryError> {
        let width = i64::from(rect.right) - i64::from(rect.left);
        let height = i64::from(rect.bottom) - i64::from(rect.top);
        if width <= 0 || height <= 0 || width > i64::from(i32::MAX) || height > i64::from(i32::MAX)
        {
            return Err(GeometryError::InvalidFence {
                width: rect.right.wrapping_sub(rect.left),
                height: rect.bottom.wrapping_sub(rect.top),
            });
        }
        Ok(Self { rect })
    }

    pub fn left(&self) -> i32 {
        self.rect.left
    }

    pub fn top(&self) -> i32 {
        self.rect.top
    }

    pub fn right(&self) -> i32 {
        self.rect.right
    }

    pub fn bottom(&self) -> i32 {
        self.rect.bottom
    }

    pub fn width(&self) -> i32 {
        self.rect.width()
    }

    pub fn height(&self) -> i32 {
        self.rect.height()
    }

    pub fn rect(&self) -> IntRect {
        self.rect
    }

    /// Larger of the two extents, used as the fling velocity cap.
    pub fn max_extent(&self) -> i32 {
        self.width().max(self.height())
    }

    pub fn contains(&self, position: IntPoint) -> bool {
        self.rect.contains(position)
    }

    /// Clamps each axis into the fence.
    ///
    /// Returns `None` when the position is outside the fence on both axes;
    /// the caller should abort the motion that produced it instead.
    pub fn clamp(&self, position: IntPoint) -> Option<IntPoint> {
        let in_x = position.x >= self.rect.left && position.x <= self.rect.right;
        let in_y = position.y >= self.rect.top && position.y <= self.rect.bottom;
        if !in_x && !in_y {
            return None;
        }
        Some(IntPoint {
            x: position.x.clamp(self.rect.left, self.rect.right),
            y: position.y.clamp(self.rect.top, self.rect.bottom),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence() -> Fence {
        Fence::new(0, 0, 1000, 2000).expect("valid fence")
    }

    #[test]
    fn rejects_empty_or_inverted_extents() {
        assert_eq!(
            Fence::new(0, 0, 0, 100),
            Err(GeometryError::InvalidFence {
                width: 0,
                height: 100
            })
        );
        assert!(Fence::new(10, 10, 5, 100).is_err());
        assert!(Fence::new(0, 50, 100, 50).is_err());
        assert!(Fence::from_display(IntSize::new(-1080, 1920)).is_err());
        assert!(Fence::new(i32::MIN, 0, i32::MAX, 10).is_err());
    }

    #[test]
    fn from_display_anchors_at_origin() {
        let fence = Fence::from_display(IntSize::new(1080, 1920)).unwrap();
        assert_eq!(fence.left(), 0);
        assert_eq!(fence.top(), 0);
        assert_eq!(fence.width(), 1080);
        assert_eq!(fence.height(), 1920);
        assert_eq!(fence.max_extent(), 1920);
    }

    #[test]
    fn inside_position_is_unchanged() {
        assert_eq!(
            fence().clamp(IntPoint::new(750, 950)),
            Some(IntPoint::new(750, 950))
        );
    }

    #[test]
    fn edges_are_inclusive() {
        let fence = fence();
        assert_eq!(
            fence.clamp(IntPoint::new(1000, 2000)),
            Some(IntPoint::new(1000, 2000))
        );
        assert_eq!(fence.clamp(IntPoint::ZERO), Some(IntPoint::ZERO));
    }

    #[test]
    fn one_axis_outside_is_clamped() {
        let fence = fence();
        assert_eq!(
            fence.clamp(IntPoint::new(-40, 500)),
            Some(IntPoint::new(0, 500))
        );
        assert_eq!(
            fence.clamp(IntPoint::new(500, 2600)),
            Some(IntPoint::new(500, 2000))
        );
    }

    #[test]
    fn both_axes_outside_aborts() {
        let fence = fence();
        assert_eq!(fence.clamp(IntPoint::new(-1, -1)), None);
        assert_eq!(fence.clamp(IntPoint::new(1001, 2001)), None);
        assert_eq!(fence.clamp(IntPoint::new(-5, 2500)), None);
    }
}
