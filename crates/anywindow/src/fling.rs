//! Release-time target planning: snap to the nearer side edge and carry the
//! release direction into a vertical offset.

use crate::Fence;
use anywindow_foundation::Velocity;
use anywindow_ui_graphics::{IntPoint, IntSize};

/// Start and target of a fling, fixed at release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingPlan {
    pub start_x: f32,
    pub start_y: f32,
    pub target_x: f32,
    pub target_y: f32,
    start: IntPoint,
    delta: IntPoint,
}

impl FlingPlan {
    /// Integer start position handed to the scroller.
    pub fn start(&self) -> IntPoint {
        self.start
    }

    /// Integer delta from start to target, truncated toward zero.
    pub fn delta(&self) -> IntPoint {
        self.delta
    }
}

/// Plans the fling for an overlay released at `start`.
///
/// The horizontal target is whichever side edge of the fence is nearer to
/// the overlay's center. The vertical target follows the release velocity's
/// slope over the horizontal distance. Zero horizontal velocity keeps the
/// current row. The vertical target is not clamped here; playback clamps
/// every frame.
pub fn plan_fling(
    start: IntPoint,
    overlay: IntSize,
    velocity: Velocity,
    fence: &Fence,
) -> FlingPlan {
    let start_x = f64::from(start.x);
    let start_y = f64::from(start.y);
    let width = f64::from(overlay.width);
    let left = f64::from(fence.left());
    let fence_width = f64::from(fence.width());

    let start_center_x = start_x + width / 2.0;
    let target_x = if start_center_x < left + fence_width / 2.0 {
        left
    } else {
        left + fence_width - width
    };

    let target_y = if velocity.x == 0.0 {
        start_y
    } else {
        let dx = target_x - start_x;
        let dy = dx.abs() * (f64::from(velocity.y) / f64::from(velocity.x.abs()));
        start_y + dy
    };

    FlingPlan {
        start_x: start_x as f32,
        start_y: start_y as f32,
        target_x: target_x as f32,
        target_y: target_y as f32,
        start,
        delta: IntPoint::new((target_x - start_x) as i32, (target_y - start_y) as i32),
    }
}
