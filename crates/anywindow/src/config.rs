//! Drag controller configuration.

use crate::{ConfigError, Fence};
use anywindow_foundation::gesture_constants::{
    DEFAULT_PLACEMENT_VERTICAL_FRACTION, DRAG_THRESHOLD, FLING_DURATION_MS, VELOCITY_UNITS_MS,
};
use anywindow_ui_graphics::IntPoint;
use web_time::Duration;

/// Where the overlay first appears when shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementHint {
    /// Exact display position, still clamped through the fence.
    Absolute(IntPoint),
    /// Position as fractions of the fence extents, measured from its
    /// top-left corner.
    Fraction { x: f32, y: f32 },
}

impl PlacementHint {
    /// Right edge, 60% of the way down.
    pub const RIGHT_EDGE: PlacementHint = PlacementHint::Fraction {
        x: 1.0,
        y: DEFAULT_PLACEMENT_VERTICAL_FRACTION,
    };

    pub fn resolve(&self, fence: &Fence) -> IntPoint {
        match *self {
            PlacementHint::Absolute(position) => position,
            PlacementHint::Fraction { x, y } => IntPoint::new(
                fence.left().saturating_add((fence.width() as f32 * x) as i32),
                fence.top().saturating_add((fence.height() as f32 * y) as i32),
            ),
        }
    }
}

impl Default for PlacementHint {
    fn default() -> Self {
        Self::RIGHT_EDGE
    }
}

/// Tunables for [`crate::DragController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Pointer travel (px) before a press becomes a drag.
    pub touch_slop: f32,
    /// Normalization window for release velocity.
    pub velocity_units_ms: i64,
    /// Length of the fling playback.
    pub fling_duration: Duration,
    /// Strength of the deceleration curve.
    pub decelerate_factor: f32,
    /// Placement used by `show` when no hint is given.
    pub placement: PlacementHint,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            velocity_units_ms: VELOCITY_UNITS_MS,
            fling_duration: Duration::from_millis(FLING_DURATION_MS),
            decelerate_factor: 1.0,
            placement: PlacementHint::default(),
        }
    }
}

impl ControllerConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Scales the default touch slop by a display density factor.
    pub fn with_density(mut self, density: f32) -> Self {
        self.touch_slop = DRAG_THRESHOLD * density;
        self
    }

    pub fn with_velocity_units_ms(mut self, units_ms: i64) -> Self {
        self.velocity_units_ms = units_ms;
        self
    }

    pub fn with_fling_duration(mut self, duration: Duration) -> Self {
        self.fling_duration = duration;
        self
    }

    pub fn with_decelerate_factor(mut self, factor: f32) -> Self {
        self.decelerate_factor = factor;
        self
    }

    pub fn with_placement(mut self, placement: PlacementHint) -> Self {
        self.placement = placement;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop(self.touch_slop));
        }
        if self.velocity_units_ms <= 0 {
            return Err(ConfigError::InvalidVelocityUnits(self.velocity_units_ms));
        }
        if self.fling_duration.is_zero() {
            return Err(ConfigError::InvalidDuration);
        }
        if !self.decelerate_factor.is_finite() || self.decelerate_factor <= 0.0 {
            return Err(ConfigError::InvalidDecelerateFactor(self.decelerate_factor));
        }
        Ok(())
    }
}
