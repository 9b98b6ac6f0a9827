//! Shared gesture constants for overlay drag handling.
//!
//! Values are in raw display pixels and milliseconds. Hosts with very dense
//! screens can scale the slop through the controller configuration.

/// Drag threshold (touch slop) in pixels.
///
/// A press only becomes a drag once the pointer has moved farther than this
/// from the press position. Releasing before that is a tap, which the drag
/// controller ignores.
///
/// Matches the platform default touch slop of ~8dp at baseline density.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Normalization window for release velocity, in milliseconds.
///
/// Velocities are reported in pixels per this many milliseconds.
pub const VELOCITY_UNITS_MS: i64 = 1000;

/// Duration of the edge-snap fling, in milliseconds.
pub const FLING_DURATION_MS: u64 = 250;

/// Fraction of the fence height used for the default initial placement.
pub const DEFAULT_PLACEMENT_VERTICAL_FRACTION: f32 = 0.6;
