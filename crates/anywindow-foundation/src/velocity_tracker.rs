//! Release velocity estimation.
//!
//! Each axis uses the impulse strategy: consecutive samples are replayed
//! oldest to newest as impulses on a unit mass, and the velocity is read back
//! from the kinetic energy left at the end. Only the current motion counts,
//! meaning samples within [`HORIZON_MS`] of the newest one and not separated
//! by a rest longer than [`ASSUME_STOPPED_MS`].

use anywindow_ui_graphics::Point;
use smallvec::SmallVec;

const HISTORY_SIZE: usize = 20;

/// Age limit, relative to the newest sample, for samples that still count.
pub const HORIZON_MS: i64 = 100;

/// A gap this long between consecutive samples means the pointer rested;
/// nothing before the gap counts.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

type Motion = SmallVec<[Sample; HISTORY_SIZE]>;

/// Single-axis tracker over a fixed ring of recent samples.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    ring: [Sample; HISTORY_SIZE],
    len: usize,
    next: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            ring: [Sample::default(); HISTORY_SIZE],
            len: 0,
            next: 0,
        }
    }

    /// Records the absolute axis position observed at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        self.ring[self.next] = Sample { time_ms, value };
        self.next = (self.next + 1) % HISTORY_SIZE;
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    /// Velocity in units per second.
    pub fn calculate_velocity(&self) -> f32 {
        self.calculate_velocity_in_units(1000)
    }

    /// Velocity in units per `units_ms` milliseconds. Zero when fewer than
    /// two samples belong to the current motion.
    pub fn calculate_velocity_in_units(&self, units_ms: i64) -> f32 {
        let motion = self.current_motion();
        if motion.len() < 2 {
            return 0.0;
        }
        let velocity = impulse_velocity(&motion) * units_ms as f32;
        if velocity.is_finite() {
            velocity
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.len = 0;
        self.next = 0;
    }

    fn newest_first(&self) -> impl Iterator<Item = Sample> + '_ {
        (1..=self.len).map(move |back| {
            self.ring[(self.next + HISTORY_SIZE - back) % HISTORY_SIZE]
        })
    }

    /// Samples of the current motion, oldest first.
    fn current_motion(&self) -> Motion {
        let mut motion = Motion::new();
        let mut samples = self.newest_first();
        let Some(newest) = samples.next() else {
            return motion;
        };
        motion.push(newest);

        let mut newer = newest;
        for sample in samples {
            if newest.time_ms - sample.time_ms > HORIZON_MS
                || newer.time_ms - sample.time_ms > ASSUME_STOPPED_MS
            {
                break;
            }
            motion.push(sample);
            newer = sample;
        }
        motion.reverse();
        motion
    }
}

/// Per-millisecond velocity of `motion` (oldest first).
fn impulse_velocity(motion: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    let mut first_impulse = true;
    for pair in motion.windows(2) {
        let (older, newer) = (pair[0], pair[1]);
        let dt = (newer.time_ms - older.time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let v = (newer.value - older.value) / dt;
        work += (v - energy_to_velocity(work)) * v.abs();
        if first_impulse {
            // the first impulse starts from rest
            work *= 0.5;
            first_impulse = false;
        }
    }
    energy_to_velocity(work)
}

/// `E = v^2 / 2` for a unit mass, keeping the sign of `energy`.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two-axis velocity in pixels per normalization window.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Scales the vector down so its magnitude is at most `max`, keeping
    /// its direction.
    pub fn clamp_magnitude(self, max: f32) -> Velocity {
        if !max.is_finite() || max <= 0.0 {
            return Velocity::ZERO;
        }
        let magnitude = self.magnitude();
        if magnitude <= max {
            return self;
        }
        let scale = max / magnitude;
        let scaled = Velocity::new(self.x * scale, self.y * scale);
        if scaled.magnitude() > max {
            // rounding can land one ulp above the cap
            let nudge = 1.0 - 4.0 * f32::EPSILON;
            Velocity::new(scaled.x * nudge, scaled.y * nudge)
        } else {
            scaled
        }
    }
}

/// Two-axis tracker fed with raw pointer positions while dragging.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movement(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Velocity in pixels per `units_ms`, with the vector magnitude capped at
    /// `max_velocity`. A non-finite or non-positive cap yields zero.
    pub fn compute_velocity(&self, units_ms: i64, max_velocity: f32) -> Velocity {
        let raw = Velocity::new(
            self.x.calculate_velocity_in_units(units_ms),
            self.y.calculate_velocity_in_units(units_ms),
        );
        raw.clamp_magnitude(max_velocity)
    }

    pub fn clear(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(points: &[(i64, f32)]) -> VelocityTracker1D {
        let mut tracker = VelocityTracker1D::new();
        for &(t, value) in points {
            tracker.add_data_point(t, value);
        }
        tracker
    }

    #[test]
    fn needs_two_samples() {
        assert_eq!(VelocityTracker1D::new().calculate_velocity(), 0.0);
        assert_eq!(tracker_with(&[(0, 40.0)]).calculate_velocity(), 0.0);
    }

    #[test]
    fn steady_motion_is_exact() {
        let tracker = tracker_with(&[(0, 0.0), (10, 10.0), (20, 20.0), (30, 30.0)]);
        assert_eq!(tracker.calculate_velocity(), 1000.0);
        assert_eq!(tracker.calculate_velocity_in_units(100), 100.0);
    }

    #[test]
    fn backwards_motion_is_negative() {
        let tracker = tracker_with(&[(0, 90.0), (10, 60.0), (20, 30.0)]);
        assert_eq!(tracker.calculate_velocity(), -3000.0);
    }

    #[test]
    fn recent_samples_dominate_after_a_turn() {
        let tracker = tracker_with(&[(0, 0.0), (10, 50.0), (20, 40.0), (30, 20.0)]);
        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn samples_beyond_horizon_are_dropped() {
        // the first sample is 120ms older than the newest
        let tracker = tracker_with(&[
            (0, 1000.0),
            (30, 0.0),
            (60, 30.0),
            (90, 60.0),
            (120, 90.0),
        ]);
        assert_eq!(tracker.calculate_velocity(), 1000.0);
    }

    #[test]
    fn rest_longer_than_stop_gap_cuts_history() {
        let rest_end = 10 + ASSUME_STOPPED_MS + 1;
        let tracker = tracker_with(&[(0, 0.0), (10, 100.0), (rest_end, 100.0)]);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn duplicate_timestamps_are_skipped() {
        let tracker = tracker_with(&[(0, 0.0), (10, 10.0), (10, 12.0), (20, 22.0)]);
        assert!(tracker.calculate_velocity().is_finite());
    }

    #[test]
    fn ring_keeps_only_latest_samples() {
        let mut tracker = VelocityTracker1D::new();
        for t in 0..(HISTORY_SIZE as i64 * 3) {
            tracker.add_data_point(t * 4, t as f32 * 8.0);
        }
        assert_eq!(tracker.calculate_velocity(), 2000.0);
    }

    #[test]
    fn reset_forgets_samples() {
        let mut tracker = tracker_with(&[(0, 0.0), (10, 100.0)]);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn axes_are_tracked_independently() {
        let mut tracker = VelocityTracker::new();
        for step in 0..5 {
            let t = step * 10;
            tracker.add_movement(t, Point::new(t as f32 * 2.0, 500.0 - t as f32));
        }
        assert_eq!(
            tracker.compute_velocity(1000, 10_000.0),
            Velocity::new(2000.0, -1000.0)
        );
    }

    #[test]
    fn magnitude_cap_keeps_direction() {
        let mut tracker = VelocityTracker::new();
        tracker.add_movement(0, Point::new(0.0, 0.0));
        tracker.add_movement(5, Point::new(300.0, 400.0));
        tracker.add_movement(10, Point::new(600.0, 800.0));

        let capped = tracker.compute_velocity(1000, 2000.0);
        assert!(capped.magnitude() <= 2000.0);
        assert!((capped.y / capped.x - 4.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn invalid_cap_yields_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add_movement(0, Point::new(0.0, 0.0));
        tracker.add_movement(10, Point::new(100.0, 0.0));
        assert_eq!(tracker.compute_velocity(1000, 0.0), Velocity::ZERO);
        assert_eq!(tracker.compute_velocity(1000, f32::NAN), Velocity::ZERO);
    }

    #[test]
    fn clear_forgets_both_axes() {
        let mut tracker = VelocityTracker::new();
        tracker.add_movement(0, Point::new(0.0, 0.0));
        tracker.add_movement(10, Point::new(100.0, 100.0));
        tracker.clear();
        assert_eq!(tracker.compute_velocity(1000, 5000.0), Velocity::ZERO);
    }
}
