//! Time-indexed scroll driver for fling playback.
//!
//! A run moves a point from a start position by a fixed delta over a fixed
//! duration. The host samples it once per display refresh with [`Scroller::step`].

use crate::{AnimationClock, DecelerateInterpolator};
use anywindow_ui_graphics::IntPoint;
use web_time::Duration;

/// Default run duration, matching the platform scroller.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
struct ScrollRun {
    start: IntPoint,
    delta: IntPoint,
    start_time_nanos: u64,
}

impl ScrollRun {
    fn sample(&self, fraction: f32) -> IntPoint {
        IntPoint {
            x: self
                .start
                .x
                .saturating_add((fraction * self.delta.x as f32).round() as i32),
            y: self
                .start
                .y
                .saturating_add((fraction * self.delta.y as f32).round() as i32),
        }
    }

    fn target(&self) -> IntPoint {
        IntPoint {
            x: self.start.x.saturating_add(self.delta.x),
            y: self.start.y.saturating_add(self.delta.y),
        }
    }
}

/// Samples a decelerating motion from a start point toward a target.
///
/// The final sample of every completed run is the exact target. After that
/// (or after [`Scroller::abort`]) `step` returns `None` until the next
/// [`Scroller::start`].
pub struct Scroller<C: AnimationClock> {
    clock: C,
    interpolator: DecelerateInterpolator,
    duration: Duration,
    run: Option<ScrollRun>,
}

impl<C: AnimationClock> Scroller<C> {
    pub fn new(clock: C) -> Self {
        Self::with_curve(clock, DEFAULT_SCROLL_DURATION, DecelerateInterpolator::default())
    }

    pub fn with_curve(clock: C, duration: Duration, interpolator: DecelerateInterpolator) -> Self {
        Self {
            clock,
            interpolator,
            duration,
            run: None,
        }
    }

    /// Begins a new run, discarding any run in progress.
    pub fn start(&mut self, start_x: i32, start_y: i32, dx: i32, dy: i32) {
        if self.run.is_some() {
            log::trace!("scroller restarted before finishing");
        }
        self.run = Some(ScrollRun {
            start: IntPoint::new(start_x, start_y),
            delta: IntPoint::new(dx, dy),
            start_time_nanos: self.clock.now_nanos(),
        });
    }

    /// Returns the position for the current frame, or `None` once the run is
    /// over.
    pub fn step(&mut self) -> Option<IntPoint> {
        let run = self.run?;
        let elapsed = self.clock.now_nanos().saturating_sub(run.start_time_nanos);
        let duration = self.duration.as_nanos() as u64;

        if elapsed < duration {
            let fraction = self
                .interpolator
                .transform(elapsed as f32 / duration as f32);
            Some(run.sample(fraction))
        } else {
            self.run = None;
            Some(run.target())
        }
    }

    /// Ends the current run without emitting its target.
    pub fn abort(&mut self) {
        self.run = None;
    }

    pub fn is_finished(&self) -> bool {
        self.run.is_none()
    }

    /// Target of the current run, if any.
    pub fn final_position(&self) -> Option<IntPoint> {
        self.run.map(|run| run.target())
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
