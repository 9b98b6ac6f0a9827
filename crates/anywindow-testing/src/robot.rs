//! Robot-style gesture scripting
//!
//! The robot keeps one timeline: every pointer event is stamped with the
//! robot's time, and advancing that time also advances the [`ManualClock`]
//! the target animates with.
//!
//! # Example
//!
//! ```ignore
//! let clock = ManualClock::new();
//! let controller = DragController::new(config, fence, sink, clock.clone())?;
//! let mut robot = GestureRobot::new(controller, clock);
//!
//! robot.fling((100.0, 100.0), (160.0, 130.0), 6, 10);
//! robot.settle();
//! ```

use crate::clock::{ManualClock, FRAME_NANOS};
use anywindow::{
    AnimationClock, AnyWindow, DragController, Point, PointerEvent, PositionSink, WindowHost,
};

/// Upper bound on frames pumped by [`GestureRobot::settle`].
pub const SETTLE_FRAME_LIMIT: usize = 240;

/// Something that consumes pointer events and per-frame ticks.
pub trait GestureTarget {
    fn dispatch(&mut self, event: &PointerEvent) -> bool;
    fn frame(&mut self) -> bool;
}

impl<S: PositionSink, C: AnimationClock> GestureTarget for DragController<S, C> {
    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        self.on_pointer_event(event)
    }

    fn frame(&mut self) -> bool {
        self.tick()
    }
}

impl<H: WindowHost, C: AnimationClock> GestureTarget for AnyWindow<H, C> {
    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        self.on_pointer_event(event)
    }

    fn frame(&mut self) -> bool {
        self.tick()
    }
}

pub struct GestureRobot<T: GestureTarget> {
    target: T,
    clock: ManualClock,
    time_ms: i64,
    pointer: Point,
}

impl<T: GestureTarget> GestureRobot<T> {
    pub fn new(target: T, clock: ManualClock) -> Self {
        Self {
            target,
            clock,
            time_ms: 0,
            pointer: Point::ZERO,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Timestamp the next event will carry.
    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// Moves time forward without pumping frames.
    pub fn wait(&mut self, millis: u64) {
        self.time_ms = self.time_ms.saturating_add(millis as i64);
        self.clock.advance_millis(millis);
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        self.target.dispatch(&PointerEvent::down(x, y, self.time_ms))
    }

    /// Waits `after_ms`, then moves the pointer to `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32, after_ms: u64) -> bool {
        self.wait(after_ms);
        self.pointer = Point::new(x, y);
        self.target.dispatch(&PointerEvent::moved(x, y, self.time_ms))
    }

    /// Lifts the pointer where it is, without waiting.
    pub fn release(&mut self) -> bool {
        let Point { x, y } = self.pointer;
        self.target.dispatch(&PointerEvent::up(x, y, self.time_ms))
    }

    pub fn cancel(&mut self) -> bool {
        self.target.dispatch(&PointerEvent::cancel(self.time_ms))
    }

    /// Presses at `from` and moves to `to` in `steps` evenly spaced moves,
    /// `step_ms` apart. The pointer stays down.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_ms: u64) {
        self.press(from.0, from.1);
        self.drag_to(to, steps, step_ms);
    }

    /// Continues the current press toward `to` in `steps` evenly spaced
    /// moves.
    pub fn drag_to(&mut self, to: (f32, f32), steps: u32, step_ms: u64) {
        let from = self.pointer;
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(
                from.x + (to.0 - from.x) * fraction,
                from.y + (to.1 - from.y) * fraction,
                step_ms,
            );
        }
    }

    /// [`GestureRobot::drag`] followed by a release.
    pub fn fling(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_ms: u64) {
        self.drag(from, to, steps, step_ms);
        self.release();
    }

    /// Press and release without moving.
    pub fn tap(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.wait(50);
        self.release();
    }

    /// Advances one frame and ticks the target.
    pub fn frame(&mut self) -> bool {
        self.clock.advance_nanos(FRAME_NANOS);
        self.time_ms = self.time_ms.max(self.clock.now_millis() as i64);
        self.target.frame()
    }

    /// Pumps frames until a tick applies nothing, up to `max` frames.
    /// Returns the number of frames that applied a position.
    pub fn run_frames(&mut self, max: usize) -> usize {
        for applied in 0..max {
            if !self.frame() {
                return applied;
            }
        }
        max
    }

    pub fn settle(&mut self) -> usize {
        self.run_frames(SETTLE_FRAME_LIMIT)
    }
}
