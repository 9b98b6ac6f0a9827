//! Drag-and-fling gesture state machine.
//!
//! Consumes the raw pointer stream, moves the overlay while dragging, plans a
//! fling on release and plays it back one frame per [`DragController::tick`].
//! The controller is the only writer of the overlay position; [`DragState`]
//! decides whether pointer moves or animation frames may write it.

use crate::fling::{plan_fling, FlingPlan};
use crate::{ControllerConfig, Fence, GeometryError, PlacementHint, PositionSink, SetupError};
use anywindow_animation::{AnimationClock, DecelerateInterpolator, Scroller};
use anywindow_foundation::{
    DragGesture, PointerEvent, PointerEventKind, SlopResult, TrajectoryRecorder, Velocity,
    VelocityTracker,
};
use anywindow_ui_graphics::{IntPoint, IntSize, Point};

/// Which writer currently owns the overlay position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
    Flinging,
}

/// Overlay and pointer positions captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub start: Point,
    pub start_event: Point,
}

/// Turns pointer events and frame ticks into fenced overlay positions.
pub struct DragController<S: PositionSink, C: AnimationClock> {
    config: ControllerConfig,
    fence: Fence,
    overlay_size: IntSize,
    position: IntPoint,
    state: DragState,
    origin: Option<DragOrigin>,
    gesture: DragGesture,
    velocity_tracker: Option<VelocityTracker>,
    trajectory: TrajectoryRecorder,
    scroller: Scroller<C>,
    last_plan: Option<FlingPlan>,
    last_exit_angle: Option<f32>,
    sink: S,
}

impl<S: PositionSink, C: AnimationClock> DragController<S, C> {
    pub fn new(
        config: ControllerConfig,
        fence: Fence,
        sink: S,
        clock: C,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let scroller = Scroller::with_curve(
            clock,
            config.fling_duration,
            DecelerateInterpolator::new(config.decelerate_factor),
        );
        Ok(Self {
            config,
            fence,
            overlay_size: IntSize::ZERO,
            position: IntPoint::new(fence.left(), fence.top()),
            state: DragState::Idle,
            origin: None,
            gesture: DragGesture::new(config.touch_slop),
            velocity_tracker: None,
            trajectory: TrajectoryRecorder::new(),
            scroller,
            last_plan: None,
            last_exit_angle: None,
            sink,
        })
    }

    /// Sets the measured overlay size used for edge snapping.
    pub fn set_overlay_size(&mut self, size: IntSize) -> Result<(), GeometryError> {
        if size.width < 0 || size.height < 0 {
            return Err(GeometryError::InvalidOverlaySize {
                width: size.width,
                height: size.height,
            });
        }
        self.overlay_size = size;
        Ok(())
    }

    /// Clamps the hinted position into the fence and stores it without
    /// applying it. An out-of-fence hint leaves the position unchanged.
    pub fn place(&mut self, hint: PlacementHint) -> IntPoint {
        let proposed = hint.resolve(&self.fence);
        match self.fence.clamp(proposed) {
            Some(position) => self.position = position,
            None => {
                log::debug!("placement {proposed:?} outside fence, keeping {:?}", self.position);
                self.scroller.abort();
            }
        }
        self.position
    }

    /// Places the overlay and applies the result.
    pub fn show(&mut self, hint: PlacementHint) -> IntPoint {
        let position = self.place(hint);
        self.apply_position();
        position
    }

    /// Places the overlay at the configured default hint and applies it.
    pub fn show_default(&mut self) -> IntPoint {
        self.show(self.config.placement)
    }

    /// Feeds one pointer event. Returns `true` for events of the drag stream.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !event.is_drag_stream() {
            log::trace!("ignoring {:?}", event.kind);
            return false;
        }
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(),
            PointerEventKind::Cancel => self.on_cancel(),
            PointerEventKind::LongPress | PointerEventKind::SingleTap => {}
        }
        true
    }

    /// Per-frame hook. Applies the next fling sample and returns whether a
    /// position was applied. Does nothing outside [`DragState::Flinging`].
    pub fn tick(&mut self) -> bool {
        if self.state != DragState::Flinging {
            return false;
        }
        match self.scroller.step() {
            Some(next) => {
                if self.move_to(next) {
                    true
                } else {
                    self.finish_fling();
                    false
                }
            }
            None => {
                self.finish_fling();
                false
            }
        }
    }

    /// Drops any gesture or fling in progress without moving the overlay.
    pub fn reset(&mut self) {
        self.scroller.abort();
        self.gesture.reset();
        self.velocity_tracker = None;
        self.origin = None;
        self.state = DragState::Idle;
    }

    fn on_down(&mut self, event: &PointerEvent) {
        if self.state == DragState::Flinging {
            log::debug!("fling interrupted at {:?}", self.position);
        }
        self.scroller.abort();
        self.state = DragState::Idle;
        self.origin = None;
        self.velocity_tracker = None;
        self.gesture.on_down(event.position);
    }

    fn on_move(&mut self, event: &PointerEvent) {
        match (self.gesture.on_move(event.position), self.state) {
            (SlopResult::Started, DragState::Idle) => self.start_drag(event),
            (SlopResult::Dragging, DragState::Dragging) => self.drag_to(event),
            _ => {}
        }
    }

    fn on_up(&mut self) {
        self.gesture.reset();
        if self.state != DragState::Dragging {
            return;
        }
        self.state = DragState::Flinging;

        let max_velocity = self.fence.max_extent() as f32;
        let velocity = self
            .velocity_tracker
            .take()
            .map(|tracker| tracker.compute_velocity(self.config.velocity_units_ms, max_velocity))
            .unwrap_or(Velocity::ZERO);
        self.end_drag(velocity);
    }

    fn on_cancel(&mut self) {
        self.gesture.reset();
        self.velocity_tracker = None;
        if self.state == DragState::Dragging {
            log::debug!("drag cancelled at {:?}", self.position);
            self.origin = None;
            self.state = DragState::Idle;
        }
    }

    fn start_drag(&mut self, event: &PointerEvent) {
        self.state = DragState::Dragging;

        let mut tracker = VelocityTracker::new();
        tracker.add_movement(event.time_ms, event.position);
        self.velocity_tracker = Some(tracker);

        let start = self.position.to_point();
        self.origin = Some(DragOrigin {
            start,
            start_event: event.position,
        });
        self.trajectory.reset(start);
        log::debug!("drag started at {:?}", self.position);
    }

    fn drag_to(&mut self, event: &PointerEvent) {
        if let Some(tracker) = self.velocity_tracker.as_mut() {
            tracker.add_movement(event.time_ms, event.position);
        }
        let Some(origin) = self.origin else {
            return;
        };

        let candidate = origin.start + (event.position - origin.start_event);
        let previous = self.position.to_point();
        self.trajectory
            .quad_to(previous, previous.midpoint(candidate));
        self.move_to(candidate.to_int_point());
    }

    fn end_drag(&mut self, velocity: Velocity) {
        let plan = plan_fling(self.position, self.overlay_size, velocity, &self.fence);
        let exit_angle = self.trajectory.exit_angle_degrees();
        match exit_angle {
            Some(degrees) => log::debug!("drag exit angle {degrees:.1} degrees"),
            None => log::debug!("drag exit angle unknown"),
        }
        log::debug!(
            "fling ({}, {}) -> ({}, {}) at velocity ({:.1}, {:.1})",
            plan.start_x,
            plan.start_y,
            plan.target_x,
            plan.target_y,
            velocity.x,
            velocity.y
        );

        let start = plan.start();
        let delta = plan.delta();
        self.scroller.start(start.x, start.y, delta.x, delta.y);
        self.last_plan = Some(plan);
        self.last_exit_angle = exit_angle;
        self.tick();
    }

    fn finish_fling(&mut self) {
        self.scroller.abort();
        self.origin = None;
        self.state = DragState::Idle;
        log::debug!("fling finished at {:?}", self.position);
    }

    /// Clamps and applies `proposed`. Returns `false` (after aborting any
    /// fling run) when the fence rejects it.
    fn move_to(&mut self, proposed: IntPoint) -> bool {
        match self.fence.clamp(proposed) {
            Some(position) => {
                self.position = position;
                self.apply_position();
                true
            }
            None => {
                log::debug!("{proposed:?} outside fence, aborting motion");
                self.scroller.abort();
                false
            }
        }
    }

    fn apply_position(&mut self) {
        if let Err(err) = self.sink.apply_position(self.position) {
            log::warn!("failed to apply overlay position {:?}: {err}", self.position);
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn position(&self) -> IntPoint {
        self.position
    }

    pub fn fence(&self) -> &Fence {
        &self.fence
    }

    pub fn overlay_size(&self) -> IntSize {
        self.overlay_size
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn drag_origin(&self) -> Option<DragOrigin> {
        self.origin
    }

    /// Plan computed at the most recent release.
    pub fn last_fling_plan(&self) -> Option<FlingPlan> {
        self.last_plan
    }

    /// Exit tangent angle (degrees) of the most recent drag, for diagnostics.
    pub fn last_exit_angle(&self) -> Option<f32> {
        self.last_exit_angle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
