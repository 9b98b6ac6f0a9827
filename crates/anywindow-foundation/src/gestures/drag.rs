//! Touch-slop drag recogniser.

use crate::gesture_constants::DRAG_THRESHOLD;
use anywindow_ui_graphics::Point;

/// Outcome of feeding a move to [`DragGesture`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlopResult {
    /// No press is being tracked.
    Untracked,
    /// Still inside the slop circle around the press point.
    Pending,
    /// This move is the first one beyond the slop.
    Started,
    /// The slop was already exceeded earlier in this press.
    Dragging,
}

/// Decides when a press turns into a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    threshold: f32,
    down_position: Option<Point>,
    slop_passed: bool,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl DragGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            down_position: None,
            slop_passed: false,
        }
    }

    pub fn on_down(&mut self, position: Point) {
        self.down_position = Some(position);
        self.slop_passed = false;
    }

    pub fn on_move(&mut self, position: Point) -> SlopResult {
        let Some(down) = self.down_position else {
            return SlopResult::Untracked;
        };
        if self.slop_passed {
            return SlopResult::Dragging;
        }
        let distance = down.distance_to(position);
        if distance > self.threshold {
            self.slop_passed = true;
            log::trace!("slop {} crossed at {distance:.1}px", self.threshold);
            SlopResult::Started
        } else {
            SlopResult::Pending
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.slop_passed
    }

    pub fn reset(&mut self) {
        self.down_position = None;
        self.slop_passed = false;
    }
}
