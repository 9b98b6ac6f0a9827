//! Drag path recording for exit-direction diagnostics.
//!
//! The path is a chain of quadratic segments starting at the drag anchor.
//! It is never rendered, so only the most recent segments are kept; the exit
//! tangent depends on the last segment that actually moves.

use anywindow_ui_graphics::Point;
use smallvec::SmallVec;

/// Number of recent non-degenerate segments retained.
pub const TRAJECTORY_HISTORY: usize = 4;

/// One quadratic Bézier piece of the drag path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadSegment {
    /// Direction of travel at the segment's end point, not normalized.
    ///
    /// Falls back to the chord when the control point coincides with the end.
    fn end_direction(&self) -> Option<Point> {
        let from_control = self.end - self.control;
        if from_control != Point::ZERO {
            return Some(from_control);
        }
        let chord = self.end - self.start;
        (chord != Point::ZERO).then_some(chord)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrajectoryRecorder {
    anchor: Option<Point>,
    current: Point,
    recent: SmallVec<[QuadSegment; TRAJECTORY_HISTORY]>,
    segment_count: usize,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new path at `anchor`, dropping any previous one.
    pub fn reset(&mut self, anchor: Point) {
        self.anchor = Some(anchor);
        self.current = anchor;
        self.recent.clear();
        self.segment_count = 0;
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.current = Point::ZERO;
        self.recent.clear();
        self.segment_count = 0;
    }

    /// Appends a quadratic segment from the current end point. Ignored when no
    /// anchor has been set.
    pub fn quad_to(&mut self, control: Point, end: Point) {
        if self.anchor.is_none() {
            return;
        }
        let segment = QuadSegment {
            start: self.current,
            control,
            end,
        };
        self.current = end;
        self.segment_count += 1;

        if segment.end_direction().is_none() {
            return;
        }
        if self.recent.len() == TRAJECTORY_HISTORY {
            self.recent.remove(0);
        }
        self.recent.push(segment);
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn end_point(&self) -> Option<Point> {
        self.anchor.map(|_| self.current)
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Unit tangent at the end of the path, if the path ever moved.
    pub fn exit_tangent(&self) -> Option<Point> {
        let direction = self.recent.last()?.end_direction()?;
        let length = direction.x.hypot(direction.y);
        Some(Point::new(direction.x / length, direction.y / length))
    }

    /// Exit direction as `atan2(tan_y, tan_x)` in degrees, within (-180, 180].
    pub fn exit_angle_degrees(&self) -> Option<f32> {
        self.exit_tangent()
            .map(|tangent| tangent.y.atan2(tangent.x).to_degrees())
    }
}
