use anywindow_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Reported by hosts that run their own press recognition. Carries no
    /// position change for the overlay.
    LongPress,
    /// See [`PointerEventKind::LongPress`].
    SingleTap,
}

/// Raw pointer sample in display (screen) coordinates.
///
/// `time_ms` is the host's monotonic event time. Only differences between
/// samples matter, so any fixed origin works.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), time_ms)
    }

    pub fn cancel(time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, time_ms)
    }

    /// Whether the event belongs to the down/move/up stream the drag
    /// controller acts on.
    pub fn is_drag_stream(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Down
                | PointerEventKind::Move
                | PointerEventKind::Up
                | PointerEventKind::Cancel
        )
    }
}
