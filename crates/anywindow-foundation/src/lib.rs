//! Input foundation for AnyWindow overlays
//!
//! Pointer event types, touch-slop drag recognition, velocity tracking and
//! drag trajectory recording.

pub mod gesture_constants;
pub mod gestures;
mod pointer;
mod trajectory;
mod velocity_tracker;

pub use gestures::{DragGesture, SlopResult};
pub use pointer::*;
pub use trajectory::*;
pub use velocity_tracker::*;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::DragGesture;
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::trajectory::TrajectoryRecorder;
    pub use crate::velocity_tracker::{Velocity, VelocityTracker};
}
