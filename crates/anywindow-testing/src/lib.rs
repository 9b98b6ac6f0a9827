//! Testing utilities for AnyWindow
//!
//! Deterministic clock, recording collaborators and a gesture robot that
//! scripts press/drag/release sequences against a controller or overlay.

pub mod assertions;
mod clock;
mod doubles;
pub mod robot;

pub use clock::*;
pub use doubles::*;
pub use robot::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::clock::ManualClock;
    pub use crate::doubles::{FakeWindowHost, HostCall, RecordingSink};
    pub use crate::robot::{GestureRobot, GestureTarget};
}
