//! Animation support for AnyWindow
//!
//! Provides the frame clock abstraction, the deceleration curve used by
//! flings, and the [`Scroller`] that samples a run once per frame.

mod frame_clock;
mod interpolator;
mod scroller;

pub use frame_clock::*;
pub use interpolator::*;
pub use scroller::*;
