//! Draggable floating overlay with edge-snapping fling
//!
//! [`DragController`] turns a pointer stream into overlay positions: it
//! follows the finger once the touch slop is passed, and on release flings
//! the overlay to the nearer side edge along the release direction. Every
//! position is clamped into a [`Fence`] and handed to a [`PositionSink`].
//! [`AnyWindow`] wraps the controller with window parameters and a
//! [`WindowHost`] for the usual show/drag/dismiss lifecycle.

mod any_window;
mod config;
mod controller;
mod error;
mod fence;
mod fling;
mod window;
mod window_params;

pub use any_window::AnyWindow;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use fence::Fence;
pub use fling::*;
pub use window::*;
pub use window_params::*;

pub use anywindow_animation::{AnimationClock, SystemClock};
pub use anywindow_foundation::{PointerEvent, PointerEventKind, Velocity};
pub use anywindow_ui_graphics::{IntPoint, IntRect, IntSize, Point};

pub mod prelude {
    pub use crate::any_window::AnyWindow;
    pub use crate::config::{ControllerConfig, PlacementHint};
    pub use crate::controller::{DragController, DragState};
    pub use crate::fence::Fence;
    pub use crate::window::{AttachedWindow, PositionSink, WindowHost};
    pub use crate::window_params::{Dimension, WindowFlags, WindowParams};
    pub use anywindow_animation::{AnimationClock, SystemClock};
    pub use anywindow_foundation::{PointerEvent, PointerEventKind};
    pub use anywindow_ui_graphics::{IntPoint, IntSize};
}
