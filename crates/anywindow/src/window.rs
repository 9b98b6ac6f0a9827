//! Collaborators that put the overlay on screen.
//!
//! The drag controller only needs a [`PositionSink`]. [`AttachedWindow`]
//! adapts a platform [`WindowHost`] into one and owns the layout parameters.

use crate::{WindowError, WindowParams};
use anywindow_ui_graphics::IntPoint;

/// Receives every clamped overlay position the controller computes.
///
/// Called once per drag move and once per fling frame, so implementations
/// must be cheap and idempotent. Errors are logged by the caller and the
/// frame is skipped.
pub trait PositionSink {
    fn apply_position(&mut self, position: IntPoint) -> Result<(), WindowError>;
}

impl<S: PositionSink + ?Sized> PositionSink for &mut S {
    fn apply_position(&mut self, position: IntPoint) -> Result<(), WindowError> {
        (**self).apply_position(position)
    }
}

/// Adapts a closure into a [`PositionSink`].
pub struct FnSink<F>(pub F);

impl<F> PositionSink for FnSink<F>
where
    F: FnMut(IntPoint) -> Result<(), WindowError>,
{
    fn apply_position(&mut self, position: IntPoint) -> Result<(), WindowError> {
        (self.0)(position)
    }
}

/// Platform window service that hosts the overlay surface.
pub trait WindowHost {
    fn add_view(&mut self, params: &WindowParams) -> Result<(), WindowError>;
    fn update_view(&mut self, params: &WindowParams) -> Result<(), WindowError>;
    fn remove_view(&mut self) -> Result<(), WindowError>;
}

/// Overlay parameters plus the host they are attached to.
///
/// Attach and detach are no-ops when already in the requested state. Host
/// failures are logged and swallowed, leaving the attached flag unchanged.
pub struct AttachedWindow<H: WindowHost> {
    host: H,
    params: WindowParams,
    attached: bool,
}

impl<H: WindowHost> AttachedWindow<H> {
    pub fn new(host: H, params: WindowParams) -> Self {
        Self {
            host,
            params,
            attached: false,
        }
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        match self.host.add_view(&self.params) {
            Ok(()) => self.attached = true,
            Err(err) => log::warn!("failed to add overlay view: {err}"),
        }
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        match self.host.remove_view() {
            Ok(()) => self.attached = false,
            Err(err) => log::warn!("failed to remove overlay view: {err}"),
        }
    }

    /// Pushes the current parameters to the host if attached.
    pub fn update(&mut self) {
        if let Err(err) = self.try_update() {
            log::debug!("overlay update skipped: {err}");
        }
    }

    fn try_update(&mut self) -> Result<(), WindowError> {
        if !self.attached {
            return Err(WindowError::NotAttached);
        }
        self.host.update_view(&self.params)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn params(&self) -> &WindowParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut WindowParams {
        &mut self.params
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: WindowHost> PositionSink for AttachedWindow<H> {
    /// Records the location even while detached so the next attach uses it.
    fn apply_position(&mut self, position: IntPoint) -> Result<(), WindowError> {
        self.params.set_location(position);
        self.try_update()
    }
}
