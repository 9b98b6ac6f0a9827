//! Builder-style overlay facade over [`DragController`] and a window host.

use crate::{
    AttachedWindow, ControllerConfig, Dimension, DragController, DragState, Fence, GeometryError,
    PlacementHint, SetupError, WindowFlags, WindowHost, WindowParams,
};
use anywindow_animation::AnimationClock;
use anywindow_foundation::PointerEvent;
use anywindow_ui_graphics::{IntPoint, IntSize};

/// A draggable floating overlay that snaps to the nearer side edge when
/// released.
///
/// ```ignore
/// let mut overlay = AnyWindow::new(host, IntSize::new(1080, 1920), SystemClock::new())?;
/// overlay
///     .view_size(Dimension::Exact(160), Dimension::Exact(160))?
///     .inset_screen()
///     .show();
/// // forward pointer events and call `tick` once per frame
/// ```
pub struct AnyWindow<H: WindowHost, C: AnimationClock> {
    controller: DragController<AttachedWindow<H>, C>,
    located: bool,
}

impl<H: WindowHost, C: AnimationClock> AnyWindow<H, C> {
    /// Application-scoped floating overlay fenced to the whole display.
    pub fn new(host: H, display_size: IntSize, clock: C) -> Result<Self, SetupError> {
        Self::with_config(
            host,
            display_size,
            clock,
            ControllerConfig::default(),
            WindowParams::app_float_window(),
        )
    }

    pub fn with_config(
        host: H,
        display_size: IntSize,
        clock: C,
        config: ControllerConfig,
        params: WindowParams,
    ) -> Result<Self, SetupError> {
        let fence = Fence::from_display(display_size)?;
        let window = AttachedWindow::new(host, params);
        let controller = DragController::new(config, fence, window, clock)?;
        Ok(Self {
            controller,
            located: false,
        })
    }

    /// Sets the requested layout size. Exact dimensions also become the
    /// overlay size used for edge snapping.
    pub fn view_size(
        &mut self,
        width: Dimension,
        height: Dimension,
    ) -> Result<&mut Self, GeometryError> {
        if let (Dimension::Exact(w), Dimension::Exact(h)) = (width, height) {
            self.controller.set_overlay_size(IntSize::new(w, h))?;
        }
        let params = self.window_mut().params_mut();
        params.width = width;
        params.height = height;
        Ok(self)
    }

    /// Reports the size the overlay was measured at, for wrap-content or
    /// match-parent layouts.
    pub fn measured_size(&mut self, size: IntSize) -> Result<&mut Self, GeometryError> {
        self.controller.set_overlay_size(size)?;
        Ok(self)
    }

    pub fn inset_screen(&mut self) -> &mut Self {
        self.window_mut()
            .params_mut()
            .add_flags(WindowFlags::LAYOUT_INSET_DECOR);
        self
    }

    /// Moves the overlay to `(x, y)` clamped into the display. A location
    /// outside the display on both axes is ignored. Takes effect on the next
    /// [`AnyWindow::show`] or [`AnyWindow::update`].
    pub fn view_location(&mut self, x: i32, y: i32) -> &mut Self {
        let position = self
            .controller
            .place(PlacementHint::Absolute(IntPoint::new(x, y)));
        self.window_mut().params_mut().set_location(position);
        self.located = true;
        self
    }

    /// Attaches the overlay. Without a prior [`AnyWindow::view_location`] it
    /// appears at the configured default placement.
    pub fn show(&mut self) {
        if self.is_showing() {
            return;
        }
        if !self.located {
            let hint = self.controller.config().placement;
            self.controller.place(hint);
            self.located = true;
        }
        let position = self.controller.position();
        let window = self.window_mut();
        window.params_mut().set_location(position);
        window.attach();
        log::debug!("overlay shown at {position:?}");
    }

    /// Detaches the overlay, dropping any drag or fling in progress.
    pub fn dismiss(&mut self) {
        self.controller.reset();
        self.window_mut().detach();
    }

    /// Pushes the current layout parameters to the host.
    pub fn update(&mut self) {
        self.window_mut().update();
    }

    /// Forwards a pointer event while the overlay is showing.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.is_showing() {
            return false;
        }
        self.controller.on_pointer_event(event)
    }

    pub fn tick(&mut self) -> bool {
        self.controller.tick()
    }

    pub fn position(&self) -> IntPoint {
        self.controller.position()
    }

    pub fn state(&self) -> DragState {
        self.controller.state()
    }

    pub fn is_showing(&self) -> bool {
        self.controller.sink().is_attached()
    }

    pub fn params(&self) -> &WindowParams {
        self.controller.sink().params()
    }

    pub fn host(&self) -> &H {
        self.controller.sink().host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.window_mut().host_mut()
    }

    pub fn controller(&self) -> &DragController<AttachedWindow<H>, C> {
        &self.controller
    }

    fn window_mut(&mut self) -> &mut AttachedWindow<H> {
        self.controller.sink_mut()
    }
}
