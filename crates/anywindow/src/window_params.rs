//! Layout parameters handed to the window host.

use anywindow_ui_graphics::IntPoint;

/// One axis of the overlay's requested size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dimension {
    Exact(i32),
    #[default]
    WrapContent,
    MatchParent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gravity(u8);

impl Gravity {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const TOP: Self = Self(1 << 1);
    pub const RIGHT: Self = Self(1 << 2);
    pub const BOTTOM: Self = Self(1 << 3);
    pub const CENTER_HORIZONTAL: Self = Self(1 << 4);
    pub const CENTER_VERTICAL: Self = Self(1 << 5);

    pub fn with(self, other: Gravity) -> Self {
        Self(self.0 | other.0)
    }

    pub fn contains(&self, other: Gravity) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::LEFT.with(Self::TOP)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowFlags(u32);

impl WindowFlags {
    pub const NONE: Self = Self(0);
    pub const NOT_FOCUSABLE: Self = Self(1 << 0);
    pub const NOT_TOUCHABLE: Self = Self(1 << 1);
    pub const NOT_TOUCH_MODAL: Self = Self(1 << 2);
    pub const LAYOUT_IN_SCREEN: Self = Self(1 << 3);
    pub const LAYOUT_INSET_DECOR: Self = Self(1 << 4);
    pub const LAYOUT_NO_LIMITS: Self = Self(1 << 5);
    pub const KEEP_SCREEN_ON: Self = Self(1 << 6);
    pub const DIM_BEHIND: Self = Self(1 << 7);
    pub const HARDWARE_ACCELERATED: Self = Self(1 << 8);

    pub fn with(self, other: WindowFlags) -> Self {
        Self(self.0 | other.0)
    }

    pub fn without(self, other: WindowFlags) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn contains(&self, other: WindowFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Lives inside the owning application's window stack.
    #[default]
    Application,
    /// System-wide overlay above other applications.
    ApplicationOverlay,
}

/// Builder for overlay layout parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowParams {
    pub width: Dimension,
    pub height: Dimension,
    pub location: IntPoint,
    pub gravity: Gravity,
    pub flags: WindowFlags,
    pub window_type: WindowType,
    pub alpha: f32,
    pub dim_amount: f32,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            width: Dimension::WrapContent,
            height: Dimension::WrapContent,
            location: IntPoint::ZERO,
            gravity: Gravity::default(),
            flags: WindowFlags::NONE,
            window_type: WindowType::Application,
            alpha: 1.0,
            dim_amount: 0.0,
        }
    }
}

impl WindowParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floating window scoped to the application: does not take focus and
    /// lets touches outside it through.
    pub fn app_float_window() -> Self {
        Self::default().with_flags(
            WindowFlags::NOT_FOCUSABLE
                .with(WindowFlags::NOT_TOUCH_MODAL)
                .with(WindowFlags::LAYOUT_IN_SCREEN),
        )
    }

    /// Floating window above other applications.
    pub fn system_float_window() -> Self {
        Self::app_float_window().with_window_type(WindowType::ApplicationOverlay)
    }

    pub fn with_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_location(mut self, location: IntPoint) -> Self {
        self.location = location;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_window_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    /// Replaces all flags.
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn set_flags(&mut self, flags: WindowFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    pub fn add_flags(&mut self, flags: WindowFlags) -> &mut Self {
        self.flags = self.flags.with(flags);
        self
    }

    pub fn remove_flags(&mut self, flags: WindowFlags) -> &mut Self {
        self.flags = self.flags.without(flags);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = clamp_unit(alpha);
        self
    }

    pub fn with_dim_amount(mut self, dim_amount: f32) -> Self {
        self.dim_amount = clamp_unit(dim_amount);
        self
    }

    pub fn set_location(&mut self, location: IntPoint) {
        self.location = location;
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
