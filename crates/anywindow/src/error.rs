//! Error types for overlay setup and host window calls.

/// Geometry rejected at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    InvalidFence { width: i32, height: i32 },
    InvalidOverlaySize { width: i32, height: i32 },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidFence { width, height } => {
                write!(f, "fence must have positive extents, got {width}x{height}")
            }
            GeometryError::InvalidOverlaySize { width, height } => {
                write!(f, "overlay size must not be negative, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidTouchSlop(f32),
    InvalidVelocityUnits(i64),
    InvalidDuration,
    InvalidDecelerateFactor(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be finite and non-negative, got {slop}")
            }
            ConfigError::InvalidVelocityUnits(units) => {
                write!(f, "velocity units must be positive, got {units}ms")
            }
            ConfigError::InvalidDuration => write!(f, "fling duration must be non-zero"),
            ConfigError::InvalidDecelerateFactor(factor) => {
                write!(f, "decelerate factor must be finite and positive, got {factor}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to build a drag controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    Geometry(GeometryError),
    Config(ConfigError),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Geometry(err) => write!(f, "invalid geometry: {err}"),
            SetupError::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Geometry(err) => Some(err),
            SetupError::Config(err) => Some(err),
        }
    }
}

impl From<GeometryError> for SetupError {
    fn from(err: GeometryError) -> Self {
        SetupError::Geometry(err)
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

/// Host window call failure. Never fatal to the drag controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    NotAttached,
    AlreadyAttached,
    Rejected(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::NotAttached => write!(f, "overlay is not attached to a window"),
            WindowError::AlreadyAttached => write!(f, "overlay is already attached"),
            WindowError::Rejected(reason) => write!(f, "window host rejected update: {reason}"),
        }
    }
}

impl std::error::Error for WindowError {}
