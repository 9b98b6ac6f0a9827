//! Deceleration curve for fling playback.

/// Ease-out curve that starts fast and slows toward the end.
///
/// With the default factor of 1.0 this is `1 - (1 - t)^2`; larger factors
/// decelerate harder (`1 - (1 - t)^(2 * factor)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecelerateInterpolator {
    factor: f32,
}

impl DecelerateInterpolator {
    pub const DEFAULT_FACTOR: f32 = 1.0;

    /// Creates a curve with the given factor. Non-finite or non-positive
    /// factors fall back to [`Self::DEFAULT_FACTOR`].
    pub fn new(factor: f32) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            Self::DEFAULT_FACTOR
        };
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Maps a linear fraction in [0, 1] to the eased fraction.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let remaining = 1.0 - fraction;
        if self.factor == 1.0 {
            1.0 - remaining * remaining
        } else {
            1.0 - remaining.powf(2.0 * self.factor)
        }
    }
}

impl Default for DecelerateInterpolator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACTOR)
    }
}
