//! One element's transition from an initial style to rest.

use crate::easing::Easing;
use crate::error::{MotionError, MotionResult};
use crate::style::ElementStyle;

/// A property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Style at progress 0.
    pub from: ElementStyle,
    /// Style at progress 1.
    pub to: ElementStyle,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl Tween {
    /// Default tween duration.
    pub const DEFAULT_DURATION: f32 = 0.5;

    /// A tween from `from` to [`ElementStyle::REST`].
    #[must_use]
    pub fn from_style(from: ElementStyle) -> Self {
        Self {
            from,
            to: ElementStyle::REST,
            duration: Self::DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Checks the duration.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidDuration`] for negative or non-finite
    /// durations.
    pub fn validate(&self) -> MotionResult<()> {
        if self.duration >= 0.0 && self.duration.is_finite() {
            Ok(())
        } else {
            Err(MotionError::InvalidDuration(self.duration))
        }
    }

    /// Samples the style at linear progress `t` (0-1).
    #[must_use]
    pub fn sample(&self, t: f32) -> ElementStyle {
        self.from.lerp(self.to, self.easing.apply(t))
    }
}
