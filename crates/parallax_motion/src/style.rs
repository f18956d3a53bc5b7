//! Animatable element style.

/// Transform and opacity for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Horizontal translation.
    pub translate_x: f32,
    /// Vertical translation.
    pub translate_y: f32,
    /// Opacity (0-1).
    pub opacity: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl ElementStyle {
    /// The element's natural, un-animated state.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Rest style shifted vertically and faded out.
    #[must_use]
    pub const fn offset_y(translate_y: f32) -> Self {
        Self {
            translate_y,
            opacity: 0.0,
            ..Self::REST
        }
    }

    /// Rest style collapsed to nothing and faded out.
    #[must_use]
    pub const fn collapsed() -> Self {
        Self {
            scale: 0.0,
            opacity: 0.0,
            ..Self::REST
        }
    }

    /// Interpolates toward `other`. `t` may exceed 1 for overshooting curves.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            translate_x: mix(self.translate_x, other.translate_x),
            translate_y: mix(self.translate_y, other.translate_y),
            opacity: mix(self.opacity, other.opacity).clamp(0.0, 1.0),
            scale: mix(self.scale, other.scale),
        }
    }

    /// Formats as a CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = ElementStyle::offset_y(50.0);
        assert_eq!(from.lerp(ElementStyle::REST, 0.0), from);
        assert_eq!(from.lerp(ElementStyle::REST, 1.0), ElementStyle::REST);
    }

    #[test]
    fn test_overshoot_keeps_opacity_in_range() {
        let style = ElementStyle::collapsed().lerp(ElementStyle::REST, 1.1);
        assert!(style.scale > 1.0);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_css_transform() {
        let style = ElementStyle::offset_y(-100.0);
        assert_eq!(style.css_transform(), "translate(0px, -100px) scale(1)");
    }
}
