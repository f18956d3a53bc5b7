//! Particle field tuning.

use serde::Deserialize;

use crate::color::Color;
use crate::error::{FieldError, FieldResult};

/// Configuration for a [`ParticleField`](crate::ParticleField).
///
/// Defaults reproduce the profile page: sizes in `[1, 3)`, velocity
/// components in `[-1, 1)`, shrink `0.01` per tick, link within `100`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Smallest spawn radius (inclusive).
    pub size_min: f32,
    /// Largest spawn radius (exclusive).
    pub size_max: f32,
    /// Velocity components are drawn from `[-speed, speed)`.
    pub speed: f32,
    /// Radius lost per tick.
    pub decay_rate: f32,
    /// Particles strictly closer than this to the pointer get a link stroke.
    pub link_distance: f32,
    /// Disc fill.
    pub fill: Color,
    /// Link stroke.
    pub stroke: Color,
    /// Live population cap. `None` keeps every particle until it decays.
    pub max_particles: Option<usize>,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> FieldResult<()> {
        let sizes_ok =
            self.size_min > 0.0 && self.size_min < self.size_max && self.size_max.is_finite();
        if !sizes_ok {
            return Err(FieldError::InvalidConfig(format!(
                "size range [{}, {}) must be finite, positive and non-empty",
                self.size_min, self.size_max
            )));
        }
        // Velocity is drawn from `[-speed, speed)`; that span must stay finite.
        if self.speed.is_nan() || self.speed < 0.0 || !(2.0 * self.speed).is_finite() {
            return Err(FieldError::InvalidConfig(format!(
                "speed {} must be finite and >= 0",
                self.speed
            )));
        }
        if self.decay_rate <= 0.0 || !self.decay_rate.is_finite() {
            return Err(FieldError::InvalidConfig(format!(
                "decay_rate {} must be > 0",
                self.decay_rate
            )));
        }
        if self.link_distance.is_nan() || self.link_distance < 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "link_distance {} must be >= 0",
                self.link_distance
            )));
        }
        if self.max_particles == Some(0) {
            return Err(FieldError::InvalidConfig("max_particles must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size_min: 1.0,
            size_max: 3.0,
            speed: 1.0,
            decay_rate: 0.01,
            link_distance: 100.0,
            fill: Color::PARTICLE_FILL,
            stroke: Color::LINK_STROKE,
            max_particles: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_size_range() {
        let config = FieldConfig {
            size_min: 3.0,
            size_max: 1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_decay() {
        let config = FieldConfig {
            decay_rate: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_infinite_size_max() {
        let config = FieldConfig {
            size_max: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_speed_with_overflowing_span() {
        let config = FieldConfig {
            speed: 3e38,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FieldConfig {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_link_distance() {
        let config = FieldConfig {
            link_distance: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
