//! Easing curves.
//!
//! Section entrances use a cubic ease-out; contact actions use a back-out
//! curve that overshoots the rest value before settling.
//!
//! Curves parse from the names used in timeline configs:
//! `linear`, `power3.out`, `back.out(1.7)`, `expo.out`, `expo.in`,
//! `expo.inOut`, `instant`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MotionError;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-out: `1 - (1 - t)^3`.
    #[default]
    Power3Out,
    /// Overshoots past 1 then settles. `overshoot` 1.7 is the classic curve.
    BackOut {
        /// Overshoot strength.
        overshoot: f32,
    },
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out.
    ExponentialInOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Back-out with the standard 1.7 overshoot.
    pub const BACK_OUT: Self = Self::BackOut { overshoot: 1.7 };

    /// Applies the easing function to a t value (0-1).
    ///
    /// The result is exactly 0 at `t = 0` and exactly 1 at `t = 1`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 && self != Self::Instant {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => t,
            Self::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::BackOut { overshoot } => {
                let s = overshoot;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Self::ExponentialOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Self::ExponentialIn => 2.0_f32.powf(10.0 * (t - 1.0)),
            Self::ExponentialInOut => {
                if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let invalid = || MotionError::InvalidEasing(s.to_string());

        if let Some(args) = name.strip_prefix("back.out") {
            if args.is_empty() {
                return Ok(Self::BACK_OUT);
            }
            let overshoot = args
                .strip_prefix('(')
                .and_then(|a| a.strip_suffix(')'))
                .and_then(|a| a.trim().parse::<f32>().ok())
                .filter(|o| o.is_finite())
                .ok_or_else(invalid)?;
            return Ok(Self::BackOut { overshoot });
        }

        match name {
            "linear" | "none" => Ok(Self::Linear),
            "power3.out" => Ok(Self::Power3Out),
            "expo.out" => Ok(Self::ExponentialOut),
            "expo.in" => Ok(Self::ExponentialIn),
            "expo.inOut" => Ok(Self::ExponentialInOut),
            "instant" => Ok(Self::Instant),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Easing {
    type Error = MotionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Power3Out => f.write_str("power3.out"),
            Self::BackOut { overshoot } => write!(f, "back.out({overshoot})"),
            Self::ExponentialOut => f.write_str("expo.out"),
            Self::ExponentialIn => f.write_str("expo.in"),
            Self::ExponentialInOut => f.write_str("expo.inOut"),
            Self::Instant => f.write_str("instant"),
        }
    }
}
