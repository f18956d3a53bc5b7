//! # Motion Error Types

use thiserror::Error;

/// Errors raised while describing animations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A toggle action keyword was not recognized.
    #[error("unknown toggle action: {0:?}")]
    InvalidToggleAction(String),

    /// A toggle action list did not have exactly four entries.
    #[error("toggle actions need four entries (enter, leave, enter-back, leave-back): {0:?}")]
    InvalidToggleActions(String),

    /// An easing name was not recognized.
    #[error("unknown easing: {0:?}")]
    InvalidEasing(String),

    /// Tween duration was negative or not finite.
    #[error("invalid tween duration: {0}")]
    InvalidDuration(f32),

    /// Stagger was negative or not finite.
    #[error("invalid stagger: {0}")]
    InvalidStagger(f32),

    /// A trigger line offset was not finite.
    #[error("invalid trigger offset: {0}")]
    InvalidOffset(f32),
}

/// Result type for motion setup.
pub type MotionResult<T> = Result<T, MotionError>;
