//! # Particle Field Error Types

use thiserror::Error;

/// Errors raised while setting up a particle field.
///
/// Ticking, spawning and resizing never fail; only setup does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The host could not provide a drawing surface or 2D context.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    /// A configuration value is out of range.
    #[error("invalid particle configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for particle field setup.
pub type FieldResult<T> = Result<T, FieldError>;
