//! # Stage Error Types
//!
//! Only setup can fail: loading config or content, and validating them.
//! Once mounted, the stage degrades instead of erroring.

use thiserror::Error;

use parallax_motion::MotionError;
use parallax_particles::FieldError;

/// Errors raised while setting up a stage.
#[derive(Error, Debug)]
pub enum StageError {
    /// Particle field setup failed.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Motion setup failed.
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// A config or content file was not valid TOML for its schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A config or content file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The host environment lacks something the stage needs.
    #[error("host unavailable: {0}")]
    HostUnavailable(&'static str),

    /// Content failed validation.
    #[error("invalid content: {0}")]
    InvalidContent(String),
}

/// Result type for stage setup.
pub type StageResult<T> = Result<T, StageError>;
