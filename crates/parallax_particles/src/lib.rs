//! # PARALLAX Particle Field
//!
//! Pointer-reactive particle field rendered onto a viewport-sized surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     PARTICLE FIELD                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Pointer Move → PointerState + Spawn (1 particle/event)  │
//! │  Frame Loop   → Clear → Advance/Decay/Cull → Draw        │
//! │                               ↓                          │
//! │                 Discs + Links to pointer (< 100 units)   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hosts
//!
//! The field never talks to a platform directly. Hosts implement
//! [`Surface`] for drawing and [`FrameScheduler`] for frame pacing.
//! [`PixelSurface`], [`CommandSurface`] and [`ManualScheduler`] cover
//! headless use.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod pointer;
pub mod raster;
pub mod stats;
pub mod surface;

pub use color::Color;
pub use config::FieldConfig;
pub use error::{FieldError, FieldResult};
pub use field::ParticleField;
pub use frame_loop::{FrameLoop, FrameRequest, FrameScheduler, LoopHandle, ManualScheduler};
pub use particle::Particle;
pub use pointer::PointerState;
pub use raster::PixelSurface;
pub use stats::{FieldStats, TickStats};
pub use surface::{CommandSurface, DrawCommand, Surface};
