//! # PARALLAX
//!
//! Animated single-page profile: a pointer-reactive particle field behind
//! scroll-triggered section entrances.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          STAGE                               │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  parallax_particles          │  parallax_motion              │
//! │  ParticleField<Surface>      │  MotionScheduler              │
//! │  pointer → spawn, tick       │  regions, triggers, timelines │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  FrameLoop (one per stage)  ·  HostEvent queue (crossbeam)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two subsystems share nothing; the stage owns both. Hosts provide a
//! [`Surface`], a [`FrameScheduler`], a [`ViewportProbe`] and a
//! [`StyleSink`]. The `web` feature supplies browser implementations on
//! wasm32.
//!
//! ## Usage
//!
//! ```no_run
//! use parallax::{PageElements, ProfileContent, Stage, StageConfig};
//! use parallax_motion::{ElementId, ElementStyle};
//! use parallax_particles::{CommandSurface, ManualScheduler};
//! use std::collections::HashMap;
//!
//! let content = ProfileContent::default();
//! let layout = PageElements::for_content(&content).stack_layout(800.0);
//! let mut frames = ManualScheduler::new();
//! let mut styles: HashMap<ElementId, ElementStyle> = HashMap::new();
//!
//! let mut stage = Stage::mount(
//!     StageConfig::default(),
//!     content,
//!     Some(CommandSurface::new(1280, 800)),
//!     &layout,
//!     &mut frames,
//! )?;
//!
//! stage.pointer_move(50.0, 50.0);
//! while frames.fire().is_some() && stage.frames() < 60 {
//!     stage.on_frame(&mut frames, 1.0 / 60.0, &layout, &mut styles);
//! }
//! stage.unmount(&mut frames);
//! # Ok::<(), parallax::StageError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod page;
pub mod stage;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use config::{MotionConfig, RegionPreset, StageConfig};
pub use content::{ContactLink, ProfileContent, Project};
pub use error::{StageError, StageResult};
pub use events::{EventBus, EventReceiver, EventSender, HostEvent};
pub use page::{region_descriptor, PageElements, PageRegion};
pub use stage::{FrameReport, Stage};

pub use parallax_motion::{StyleSink, ViewportProbe};
pub use parallax_particles::{FrameScheduler, Surface};
