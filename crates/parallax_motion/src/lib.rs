//! # PARALLAX Motion
//!
//! Scroll-triggered entrance animations for page regions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    MOTION SCHEDULER                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  register(RegionDescriptor) ──► Region                    │
//! │      anchor + targets + Timeline + ScrollTrigger          │
//! │                                                           │
//! │  on_scroll(probe)  → zone change → toggle action          │
//! │  advance(dt, sink) → playheads   → ElementStyle writes    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every region animates *from* an initial style *to* rest. Reversal
//! runs the same playhead backward, so an interrupted entrance unwinds
//! from wherever it is.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod easing;
pub mod error;
pub mod probe;
pub mod region;
pub mod scheduler;
pub mod style;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use easing::Easing;
pub use error::{MotionError, MotionResult};
pub use probe::{ElementBounds, ElementId, StaticLayout, StyleSink, ViewportProbe};
pub use region::{RegionDescriptor, RegionId, RegionState};
pub use scheduler::{MotionEvent, MotionEventKind, MotionScheduler};
pub use style::ElementStyle;
pub use timeline::{Timeline, TimelineEvent};
pub use trigger::{Crossing, ScrollTrigger, ToggleAction, ToggleActions, TriggerZone};
pub use tween::Tween;
