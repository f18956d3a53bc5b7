//! Animated regions: a page section, its elements, and its trigger.

use std::fmt;

use crate::error::MotionResult;
use crate::probe::ElementId;
use crate::timeline::Timeline;
use crate::trigger::{ScrollTrigger, TriggerZone};
use crate::tween::Tween;

/// Handle to a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// Everything needed to register a region.
#[derive(Debug, Clone)]
pub struct RegionDescriptor {
    /// Human-readable name for logs.
    pub name: String,
    /// Element whose position drives the trigger.
    pub anchor: ElementId,
    /// Animated elements in stagger order. Empty means the anchor itself.
    pub targets: Vec<ElementId>,
    /// Transition played on each target.
    pub tween: Tween,
    /// Delay between successive targets' starts, in seconds.
    pub stagger: f32,
    /// Scroll trigger. `None` plays immediately on registration.
    pub trigger: Option<ScrollTrigger>,
}

impl RegionDescriptor {
    /// Describes a single-element region that plays immediately.
    #[must_use]
    pub fn new(name: impl Into<String>, anchor: ElementId, tween: Tween) -> Self {
        Self {
            name: name.into(),
            anchor,
            targets: Vec::new(),
            tween,
            stagger: 0.0,
            trigger: None,
        }
    }

    /// Animates these children instead of the anchor.
    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = ElementId>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Sets the per-child stagger.
    #[must_use]
    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    /// Gates the region on a scroll trigger.
    #[must_use]
    pub fn with_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Checks durations.
    ///
    /// # Errors
    ///
    /// Propagates [`Tween::validate`] failures.
    pub fn validate(&self) -> MotionResult<()> {
        self.tween.validate()
    }
}

/// Lifecycle state of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    /// Not registered (or registration was skipped).
    Unobserved,
    /// At rest in the initial style.
    Hidden,
    /// Moving toward rest.
    Entering,
    /// At rest in the final style.
    Visible,
    /// Moving back toward the initial style.
    Leaving,
    /// Stopped partway by a pause action.
    Paused,
    /// Scheduler was torn down.
    TornDown,
}

/// A registered region.
#[derive(Debug)]
pub(crate) struct Region {
    pub(crate) id: RegionId,
    pub(crate) name: String,
    pub(crate) anchor: ElementId,
    pub(crate) targets: Vec<ElementId>,
    pub(crate) timeline: Timeline,
    pub(crate) trigger: Option<ScrollTrigger>,
    /// Last observed zone.
    pub(crate) zone: TriggerZone,
    /// Still listening to scroll updates.
    pub(crate) observing: bool,
    /// Styles changed since the last write to the sink.
    pub(crate) dirty: bool,
}

impl Region {
    pub(crate) fn state(&self) -> RegionState {
        let timeline = &self.timeline;
        if timeline.is_moving() {
            if timeline.is_reversed() {
                RegionState::Leaving
            } else {
                RegionState::Entering
            }
        } else if timeline.at_end() {
            RegionState::Visible
        } else if timeline.time() <= 0.0 {
            RegionState::Hidden
        } else {
            RegionState::Paused
        }
    }
}
