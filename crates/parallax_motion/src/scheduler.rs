//! The scroll-triggered animation scheduler.
//!
//! ```text
//! register ──► Hidden ──(enter: play)──► Entering ──► Visible
//!                 ▲                          │  ▲          │
//!                 │                (reverse) ▼  │ (play)   │
//!                 └──────────────────────── Leaving ◄──────┘
//!                                 (leave-back: reverse)
//! teardown ──► TornDown (from any state)
//! ```
//!
//! Scroll notifications and frame updates arrive independently:
//! [`MotionScheduler::on_scroll`] turns crossings into playback changes,
//! [`MotionScheduler::advance`] moves playheads and writes styles.

use crate::probe::{ElementId, StyleSink, ViewportProbe};
use crate::region::{Region, RegionDescriptor, RegionId, RegionState};
use crate::timeline::{Timeline, TimelineEvent};
use crate::trigger::{Crossing, ToggleAction, TriggerZone};

/// What happened to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEventKind {
    /// Forward playback began.
    Started,
    /// Forward playback reached rest.
    Completed,
    /// Backward playback began.
    ReverseStarted,
    /// Backward playback reached the initial style.
    ReverseCompleted,
}

/// A region lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    /// The region.
    pub region: RegionId,
    /// What happened.
    pub kind: MotionEventKind,
}

/// Owns every region's timeline and trigger.
#[derive(Debug, Default)]
pub struct MotionScheduler {
    regions: Vec<Region>,
    next_id: u32,
    /// Events raised by scroll handling, delivered on the next advance.
    pending_events: Vec<MotionEvent>,
    torn_down: bool,
}

impl MotionScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region and starts observing it.
    ///
    /// Returns `None` (and registers nothing) when the anchor is missing,
    /// when none of the targets exist, when the tween is invalid, or after
    /// teardown. Individual missing targets are dropped.
    pub fn register(
        &mut self,
        descriptor: RegionDescriptor,
        probe: &impl ViewportProbe,
    ) -> Option<RegionId> {
        if self.torn_down {
            return None;
        }
        if let Err(err) = descriptor.validate() {
            tracing::warn!(region = %descriptor.name, %err, "region skipped");
            return None;
        }
        let Some(anchor_bounds) = probe.bounds(descriptor.anchor) else {
            tracing::debug!(region = %descriptor.name, anchor = %descriptor.anchor, "anchor absent, region skipped");
            return None;
        };

        let targets = if descriptor.targets.is_empty() {
            vec![descriptor.anchor]
        } else {
            descriptor
                .targets
                .iter()
                .copied()
                .filter(|t| probe.bounds(*t).is_some())
                .collect()
        };
        if targets.is_empty() {
            tracing::debug!(region = %descriptor.name, "no targets present, region skipped");
            return None;
        }

        self.next_id += 1;
        let id = RegionId(self.next_id);
        let timeline = Timeline::new(descriptor.tween, descriptor.stagger, targets.len());

        let mut region = Region {
            id,
            name: descriptor.name,
            anchor: descriptor.anchor,
            targets,
            timeline,
            trigger: descriptor.trigger,
            zone: TriggerZone::Before,
            observing: descriptor.trigger.is_some(),
            dirty: true,
        };

        match region.trigger {
            None => {
                if region.timeline.play() {
                    self.pending_events.push(MotionEvent {
                        region: id,
                        kind: MotionEventKind::Started,
                    });
                }
            }
            Some(trigger) => {
                let zone = trigger.zone(anchor_bounds, probe.viewport_height());
                Self::cross(&mut region, zone, &mut self.pending_events);
            }
        }

        tracing::debug!(
            region = %region.name,
            %id,
            targets = region.targets.len(),
            gated = region.trigger.is_some(),
            "region registered"
        );
        self.regions.push(region);
        Some(id)
    }

    /// Re-evaluates every observed region against the current scroll position.
    ///
    /// Returns the number of crossings handled.
    pub fn on_scroll(&mut self, probe: &impl ViewportProbe) -> usize {
        if self.torn_down {
            return 0;
        }

        let viewport_height = probe.viewport_height();
        let mut crossings = 0;
        for region in &mut self.regions {
            if !region.observing {
                continue;
            }
            let Some(trigger) = region.trigger else {
                continue;
            };
            // An anchor that vanished keeps its last zone.
            let Some(bounds) = probe.bounds(region.anchor) else {
                continue;
            };
            let zone = trigger.zone(bounds, viewport_height);
            crossings += Self::cross(region, zone, &mut self.pending_events);
        }
        crossings
    }

    /// Advances every timeline by `dt` seconds and writes changed styles.
    ///
    /// Returns the events raised since the last call, in order.
    pub fn advance(&mut self, dt: f32, sink: &mut impl StyleSink) -> Vec<MotionEvent> {
        if self.torn_down {
            return Vec::new();
        }

        let mut events = std::mem::take(&mut self.pending_events);
        for region in &mut self.regions {
            if region.timeline.is_moving() {
                region.dirty = true;
                let reached = region.timeline.update(dt);
                if let Some(end) = reached {
                    events.push(MotionEvent {
                        region: region.id,
                        kind: match end {
                            TimelineEvent::Completed => MotionEventKind::Completed,
                            TimelineEvent::ReverseCompleted => MotionEventKind::ReverseCompleted,
                        },
                    });
                }
            }

            if region.dirty {
                for (target, style) in region.targets.iter().zip(region.timeline.styles()) {
                    sink.apply(*target, style);
                }
                region.dirty = false;
            }
        }
        events
    }

    /// Cancels every observation and transition.
    ///
    /// Idempotent: returns `true` only for the call that tore down.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        let count = self.regions.len();
        self.regions.clear();
        self.pending_events.clear();
        tracing::debug!(regions = count, "motion scheduler torn down");
        true
    }

    /// Lifecycle state of a region.
    #[must_use]
    pub fn state(&self, id: RegionId) -> RegionState {
        if self.torn_down {
            return RegionState::TornDown;
        }
        self.region(id).map_or(RegionState::Unobserved, Region::state)
    }

    /// Playhead progress (0-1) of a region.
    #[must_use]
    pub fn progress(&self, id: RegionId) -> Option<f32> {
        self.region(id).map(|r| r.timeline.progress())
    }

    /// Is the region still listening to scroll updates?
    #[must_use]
    pub fn is_observing(&self, id: RegionId) -> bool {
        self.region(id).is_some_and(|r| r.observing)
    }

    /// Name given at registration.
    #[must_use]
    pub fn region_name(&self, id: RegionId) -> Option<&str> {
        self.region(id).map(|r| r.name.as_str())
    }

    /// Elements animated by a region, in stagger order.
    #[must_use]
    pub fn targets(&self, id: RegionId) -> Option<&[ElementId]> {
        self.region(id).map(|r| r.targets.as_slice())
    }

    /// Number of registered regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Has teardown run?
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Is any timeline moving?
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.regions.iter().any(|r| r.timeline.is_moving())
    }

    fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Moves a region into `zone`, running the actions for every line passed.
    fn cross(region: &mut Region, zone: TriggerZone, events: &mut Vec<MotionEvent>) -> usize {
        let Some(trigger) = region.trigger else {
            return 0;
        };
        let crossings = region.zone.crossings_to(zone);
        region.zone = zone;

        for &crossing in crossings {
            let action = trigger.actions.for_crossing(crossing);
            tracing::trace!(region = %region.name, ?crossing, %action, "trigger crossed");
            if let Some(kind) = Self::apply_action(&mut region.timeline, action) {
                events.push(MotionEvent {
                    region: region.id,
                    kind,
                });
            }
            region.dirty = true;

            if trigger.once && crossing == Crossing::Enter {
                region.observing = false;
                break;
            }
        }
        crossings.len()
    }

    /// Runs one toggle action, returning the start event it caused, if any.
    fn apply_action(timeline: &mut Timeline, action: ToggleAction) -> Option<MotionEventKind> {
        let began = match action {
            ToggleAction::Play => timeline.play(),
            ToggleAction::Reverse => timeline.reverse(),
            ToggleAction::Restart => timeline.restart(),
            ToggleAction::Resume => timeline.resume(),
            ToggleAction::Pause => {
                timeline.pause();
                false
            }
            ToggleAction::Reset => {
                timeline.reset();
                false
            }
            ToggleAction::Complete => {
                timeline.complete();
                false
            }
            ToggleAction::None => false,
        };

        began.then(|| {
            if timeline.is_reversed() {
                MotionEventKind::ReverseStarted
            } else {
                MotionEventKind::Started
            }
        })
    }
}
