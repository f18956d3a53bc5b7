//! # Stage
//!
//! Mounts the particle field and the motion scheduler together and drives
//! both from one frame loop.
//!
//! ```text
//! mount ──► FieldConfig ──► ParticleField   (or none: motion only)
//!       ──► MotionConfig ─► MotionScheduler (five page regions)
//!       ──► FrameLoop::start
//!
//! on_frame ──► drain HostEvents ──► field.tick() ──► motion.advance()
//!
//! unmount ──► stop loop + cancel pending frame ──► teardown regions
//! ```

use std::collections::HashMap;

use parallax_motion::{
    MotionEvent, MotionScheduler, RegionId, RegionState, StyleSink, ViewportProbe,
};
use parallax_particles::{
    FieldError, FieldStats, FrameLoop, FrameScheduler, LoopHandle, ParticleField, Surface,
    TickStats,
};

use crate::config::StageConfig;
use crate::content::ProfileContent;
use crate::error::StageResult;
use crate::events::{EventBus, EventReceiver, EventSender, HostEvent};
use crate::page::{region_descriptor, PageElements, PageRegion};

/// What one frame did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Host events applied at the top of the frame.
    pub host_events: usize,
    /// Particle tick stats, if the field is mounted.
    pub tick: Option<TickStats>,
    /// Region events raised this frame.
    pub motion: Vec<MotionEvent>,
}

/// The mounted profile page.
pub struct Stage<S: Surface> {
    field: Option<ParticleField<S>>,
    motion: MotionScheduler,
    frame_loop: FrameLoop,
    sender: EventSender,
    receiver: EventReceiver,
    content: ProfileContent,
    elements: PageElements,
    regions: HashMap<PageRegion, RegionId>,
    last_frame: FrameReport,
    mounted: bool,
}

impl<S: Surface> Stage<S> {
    /// Mounts the page and requests the first frame.
    ///
    /// A missing surface is not an error: the stage runs the section
    /// animations without particles. Sections whose elements are absent
    /// from `probe` are skipped.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `config` or `content` is invalid.
    pub fn mount(
        config: StageConfig,
        content: ProfileContent,
        surface: Option<S>,
        probe: &impl ViewportProbe,
        frames: &mut impl FrameScheduler,
    ) -> StageResult<Self> {
        config.validate()?;
        content.validate()?;

        let field = match ParticleField::mount(surface, config.particles) {
            Ok(field) => Some(field),
            Err(FieldError::SurfaceUnavailable) => {
                tracing::warn!("drawing surface unavailable, particles disabled");
                None
            }
            Err(err) => return Err(err.into()),
        };

        let elements = PageElements::for_content(&content);
        let mut motion = MotionScheduler::new();
        let mut regions = HashMap::new();
        for region in PageRegion::ALL {
            let descriptor = region_descriptor(region, &elements, &config.motion);
            if let Some(id) = motion.register(descriptor, probe) {
                regions.insert(region, id);
            }
        }

        let bus = EventBus::new(config.event_capacity);
        let mut frame_loop = FrameLoop::new();
        frame_loop.start(frames);

        tracing::debug!(
            particles = field.is_some(),
            regions = regions.len(),
            "stage mounted"
        );

        Ok(Self {
            field,
            motion,
            frame_loop,
            sender: bus.sender(),
            receiver: bus.receiver(),
            content,
            elements,
            regions,
            last_frame: FrameReport::default(),
            mounted: true,
        })
    }

    /// Handle for listeners to queue host events.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Handle that stops the frame loop from anywhere.
    #[must_use]
    pub fn loop_handle(&self) -> LoopHandle {
        self.frame_loop.handle()
    }

    /// Records the pointer and spawns one particle there.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.mounted {
            return;
        }
        if let Some(field) = &mut self.field {
            field.on_pointer_move(x, y);
        }
    }

    /// Resizes the surface and re-evaluates triggers against the new viewport.
    pub fn resize(&mut self, width: u32, height: u32, probe: &impl ViewportProbe) {
        if !self.mounted {
            return;
        }
        if let Some(field) = &mut self.field {
            field.on_resize(width, height);
        }
        self.motion.on_scroll(probe);
    }

    /// Re-evaluates triggers after a scroll.
    pub fn scroll(&mut self, probe: &impl ViewportProbe) {
        if !self.mounted {
            return;
        }
        self.motion.on_scroll(probe);
    }

    /// Handles a fired frame: applies queued host events, ticks the field,
    /// advances section animations, then requests the next frame.
    ///
    /// `dt` is the time since the previous frame, in seconds. Returns
    /// `false` without touching anything if the stage was unmounted.
    pub fn on_frame(
        &mut self,
        frames: &mut impl FrameScheduler,
        dt: f32,
        probe: &impl ViewportProbe,
        sink: &mut impl StyleSink,
    ) -> bool {
        let Self {
            field,
            motion,
            frame_loop,
            receiver,
            last_frame,
            ..
        } = self;

        frame_loop.on_frame(frames, || {
            let events = receiver.drain();
            let mut rescan = false;
            for event in &events {
                match *event {
                    HostEvent::PointerMove { x, y } => {
                        if let Some(field) = field.as_mut() {
                            field.on_pointer_move(x, y);
                        }
                    }
                    HostEvent::Resize { width, height } => {
                        if let Some(field) = field.as_mut() {
                            field.on_resize(width, height);
                        }
                        rescan = true;
                    }
                    HostEvent::Scroll => rescan = true,
                }
            }
            if rescan {
                motion.on_scroll(probe);
            }

            let tick = field.as_mut().map(ParticleField::tick);
            let motion_events = motion.advance(dt, sink);
            for event in &motion_events {
                tracing::debug!(region = %event.region, kind = ?event.kind, "region event");
            }

            *last_frame = FrameReport {
                host_events: events.len(),
                tick,
                motion: motion_events,
            };
        })
    }

    /// Stops the frame loop, cancels the pending frame and tears down every
    /// region.
    ///
    /// Idempotent: returns `true` only for the call that unmounted.
    pub fn unmount(&mut self, frames: &mut impl FrameScheduler) -> bool {
        // Stop even if a handle already flipped the flag, so the pending
        // request still gets cancelled.
        self.frame_loop.stop(frames);
        if !self.mounted {
            return false;
        }
        self.mounted = false;

        self.motion.teardown();
        if let Some(field) = &mut self.field {
            field.clear_particles();
        }
        let dropped = self.receiver.drain().len();
        tracing::debug!(dropped_events = dropped, "stage unmounted");
        true
    }

    /// Is the stage mounted?
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The particle field, if a surface was available.
    #[must_use]
    pub fn field(&self) -> Option<&ParticleField<S>> {
        self.field.as_ref()
    }

    /// The drawing surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.field.as_ref().map(ParticleField::surface)
    }

    /// Lifetime particle stats, if the field is mounted.
    #[must_use]
    pub fn field_stats(&self) -> Option<FieldStats> {
        self.field.as_ref().map(ParticleField::stats)
    }

    /// Lifecycle state of a page section.
    #[must_use]
    pub fn region_state(&self, region: PageRegion) -> RegionState {
        if self.motion.is_torn_down() {
            return RegionState::TornDown;
        }
        self.regions
            .get(&region)
            .map_or(RegionState::Unobserved, |id| self.motion.state(*id))
    }

    /// Playhead progress of a page section.
    #[must_use]
    pub fn region_progress(&self, region: PageRegion) -> Option<f32> {
        self.regions
            .get(&region)
            .and_then(|id| self.motion.progress(*id))
    }

    /// What the last frame did.
    #[must_use]
    pub fn last_frame(&self) -> &FrameReport {
        &self.last_frame
    }

    /// Frames completed.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    /// Page element ids.
    #[must_use]
    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    /// Displayed content.
    #[must_use]
    pub fn content(&self) -> &ProfileContent {
        &self.content
    }
}
