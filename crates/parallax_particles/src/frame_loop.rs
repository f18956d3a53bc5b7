//! Frame-paced, self-rescheduling, cancellable loop.
//!
//! ```text
//! start ──► request ──► host fires ──► on_frame ──► step ──► request ──► ...
//!                                         │
//!                 stop ── active=false ───┘ (checked before step and
//!                       + cancel pending      again before re-request)
//! ```
//!
//! A frame already running cannot be aborted mid-step; `stop` only
//! guarantees nothing runs or gets scheduled after the current step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Opaque id for a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// The host's display-refresh scheduler.
pub trait FrameScheduler {
    /// Asks for one callback at the next display refresh.
    fn request_frame(&mut self) -> FrameRequest;

    /// Revokes a pending request. Unknown or fired requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Shared cancellation flag for a [`FrameLoop`].
///
/// Cloneable so event handlers can stop the loop without owning it.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    active: Arc<AtomicBool>,
}

impl LoopHandle {
    /// Stops the loop. Returns `true` only for the call that flipped it.
    pub fn stop(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }

    /// Is the loop still running?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// A loop that runs a step once per display frame until stopped.
#[derive(Debug)]
pub struct FrameLoop {
    active: Arc<AtomicBool>,
    pending: Option<FrameRequest>,
    frames: u64,
    started: bool,
}

impl FrameLoop {
    /// Creates an idle loop.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            pending: None,
            frames: 0,
            started: false,
        }
    }

    /// Starts the loop by requesting the first frame.
    ///
    /// A loop can only be started once; a stopped loop stays stopped.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.started {
            return;
        }
        self.started = true;
        self.active.store(true, Ordering::Release);
        self.pending = Some(scheduler.request_frame());
    }

    /// Handles a fired frame: runs `step` then schedules the next frame.
    ///
    /// Returns `false` without running `step` if the loop was stopped.
    pub fn on_frame<F>(&mut self, scheduler: &mut impl FrameScheduler, step: F) -> bool
    where
        F: FnOnce(),
    {
        self.pending = None;
        if !self.is_active() {
            return false;
        }

        step();
        self.frames += 1;

        // The step itself may have stopped the loop.
        if self.is_active() {
            self.pending = Some(scheduler.request_frame());
        }
        true
    }

    /// Stops the loop and revokes the pending request.
    ///
    /// Idempotent: returns `true` only the first time it stops a running loop.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        let was_active = self.active.swap(false, Ordering::AcqRel);
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
        was_active
    }

    /// Returns a handle that can stop this loop from elsewhere.
    #[must_use]
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            active: Arc::clone(&self.active),
        }
    }

    /// Is the loop running?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// The request currently waiting on the host, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Frames completed.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// A deterministic scheduler for tests and headless hosts.
///
/// Requests queue up until the host pops them with [`ManualScheduler::fire`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameRequest>,
    cancelled: u64,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops the oldest pending request, as if the display refreshed.
    pub fn fire(&mut self) -> Option<FrameRequest> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Requests waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Requests revoked so far.
    #[must_use]
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let before = self.pending.len();
        self.pending.retain(|r| *r != request);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}
