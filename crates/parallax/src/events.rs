//! # Host Event Queue
//!
//! Listeners push input here; the stage drains it at the top of each frame.
//!
//! ```text
//! pointermove ─┐
//! resize ──────┼──► EventSender ──► [bounded channel] ──► EventReceiver ──► Stage::on_frame
//! scroll ──────┘
//! ```
//!
//! Listeners never touch the stage directly, so a listener firing during
//! a frame can't observe it half-updated.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Input from the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to viewport coordinates.
    PointerMove {
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
    },
    /// Viewport changed size.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// The page scrolled. Positions are re-read from the probe.
    Scroll,
}

/// Bounded host event queue.
pub struct EventBus {
    sender: Sender<HostEvent>,
    receiver: Receiver<HostEvent>,
}

impl EventBus {
    /// Creates a queue holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple listeners).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for pushing host events.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<HostEvent>,
}

impl EventSender {
    /// Queues an event without blocking.
    ///
    /// Returns `false` if the queue is full or the stage is gone; the
    /// event is dropped.
    #[inline]
    pub fn send(&self, event: HostEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!(?event, "host event queue full, event dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Queues a pointer move.
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.send(HostEvent::PointerMove { x, y })
    }

    /// Queues a resize.
    pub fn resize(&self, width: u32, height: u32) -> bool {
        self.send(HostEvent::Resize { width, height })
    }

    /// Queues a scroll notification.
    pub fn scroll(&self) -> bool {
        self.send(HostEvent::Scroll)
    }
}

/// Handle for draining host events.
#[derive(Debug, Clone)]
pub struct EventReceiver {
    receiver: Receiver<HostEvent>,
}

impl EventReceiver {
    /// Takes every queued event, oldest first.
    #[inline]
    pub fn drain(&self) -> Vec<HostEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one event, if any.
    #[inline]
    pub fn try_recv(&self) -> Option<HostEvent> {
        self.receiver.try_recv().ok()
    }

    /// Events waiting.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let (sender, receiver) = EventBus::create_pair(8);
        assert!(sender.pointer_move(1.0, 2.0));
        assert!(sender.scroll());
        assert!(sender.resize(640, 480));
        assert_eq!(receiver.pending_count(), 3);

        assert_eq!(
            receiver.drain(),
            vec![
                HostEvent::PointerMove { x: 1.0, y: 2.0 },
                HostEvent::Scroll,
                HostEvent::Resize {
                    width: 640,
                    height: 480
                },
            ]
        );
        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn test_full_queue_drops() {
        let (sender, receiver) = EventBus::create_pair(1);
        assert!(sender.scroll());
        assert!(!sender.scroll());
        assert_eq!(receiver.drain().len(), 1);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let bus = EventBus::new(4);
        let sender = bus.sender();
        drop(bus);
        assert!(!sender.send(HostEvent::Scroll));
    }
}
