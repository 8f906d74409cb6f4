//! Bounded channel for backend push notifications
//!
//! The Parse-style push service delivers named events on its own thread.
//! The original C client reported straight from the callback; here the
//! delivery path only enqueues, and the sampling loop drains the queue on
//! its own schedule, issuing at most one immediate report per drained
//! `"Update"` event. Delivery timing and reporting are fully decoupled.
//!
//! The channel is bounded: if the loop falls behind, excess events are
//! dropped and counted rather than blocking the delivery thread. A
//! dropped `"Update"` is harmless: the next periodic report carries the
//! same latest reading.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;

/// The only event name the monitor reacts to
pub const UPDATE_EVENT: &str = "Update";

/// A push event accepted into the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
    /// Raw payload as delivered by the push service
    pub payload: Vec<u8>,
}

/// Delivery-side handle, owned by the push service thread
#[derive(Clone)]
pub struct PushSender {
    tx: SyncSender<PushEvent>,
    dropped: Arc<AtomicU64>,
}

impl PushSender {
    /// Offer a named event to the queue
    ///
    /// Only [`UPDATE_EVENT`] is recognized; anything else is logged and
    /// discarded. Returns whether the event was enqueued.
    pub fn deliver(&self, name: &str, payload: &[u8]) -> bool {
        if name != UPDATE_EVENT {
            log::debug!("ignoring push event {name:?}");
            return false;
        }

        match self.tx.try_send(PushEvent {
            payload: payload.to_vec(),
        }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                log::warn!("push queue full, dropping {UPDATE_EVENT} event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("push consumer gone, dropping {UPDATE_EVENT} event");
                false
            }
        }
    }

    /// Events dropped because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Consumer-side handle, owned by the sampling loop
pub struct PushReceiver {
    rx: Receiver<PushEvent>,
}

impl PushReceiver {
    /// Drain everything currently queued, without blocking
    pub fn drain(&self) -> impl Iterator<Item = PushEvent> + '_ {
        self.rx.try_iter()
    }
}

/// Create a bounded push channel
pub fn push_channel(capacity: usize) -> (PushSender, PushReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (
        PushSender {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
        },
        PushReceiver { rx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_events_round_trip() {
        let (tx, rx) = push_channel(4);
        assert!(tx.deliver(UPDATE_EVENT, b"{}"));

        let drained: Vec<_> = rx.drain().collect();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].payload, b"{}");
        assert_eq!(rx.drain().count(), 0);
    }

    #[test]
    fn unknown_names_never_enqueue() {
        let (tx, rx) = push_channel(4);
        assert!(!tx.deliver("Reboot", b""));
        assert!(!tx.deliver("update", b"")); // case sensitive
        assert_eq!(rx.drain().count(), 0);
    }

    #[test]
    fn full_queue_drops_and_counts() {
        let (tx, rx) = push_channel(2);
        assert!(tx.deliver(UPDATE_EVENT, b""));
        assert!(tx.deliver(UPDATE_EVENT, b""));
        assert!(!tx.deliver(UPDATE_EVENT, b""));
        assert_eq!(tx.dropped(), 1);

        // Draining frees capacity again
        assert_eq!(rx.drain().count(), 2);
        assert!(tx.deliver(UPDATE_EVENT, b""));
    }

    #[test]
    fn delivery_thread_never_blocks() {
        let (tx, rx) = push_channel(1);
        let handle = std::thread::spawn(move || {
            for _ in 0..100 {
                tx.deliver(UPDATE_EVENT, b"");
            }
            tx.dropped()
        });
        let dropped = handle.join().unwrap();
        assert_eq!(dropped + rx.drain().count() as u64, 100);
    }
}
