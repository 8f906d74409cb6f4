//! Cloud and push-event plumbing for Roomsense monitors
//!
//! Two pieces, both deliberately thin:
//!
//! - [`cloud`]: a Parse-style telemetry sender. One authenticated PUT per
//!   reading to a fixed resource URL, identity headers on every request.
//!   No retry, no backoff, no circuit breaker: a single device sending
//!   fire-and-forget telemetry logs the failure and tries again next
//!   cycle. That trade-off is wrong for fleets or contested networks and
//!   is documented as such on [`cloud::CloudReporter`].
//!
//! - [`push`]: the inbound notification path. The backend's push channel
//!   delivers named events on its own thread; a bounded channel decouples
//!   that delivery from the sampling loop, which drains it and issues at
//!   most one immediate report per `"Update"` event.

pub mod cloud;
pub mod push;

pub use cloud::{Ack, CloudConfig, CloudReporter, SendStats};
pub use push::{push_channel, PushReceiver, PushSender, UPDATE_EVENT};

use thiserror::Error;

/// Transport-level failures
///
/// Always non-fatal to the sampling loop: callers log and continue.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection-level failure (DNS, TCP, TLS, timeout)
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("server returned {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Connector misconfigured (caught at construction, not per request)
    #[error("configuration error: {0}")]
    Config(&'static str),
}
