//! Parse-style cloud telemetry over HTTP
//!
//! ## Wire format
//!
//! ```text
//! PUT <base>/<object-id>
//! X-App-Id: <application id>
//! X-Access-Key: <access key>
//! Content-Type: application/json
//!
//! {"tempValue":"24°"}
//! ```
//!
//! The field name and unit suffix are configuration, not protocol: the
//! backend schema owns them. The resource URL is built once from a known
//! base and object id at configuration time, never assembled ad hoc per
//! request.
//!
//! ## Why no retry?
//!
//! A failed PUT here means one 30-second sample is late; the next cycle
//! sends a fresher value anyway. Retrying stale telemetry from a single
//! device buys nothing, so failures are logged and dropped. Do not lift
//! this connector into a multi-device or lossy-network deployment without
//! adding a real delivery policy.

use std::time::Duration;

use roomsense_core::{Reading, Reporter};

use crate::TransportError;

/// Default JSON field carrying the temperature
pub const DEFAULT_FIELD: &str = "tempValue";

/// Default unit suffix appended to the stringified temperature
pub const DEFAULT_UNIT_SUFFIX: &str = "°";

/// Telemetry endpoint configuration
#[derive(Debug, Clone)]
pub struct CloudConfig {
    base_url: String,
    object_id: String,
    app_id: String,
    access_key: String,
    field: &'static str,
    unit_suffix: &'static str,
    timeout: Duration,
}

impl CloudConfig {
    /// Configuration for one backend object
    ///
    /// `base_url` is the class resource (e.g.
    /// `https://api.example.com/1/classes/Sensors`), `object_id` the
    /// record the monitor keeps updating.
    pub fn new(
        base_url: impl Into<String>,
        object_id: impl Into<String>,
        app_id: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            object_id: object_id.into(),
            app_id: app_id.into(),
            access_key: access_key.into(),
            field: DEFAULT_FIELD,
            unit_suffix: DEFAULT_UNIT_SUFFIX,
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the JSON field name
    pub fn field(mut self, field: &'static str) -> Self {
        self.field = field;
        self
    }

    /// Override the unit suffix
    pub fn unit_suffix(mut self, suffix: &'static str) -> Self {
        self.unit_suffix = suffix;
        self
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full resource URL the reporter will PUT to
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.object_id
        )
    }
}

/// Positive acknowledgement from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    /// HTTP status the backend answered with
    pub status: u16,
}

/// Send counters, mirrored into the log on failure
#[derive(Debug, Default, Clone, Copy)]
pub struct SendStats {
    /// Readings delivered successfully
    pub sent: u64,
    /// Readings the backend or network rejected
    pub failed: u64,
}

/// Fire-and-forget telemetry sender
pub struct CloudReporter {
    config: CloudConfig,
    url: String,
    agent: ureq::Agent,
    stats: SendStats,
}

impl CloudReporter {
    /// Build a reporter, validating the endpoint once
    pub fn new(config: CloudConfig) -> Result<Self, TransportError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(TransportError::Config(
                "endpoint must start with http:// or https://",
            ));
        }
        if config.object_id.is_empty() {
            return Err(TransportError::Config("object id must not be empty"));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&format!("roomsense/{}", roomsense_core::VERSION))
            .build();

        let url = config.resource_url();
        Ok(Self {
            config,
            url,
            agent,
            stats: SendStats::default(),
        })
    }

    /// Serialize a reading into the outbound body
    pub fn telemetry_body(&self, reading: &Reading) -> serde_json::Value {
        telemetry_body(reading, self.config.field, self.config.unit_suffix)
    }

    /// Build the PUT request with both identity headers
    ///
    /// Every request carries the application id and access key; the
    /// backend rejects anything without them.
    fn build_request(&self) -> ureq::Request {
        self.agent
            .put(&self.url)
            .set("X-App-Id", &self.config.app_id)
            .set("X-Access-Key", &self.config.access_key)
            .set("Content-Type", "application/json")
    }

    /// PUT one reading to the configured resource
    ///
    /// Non-2xx statuses and transport faults come back as
    /// [`TransportError`]; the caller decides to continue (and always
    /// should).
    pub fn send(&mut self, reading: &Reading) -> Result<Ack, TransportError> {
        let body = self.telemetry_body(reading);

        let response = self.build_request().send_string(&body.to_string());

        match response {
            Ok(resp) => {
                self.stats.sent += 1;
                log::debug!("telemetry accepted with status {}", resp.status());
                Ok(Ack {
                    status: resp.status(),
                })
            }
            Err(ureq::Error::Status(status, _)) => {
                self.stats.failed += 1;
                Err(TransportError::Status { status })
            }
            Err(ureq::Error::Transport(e)) => {
                self.stats.failed += 1;
                Err(TransportError::Request(e.to_string()))
            }
        }
    }

    /// Send counters so far
    pub fn stats(&self) -> SendStats {
        self.stats
    }
}

impl Reporter for CloudReporter {
    type Error = TransportError;

    fn report(&mut self, reading: &Reading) -> Result<(), Self::Error> {
        self.send(reading).map(|_| ())
    }
}

/// Build the outbound JSON body for a reading
pub fn telemetry_body(reading: &Reading, field: &str, unit_suffix: &str) -> serde_json::Value {
    serde_json::json!({
        field: format!("{}{}", reading.temperature, unit_suffix),
    })
}
