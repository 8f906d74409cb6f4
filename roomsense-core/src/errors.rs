//! Error types for startup validation and device access
//!
//! Errors here follow the same rules as the rest of the core crate:
//!
//! 1. **Small**: variants carry only integers and `&'static str` so the
//!    enums stay Copy and fit in a couple of machine words.
//! 2. **No heap**: no `String`, no boxing; the daemon decides how much
//!    context to attach when it logs.
//! 3. **Two fates**: `ConfigError` is always fatal and only ever raised
//!    during startup validation; `DeviceError` is fatal while handles are
//!    being acquired and downgraded to a log line once the loop is running.

use thiserror_no_std::Error;

/// Static configuration rejected at startup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Comfort range with `low == high` cannot produce a fade denominator
    #[error("degenerate comfort range: low == high == {0}")]
    DegenerateRange(i32),

    /// Comfort range with inverted bounds
    #[error("inverted comfort range: low {low} > high {high}")]
    InvertedRange {
        /// Configured lower bound
        low: i32,
        /// Configured upper bound
        high: i32,
    },

    /// A configuration field could not be parsed
    #[error("invalid value for {field}")]
    InvalidField {
        /// Name of the offending configuration field
        field: &'static str,
    },
}

/// Sensor or actuator failure
///
/// Raised when a handle cannot be acquired or an I/O operation on an
/// already-acquired handle fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{device}: {reason}")]
pub struct DeviceError {
    /// Which device failed (e.g. "temperature-sensor", "lcd")
    pub device: &'static str,
    /// Short description of the failure
    pub reason: &'static str,
}

impl DeviceError {
    /// Create a new device error
    pub const fn new(device: &'static str, reason: &'static str) -> Self {
        Self { device, reason }
    }
}
