//! Per-cycle sensor snapshot
//!
//! A [`Reading`] is produced once per cycle, flows through the tracker,
//! the display and the reporter, and is then replaced. It is never
//! mutated after creation, which is what makes the cached-snapshot
//! handoff to the push-report path safe without extra locking rules.

use crate::time::Timestamp;

/// One sampling instant: temperature, optional gas concentration, timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Temperature in whole degrees Celsius
    pub temperature: i32,
    /// Gas concentration from the optional probe, raw sensor units
    pub gas: Option<u32>,
    /// When the sample was taken
    pub timestamp: Timestamp,
}

impl Reading {
    /// Snapshot with both probes present
    pub const fn new(temperature: i32, gas: Option<u32>, timestamp: Timestamp) -> Self {
        Self {
            temperature,
            gas,
            timestamp,
        }
    }

    /// Snapshot from a temperature-only board
    pub const fn temperature_only(temperature: i32, timestamp: Timestamp) -> Self {
        Self::new(temperature, None, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let r = Reading::new(24, Some(180), 1000);
        assert_eq!(r.temperature, 24);
        assert_eq!(r.gas, Some(180));
        assert_eq!(r.timestamp, 1000);

        let r = Reading::temperature_only(-3, 2000);
        assert_eq!(r.gas, None);
    }
}
