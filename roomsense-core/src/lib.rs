//! Core sampling and classification logic for Roomsense
//!
//! Implements the per-cycle pipeline of an ambient-comfort monitor:
//! read a temperature (and optional gas) probe, track running min/max
//! with a button reset, map the temperature into a backlight color or a
//! discrete comfort zone, render two LCD rows, and hand the reading to a
//! telemetry reporter.
//!
//! Key constraints:
//! - no_std capable; hardware access only through the `hal` traits
//! - No heap allocation in the sampling path
//! - Comfort-range configuration validated once at startup, never in the loop
//!
//! ```no_run
//! use roomsense_core::{ComfortRange, classify, zone, Zone};
//!
//! let range = ComfortRange::new(18, 26).unwrap();
//!
//! let color = classify(22, &range);   // blue-ish at the cool end
//! assert_eq!(zone(22, &range), Zone::Comfortable);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod cycle;
pub mod display;
pub mod errors;
pub mod extremum;
pub mod hal;
pub mod reading;
pub mod time;

// Public API
pub use color::{classify, fade, zone, ComfortRange, Rgb, Zone};
pub use cycle::{CycleDriver, Reporter};
pub use display::{ColorOutput, DisplayUpdater, SecondaryRow, ZoneLedBank};
pub use errors::{ConfigError, DeviceError};
pub use extremum::{Extremes, ExtremumTracker};
pub use reading::Reading;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
