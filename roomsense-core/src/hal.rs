//! Capability traits for the sensor/actuator surface
//!
//! The real Grove/mraa drivers live outside this crate; the core only
//! sees these seams. Each trait covers exactly one capability so a board
//! can mix real handles with absent ones (a gas probe is optional, for
//! example). The [`mock`] module provides scripted implementations for
//! tests.

use crate::color::Rgb;
use crate::errors::DeviceError;

/// Width of the character panel in columns
pub const LCD_COLUMNS: usize = 16;

/// Analog temperature probe
pub trait TemperatureSensor {
    /// Read the current temperature in whole degrees Celsius
    fn read_celsius(&mut self) -> Result<i32, DeviceError>;
}

/// Optional gas-concentration probe
pub trait GasSensor {
    /// Read the current gas concentration in raw sensor units
    fn read_ppm(&mut self) -> Result<u32, DeviceError>;
}

/// Momentary push-button used to reset the tracked extremes
pub trait ResetButton {
    /// True while the button is held down
    fn is_pressed(&mut self) -> Result<bool, DeviceError>;
}

/// Single on/off LED
pub trait Led {
    /// Drive the LED on or off
    fn set(&mut self, on: bool) -> Result<(), DeviceError>;
}

/// Two-row character LCD with an RGB backlight
pub trait CharacterLcd {
    /// Write `text` starting at column 0 of `row` (0 or 1)
    fn write_row(&mut self, row: u8, text: &str) -> Result<(), DeviceError>;

    /// Set the backlight color
    fn set_backlight(&mut self, color: Rgb) -> Result<(), DeviceError>;
}

/// Blocking delay capability
///
/// Used for the status-LED pulse; the owning process also paces the
/// sampling loop with it.
pub trait Sleeper {
    /// Block the current flow of control for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);
}

#[cfg(feature = "std")]
pub mod mock;
