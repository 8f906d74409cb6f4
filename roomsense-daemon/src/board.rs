//! Simulated board for bench runs
//!
//! The real Grove probes, LCD and LEDs sit behind vendor drivers that
//! only exist on the target image; this module stands in for them the way
//! a desktop simulator does, so the whole loop (sampling, rendering,
//! telemetry, push-triggered reports) can be exercised anywhere:
//!
//! - Temperature follows a slow sinusoid across the comfort band, gas a
//!   second slower one, so the fade and zone paths all get visited.
//! - The LCD and LEDs log what they would display.
//! - Touching a marker file stands in for the reset button; a second
//!   marker delivers an `"Update"` push event.

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roomsense_core::hal::{
    CharacterLcd, GasSensor, Led, ResetButton, Sleeper, TemperatureSensor,
};
use roomsense_core::{ComfortRange, DeviceError, Rgb};
use roomsense_connectors::PushSender;

/// Marker file that reads as one button press, then is consumed
pub const RESET_MARKER: &str = "/tmp/roomsense-reset";

/// Marker file that injects one `"Update"` push event, then is consumed
pub const UPDATE_MARKER: &str = "/tmp/roomsense-update";

/// Acquire every simulated sensor handle
///
/// The simulated handles cannot actually fail, but the seam matches real
/// bring-up, where any missing probe aborts startup.
pub fn acquire(
    comfort: &ComfortRange,
) -> Result<(SimulatedTemperature, SimulatedGas, MarkerButton), DeviceError> {
    Ok((
        SimulatedTemperature::new(comfort),
        SimulatedGas::new(),
        MarkerButton::new(RESET_MARKER),
    ))
}

/// Sinusoidal temperature probe spanning the comfort band
pub struct SimulatedTemperature {
    mid: f64,
    swing: f64,
    step: u64,
}

impl SimulatedTemperature {
    /// Probe centered on `comfort`, overshooting each bound by half the band
    pub fn new(comfort: &ComfortRange) -> Self {
        let mid = f64::from(comfort.low() + comfort.high()) / 2.0;
        let swing = f64::from(comfort.high() - comfort.low());
        Self {
            mid,
            swing,
            step: 0,
        }
    }
}

impl TemperatureSensor for SimulatedTemperature {
    fn read_celsius(&mut self) -> Result<i32, DeviceError> {
        // Full period every 120 samples (an hour at the default interval)
        let angle = TAU * self.step as f64 / 120.0;
        self.step += 1;
        Ok((self.mid + self.swing * angle.sin()).round() as i32)
    }
}

/// Slowly drifting gas probe
pub struct SimulatedGas {
    step: u64,
}

impl SimulatedGas {
    /// Probe starting at its baseline
    pub fn new() -> Self {
        Self { step: 0 }
    }
}

impl GasSensor for SimulatedGas {
    fn read_ppm(&mut self) -> Result<u32, DeviceError> {
        let angle = TAU * self.step as f64 / 300.0;
        self.step += 1;
        Ok((200.0 + 80.0 * angle.sin()) as u32)
    }
}

/// Button "pressed" while a marker file exists; reading consumes it
pub struct MarkerButton {
    marker: PathBuf,
}

impl MarkerButton {
    /// Button backed by the marker at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            marker: path.into(),
        }
    }
}

impl ResetButton for MarkerButton {
    fn is_pressed(&mut self) -> Result<bool, DeviceError> {
        if self.marker.exists() {
            let _ = std::fs::remove_file(&self.marker);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// LED that logs its transitions
pub struct LogLed {
    name: &'static str,
}

impl LogLed {
    /// Named LED for log output
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Led for LogLed {
    fn set(&mut self, on: bool) -> Result<(), DeviceError> {
        log::debug!("led {}: {}", self.name, if on { "on" } else { "off" });
        Ok(())
    }
}

/// LCD that logs rows and backlight colors
pub struct LogLcd;

impl CharacterLcd for LogLcd {
    fn write_row(&mut self, row: u8, text: &str) -> Result<(), DeviceError> {
        log::info!("lcd row {row}: [{text}]");
        Ok(())
    }

    fn set_backlight(&mut self, color: Rgb) -> Result<(), DeviceError> {
        log::info!("lcd backlight: #{:02x}{:02x}{:02x}", color.r, color.g, color.b);
        Ok(())
    }
}

/// Blocking sleeper over `std::thread::sleep`
pub struct StdSleeper;

impl Sleeper for StdSleeper {
    fn sleep_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Watch `marker` and deliver one `"Update"` push event per touch
///
/// Stands in for the backend's push-delivery thread; the real service
/// would clone the [`PushSender`] into its callback the same way.
pub fn spawn_marker_push_trigger(marker: impl AsRef<Path>, sender: PushSender) {
    let marker = marker.as_ref().to_path_buf();
    std::thread::spawn(move || loop {
        if marker.exists() {
            let _ = std::fs::remove_file(&marker);
            sender.deliver(roomsense_connectors::UPDATE_EVENT, b"{}");
        }
        std::thread::sleep(Duration::from_secs(1));
    });
}
