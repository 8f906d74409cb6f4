//! Scripted in-memory implementations of the hardware capability traits
//!
//! ## Use cases
//!
//! 1. **Unit testing**: feed known sample sequences through the cycle
//! 2. **Replay**: re-run a recorded temperature trace
//! 3. **Inspection**: every actuator records what was done to it
//!
//! All mocks live behind the `std` feature; they are never part of a
//! device build.

use crate::color::Rgb;
use crate::errors::DeviceError;

use super::{CharacterLcd, GasSensor, Led, ResetButton, Sleeper, TemperatureSensor};

/// Temperature probe replaying a fixed script
///
/// Once the script is exhausted the last value repeats, so a long-running
/// loop under test never fails to sample.
pub struct MockTemperature {
    script: Vec<i32>,
    position: usize,
}

impl MockTemperature {
    /// Probe that will return `script` values in order
    pub fn new(script: Vec<i32>) -> Self {
        Self {
            script,
            position: 0,
        }
    }
}

impl TemperatureSensor for MockTemperature {
    fn read_celsius(&mut self) -> Result<i32, DeviceError> {
        let value = self
            .script
            .get(self.position)
            .or_else(|| self.script.last())
            .copied()
            .ok_or(DeviceError::new("temperature-sensor", "empty script"))?;
        self.position += 1;
        Ok(value)
    }
}

/// Gas probe replaying a fixed script
pub struct MockGas {
    script: Vec<u32>,
    position: usize,
}

impl MockGas {
    /// Probe that will return `script` values in order
    pub fn new(script: Vec<u32>) -> Self {
        Self {
            script,
            position: 0,
        }
    }
}

impl GasSensor for MockGas {
    fn read_ppm(&mut self) -> Result<u32, DeviceError> {
        let value = self
            .script
            .get(self.position)
            .or_else(|| self.script.last())
            .copied()
            .ok_or(DeviceError::new("gas-sensor", "empty script"))?;
        self.position += 1;
        Ok(value)
    }
}

/// Button pressed on a chosen set of polls
pub struct MockButton {
    pressed_on: Vec<usize>,
    poll: usize,
}

impl MockButton {
    /// Button that reads as pressed on the given zero-based poll indices
    pub fn pressed_on(polls: Vec<usize>) -> Self {
        Self {
            pressed_on: polls,
            poll: 0,
        }
    }

    /// Button that is never pressed
    pub fn released() -> Self {
        Self::pressed_on(Vec::new())
    }
}

impl ResetButton for MockButton {
    fn is_pressed(&mut self) -> Result<bool, DeviceError> {
        let pressed = self.pressed_on.contains(&self.poll);
        self.poll += 1;
        Ok(pressed)
    }
}

/// LED recording every transition
#[derive(Default)]
pub struct MockLed {
    /// Current on/off state
    pub state: bool,
    /// Every `set` call in order
    pub transitions: Vec<bool>,
}

impl MockLed {
    /// New LED, off
    pub fn new() -> Self {
        Self::default()
    }
}

impl Led for MockLed {
    fn set(&mut self, on: bool) -> Result<(), DeviceError> {
        self.state = on;
        self.transitions.push(on);
        Ok(())
    }
}

/// Character LCD recording row text and backlight colors
#[derive(Default)]
pub struct MockLcd {
    /// Last text written to each row
    pub rows: [String; 2],
    /// Every backlight color applied, in order
    pub backlight: Vec<Rgb>,
}

impl MockLcd {
    /// New LCD with blank rows
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterLcd for MockLcd {
    fn write_row(&mut self, row: u8, text: &str) -> Result<(), DeviceError> {
        let slot = self
            .rows
            .get_mut(row as usize)
            .ok_or(DeviceError::new("lcd", "row out of range"))?;
        *slot = text.to_string();
        Ok(())
    }

    fn set_backlight(&mut self, color: Rgb) -> Result<(), DeviceError> {
        self.backlight.push(color);
        Ok(())
    }
}

/// Sleeper that records requested delays instead of blocking
#[derive(Default)]
pub struct MockSleeper {
    /// Every requested delay in milliseconds
    pub slept_ms: Vec<u32>,
}

impl MockSleeper {
    /// New sleeper with no recorded delays
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sleeper for MockSleeper {
    fn sleep_ms(&mut self, ms: u32) {
        self.slept_ms.push(ms);
    }
}
