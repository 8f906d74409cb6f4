//! Comfort-range classification: fade, backlight color and zone
//!
//! Maps a temperature against the configured comfort band two ways:
//!
//! - **Continuous**: a fade position in [0, 1] turned into an RGB triple
//!   for the LCD backlight. Warm readings bias toward red, cool ones
//!   toward blue; green is capped at 64 so the mid-band never washes out
//!   into a pale "warning" hue. The 64 is an aesthetic constant, not a
//!   measurement.
//! - **Discrete**: a [`Zone`] (cold / comfortable / hot) used to pick
//!   exactly one of three indicator LEDs.
//!
//! Both functions are pure. The comfort range is validated once when
//! constructed, so the fade division can never hit a zero denominator in
//! the sampling loop.

use crate::errors::ConfigError;

/// The [low, high] temperature band considered "normal", in °C
///
/// Constructed through [`ComfortRange::new`] only, which rejects
/// degenerate and inverted bounds. That check runs once at startup;
/// everything downstream may assume `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComfortRange {
    low: i32,
    high: i32,
}

impl ComfortRange {
    /// Validate and build a comfort range
    pub fn new(low: i32, high: i32) -> Result<Self, ConfigError> {
        if low == high {
            return Err(ConfigError::DegenerateRange(low));
        }
        if low > high {
            return Err(ConfigError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound in °C
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound in °C
    pub const fn high(&self) -> i32 {
        self.high
    }
}

/// Backlight color components, each in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Build a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Discrete comfort classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Below the comfort band
    Cold,
    /// Inside the band (bounds inclusive)
    Comfortable,
    /// Above the comfort band
    Hot,
}

impl Zone {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Zone::Cold => "cold",
            Zone::Comfortable => "comfortable",
            Zone::Hot => "hot",
        }
    }
}

/// Normalized position of `temp` within the comfort band
///
/// 0.0 at or below the lower bound, 1.0 at or above the upper bound,
/// linear in between.
pub fn fade(temp: i32, range: &ComfortRange) -> f32 {
    if temp <= range.low {
        0.0
    } else if temp >= range.high {
        1.0
    } else {
        // Widen before subtracting: the band may span most of i32
        let span = i64::from(range.high) - i64::from(range.low);
        (i64::from(temp) - i64::from(range.low)) as f32 / span as f32
    }
}

/// Map a temperature to a backlight color
///
/// Components are clamped to [0, 255] by construction: the fade is in
/// [0, 1] and the scale factors are at most 255.
pub fn classify(temp: i32, range: &ComfortRange) -> Rgb {
    let f = fade(temp, range);
    Rgb {
        r: libm::roundf(255.0 * f) as u8,
        g: libm::roundf(64.0 * f) as u8,
        b: libm::roundf(255.0 * (1.0 - f)) as u8,
    }
}

/// Discrete-zone classification of a temperature
///
/// Strict inequalities: the band bounds themselves are comfortable.
pub fn zone(temp: i32, range: &ComfortRange) -> Zone {
    if temp < range.low {
        Zone::Cold
    } else if temp > range.high {
        Zone::Hot
    } else {
        Zone::Comfortable
    }
}
