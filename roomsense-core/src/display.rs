//! LCD row rendering and color application
//!
//! One render per cycle:
//!
//! - Row 1 always shows the instantaneous temperature.
//! - Row 2 shows either the live gas value or the tracked min/max,
//!   depending on [`SecondaryRow`]. The two are presentation modes, never
//!   combined.
//! - The classification result is applied either to the RGB backlight or
//!   to a bank of three zone LEDs. In the LED case every member of the
//!   bank is switched off before the active one is switched on, so a zone
//!   change never leaves two LEDs lit.
//! - A 50 ms status pulse signals "sample taken" regardless of the
//!   classification result.
//!
//! Rows are formatted into fixed 16-column `heapless` strings: padded
//! with spaces (the original sketch relied on trailing blanks to erase
//! stale digits) and truncated if a value is unexpectedly wide.

use core::fmt::Write as _;

use crate::color::{classify, zone, ComfortRange, Zone};
use crate::errors::DeviceError;
use crate::extremum::Extremes;
use crate::hal::{CharacterLcd, Led, Sleeper, LCD_COLUMNS};
use crate::reading::Reading;

/// Duration of the "sample taken" status pulse
pub const STATUS_PULSE_MS: u32 = 50;

/// What the second LCD row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryRow {
    /// Live gas value (`Gas : --` when the probe is absent)
    Gas,
    /// Tracked minimum and maximum temperature
    MinMax,
}

/// Where the classification result goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOutput {
    /// Continuous RGB fade on the LCD backlight
    Backlight,
    /// Exactly one of three discrete zone LEDs
    ZoneLeds,
}

/// Three LEDs, one per [`Zone`]
pub struct ZoneLedBank<L: Led> {
    cold: L,
    comfortable: L,
    hot: L,
}

impl<L: Led> ZoneLedBank<L> {
    /// Bundle three LEDs into a bank
    pub fn new(cold: L, comfortable: L, hot: L) -> Self {
        Self {
            cold,
            comfortable,
            hot,
        }
    }

    /// Light exactly the LED for `active`, all others off
    ///
    /// All three are deactivated before the active one is driven, so the
    /// transition between zones never shows two lit LEDs.
    pub fn set_active(&mut self, active: Zone) -> Result<(), DeviceError> {
        self.cold.set(false)?;
        self.comfortable.set(false)?;
        self.hot.set(false)?;
        match active {
            Zone::Cold => self.cold.set(true),
            Zone::Comfortable => self.comfortable.set(true),
            Zone::Hot => self.hot.set(true),
        }
    }

    /// Borrow the individual LEDs (cold, comfortable, hot)
    pub fn leds(&self) -> (&L, &L, &L) {
        (&self.cold, &self.comfortable, &self.hot)
    }
}

/// A fixed-width LCD row
pub type RowText = heapless::String<LCD_COLUMNS>;

/// Renders readings onto the LCD and drives the classification output
///
/// Owns the display-side actuator handles for the life of the cycle
/// driver; sensors stay with the caller.
pub struct DisplayUpdater<LCD, SL, Z, S>
where
    LCD: CharacterLcd,
    SL: Led,
    Z: Led,
    S: Sleeper,
{
    lcd: LCD,
    status: SL,
    zones: Option<ZoneLedBank<Z>>,
    sleeper: S,
    secondary: SecondaryRow,
    color: ColorOutput,
}

impl<LCD, SL, Z, S> DisplayUpdater<LCD, SL, Z, S>
where
    LCD: CharacterLcd,
    SL: Led,
    Z: Led,
    S: Sleeper,
{
    /// Updater driving the RGB backlight
    pub fn backlight(lcd: LCD, status: SL, sleeper: S, secondary: SecondaryRow) -> Self {
        Self {
            lcd,
            status,
            zones: None,
            sleeper,
            secondary,
            color: ColorOutput::Backlight,
        }
    }

    /// Updater driving a bank of zone LEDs
    pub fn zone_leds(
        lcd: LCD,
        status: SL,
        sleeper: S,
        secondary: SecondaryRow,
        bank: ZoneLedBank<Z>,
    ) -> Self {
        Self {
            lcd,
            status,
            zones: Some(bank),
            sleeper,
            secondary,
            color: ColorOutput::ZoneLeds,
        }
    }

    /// Render one cycle: both rows, color output, status pulse
    pub fn render(
        &mut self,
        reading: &Reading,
        extremes: Extremes,
        range: &ComfortRange,
    ) -> Result<(), DeviceError> {
        self.lcd.write_row(0, &current_row(reading))?;
        self.lcd
            .write_row(1, &secondary_row(self.secondary, reading, extremes))?;

        match self.color {
            ColorOutput::Backlight => {
                self.lcd.set_backlight(classify(reading.temperature, range))?;
            }
            ColorOutput::ZoneLeds => {
                if let Some(bank) = self.zones.as_mut() {
                    bank.set_active(zone(reading.temperature, range))?;
                }
            }
        }

        // Pulse after the panel is up to date, mirroring the sketch
        self.status.set(true)?;
        self.sleeper.sleep_ms(STATUS_PULSE_MS);
        self.status.set(false)?;

        Ok(())
    }

    /// Borrow the LCD (inspection in tests)
    pub fn lcd(&self) -> &LCD {
        &self.lcd
    }

    /// Borrow the status LED (inspection in tests)
    pub fn status_led(&self) -> &SL {
        &self.status
    }

    /// Borrow the zone bank, if this updater drives one
    pub fn zone_bank(&self) -> Option<&ZoneLedBank<Z>> {
        self.zones.as_ref()
    }
}

/// Format row 1: the instantaneous temperature
pub fn current_row(reading: &Reading) -> RowText {
    padded(format_args!("Temp : {}", reading.temperature))
}

/// Format row 2 according to the configured presentation mode
pub fn secondary_row(mode: SecondaryRow, reading: &Reading, extremes: Extremes) -> RowText {
    match (mode, reading.gas) {
        (SecondaryRow::Gas, Some(gas)) => padded(format_args!("Gas : {gas}")),
        (SecondaryRow::Gas, None) => padded(format_args!("Gas : --")),
        (SecondaryRow::MinMax, _) => {
            padded(format_args!("Min {} Max {}", extremes.min, extremes.max))
        }
    }
}

/// Pad with spaces to the panel width, truncating oversized text
fn padded(args: core::fmt::Arguments<'_>) -> RowText {
    let mut scratch: heapless::String<64> = heapless::String::new();
    // Overflow past the scratch size only loses characters the panel
    // could never show anyway.
    let _ = write!(scratch, "{args}");

    let mut row = RowText::new();
    for ch in scratch.chars().take(LCD_COLUMNS) {
        let _ = row.push(ch);
    }
    while row.push(' ').is_ok() {}
    row
}
