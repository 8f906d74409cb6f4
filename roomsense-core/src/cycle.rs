//! The sampling cycle: sample, track, render, report
//!
//! One [`CycleDriver::run_cycle`] call is one pass of the monitor:
//!
//! ```text
//! sample ──► tracker.update ──► render ──► report
//!    │                            │           │
//!    └── Reading snapshot         └── LCD/LEDs└── cloud PUT
//! ```
//!
//! The driver owns the extremum state and the display handles; sensors
//! and the reporter are borrowed per call so the owning process can keep
//! them wherever its platform layer wants. There is no terminal state:
//! the process loops over `run_cycle` with a fixed sleep until killed.
//!
//! Failure handling after startup is deliberately one-sided: a failed
//! temperature read aborts the cycle (there is nothing to show or send),
//! while render and report failures are logged and the cycle completes.
//! Nothing here terminates the process.

use crate::color::ComfortRange;
use crate::display::DisplayUpdater;
use crate::errors::DeviceError;
use crate::extremum::ExtremumTracker;
use crate::hal::{CharacterLcd, GasSensor, Led, ResetButton, Sleeper, TemperatureSensor};
use crate::reading::Reading;
use crate::time::TimeSource;

/// Telemetry seam between the core cycle and the transport crate
///
/// Implementations send the reading somewhere; the cycle only needs to
/// know whether it worked well enough to log.
pub trait Reporter {
    /// Transport failure type
    type Error: core::fmt::Display;

    /// Deliver one reading
    fn report(&mut self, reading: &Reading) -> Result<(), Self::Error>;
}

/// Orchestrates one monitoring iteration
pub struct CycleDriver<LCD, SL, Z, S>
where
    LCD: CharacterLcd,
    SL: Led,
    Z: Led,
    S: Sleeper,
{
    range: ComfortRange,
    tracker: ExtremumTracker,
    display: DisplayUpdater<LCD, SL, Z, S>,
}

impl<LCD, SL, Z, S> CycleDriver<LCD, SL, Z, S>
where
    LCD: CharacterLcd,
    SL: Led,
    Z: Led,
    S: Sleeper,
{
    /// Driver with fresh extremum state
    pub fn new(range: ComfortRange, display: DisplayUpdater<LCD, SL, Z, S>) -> Self {
        Self {
            range,
            tracker: ExtremumTracker::new(),
            display,
        }
    }

    /// Run one cycle and return the reading snapshot
    ///
    /// The returned [`Reading`] is what the owning process caches for
    /// push-triggered out-of-band reports.
    pub fn run_cycle<T, G, B, R, C>(
        &mut self,
        temperature: &mut T,
        gas: Option<&mut G>,
        button: &mut B,
        reporter: &mut R,
        clock: &C,
    ) -> Result<Reading, DeviceError>
    where
        T: TemperatureSensor,
        G: GasSensor,
        B: ResetButton,
        R: Reporter,
        C: TimeSource,
    {
        let temp = temperature.read_celsius()?;

        let gas_value = match gas {
            Some(probe) => match probe.read_ppm() {
                Ok(value) => Some(value),
                Err(e) => {
                    // Probe glitch: show "--" this cycle, keep sampling
                    warn_device("gas read failed", &e);
                    None
                }
            },
            None => None,
        };

        let reset = match button.is_pressed() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn_device("button read failed", &e);
                false
            }
        };

        let reading = Reading::new(temp, gas_value, clock.now());
        let extremes = self.tracker.update(temp, reset);

        if let Err(e) = self.display.render(&reading, extremes, &self.range) {
            warn_device("render failed", &e);
        }

        if let Err(e) = reporter.report(&reading) {
            warn_report(&e);
        }

        Ok(reading)
    }

    /// Current extremum tracker state
    pub fn tracker(&self) -> &ExtremumTracker {
        &self.tracker
    }

    /// Borrow the display updater (inspection in tests)
    pub fn display(&self) -> &DisplayUpdater<LCD, SL, Z, S> {
        &self.display
    }
}

fn warn_device(what: &str, err: &DeviceError) {
    #[cfg(feature = "std")]
    log::warn!("{what}: {err}");
    #[cfg(not(feature = "std"))]
    let _ = (what, err);
}

fn warn_report<E: core::fmt::Display>(err: &E) {
    #[cfg(feature = "std")]
    log::warn!("report failed: {err}");
    #[cfg(not(feature = "std"))]
    let _ = err;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayUpdater, SecondaryRow};
    use crate::hal::mock::{MockButton, MockGas, MockLcd, MockLed, MockSleeper, MockTemperature};
    use crate::time::FixedClock;
    use crate::ComfortRange;

    /// Reporter that records readings and optionally always fails
    struct RecordingReporter {
        sent: Vec<Reading>,
        fail: bool,
    }

    impl RecordingReporter {
        fn new() -> Self {
            Self {
                sent: Vec::new(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Vec::new(),
                fail: true,
            }
        }
    }

    impl Reporter for RecordingReporter {
        type Error = &'static str;

        fn report(&mut self, reading: &Reading) -> Result<(), Self::Error> {
            if self.fail {
                return Err("connection refused");
            }
            self.sent.push(*reading);
            Ok(())
        }
    }

    fn driver() -> CycleDriver<MockLcd, MockLed, MockLed, MockSleeper> {
        let range = ComfortRange::new(18, 26).unwrap();
        let display = DisplayUpdater::<_, _, MockLed, _>::backlight(
            MockLcd::new(),
            MockLed::new(),
            MockSleeper::new(),
            SecondaryRow::MinMax,
        );
        CycleDriver::new(range, display)
    }

    #[test]
    fn one_cycle_samples_tracks_renders_reports() {
        let mut driver = driver();
        let mut temp = MockTemperature::new(vec![24]);
        let mut gas = MockGas::new(vec![200]);
        let mut button = MockButton::released();
        let mut reporter = RecordingReporter::new();
        let clock = FixedClock::new(5000);

        let reading = driver
            .run_cycle(&mut temp, Some(&mut gas), &mut button, &mut reporter, &clock)
            .unwrap();

        assert_eq!(reading, Reading::new(24, Some(200), 5000));
        assert_eq!(reporter.sent, vec![reading]);
        assert_eq!(driver.display().lcd().rows[0], "Temp : 24       ");
        assert_eq!(driver.display().lcd().rows[1], "Min 24 Max 24   ");
    }

    #[test]
    fn transport_failure_does_not_abort_the_cycle() {
        let mut driver = driver();
        let mut temp = MockTemperature::new(vec![21]);
        let mut button = MockButton::released();
        let mut reporter = RecordingReporter::failing();
        let clock = FixedClock::new(0);

        let result = driver.run_cycle(
            &mut temp,
            None::<&mut MockGas>,
            &mut button,
            &mut reporter,
            &clock,
        );
        assert!(result.is_ok());
        assert_eq!(driver.display().lcd().rows[1], "Min 21 Max 21   ");
    }

    #[test]
    fn extremes_accumulate_across_cycles() {
        let mut driver = driver();
        let mut temp = MockTemperature::new(vec![10, 20, 30, 15]);
        let mut button = MockButton::released();
        let mut reporter = RecordingReporter::new();
        let clock = FixedClock::new(0);

        for _ in 0..4 {
            driver
                .run_cycle(
                    &mut temp,
                    None::<&mut MockGas>,
                    &mut button,
                    &mut reporter,
                    &clock,
                )
                .unwrap();
        }

        let extremes = driver.tracker().extremes().unwrap();
        assert_eq!(extremes.min, 10);
        assert_eq!(extremes.max, 30);
        assert_eq!(driver.display().lcd().rows[1], "Min 10 Max 30   ");
    }

    #[test]
    fn button_press_resets_extremes_mid_run() {
        let mut driver = driver();
        let mut temp = MockTemperature::new(vec![10, 40, 22, 25, 19]);
        let mut button = MockButton::pressed_on(vec![2]);
        let mut reporter = RecordingReporter::new();
        let clock = FixedClock::new(0);

        for _ in 0..5 {
            driver
                .run_cycle(
                    &mut temp,
                    None::<&mut MockGas>,
                    &mut button,
                    &mut reporter,
                    &clock,
                )
                .unwrap();
        }

        let extremes = driver.tracker().extremes().unwrap();
        assert_eq!(extremes.min, 19);
        assert_eq!(extremes.max, 25);
    }

    #[test]
    fn failed_temperature_read_aborts_cycle() {
        let mut driver = driver();
        let mut temp = MockTemperature::new(Vec::new());
        let mut button = MockButton::released();
        let mut reporter = RecordingReporter::new();
        let clock = FixedClock::new(0);

        let result = driver.run_cycle(
            &mut temp,
            None::<&mut MockGas>,
            &mut button,
            &mut reporter,
            &clock,
        );
        assert!(result.is_err());
        assert!(reporter.sent.is_empty());
    }
}
