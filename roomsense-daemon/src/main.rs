//! Roomsense monitoring daemon
//!
//! Long-lived foreground process: verify the platform, read the static
//! configuration from the environment, acquire the (simulated) board,
//! then loop forever: one sampling cycle every interval, plus an
//! out-of-band telemetry report for each `"Update"` push event drained
//! from the bounded channel.
//!
//! Startup failures exit with distinct codes; once the loop is running
//! nothing terminates the process from the inside.

mod board;
mod platform;
mod settings;

use std::time::Duration;

use thiserror::Error;

use roomsense_connectors::{
    push_channel, CloudReporter, PushReceiver, TransportError,
};
use roomsense_core::display::{ColorOutput, DisplayUpdater, ZoneLedBank};
use roomsense_core::time::SystemClock;
use roomsense_core::{
    hal::{CharacterLcd, Led},
    ConfigError, CycleDriver, DeviceError, Reading, Reporter,
};

use board::{
    spawn_marker_push_trigger, LogLcd, LogLed, MarkerButton, SimulatedGas, SimulatedTemperature,
    StdSleeper, UPDATE_MARKER,
};
use settings::Settings;

/// Exit code for an unsupported or unidentifiable platform
const EXIT_PLATFORM: i32 = 2;
/// Exit code for a failed sensor/actuator acquisition
const EXIT_INIT: i32 = 3;
/// Exit code for rejected configuration
const EXIT_CONFIG: i32 = 4;

/// Queued `"Update"` events the loop can fall behind by before drops
const PUSH_QUEUE_CAPACITY: usize = 8;

/// Fatal startup failures, each with its own exit code
#[derive(Debug, Error)]
enum FatalError {
    #[error("{0}")]
    Platform(#[from] platform::PlatformError),

    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("initialization failed: {0}")]
    Init(#[from] DeviceError),

    #[error("cloud connector rejected: {0}")]
    Cloud(#[from] TransportError),
}

impl FatalError {
    fn exit_code(&self) -> i32 {
        match self {
            FatalError::Platform(_) => EXIT_PLATFORM,
            FatalError::Init(_) => EXIT_INIT,
            FatalError::Config(_) | FatalError::Cloud(_) => EXIT_CONFIG,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(fatal) = run() {
        log::error!("{fatal}");
        std::process::exit(fatal.exit_code());
    }
}

fn run() -> Result<(), FatalError> {
    let settings = Settings::from_env()?;
    let platform = platform::detect()?;
    log::info!(
        "roomsense {} starting on {platform}, sampling every {:?}",
        roomsense_core::VERSION,
        settings.interval
    );

    let reporter = CloudReporter::new(settings.cloud.clone())?;

    let (push_tx, push_rx) = push_channel(PUSH_QUEUE_CAPACITY);
    spawn_marker_push_trigger(UPDATE_MARKER, push_tx);

    // Handle acquisition; any failure here is fatal with EXIT_INIT
    let (temperature, gas, button) = board::acquire(&settings.comfort)?;

    match settings.color {
        ColorOutput::Backlight => {
            let display = DisplayUpdater::<_, _, LogLed, _>::backlight(
                LogLcd,
                LogLed::new("status"),
                StdSleeper,
                settings.secondary,
            );
            let driver = CycleDriver::new(settings.comfort, display);
            run_loop(driver, temperature, gas, button, reporter, push_rx, settings.interval)
        }
        ColorOutput::ZoneLeds => {
            let bank = ZoneLedBank::new(
                LogLed::new("cold"),
                LogLed::new("comfortable"),
                LogLed::new("hot"),
            );
            let display = DisplayUpdater::zone_leds(
                LogLcd,
                LogLed::new("status"),
                StdSleeper,
                settings.secondary,
                bank,
            );
            let driver = CycleDriver::new(settings.comfort, display);
            run_loop(driver, temperature, gas, button, reporter, push_rx, settings.interval)
        }
    }
}

/// The steady state: sample, sleep, drain push events, repeat forever
fn run_loop<LCD, SL, Z>(
    mut driver: CycleDriver<LCD, SL, Z, StdSleeper>,
    mut temperature: SimulatedTemperature,
    mut gas: SimulatedGas,
    mut button: MarkerButton,
    mut reporter: CloudReporter,
    push_rx: PushReceiver,
    interval: Duration,
) -> !
where
    LCD: CharacterLcd,
    SL: Led,
    Z: Led,
{
    let clock = SystemClock;

    // Latest immutable snapshot, replaced whole each cycle. Push events
    // arrive over the channel, so only this thread ever touches it.
    let mut latest: Option<Reading> = None;

    loop {
        match driver.run_cycle(
            &mut temperature,
            Some(&mut gas),
            &mut button,
            &mut reporter,
            &clock,
        ) {
            Ok(reading) => {
                log::info!(
                    "sampled {}°C (gas {:?}) at {}",
                    reading.temperature,
                    reading.gas,
                    reading.timestamp
                );
                latest = Some(reading);
            }
            Err(e) => log::warn!("cycle skipped: {e}"),
        }

        std::thread::sleep(interval);

        // At most one immediate report per drained event
        for _event in push_rx.drain() {
            match latest {
                Some(reading) => match reporter.report(&reading) {
                    Ok(()) => log::info!("push-triggered report sent"),
                    Err(e) => log::warn!("push-triggered report failed: {e}"),
                },
                None => log::warn!("push event before first sample, nothing to report"),
            }
        }
    }
}
