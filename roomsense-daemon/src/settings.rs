//! Environment-provided static configuration
//!
//! No CLI flags: everything comes from `ROOMSENSE_*` variables, read once
//! at startup and immutable for the process lifetime. Validation happens
//! here: degenerate comfort ranges, bad integers and bad mode strings
//! all surface as [`ConfigError`] before a single sample is taken.

use std::time::Duration;

use roomsense_core::display::{ColorOutput, SecondaryRow};
use roomsense_core::{ComfortRange, ConfigError};
use roomsense_connectors::CloudConfig;

/// Default comfort band, matching the original sketch's constants
const DEFAULT_COMFORT: (i32, i32) = (18, 26);

/// Default sampling interval
const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Everything the daemon needs to run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Telemetry endpoint and credentials
    pub cloud: CloudConfig,
    /// Comfort band for fade/zone classification
    pub comfort: ComfortRange,
    /// Pause between cycles
    pub interval: Duration,
    /// Second-row presentation mode
    pub secondary: SecondaryRow,
    /// Color output mode
    pub color: ColorOutput,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = required(&lookup, "ROOMSENSE_ENDPOINT")?;
        let object_id = required(&lookup, "ROOMSENSE_OBJECT_ID")?;
        let app_id = required(&lookup, "ROOMSENSE_APP_ID")?;
        let access_key = required(&lookup, "ROOMSENSE_ACCESS_KEY")?;

        let low = int_or(&lookup, "ROOMSENSE_COMFORT_LOW", DEFAULT_COMFORT.0)?;
        let high = int_or(&lookup, "ROOMSENSE_COMFORT_HIGH", DEFAULT_COMFORT.1)?;
        let comfort = ComfortRange::new(low, high)?;

        let interval_secs = int_or(&lookup, "ROOMSENSE_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)?;
        if interval_secs == 0 {
            return Err(ConfigError::InvalidField {
                field: "ROOMSENSE_INTERVAL_SECS",
            });
        }

        let secondary = match lookup("ROOMSENSE_ROW").as_deref() {
            None | Some("gas") => SecondaryRow::Gas,
            Some("minmax") => SecondaryRow::MinMax,
            Some(_) => {
                return Err(ConfigError::InvalidField {
                    field: "ROOMSENSE_ROW",
                })
            }
        };

        let color = match lookup("ROOMSENSE_COLOR").as_deref() {
            None | Some("backlight") => ColorOutput::Backlight,
            Some("leds") => ColorOutput::ZoneLeds,
            Some(_) => {
                return Err(ConfigError::InvalidField {
                    field: "ROOMSENSE_COLOR",
                })
            }
        };

        Ok(Self {
            cloud: CloudConfig::new(endpoint, object_id, app_id, access_key),
            comfort,
            interval: Duration::from_secs(interval_secs),
            secondary,
            color,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::InvalidField { field: key }),
    }
}

fn int_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidField { field: key }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ROOMSENSE_ENDPOINT", "https://api.example.com/1/classes/Sensors"),
            ("ROOMSENSE_OBJECT_ID", "ab12cd34"),
            ("ROOMSENSE_APP_ID", "app"),
            ("ROOMSENSE_ACCESS_KEY", "key"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<Settings, ConfigError> {
        Settings::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_applied() {
        let settings = load(&base_env()).unwrap();
        assert_eq!(settings.comfort.low(), 18);
        assert_eq!(settings.comfort.high(), 26);
        assert_eq!(settings.interval, Duration::from_secs(30));
        assert_eq!(settings.secondary, SecondaryRow::Gas);
        assert_eq!(settings.color, ColorOutput::Backlight);
    }

    #[test]
    fn missing_credentials_rejected() {
        let mut env = base_env();
        env.remove("ROOMSENSE_ACCESS_KEY");
        assert_eq!(
            load(&env).unwrap_err(),
            ConfigError::InvalidField {
                field: "ROOMSENSE_ACCESS_KEY"
            }
        );
    }

    #[test]
    fn degenerate_range_rejected_before_sampling() {
        let mut env = base_env();
        env.insert("ROOMSENSE_COMFORT_LOW", "22");
        env.insert("ROOMSENSE_COMFORT_HIGH", "22");
        assert_eq!(load(&env).unwrap_err(), ConfigError::DegenerateRange(22));
    }

    #[test]
    fn bad_integers_rejected() {
        let mut env = base_env();
        env.insert("ROOMSENSE_INTERVAL_SECS", "soon");
        assert_eq!(
            load(&env).unwrap_err(),
            ConfigError::InvalidField {
                field: "ROOMSENSE_INTERVAL_SECS"
            }
        );

        env.insert("ROOMSENSE_INTERVAL_SECS", "0");
        assert!(load(&env).is_err());
    }

    #[test]
    fn modes_parse() {
        let mut env = base_env();
        env.insert("ROOMSENSE_ROW", "minmax");
        env.insert("ROOMSENSE_COLOR", "leds");
        let settings = load(&env).unwrap();
        assert_eq!(settings.secondary, SecondaryRow::MinMax);
        assert_eq!(settings.color, ColorOutput::ZoneLeds);

        env.insert("ROOMSENSE_COLOR", "disco");
        assert!(load(&env).is_err());
    }
}
