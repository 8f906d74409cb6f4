//! Supported-platform gate
//!
//! The monitor only makes sense on the boards its sensor header layout
//! was designed for, so startup verifies the platform before acquiring
//! any handles and exits with a distinct code otherwise. Detection reads
//! the DMI board name; `ROOMSENSE_PLATFORM` overrides it for bench runs
//! on a developer machine.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// DMI node exposing the board name on hosted Linux
const BOARD_NAME_PATH: &str = "/sys/devices/virtual/dmi/id/board_name";

/// Env override for bench runs off-target
pub const PLATFORM_OVERRIDE_VAR: &str = "ROOMSENSE_PLATFORM";

/// Boards the monitor supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Intel Edison, Fab C
    EdisonFabC,
    /// Intel Galileo generation 1
    GalileoGen1,
    /// Intel Galileo generation 2
    GalileoGen2,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::EdisonFabC => "Intel Edison (Fab C)",
            Platform::GalileoGen1 => "Intel Galileo Gen 1",
            Platform::GalileoGen2 => "Intel Galileo Gen 2",
        };
        f.write_str(name)
    }
}

/// Platform verification failure (fatal, startup-only)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// Board identified but not in the supported set
    #[error("unsupported platform: {0}")]
    Unsupported(String),

    /// Board identity could not be determined at all
    #[error("cannot determine platform: {0}")]
    Unknown(&'static str),
}

/// Identify the executing board
///
/// Order: env override, then DMI board name. Anything unrecognized is an
/// error; the caller exits before touching hardware.
pub fn detect() -> Result<Platform, PlatformError> {
    if let Ok(value) = std::env::var(PLATFORM_OVERRIDE_VAR) {
        return parse_override(&value);
    }

    let name = std::fs::read_to_string(Path::new(BOARD_NAME_PATH))
        .map_err(|_| PlatformError::Unknown("DMI board name unreadable"))?;
    parse_board_name(name.trim())
}

fn parse_override(value: &str) -> Result<Platform, PlatformError> {
    match value {
        "edison" => Ok(Platform::EdisonFabC),
        "galileo-gen1" => Ok(Platform::GalileoGen1),
        "galileo-gen2" => Ok(Platform::GalileoGen2),
        other => Err(PlatformError::Unsupported(other.to_string())),
    }
}

fn parse_board_name(name: &str) -> Result<Platform, PlatformError> {
    let lowered = name.to_ascii_lowercase();
    if lowered.contains("edison") || lowered.contains("bodega bay") {
        Ok(Platform::EdisonFabC)
    } else if lowered.contains("galileogen2") || lowered.contains("galileo gen2") {
        Ok(Platform::GalileoGen2)
    } else if lowered.contains("galileo") {
        Ok(Platform::GalileoGen1)
    } else {
        Err(PlatformError::Unsupported(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_board_names() {
        assert_eq!(parse_board_name("Edison"), Ok(Platform::EdisonFabC));
        assert_eq!(parse_board_name("BODEGA BAY"), Ok(Platform::EdisonFabC));
        assert_eq!(parse_board_name("GalileoGen2"), Ok(Platform::GalileoGen2));
        assert_eq!(parse_board_name("Galileo"), Ok(Platform::GalileoGen1));
    }

    #[test]
    fn unknown_board_rejected() {
        assert!(matches!(
            parse_board_name("To be filled by O.E.M."),
            Err(PlatformError::Unsupported(_))
        ));
    }

    #[test]
    fn override_values() {
        assert_eq!(parse_override("edison"), Ok(Platform::EdisonFabC));
        assert_eq!(parse_override("galileo-gen2"), Ok(Platform::GalileoGen2));
        assert!(parse_override("raspberry-pi").is_err());
    }
}
