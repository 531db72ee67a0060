//! Minimal reader for `relay.toml`
//!
//! Handles only the subset the relay needs. It does NOT support the full
//! TOML spec.
//!
//! Supported features:
//! - `[console]` and `[sensor]` section headers
//! - Key = value pairs (string, integer)
//! - Comments (# ...)
//!
//! Unknown keys are ignored. Unknown sections are an error.

use fingerlink_hal::{DataBits, Parity, StopBits, UartConfig};

use super::RelayConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Baud rate outside the supported set
    UnsupportedBaudrate,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Console,
    Sensor,
}

/// Parse TOML configuration into a RelayConfig
///
/// Keys missing from the input keep their defaults (9600 8-N-1).
pub fn parse_config(input: &str) -> Result<RelayConfig, ParseError> {
    let mut config = RelayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            match section {
                Section::Console => apply_value(&mut config.console, key, value)?,
                Section::Sensor => apply_value(&mut config.sensor, key, value)?,
                // Nothing lives at the root yet
                Section::Root => {}
            }
        }
    }

    Ok(config)
}

/// Parse section header like "console" or "sensor"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "console" => Ok(Section::Console),
        "sensor" => Ok(Section::Sensor),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    Some((key, value))
}

/// Apply one key to a serial line
fn apply_value(uart: &mut UartConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "baud" | "baudrate" => {
            let baudrate: u32 = parse_int(value)?;
            if !UartConfig::is_supported_baudrate(baudrate) {
                return Err(ParseError::UnsupportedBaudrate);
            }
            uart.baudrate = baudrate;
        }
        "data_bits" => {
            uart.data_bits = match parse_int::<u8>(value)? {
                7 => DataBits::Seven,
                8 => DataBits::Eight,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        "parity" => {
            uart.parity = match parse_string(value) {
                "none" | "None" => Parity::None,
                "even" | "Even" => Parity::Even,
                "odd" | "Odd" => Parity::Odd,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        "stop_bits" => {
            uart.stop_bits = match parse_int::<u8>(value)? {
                1 => StopBits::One,
                2 => StopBits::Two,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        _ => {}
    }
    Ok(())
}

/// Strip quotes from a string value
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}
