//! Relay configuration
//!
//! Serial line settings for the console and the sensor. The firmware
//! embeds a `relay.toml` and parses it at boot with [`parse_config`].

pub mod parser;

pub use parser::{parse_config, ParseError};

use fingerlink_hal::UartConfig;

/// Complete relay configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Console line (user terminal)
    pub console: UartConfig,
    /// Sensor module line
    pub sensor: UartConfig,
}
