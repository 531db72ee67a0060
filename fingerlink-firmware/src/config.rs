//! Serial line configuration
//!
//! `relay.toml` is compiled into the image and parsed once at boot.

use defmt::*;
use embassy_rp::uart::{
    Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits,
};

use fingerlink_core::{parse_config, RelayConfig};
use fingerlink_hal::{DataBits, Parity, StopBits, UartConfig};

/// Embedded configuration (compiled into firmware)
/// Edit relay.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../relay.toml");

/// Parse the embedded configuration
///
/// build.rs already rejects a broken relay.toml, so the fallback only
/// triggers if the two validators disagree.
pub fn load_config() -> RelayConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Console {} baud, sensor {} baud",
                config.console.baudrate, config.sensor.baudrate
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using 9600 8-N-1 on both lines");
            RelayConfig::default()
        }
    }
}

/// Map line settings onto the RP2040 UART config
pub fn uart_config(line: &UartConfig) -> Config {
    let mut config = Config::default();
    config.baudrate = line.baudrate;
    config.data_bits = match line.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    config.parity = match line.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    config.stop_bits = match line.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    config
}
