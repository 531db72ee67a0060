//! Sensor reply relay
//!
//! Streams every byte arriving from the sensor straight to the console.
//! The relay never looks at the handshake, so replies show up live whatever
//! the menu is doing.

use embassy_sync::blocking_mutex::raw::RawMutex;

use fingerlink_hal::{ByteRx, ByteTx};

use crate::console::SharedConsole;

/// Errors from one relay iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayError {
    /// Reading from the sensor failed
    SensorRead,
    /// Writing to the console failed
    ConsoleWrite,
}

/// Byte-for-byte pipe from the sensor RX line to the console
pub struct RelayTask<'a, M: RawMutex, Rx, Tx> {
    sensor_rx: Rx,
    console: &'a SharedConsole<M, Tx>,
    relayed: u32,
}

impl<'a, M, Rx, Tx> RelayTask<'a, M, Rx, Tx>
where
    M: RawMutex,
    Rx: ByteRx,
    Tx: ByteTx,
{
    /// Create a relay over the given sensor receiver
    pub fn new(sensor_rx: Rx, console: &'a SharedConsole<M, Tx>) -> Self {
        Self {
            sensor_rx,
            console,
            relayed: 0,
        }
    }

    /// Bytes relayed so far (wraps)
    pub fn relayed(&self) -> u32 {
        self.relayed
    }

    /// Relay one byte
    ///
    /// Waits for the next sensor byte, writes it to the console and returns it.
    pub async fn step(&mut self) -> Result<u8, RelayError> {
        let byte = self
            .sensor_rx
            .read_byte()
            .await
            .map_err(|_| RelayError::SensorRead)?;

        self.console
            .lock()
            .await
            .write_byte(byte)
            .await
            .map_err(|_| RelayError::ConsoleWrite)?;

        self.relayed = self.relayed.wrapping_add(1);
        Ok(byte)
    }
}
