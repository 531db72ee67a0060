//! UART serial communication abstractions
//!
//! Both serial lines of the relay are plain byte pipes. These traits narrow
//! `embedded-io-async` down to the two operations the tasks need: wait for
//! exactly one byte, and write a buffer that is fully drained before the
//! call returns.

use embedded_io_async::{Read, ReadExactError, Write};

/// UART receiver
///
/// Async trait for receiving single bytes from a UART interface.
#[allow(async_fn_in_trait)]
pub trait ByteRx {
    /// Error type for receive operations
    type Error;

    /// Wait for the next byte
    ///
    /// Suspends until exactly one byte is available. There is no timeout.
    async fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// UART transmitter
///
/// Async trait for sending data over a UART interface.
#[allow(async_fn_in_trait)]
pub trait ByteTx {
    /// Error type for transmit operations
    type Error;

    /// Write all of `data` and wait until the line has drained it
    async fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte
    async fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte]).await
    }
}

// Blanket implementations for every embedded-io-async transport
impl<T: Read> ByteRx for T {
    type Error = ReadExactError<T::Error>;

    async fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf).await?;
        Ok(buf[0])
    }
}

impl<T: Write> ByteTx for T {
    type Error = T::Error;

    async fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_all(data).await?;
        self.flush().await
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

/// Baud rates accepted for either serial line
pub const SUPPORTED_BAUD_RATES: [u32; 5] = [9600, 19200, 38400, 57600, 115200];

impl Default for UartConfig {
    /// 9600 8-N-1, what the sensor module ships with
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// Check if the baud rate is one the relay is known to work at
    pub fn is_supported_baudrate(baudrate: u32) -> bool {
        SUPPORTED_BAUD_RATES.contains(&baudrate)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
