//! Console input dispatcher
//!
//! Reads the console one byte at a time and alternates between two phases:
//!
//! - `AwaitingCommand`: the byte selects a command. Register and Clear
//!   prompt for a slot and read one more byte. The encoded command is
//!   written to the sensor and the `Started` flag is raised.
//! - `AwaitingAcknowledgement`: the byte is swallowed as the user's
//!   "press any key to continue" and the `Finished` flag is raised.
//!
//! The phase flips after every iteration that consumed a console byte,
//! whatever the byte was. A second command therefore cannot be issued
//! before the previous one has been acknowledged.

use embassy_sync::blocking_mutex::raw::RawMutex;

use fingerlink_hal::{ByteRx, ByteTx};
use fingerlink_protocol::{Command, MessageError, Selector, Slot};

use crate::console::SharedConsole;
use crate::handshake::{Handshake, HandshakeError};
use crate::menu::write_slot_menu;

/// Input task phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Next byte selects a command
    #[default]
    AwaitingCommand,
    /// Next byte acknowledges the previous command
    AwaitingAcknowledgement,
}

impl Phase {
    /// The other phase
    pub fn toggled(self) -> Self {
        match self {
            Phase::AwaitingCommand => Phase::AwaitingAcknowledgement,
            Phase::AwaitingAcknowledgement => Phase::AwaitingCommand,
        }
    }
}

/// Result of one input iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// A command was written to the sensor
    Dispatched(Command),
    /// The byte (selector or slot letter) was not recognised; nothing sent
    Ignored(u8),
    /// The byte acknowledged the previous command
    Acknowledged,
}

/// Errors from one input iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Reading from the console failed
    ConsoleRead,
    /// Writing the slot prompt to the console failed
    ConsoleWrite,
    /// Writing the command to the sensor failed
    SensorWrite,
    /// Command could not be encoded
    Encode(MessageError),
    /// The handshake rejected a raise
    Handshake(HandshakeError),
}

impl From<HandshakeError> for InputError {
    fn from(e: HandshakeError) -> Self {
        InputError::Handshake(e)
    }
}

impl From<MessageError> for InputError {
    fn from(e: MessageError) -> Self {
        InputError::Encode(e)
    }
}

/// Console reader and command dispatcher
pub struct InputTask<'a, M: RawMutex, Rx, Tx, Sensor> {
    console_rx: Rx,
    console: &'a SharedConsole<M, Tx>,
    sensor_tx: Sensor,
    handshake: &'a Handshake<M>,
    phase: Phase,
}

impl<'a, M, Rx, Tx, Sensor> InputTask<'a, M, Rx, Tx, Sensor>
where
    M: RawMutex,
    Rx: ByteRx,
    Tx: ByteTx,
    Sensor: ByteTx,
{
    /// Create an input task in the `AwaitingCommand` phase
    pub fn new(
        console_rx: Rx,
        console: &'a SharedConsole<M, Tx>,
        sensor_tx: Sensor,
        handshake: &'a Handshake<M>,
    ) -> Self {
        Self {
            console_rx,
            console,
            sensor_tx,
            handshake,
            phase: Phase::default(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sensor transmitter
    pub fn sensor(&self) -> &Sensor {
        &self.sensor_tx
    }

    /// Run one iteration: read a console byte and act on it
    ///
    /// A failed console read consumes nothing and leaves the phase as is.
    /// Once a byte has been read the phase flips and the matching flag is
    /// raised even if a later write fails, so the menu is never left
    /// waiting on a cycle that was cut short.
    pub async fn step(&mut self) -> Result<Outcome, InputError> {
        let byte = self
            .console_rx
            .read_byte()
            .await
            .map_err(|_| InputError::ConsoleRead)?;

        let phase = self.phase;
        self.phase = phase.toggled();

        match phase {
            Phase::AwaitingCommand => {
                let dispatched = self.dispatch(byte).await;
                let raised = self.handshake.raise_started();
                let outcome = dispatched?;
                raised?;
                Ok(outcome)
            }
            Phase::AwaitingAcknowledgement => {
                self.handshake.raise_finished()?;
                Ok(Outcome::Acknowledged)
            }
        }
    }

    /// Turn a selector byte (and slot letter, if needed) into a sensor write
    async fn dispatch(&mut self, byte: u8) -> Result<Outcome, InputError> {
        let Some(selector) = Selector::from_byte(byte) else {
            return Ok(Outcome::Ignored(byte));
        };

        let command = if selector.needs_slot() {
            write_slot_menu(self.console, selector)
                .await
                .map_err(|_| InputError::ConsoleWrite)?;

            let letter = self
                .console_rx
                .read_byte()
                .await
                .map_err(|_| InputError::ConsoleRead)?;

            match Slot::from_letter(letter).and_then(|slot| selector.command_with_slot(slot)) {
                Some(command) => command,
                None => return Ok(Outcome::Ignored(letter)),
            }
        } else {
            match selector.command() {
                Some(command) => command,
                None => return Ok(Outcome::Ignored(byte)),
            }
        };

        self.send(command).await?;
        Ok(Outcome::Dispatched(command))
    }

    /// Write a command to the sensor; does not wait for a reply
    async fn send(&mut self, command: Command) -> Result<(), InputError> {
        let message = command.to_message()?;
        self.sensor_tx
            .write_bytes(message.as_bytes())
            .await
            .map_err(|_| InputError::SensorWrite)
    }
}
