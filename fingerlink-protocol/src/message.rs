//! Command messages sent to the sensor module
//!
//! Every message is rebuilt from its [`Command`] right before it is sent;
//! nothing is queued beyond the single message in flight.

use core::fmt::Write;

use heapless::String;

use crate::slot::Slot;

/// Opening tag of every message
pub const MESSAGE_OPEN: &str = "<C>";

/// Closing tag of every message
pub const MESSAGE_CLOSE: &str = "</C>";

/// Longest encoded message (`<C>FpImageInformation</C>` is 25 bytes)
pub const MAX_MESSAGE_LEN: usize = 32;

/// An encoded message, ready for the sensor transport
pub type Message = String<MAX_MESSAGE_LEN>;

/// Errors that can occur while encoding a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Commands understood by the sensor module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Number of registered fingerprints
    QueryCount,
    /// Register a fingerprint into a slot
    Register(Slot),
    /// Compare a finger against the stored records
    Compare,
    /// Fingerprint image information
    QueryInfo,
    /// Scan a fingerprint image
    ScanImage,
    /// Clear one slot
    Clear(Slot),
}

impl Command {
    /// Command name as the sensor expects it
    pub fn name(&self) -> &'static str {
        match self {
            Command::QueryCount => "CheckRegisteredNo",
            Command::Register(_) => "RegisterOneFp",
            Command::Compare => "CompareFingerprint",
            Command::QueryInfo => "FpImageInformation",
            Command::ScanImage => "ScanFpImage",
            Command::Clear(_) => "ClearOneFp",
        }
    }

    /// Slot argument, if the command carries one
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Command::Register(slot) | Command::Clear(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Encode this command into a message
    pub fn to_message(&self) -> Result<Message, MessageError> {
        let mut message = Message::new();
        let result = match self.slot() {
            Some(slot) => write!(
                message,
                "{}{}={}{}",
                MESSAGE_OPEN,
                self.name(),
                slot.index(),
                MESSAGE_CLOSE
            ),
            None => write!(message, "{}{}{}", MESSAGE_OPEN, self.name(), MESSAGE_CLOSE),
        };
        result.map_err(|_| MessageError::BufferTooSmall)?;
        Ok(message)
    }
}
