//! Main menu selectors typed on the console

use crate::message::Command;
use crate::slot::Slot;

/// Top-level menu entry chosen by a single console byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selector {
    /// `1` - number of registered fingerprints
    QueryCount,
    /// `2` - register a fingerprint into a slot
    Register,
    /// `3` - compare a finger against the stored records
    Compare,
    /// `4` - fingerprint image information
    QueryInfo,
    /// `5` - scan a fingerprint image
    ScanImage,
    /// `6` - clear one slot
    Clear,
}

// Wire format values
const SELECT_QUERY_COUNT: u8 = b'1';
const SELECT_REGISTER: u8 = b'2';
const SELECT_COMPARE: u8 = b'3';
const SELECT_QUERY_INFO: u8 = b'4';
const SELECT_SCAN_IMAGE: u8 = b'5';
const SELECT_CLEAR: u8 = b'6';

impl Selector {
    /// Every selector in menu order
    pub const ALL: [Selector; 6] = [
        Selector::QueryCount,
        Selector::Register,
        Selector::Compare,
        Selector::QueryInfo,
        Selector::ScanImage,
        Selector::Clear,
    ];

    /// Parse a selector from a console byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SELECT_QUERY_COUNT => Some(Selector::QueryCount),
            SELECT_REGISTER => Some(Selector::Register),
            SELECT_COMPARE => Some(Selector::Compare),
            SELECT_QUERY_INFO => Some(Selector::QueryInfo),
            SELECT_SCAN_IMAGE => Some(Selector::ScanImage),
            SELECT_CLEAR => Some(Selector::Clear),
            _ => None,
        }
    }

    /// Console byte for this selector
    pub fn to_byte(self) -> u8 {
        match self {
            Selector::QueryCount => SELECT_QUERY_COUNT,
            Selector::Register => SELECT_REGISTER,
            Selector::Compare => SELECT_COMPARE,
            Selector::QueryInfo => SELECT_QUERY_INFO,
            Selector::ScanImage => SELECT_SCAN_IMAGE,
            Selector::Clear => SELECT_CLEAR,
        }
    }

    /// Returns true if a slot letter must follow this selector
    pub fn needs_slot(self) -> bool {
        matches!(self, Selector::Register | Selector::Clear)
    }

    /// Command for a selector that takes no slot
    ///
    /// Returns `None` for [`Selector::Register`] and [`Selector::Clear`].
    pub fn command(self) -> Option<Command> {
        match self {
            Selector::QueryCount => Some(Command::QueryCount),
            Selector::Compare => Some(Command::Compare),
            Selector::QueryInfo => Some(Command::QueryInfo),
            Selector::ScanImage => Some(Command::ScanImage),
            Selector::Register | Selector::Clear => None,
        }
    }

    /// Command for a selector that takes a slot
    ///
    /// Returns `None` for selectors that do not take one.
    pub fn command_with_slot(self, slot: Slot) -> Option<Command> {
        match self {
            Selector::Register => Some(Command::Register(slot)),
            Selector::Clear => Some(Command::Clear(slot)),
            _ => None,
        }
    }
}
