//! Fingerlink Relay Protocol
//!
//! This crate defines both ends of the relay's text protocol:
//!
//! - Console → relay: single-byte menu selectors (`'1'`..`'6'`) and slot
//!   letters (`'a'`..`'x'`)
//! - Relay → sensor: ASCII command messages
//!
//! # Sensor Message Format
//!
//! ```text
//! ┌─────┬──────────────┬───────────────────┬──────┐
//! │ <C> │ NAME         │ =VALUE (optional) │ </C> │
//! │ 3B  │ ASCII        │ decimal slot      │ 4B   │
//! └─────┴──────────────┴───────────────────┴──────┘
//! ```
//!
//! There is no checksum, length prefix or line terminator. The sensor's
//! replies are streamed back to the console untouched and are not parsed.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod message;
pub mod selector;
pub mod slot;

pub use message::{Command, Message, MessageError, MAX_MESSAGE_LEN};
pub use selector::Selector;
pub use slot::{Slot, SLOT_COUNT};
