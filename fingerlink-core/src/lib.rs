//! Board-agnostic core logic for the fingerprint relay firmware
//!
//! This crate contains the task logic that does not depend on a specific
//! board, written against the `fingerlink-hal` transport traits:
//!
//! - Command cycle handshake between the input and menu tasks
//! - Console input dispatcher
//! - Menu presentation
//! - Sensor reply relay
//! - Serial line configuration
//!
//! Each task exposes a `step` that performs one loop iteration; the
//! firmware wraps them in embassy tasks that loop forever and log.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod handshake;
pub mod input;
pub mod menu;
pub mod relay;

#[cfg(test)]
mod testing;

pub use config::{parse_config, ParseError, RelayConfig};
pub use console::{write_console, SharedConsole};
pub use handshake::{CycleFlag, Handshake, HandshakeError, HandshakeState};
pub use input::{InputError, InputTask, Outcome, Phase};
pub use menu::{write_slot_menu, MenuError, MenuTask, MAIN_MENU};
pub use relay::{RelayError, RelayTask};
