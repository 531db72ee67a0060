//! Fingerlink Hardware Abstraction Layer
//!
//! This crate defines the transport traits the relay tasks are written
//! against. Any `embedded-io-async` serial port (an embassy buffered UART on
//! the target, an in-memory pipe in host tests) satisfies them through
//! blanket implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  fingerlink-firmware (embassy tasks)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fingerlink-core (input, menu, relay)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fingerlink-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-io-async Read / Write         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::ByteRx`] - Wait for one byte
//! - [`uart::ByteTx`] - Write and drain a buffer

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod uart;

// Re-export key traits at crate root for convenience
pub use uart::{ByteRx, ByteTx, DataBits, Parity, StopBits, UartConfig};
