//! Shared task state
//!
//! The handshake lives in a plain static. The console mutex wraps a UART
//! half that only exists after peripheral init, so `main` places it in a
//! `StaticCell` instead.

use embassy_rp::uart::BufferedUartTx;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use fingerlink_core::{Handshake, SharedConsole};

/// Console transmitter shared by the menu, relay and input tasks
pub type Console = SharedConsole<CriticalSectionRawMutex, BufferedUartTx>;

/// Command cycle rendezvous between the input task and the menu task
pub static HANDSHAKE: Handshake<CriticalSectionRawMutex> = Handshake::new();
