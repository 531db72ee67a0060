//! Console menus and the menu task
//!
//! The main menu is redrawn once per completed command cycle. The slot
//! sub-menu is written by the input task when a command needs a slot.

use core::fmt::Write as _;

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::String;

use fingerlink_hal::ByteTx;
use fingerlink_protocol::{Selector, Slot};

use crate::console::SharedConsole;
use crate::handshake::Handshake;

/// Main menu, one numbered line per selector
pub const MAIN_MENU: &str = "\n\
1. Check number of registered fingerprints\n\
2. Register one fingerprint\n\
3. Compare fingerprint\n\
4. Fingerprint image information\n\
5. Scan fingerprint image\n\
6. Clear one fingerprint\n";

/// Maximum length of one slot sub-menu line
const SLOT_LINE_LEN: usize = 16;

/// Heading printed above the slot list
fn slot_heading(selector: Selector) -> &'static str {
    match selector {
        Selector::Clear => "\nSelect the slot to clear:\n",
        _ => "\nSelect the slot to register:\n",
    }
}

/// Format one slot sub-menu line (`a. Slot 0`)
pub fn slot_line(slot: Slot) -> String<SLOT_LINE_LEN> {
    let mut line = String::new();
    // Longest line is "x. Slot 23\n", well within capacity
    let _ = writeln!(line, "{}. Slot {}", slot.letter() as char, slot.index());
    line
}

/// Write the slot sub-menu for `selector` to the console
///
/// The console stays locked for the whole list so relayed sensor bytes
/// cannot split it.
pub async fn write_slot_menu<M: RawMutex, T: ByteTx>(
    console: &SharedConsole<M, T>,
    selector: Selector,
) -> Result<(), T::Error> {
    let mut tx = console.lock().await;
    tx.write_bytes(slot_heading(selector).as_bytes()).await?;
    for slot in Slot::all() {
        tx.write_bytes(slot_line(slot).as_bytes()).await?;
    }
    Ok(())
}

/// Errors from one menu iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Writing the menu to the console failed
    ConsoleWrite,
}

/// Menu presentation loop
pub struct MenuTask<'a, M: RawMutex, Tx> {
    console: &'a SharedConsole<M, Tx>,
    handshake: &'a Handshake<M>,
    redraws: u32,
}

impl<'a, M, Tx> MenuTask<'a, M, Tx>
where
    M: RawMutex,
    Tx: ByteTx,
{
    /// Create a menu task drawing to `console`
    pub fn new(console: &'a SharedConsole<M, Tx>, handshake: &'a Handshake<M>) -> Self {
        Self {
            console,
            handshake,
            redraws: 0,
        }
    }

    /// Number of successful menu draws
    pub fn redraws(&self) -> u32 {
        self.redraws
    }

    /// Write the main menu to the console
    pub async fn draw(&mut self) -> Result<(), MenuError> {
        crate::console::write_console(self.console, MAIN_MENU.as_bytes())
            .await
            .map_err(|_| MenuError::ConsoleWrite)?;
        self.redraws = self.redraws.wrapping_add(1);
        Ok(())
    }

    /// Draw the menu, then wait for the next completed cycle
    ///
    /// The wait happens even if the draw failed, so a broken console does
    /// not turn the loop into a busy spin. The draw result is returned once
    /// the cycle has been consumed.
    pub async fn step(&mut self) -> Result<(), MenuError> {
        let drawn = self.draw().await;
        self.handshake.wait_cycle().await;
        drawn
    }
}
