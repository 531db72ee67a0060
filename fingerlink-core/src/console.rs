//! Shared console transmitter
//!
//! The console TX line has three writers: the menu task, the relay task
//! and the input task (slot prompt). Each write holds the lock for its whole
//! buffer, so writes interleave only at buffer boundaries.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use fingerlink_hal::ByteTx;

/// Console transmitter shared between tasks
pub type SharedConsole<M, T> = Mutex<M, T>;

/// Write a buffer to the shared console
pub async fn write_console<M: RawMutex, T: ByteTx>(
    console: &SharedConsole<M, T>,
    data: &[u8],
) -> Result<(), T::Error> {
    let mut tx = console.lock().await;
    tx.write_bytes(data).await
}
