//! Sensor relay task
//!
//! Forwards sensor replies to the console as they arrive.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;

use fingerlink_core::RelayTask;

use crate::channels::Console;

/// Relay task - sensor RX in, console TX out
#[embassy_executor::task]
pub async fn relay_task(sensor_rx: BufferedUartRx, console: &'static Console) {
    info!("Relay task started");

    let mut relay = RelayTask::new(sensor_rx, console);

    loop {
        match relay.step().await {
            Ok(byte) => {
                let total = relay.relayed();
                trace!("Relayed {=u8:#x} ({} total)", byte, total);
            }
            Err(e) => warn!("Relay error: {:?}", e),
        }
    }
}
