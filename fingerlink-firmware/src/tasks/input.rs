//! Console input task
//!
//! Reads keystrokes, sends commands to the sensor and drives the handshake.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};

use fingerlink_core::{InputError, InputTask, Outcome};

use crate::channels::{Console, HANDSHAKE};

/// Input task - console RX in, sensor TX out
#[embassy_executor::task]
pub async fn input_task(
    rx: BufferedUartRx,
    console: &'static Console,
    sensor_tx: BufferedUartTx,
) {
    info!("Input task started");

    let mut input = InputTask::new(rx, console, sensor_tx, &HANDSHAKE);

    loop {
        match input.step().await {
            Ok(Outcome::Dispatched(command)) => {
                debug!("Sent {} to sensor", command.name());
            }
            Ok(Outcome::Ignored(byte)) => {
                debug!("Ignored key {=u8:#x}", byte);
            }
            Ok(Outcome::Acknowledged) => {
                trace!("Cycle acknowledged");
            }
            Err(InputError::Handshake(e)) => {
                warn!("Handshake violation: {:?}", e);
            }
            Err(e) => {
                warn!("Input error: {:?}", e);
            }
        }
    }
}
