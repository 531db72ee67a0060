//! Menu task

use defmt::*;

use fingerlink_core::MenuTask;

use crate::channels::{Console, HANDSHAKE};

/// Menu task - redraws the main menu once per completed cycle
#[embassy_executor::task]
pub async fn menu_task(console: &'static Console) {
    info!("Menu task started");

    let mut menu = MenuTask::new(console, &HANDSHAKE);

    loop {
        match menu.step().await {
            Ok(()) => trace!("Cycle complete, {} redraws", menu.redraws()),
            Err(e) => warn!("Menu draw failed: {:?}", e),
        }
    }
}
