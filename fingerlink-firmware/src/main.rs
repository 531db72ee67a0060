//! Fingerlink - Fingerprint Sensor Console Relay
//!
//! Main firmware binary for RP2040-based boards. A terminal on UART0 picks
//! commands from a text menu; they are sent to a fingerprint sensor module
//! on UART1 and the module's replies are streamed back to the terminal.
//!
//! ```text
//!  terminal ──UART0 RX──▶ input_task ──UART1 TX──▶ sensor
//!     ▲                       │
//!     │                   HANDSHAKE
//!     │                       ▼
//!     ├──── CONSOLE ◀──── menu_task
//!     │
//!     └──── CONSOLE ◀──── relay_task ◀──UART1 RX── sensor
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::channels::Console;
use crate::config::{load_config, uart_config};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static CONSOLE_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static CONSOLE_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static SENSOR_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static SENSOR_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

static CONSOLE: StaticCell<Console> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fingerlink firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Console UART: GPIO0 TX, GPIO1 RX
    let console_uart = Uart::new_blocking(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        uart_config(&config.console),
    );
    let console_uart = console_uart.into_buffered(
        Irqs,
        CONSOLE_TX_BUF.init([0u8; 256]),
        CONSOLE_RX_BUF.init([0u8; 64]),
    );
    let (console_tx, console_rx) = console_uart.split();

    info!("UART0 initialized for console");

    // Sensor UART: GPIO4 TX, GPIO5 RX
    let sensor_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, uart_config(&config.sensor));
    let sensor_uart = sensor_uart.into_buffered(
        Irqs,
        SENSOR_TX_BUF.init([0u8; 64]),
        SENSOR_RX_BUF.init([0u8; 256]),
    );
    let (sensor_tx, sensor_rx) = sensor_uart.split();

    info!("UART1 initialized for sensor");

    let console: &'static Console = CONSOLE.init(Console::new(console_tx));

    // User LED on once both lines are up
    let mut led = Output::new(p.PIN_25, Level::Low);
    led.set_high();

    // Spawn tasks
    spawner
        .spawn(tasks::relay_task(sensor_rx, console))
        .unwrap();
    spawner.spawn(tasks::menu_task(console)).unwrap();
    spawner
        .spawn(tasks::input_task(console_rx, console, sensor_tx))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
