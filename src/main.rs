//! hellofw — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  BoardAdapter (Pin + Serial + Delay)   LogEventSink  │
//! │  ─────────────── Port Trait Boundary ──────────────  │
//! │  Sequencer: setup() once, then loop_once() forever   │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{UartDriver, config::Config as UartConfig};
use esp_idf_hal::units::Hertz;
use log::info;

use hellofw::adapters::board::BoardAdapter;
use hellofw::adapters::log_sink::LogEventSink;
use hellofw::app::sequencer::Sequencer;
use hellofw::config::SequencerConfig;
use hellofw::drivers::indicator::IndicatorPin;
use hellofw::drivers::uart::SerialDriver;
use hellofw::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("hellofw v{}", env!("CARGO_PKG_VERSION"));

    let config = SequencerConfig::default();
    config.validate()?;

    // ── 2. Peripherals ────────────────────────────────────────
    // UART1 pins must match pins::UART_TX_GPIO / pins::UART_RX_GPIO.
    let peripherals = Peripherals::take()?;
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        Option::<gpio::Gpio0>::None,
        Option::<gpio::Gpio1>::None,
        &UartConfig::default().baudrate(Hertz(config.baud_rate)),
    )?;

    let mut hw = BoardAdapter::new(
        IndicatorPin::new(pins::LED_BUILTIN_GPIO),
        SerialDriver::new(uart),
        FreeRtos,
    );
    let mut sink = LogEventSink::new();

    // ── 3. Setup, then loop forever ───────────────────────────
    let mut sequencer = Sequencer::new(config);
    match sequencer.run(&mut hw, &mut sink)? {}
}
