//! Board adapter — bridges the peripheral drivers to the sequencer ports.
//!
//! Owns the indicator and UART drivers plus any embedded-hal delay
//! provider, exposing them through [`PinPort`], [`SerialPort`] and
//! [`DelayPort`].  Driver faults are logged here and go no further: the
//! sequencer treats writes as fire-and-forget.

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::app::ports::{DelayPort, Level, PinId, PinMode, PinPort, SerialPort};
use crate::drivers::indicator::IndicatorPin;
use crate::drivers::uart::SerialDriver;

/// Concrete adapter that combines the board peripherals behind port traits.
pub struct BoardAdapter<D> {
    led: IndicatorPin,
    serial: SerialDriver,
    delay: D,
}

impl<D: DelayNs> BoardAdapter<D> {
    pub fn new(led: IndicatorPin, serial: SerialDriver, delay: D) -> Self {
        Self { led, serial, delay }
    }

    pub fn led(&self) -> &IndicatorPin {
        &self.led
    }

    pub fn serial(&self) -> &SerialDriver {
        &self.serial
    }

    fn owns(&self, pin: PinId) -> bool {
        if pin == self.led.gpio() {
            true
        } else {
            warn!("board: GPIO{} is not wired to this adapter", pin);
            false
        }
    }
}

// ── PinPort implementation ────────────────────────────────────

impl<D: DelayNs> PinPort for BoardAdapter<D> {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        if !self.owns(pin) {
            return;
        }
        if let Err(e) = self.led.configure(mode) {
            warn!("board: configure failed: {}", e);
        }
    }

    fn write_pin(&mut self, pin: PinId, level: Level) {
        if !self.owns(pin) {
            return;
        }
        if let Err(e) = self.led.set_level(level) {
            warn!("board: write failed: {}", e);
        }
    }
}

// ── SerialPort implementation ─────────────────────────────────

impl<D: DelayNs> SerialPort for BoardAdapter<D> {
    fn open_serial(&mut self, baud: u32) {
        if let Err(e) = self.serial.open(baud) {
            warn!("board: serial open failed: {}", e);
        }
    }

    fn serial_ready(&mut self) -> bool {
        self.serial.is_open()
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = self.serial.write_line(text) {
            warn!("board: serial write dropped: {}", e);
        }
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl<D: DelayNs> DelayPort for BoardAdapter<D> {
    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
