//! UART serial link driver.
//!
//! - **`target_os = "espidf"`** — wraps an esp-idf-hal `UartDriver`
//!   created in `main()`.  Opening the link applies the baud rate.
//! - **`not(target_os = "espidf")`** — writes lines to stdout for host-side
//!   simulation.
//!
//! A UART has no attach handshake, so the link reports ready as soon as it
//! is open.

#[cfg(target_os = "espidf")]
use esp_idf_hal::{uart::UartDriver, units::Hertz};

use crate::error::{Error, Result};

/// Appended to every line.
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

pub struct SerialDriver {
    #[cfg(target_os = "espidf")]
    uart: UartDriver<'static>,
    baud: Option<u32>,
}

#[cfg(target_os = "espidf")]
impl SerialDriver {
    pub fn new(uart: UartDriver<'static>) -> Self {
        Self { uart, baud: None }
    }

    pub fn open(&mut self, baud: u32) -> Result<()> {
        self.uart
            .change_baudrate(Hertz(baud))
            .map_err(|e| Error::Serial(e.code()))?;
        self.baud = Some(baud);
        Ok(())
    }

    fn write_all(&mut self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let n = self.uart.write(bytes).map_err(|e| Error::Serial(e.code()))?;
            if n == 0 {
                return Err(Error::Serial(-1));
            }
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SerialDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialDriver {
    pub fn new() -> Self {
        Self { baud: None }
    }

    pub fn open(&mut self, baud: u32) -> Result<()> {
        log::info!("uart(sim): opened at {} baud", baud);
        self.baud = Some(baud);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        use std::io::Write;

        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|e| Error::Serial(e.raw_os_error().unwrap_or(-1)))
    }
}

impl SerialDriver {
    pub fn is_open(&self) -> bool {
        self.baud.is_some()
    }

    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    /// Write `text` plus [`LINE_TERMINATOR`].
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        if !self.is_open() {
            return Err(Error::Serial(-1));
        }
        self.write_all(text.as_bytes())?;
        self.write_all(LINE_TERMINATOR)
    }
}
