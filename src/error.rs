//! Unified error type for the firmware.
//!
//! Pin and serial writes are fire-and-forget at the sequencer boundary, so
//! only two variants ever reach the sequencer's caller: a readiness timeout
//! and a bad configuration.  The driver variants are produced inside the
//! adapters, logged there, and dropped.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial link never reported ready within the configured timeout.
    SerialNotReady { waited_ms: u32 },
    /// A GPIO driver call returned a non-OK status.
    Gpio { pin: i32, code: i32 },
    /// A UART driver call returned a non-OK status.
    Serial(i32),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SerialNotReady { waited_ms } => {
                write!(f, "serial link not ready after {waited_ms} ms")
            }
            Self::Gpio { pin, code } => write!(f, "GPIO{pin}: driver error (rc={code})"),
            Self::Serial(code) => write!(f, "serial: driver error (rc={code})"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
