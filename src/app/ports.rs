//! Port traits — the boundary between the sequencer and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sequencer (domain)
//! ```
//!
//! Platform adapters (GPIO, UART, delay) implement these traits.  The
//! [`Sequencer`](super::sequencer::Sequencer) consumes them via generics, so
//! the sequencing logic never touches hardware directly.
//!
//! Every operation is infallible at this boundary: writes are fire-and-forget
//! and adapters log driver faults themselves.

/// GPIO number as used by the platform (see [`crate::pins`]).
pub type PinId = i32;

/// Digital pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Digital output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// The opposite level.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

// ───────────────────────────────────────────────────────────────
// Pin port (domain → GPIO)
// ───────────────────────────────────────────────────────────────

pub trait PinPort {
    /// Set the direction of `pin`.
    fn configure_pin(&mut self, pin: PinId, mode: PinMode);

    /// Drive `pin` to `level`.  The pin must already be an output.
    fn write_pin(&mut self, pin: PinId, level: Level);
}

// ───────────────────────────────────────────────────────────────
// Serial port (domain ↔ host terminal)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text link to the host terminal.
pub trait SerialPort {
    /// Open the link at `baud`.  Called once; the link is never closed.
    fn open_serial(&mut self, baud: u32);

    /// Whether the host side can receive data yet.
    fn serial_ready(&mut self) -> bool;

    /// Write `text` followed by a line terminator.  No acknowledgement.
    fn write_line(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Delay port (domain → timer)
// ───────────────────────────────────────────────────────────────

pub trait DelayPort {
    /// Block the calling thread for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

/// Receives structured [`SequencerEvent`](super::events::SequencerEvent)s.
/// Adapters decide where they go (log facade, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::SequencerEvent);
}
