//! Mock board for integration tests.
//!
//! Records every port call against a simulated millisecond clock so tests
//! can assert on ordering and timing without real GPIO, UART or timers.

use hellofw::app::events::SequencerEvent;
use hellofw::app::ports::{DelayPort, EventSink, Level, PinId, PinMode, PinPort, SerialPort};

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ConfigurePin { pin: PinId, mode: PinMode },
    WritePin { level: Level, at_ms: u64 },
    OpenSerial { baud: u32 },
    Line(String),
    Sleep(u32),
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub calls: Vec<Call>,
    /// Simulated time, advanced only by `sleep_ms`.
    pub now_ms: u64,
    /// Number of readiness polls that report "not ready" before the host
    /// attaches.  `None` means the host never attaches.
    pub ready_after_polls: Option<u32>,
    pub polls: u32,
    serial_open: bool,
}

#[allow(dead_code)]
impl MockBoard {
    /// Host terminal already attached at power-on.
    pub fn new() -> Self {
        Self::attaching_after(0)
    }

    pub fn attaching_after(polls: u32) -> Self {
        Self {
            calls: Vec::new(),
            now_ms: 0,
            ready_after_polls: Some(polls),
            polls: 0,
            serial_open: false,
        }
    }

    pub fn never_attaching() -> Self {
        Self {
            ready_after_polls: None,
            ..Self::new()
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn pin_writes(&self) -> Vec<(u64, Level)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::WritePin { level, at_ms } => Some((*at_ms, *level)),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PinPort for MockBoard {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        self.calls.push(Call::ConfigurePin { pin, mode });
    }

    fn write_pin(&mut self, _pin: PinId, level: Level) {
        self.calls.push(Call::WritePin {
            level,
            at_ms: self.now_ms,
        });
    }
}

impl SerialPort for MockBoard {
    fn open_serial(&mut self, baud: u32) {
        self.serial_open = true;
        self.calls.push(Call::OpenSerial { baud });
    }

    fn serial_ready(&mut self) -> bool {
        let ready = self.serial_open
            && self
                .ready_after_polls
                .is_some_and(|after| self.polls >= after);
        self.polls += 1;
        ready
    }

    fn write_line(&mut self, text: &str) {
        self.calls.push(Call::Line(text.to_owned()));
    }
}

impl DelayPort for MockBoard {
    fn sleep_ms(&mut self, ms: u32) {
        self.now_ms += u64::from(ms);
        self.calls.push(Call::Sleep(ms));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<SequencerEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &SequencerEvent) {
        self.events.push(event.clone());
    }
}
