//! Firmware sequencer — the whole of the application logic.
//!
//! [`Sequencer`] owns the indicator level and serial link state and drives
//! them through the platform ports in two phases:
//!
//! ```text
//!  setup():     configure pin ─▶ open serial ─▶ wait ready ─▶ banner
//!  loop_once(): echo ─▶ HIGH ─▶ sleep ─▶ echo ─▶ LOW ─▶ sleep
//! ```
//!
//! Ports are injected at each call site, so the sequencer is testable
//! against mock adapters.

use core::convert::Infallible;

use log::{info, warn};

use crate::config::SequencerConfig;
use crate::error::{Error, Result};
use crate::pins;

use super::events::SequencerEvent;
use super::ports::{DelayPort, EventSink, Level, PinId, PinMode, PinPort, SerialPort};

/// Lines written once the host is ready, in order.
pub const BANNER: [&str; 5] = ["*****", "", "", "", "Hello from Arduino Firmware!"];

/// Written before each half of every loop iteration.
pub const ECHO_LINE: &str = "Echo from the Arduino Firmware Image.";

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Setup has not completed yet.
    Boot,
    /// Setup completed; the loop phase may run.
    Running,
}

/// State of the serial link as seen by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SerialLink {
    open: bool,
    baud: u32,
}

// ───────────────────────────────────────────────────────────────
// Sequencer
// ───────────────────────────────────────────────────────────────

pub struct Sequencer {
    config: SequencerConfig,
    pin: PinId,
    pin_level: Level,
    serial: SerialLink,
    phase: Phase,
    cycles: u64,
}

impl Sequencer {
    /// Sequencer for the board's built-in indicator LED.
    pub fn new(config: SequencerConfig) -> Self {
        Self::with_pin(config, pins::LED_BUILTIN_GPIO)
    }

    /// Sequencer driving an arbitrary indicator pin.
    pub fn with_pin(config: SequencerConfig, pin: PinId) -> Self {
        Self {
            config,
            pin,
            pin_level: Level::Low,
            serial: SerialLink::default(),
            phase: Phase::Boot,
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// One-time initialisation: pin, serial link, readiness gate, banner.
    ///
    /// With `ready_timeout_ms = None` this only returns once the host is
    /// ready.  With a timeout it returns [`Error::SerialNotReady`] and the
    /// sequencer stays in [`Phase::Boot`].  An invalid configuration is
    /// rejected with [`Error::Config`] before any port is touched.
    pub fn setup(
        &mut self,
        hw: &mut (impl PinPort + SerialPort + DelayPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.phase == Phase::Running {
            warn!("setup() called twice; ignoring");
            return Ok(());
        }
        self.config.validate()?;

        hw.configure_pin(self.pin, PinMode::Output);

        if !self.serial.open {
            hw.open_serial(self.config.baud_rate);
            self.serial = SerialLink {
                open: true,
                baud: self.config.baud_rate,
            };
            sink.emit(&SequencerEvent::SerialOpened {
                baud: self.config.baud_rate,
            });
        }

        let waited_ms = self.wait_serial_ready(hw)?;
        sink.emit(&SequencerEvent::SerialReady { waited_ms });

        for line in BANNER {
            hw.write_line(line);
        }
        sink.emit(&SequencerEvent::BannerSent {
            lines: BANNER.len(),
        });

        self.phase = Phase::Running;
        info!("Setup complete, entering loop phase");
        Ok(())
    }

    /// One loop iteration: a full HIGH-then-LOW indicator cycle.
    ///
    /// The pin is LOW on return, so consecutive calls form an unbroken
    /// square wave.
    pub fn loop_once(
        &mut self,
        hw: &mut (impl PinPort + SerialPort + DelayPort),
        sink: &mut impl EventSink,
    ) {
        if self.phase != Phase::Running {
            warn!("loop_once() before setup completed; skipping");
            return;
        }

        for level in [Level::High, Level::Low] {
            hw.write_line(ECHO_LINE);
            self.drive(hw, level);
            hw.sleep_ms(self.config.half_period_ms);
        }

        self.cycles += 1;
        sink.emit(&SequencerEvent::CycleCompleted { cycle: self.cycles });
    }

    /// Setup followed by the loop phase, forever.  Only returns on a setup
    /// error.
    pub fn run(
        &mut self,
        hw: &mut (impl PinPort + SerialPort + DelayPort),
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        self.setup(hw, sink)?;
        loop {
            self.loop_once(hw, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last level written to the indicator pin.
    pub fn pin_level(&self) -> Level {
        self.pin_level
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn is_serial_open(&self) -> bool {
        self.serial.open
    }

    /// Baud rate the link was opened at, or `None` before setup.
    pub fn baud_rate(&self) -> Option<u32> {
        self.serial.open.then_some(self.serial.baud)
    }

    /// Loop iterations completed since setup.
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn drive(&mut self, hw: &mut impl PinPort, level: Level) {
        debug_assert_eq!(level, self.pin_level.toggled(), "skipped indicator transition");
        hw.write_pin(self.pin, level);
        self.pin_level = level;
    }

    /// Poll until the host attaches.  Returns the time spent waiting.
    ///
    /// The last sleep is shortened so a timeout fires exactly at the limit.
    fn wait_serial_ready(&self, hw: &mut (impl SerialPort + DelayPort)) -> Result<u32> {
        let poll_ms = self.config.ready_poll_interval_ms;
        let mut waited_ms: u32 = 0;

        while !hw.serial_ready() {
            let step_ms = match self.config.ready_timeout_ms {
                Some(limit) if waited_ms >= limit => {
                    warn!("Serial link not ready after {} ms, giving up", waited_ms);
                    return Err(Error::SerialNotReady { waited_ms });
                }
                Some(limit) => poll_ms.min(limit - waited_ms),
                None => poll_ms,
            };
            hw.sleep_ms(step_ms);
            waited_ms = waited_ms.saturating_add(step_ms);
        }
        Ok(waited_ms)
    }
}
