//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing sequencer events to the `log` facade
//! (the ESP-IDF logger on target, which goes to the UART0 console).

use log::{debug, info};

use crate::app::events::SequencerEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`SequencerEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SequencerEvent) {
        match event {
            SequencerEvent::SerialOpened { baud } => {
                info!("SERIAL | opened at {} baud", baud);
            }
            SequencerEvent::SerialReady { waited_ms } => {
                info!("SERIAL | ready after {} ms", waited_ms);
            }
            SequencerEvent::BannerSent { lines } => {
                info!("BANNER | {} lines sent", lines);
            }
            // Once every 2 s; keep it out of the default log level.
            SequencerEvent::CycleCompleted { cycle } => {
                debug!("CYCLE | #{}", cycle);
            }
        }
    }
}
