//! Outbound sequencer events.
//!
//! The [`Sequencer`](super::sequencer::Sequencer) emits these through the
//! [`EventSink`](super::ports::EventSink) port for diagnostics.  They never
//! appear on the serial link itself.

/// Structured events emitted by the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The serial link was opened.
    SerialOpened { baud: u32 },

    /// The host side reported ready after `waited_ms` of polling.
    SerialReady { waited_ms: u32 },

    /// The boot banner was written.
    BannerSent { lines: usize },

    /// A full HIGH/LOW loop iteration finished (1-based count).
    CycleCompleted { cycle: u64 },
}
