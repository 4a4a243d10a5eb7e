//! Sequencer timing and link parameters.
//!
//! Defaults reproduce the reference board behaviour: 9600 baud, a 1 ms
//! readiness poll with no timeout, and a 2 s blink period.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core sequencer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerConfig {
    // --- Serial link ---
    /// Baud rate the serial link is opened at
    pub baud_rate: u32,
    /// Interval between readiness polls during setup (milliseconds)
    pub ready_poll_interval_ms: u32,
    /// Give up waiting for the host after exactly this long. `None` waits
    /// forever.
    pub ready_timeout_ms: Option<u32>,

    // --- Indicator ---
    /// Time the indicator spends in each level per cycle (milliseconds)
    pub half_period_ms: u32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            ready_poll_interval_ms: 1,
            ready_timeout_ms: None,
            half_period_ms: 1000, // 2 s period, 50 % duty
        }
    }
}

impl SequencerConfig {
    /// Reject values that would stall or spin the sequencer.
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be > 0"));
        }
        if self.ready_poll_interval_ms == 0 {
            return Err(Error::Config("ready_poll_interval_ms must be > 0"));
        }
        if self.half_period_ms == 0 {
            return Err(Error::Config("half_period_ms must be > 0"));
        }
        Ok(())
    }

    /// Full blink period in milliseconds.
    pub fn period_ms(&self) -> u32 {
        self.half_period_ms.saturating_mul(2)
    }
}
