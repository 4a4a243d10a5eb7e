//! Application core — pure sequencing logic, zero I/O.
//!
//! All interaction with the board happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod sequencer;
