//! hellofw firmware library.
//!
//! Exposes the sequencer and its platform adapters for integration testing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; host builds get in-memory simulation drivers.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
