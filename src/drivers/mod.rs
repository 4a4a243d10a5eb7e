//! Peripheral drivers for the indicator LED and the serial link.

pub mod indicator;
pub mod uart;
