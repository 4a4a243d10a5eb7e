//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements          | Connects to                  |
//! |------------|---------------------|------------------------------|
//! | `board`    | PinPort             | Indicator GPIO               |
//! |            | SerialPort          | UART1                        |
//! |            | DelayPort           | any `embedded_hal` delay     |
//! | `log_sink` | EventSink           | `log` facade                 |

pub mod board;
pub mod log_sink;
