//! GPIO / peripheral pin assignments for the demo board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Built-in indicator LED (active HIGH, off at power-on).
pub const LED_BUILTIN_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// UART (host terminal link)
// ---------------------------------------------------------------------------

/// UART1 is used so the link does not share UART0 with the IDF console.
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
