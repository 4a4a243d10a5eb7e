//! Indicator LED driver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: configures and drives the GPIO through raw `gpio_*` sys calls.
//! On host/test: tracks direction and level in-memory only.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::app::ports::{Level, PinMode};
use crate::error::Result;

pub struct IndicatorPin {
    gpio: i32,
    mode: Option<PinMode>,
    level: Level,
}

impl IndicatorPin {
    /// Driver for `gpio`.  The pin is left untouched until [`configure`].
    ///
    /// [`configure`]: Self::configure
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            mode: None,
            level: Level::Low,
        }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    pub fn mode(&self) -> Option<PinMode> {
        self.mode
    }

    /// Last level successfully written.
    pub fn level(&self) -> Level {
        self.level
    }

    #[cfg(target_os = "espidf")]
    pub fn configure(&mut self, mode: PinMode) -> Result<()> {
        let gpio_mode = match mode {
            PinMode::Input => gpio_mode_t_GPIO_MODE_INPUT,
            PinMode::Output => gpio_mode_t_GPIO_MODE_OUTPUT,
        };
        // SAFETY: plain register configuration on a pin this driver owns.
        check(self.gpio, unsafe { gpio_reset_pin(self.gpio) })?;
        check(self.gpio, unsafe { gpio_set_direction(self.gpio, gpio_mode) })?;
        self.mode = Some(mode);
        self.level = Level::Low;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn configure(&mut self, mode: PinMode) -> Result<()> {
        log::debug!("indicator(sim): GPIO{} -> {:?}", self.gpio, mode);
        self.mode = Some(mode);
        self.level = Level::Low;
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    pub fn set_level(&mut self, level: Level) -> Result<()> {
        // SAFETY: see `configure`.
        check(self.gpio, unsafe { gpio_set_level(self.gpio, u32::from(level.is_high())) })?;
        self.level = level;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn set_level(&mut self, level: Level) -> Result<()> {
        self.level = level;
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
fn check(pin: i32, ret: esp_err_t) -> Result<()> {
    if ret == ESP_OK as i32 {
        Ok(())
    } else {
        Err(crate::error::Error::Gpio { pin, code: ret })
    }
}
