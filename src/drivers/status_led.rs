//! Status LED driver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LED GPIOs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

/// Front-panel indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedId {
    /// Heartbeat, toggled once per control cycle.
    Status = 0,
    /// Latched at boot when link bring-up fails.
    NetworkError = 1,
    /// Lit while the boiler is idle.
    BoilerIdle = 2,
    /// Lit while the mixing valve is travelling.
    ValveMoving = 3,
}

pub const LED_COUNT: usize = 4;

impl LedId {
    const fn gpio(self) -> i32 {
        match self {
            Self::Status => pins::LED_STATUS_GPIO,
            Self::NetworkError => pins::LED_NETWORK_ERROR_GPIO,
            Self::BoilerIdle => pins::LED_BOILER_IDLE_GPIO,
            Self::ValveMoving => pins::LED_VALVE_MOVING_GPIO,
        }
    }
}

pub struct LedBank {
    states: [bool; LED_COUNT],
}

impl LedBank {
    pub fn new() -> Self {
        Self {
            states: [false; LED_COUNT],
        }
    }

    pub fn set(&mut self, led: LedId, on: bool) {
        if self.states[led as usize] == on {
            return;
        }
        hw_init::gpio_write(led.gpio(), on);
        self.states[led as usize] = on;
    }

    pub fn toggle(&mut self, led: LedId) {
        let next = !self.states[led as usize];
        self.set(led, next);
    }

    pub fn get(&self, led: LedId) -> bool {
        self.states[led as usize]
    }
}

impl Default for LedBank {
    fn default() -> Self {
        Self::new()
    }
}
