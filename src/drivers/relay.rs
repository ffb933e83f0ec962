//! Relay bank driver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the relay GPIOs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

/// Relay outputs, in GPIO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RelayId {
    ValveLeft = 0,
    ValveRight = 1,
    Burner = 2,
    Pump = 3,
}

pub const RELAY_COUNT: usize = 4;

impl RelayId {
    const fn gpio(self) -> i32 {
        match self {
            Self::ValveLeft => pins::RELAY_VALVE_LEFT_GPIO,
            Self::ValveRight => pins::RELAY_VALVE_RIGHT_GPIO,
            Self::Burner => pins::RELAY_BURNER_GPIO,
            Self::Pump => pins::RELAY_PUMP_GPIO,
        }
    }
}

/// Tracks commanded state and skips redundant GPIO writes, so the control
/// loop may re-command the same state every cycle.
pub struct RelayBank {
    states: [bool; RELAY_COUNT],
}

impl RelayBank {
    /// All relays released, matching the hw_init power-on levels.
    pub fn new() -> Self {
        Self {
            states: [false; RELAY_COUNT],
        }
    }

    pub fn set(&mut self, relay: RelayId, energized: bool) {
        if self.states[relay as usize] == energized {
            return;
        }
        hw_init::gpio_write(relay.gpio(), energized);
        self.states[relay as usize] = energized;
    }

    pub fn get(&self, relay: RelayId) -> bool {
        self.states[relay as usize]
    }
}

impl Default for RelayBank {
    fn default() -> Self {
        Self::new()
    }
}
