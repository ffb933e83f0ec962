//! Three-position motorised mixing valve.
//!
//! The valve has no position feedback. Movement is timed: energise one
//! direction winding, count down seconds, then de-energise and declare the
//! target reached. LEFT routes water back to the burner only, RIGHT feeds
//! the radiators, CENTER mixes.

use crate::app::ports::{LedPort, RelayPort};
use crate::config::VALVE_MAX_MOVING_TIME_SECS;
use crate::drivers::relay::RelayId;
use crate::drivers::status_led::LedId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValvePosition {
    Left = 0,
    Center = 1,
    Right = 2,
}

impl ValvePosition {
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Left),
            1 => Some(Self::Center),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

pub struct MixingValve {
    /// Position committed when the last movement finished. Stale while a
    /// movement is in progress: readers see the PREVIOUS position until the
    /// countdown reaches zero.
    current: ValvePosition,
    target: ValvePosition,
    /// Seconds left before the direction relays are released.
    remaining_secs: u16,
    /// Full end-to-end travel time. Movements involving CENTER take half.
    max_moving_time_secs: u16,
}

impl MixingValve {
    /// Idle-mode shutdown parks the valve LEFT, so that is the assumed
    /// power-on position.
    pub fn new() -> Self {
        Self {
            current: ValvePosition::Left,
            target: ValvePosition::Left,
            remaining_secs: 0,
            max_moving_time_secs: VALVE_MAX_MOVING_TIME_SECS,
        }
    }

    /// Last committed position (stale while moving).
    pub fn position(&self) -> ValvePosition {
        self.current
    }

    pub fn is_moving(&self) -> bool {
        self.remaining_secs > 0
    }

    pub fn max_moving_time(&self) -> u16 {
        self.max_moving_time_secs
    }

    /// Recalibrate the end-to-end travel time. Takes effect on the next
    /// movement, an in-flight countdown is left alone.
    pub fn set_max_moving_time(&mut self, secs: u16) {
        self.max_moving_time_secs = secs;
    }

    /// Start moving toward `target`. A request for the position already
    /// targeted (reached or still in flight) is a no-op, so the control
    /// loop may call this every cycle.
    pub fn set_position(
        &mut self,
        hw: &mut (impl RelayPort + LedPort),
        target: ValvePosition,
    ) {
        if target == self.target {
            return;
        }

        let half_travel = self.max_moving_time_secs / 2;
        match target {
            ValvePosition::Left => {
                hw.set_relay(RelayId::ValveLeft, true);
                hw.set_relay(RelayId::ValveRight, false);
                self.remaining_secs = if self.current == ValvePosition::Center {
                    half_travel
                } else {
                    self.max_moving_time_secs
                };
            }
            ValvePosition::Center => {
                if self.current == ValvePosition::Left {
                    hw.set_relay(RelayId::ValveLeft, false);
                    hw.set_relay(RelayId::ValveRight, true);
                } else {
                    hw.set_relay(RelayId::ValveLeft, true);
                    hw.set_relay(RelayId::ValveRight, false);
                }
                self.remaining_secs = half_travel;
            }
            ValvePosition::Right => {
                hw.set_relay(RelayId::ValveLeft, false);
                hw.set_relay(RelayId::ValveRight, true);
                self.remaining_secs = if self.current == ValvePosition::Center {
                    half_travel
                } else {
                    self.max_moving_time_secs
                };
            }
        }
        self.target = target;

        hw.set_led(LedId::ValveMoving, true);
    }

    /// One-second tick. Decrements the countdown and, on reaching zero,
    /// releases the relays and commits the target position.
    pub fn task(&mut self, hw: &mut (impl RelayPort + LedPort)) {
        if self.remaining_secs == 0 {
            return;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            hw.set_relay(RelayId::ValveLeft, false);
            hw.set_relay(RelayId::ValveRight, false);
            self.current = self.target;
            hw.set_led(LedId::ValveMoving, false);
        }
    }
}

impl Default for MixingValve {
    fn default() -> Self {
        Self::new()
    }
}
