//! Gas-burner hysteresis control.

use crate::app::ports::RelayPort;
use crate::config::{HYSTERESIS_HIGH_C, HYSTERESIS_LOW_C};
use crate::drivers::relay::RelayId;

/// Two-threshold hysteresis around the target start-water temperature.
/// Inside the band the relay keeps its previous state.
pub struct BurnerControl;

impl BurnerControl {
    /// One regulation step. Comparisons widen to `i16` so a target near the
    /// `i8` limits cannot wrap when the band is applied.
    pub fn update(hw: &mut impl RelayPort, start_water: i8, target: i8) {
        let start_water = i16::from(start_water);
        let target = i16::from(target);

        if start_water <= target - i16::from(HYSTERESIS_LOW_C) {
            hw.set_relay(RelayId::Burner, true);
        } else if start_water >= target + i16::from(HYSTERESIS_HIGH_C) {
            hw.set_relay(RelayId::Burner, false);
        }
    }

    /// Unconditional shutdown, used when the boiler goes idle.
    pub fn force_off(hw: &mut impl RelayPort) {
        hw.set_relay(RelayId::Burner, false);
    }
}
