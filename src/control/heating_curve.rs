//! Weather-compensated heating curve.
//!
//! Both parameters are stored x10 so the supervisor can tune in tenths
//! without the firmware doing fractional math. The target computation
//! stays in `i32` and only narrows after the clamp.

use crate::app::ports::StoragePort;
use crate::config::{
    DEFAULT_CURVE_COEFFICIENT, DEFAULT_CURVE_PARALLEL_SHIFT, PARAM_ADDR_CURVE_COEFFICIENT_LOW,
    PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW, WATER_TEMP_MAX_C, WATER_TEMP_MIN_C,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatingCurve {
    /// Curve steepness, x10.
    pub coefficient: u16,
    /// Parallel shift of the whole curve, x10 degrees.
    pub parallel_shift: u16,
}

impl Default for HeatingCurve {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_CURVE_COEFFICIENT,
            parallel_shift: DEFAULT_CURVE_PARALLEL_SHIFT,
        }
    }
}

fn read_word(store: &mut impl StoragePort, low_addr: u16) -> u16 {
    u16::from_le_bytes([store.read_byte(low_addr), store.read_byte(low_addr + 1)])
}

fn write_word(store: &mut impl StoragePort, low_addr: u16, value: u16) {
    let [low, high] = value.to_le_bytes();
    store.write_byte(low_addr, low);
    store.write_byte(low_addr + 1, high);
}

impl HeatingCurve {
    /// Load the persisted curve, falling back to the defaults when the
    /// store has never been written (erased flash reads 0xFFFF).
    pub fn load(store: &mut impl StoragePort) -> Self {
        let coefficient = read_word(store, PARAM_ADDR_CURVE_COEFFICIENT_LOW);
        let parallel_shift = read_word(store, PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW);
        if coefficient == 0xFFFF && parallel_shift == 0xFFFF {
            return Self::default();
        }
        Self {
            coefficient,
            parallel_shift,
        }
    }

    pub fn persist(&self, store: &mut impl StoragePort) {
        write_word(store, PARAM_ADDR_CURVE_COEFFICIENT_LOW, self.coefficient);
        write_word(store, PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW, self.parallel_shift);
    }

    /// Target start-water temperature for a desired room temperature and
    /// the current outside temperature, clamped to the boiler's safe range.
    pub fn water_target(&self, desired_room: i8, outside: i8) -> i8 {
        let delta = i32::from(desired_room) - i32::from(outside);
        let target = (i32::from(self.coefficient) * delta + i32::from(self.parallel_shift)) / 10;
        target.clamp(i32::from(WATER_TEMP_MIN_C), i32::from(WATER_TEMP_MAX_C)) as i8
    }
}
