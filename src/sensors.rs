//! Raw-count to temperature conversion and trimmer change detection.
//!
//! All calibrations are linear and evaluated in x1000 fixed point so the
//! firmware never touches floating point. Constants come from the board's
//! thermistor divider and trimmer pot characterisation.

use crate::app::state::SharedState;
use crate::config::TRIMMER_REFERENCE_CELSIUS;
use crate::sampler::{AnalogSampler, ChannelId};

/// Reported when a sensor is not fitted on this board revision.
pub const TEMPERATURE_UNKNOWN: i8 = -100;

/// Temperature sensors addressable over the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorId {
    Outside = 0,
    RadiatorStart = 1,
    RadiatorReturn = 2,
}

impl SensorId {
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Outside),
            1 => Some(Self::RadiatorStart),
            2 => Some(Self::RadiatorReturn),
            _ => None,
        }
    }
}

/// y = (slope * raw + offset) / 1000, truncated toward zero like the
/// integer division it is.
const fn linear_x1000(raw: u16, slope: i32, offset: i32) -> i8 {
    ((slope * raw as i32 + offset) / 1000) as i8
}

/// Outside thermistor calibration.
pub fn outside_celsius(raw: u16) -> i8 {
    linear_x1000(raw, -652, 326_440)
}

/// Radiator start-water thermistor calibration.
pub fn radiator_start_celsius(raw: u16) -> i8 {
    linear_x1000(raw, -857, 401_375)
}

/// Day trimmer: an offset in degrees around the reference room temperature.
pub fn day_trimmer_celsius(raw: u16) -> i8 {
    linear_x1000(raw, 70, -23_579).wrapping_add(TRIMMER_REFERENCE_CELSIUS)
}

/// Night trimmer: a setback subtracted from the day temperature.
pub fn night_trimmer_celsius(day_celsius: i8, raw: u16) -> i8 {
    day_celsius.wrapping_sub(linear_x1000(raw, 38, -1_164))
}

/// Converts the sampler's published means into temperatures and watches the
/// trimmer pots for physical movement.
///
/// A trimmer only overrides the stored desired temperature when its reading
/// changes, so the last physical turn and the last remote command both win
/// until the other side acts again.
pub struct SensorBank {
    prev_day_trimmer: i8,
    prev_night_trimmer: i8,
}

impl SensorBank {
    /// Seed the change detectors from the current trimmer readings and push
    /// those readings as the initial desired temperatures.
    pub fn new(sampler: &AnalogSampler, shared: &SharedState) -> Self {
        let day = day_trimmer_celsius(sampler.value(ChannelId::DayTrimmer));
        let night = night_trimmer_celsius(day, sampler.value(ChannelId::NightTrimmer));
        shared.set_day_temperature(day);
        shared.set_night_temperature(night);
        Self {
            prev_day_trimmer: day,
            prev_night_trimmer: night,
        }
    }

    /// Current temperature of a sensor, from the published sampler means.
    pub fn temperature(&self, sampler: &AnalogSampler, sensor: SensorId) -> i8 {
        match sensor {
            SensorId::Outside => outside_celsius(sampler.value(ChannelId::OutsideThermistor)),
            SensorId::RadiatorStart => {
                radiator_start_celsius(sampler.value(ChannelId::RadiatorStartThermistor))
            }
            // Not fitted on this board revision.
            SensorId::RadiatorReturn => TEMPERATURE_UNKNOWN,
        }
    }

    /// Re-read both trimmers and apply any physical movement to the desired
    /// temperatures. Called once per control cycle.
    pub fn poll_trimmers(&mut self, sampler: &AnalogSampler, shared: &SharedState) {
        let day = day_trimmer_celsius(sampler.value(ChannelId::DayTrimmer));
        if day != self.prev_day_trimmer {
            self.prev_day_trimmer = day;
            shared.set_day_temperature(day);
        }

        let night = night_trimmer_celsius(day, sampler.value(ChannelId::NightTrimmer));
        if night != self.prev_night_trimmer {
            self.prev_night_trimmer = night;
            shared.set_night_temperature(night);
        }
    }
}
