//! System configuration parameters.
//!
//! All tunable constants of the boiler controller in one place: control
//! timing, hysteresis band, heating-curve clamp, valve travel time, serial
//! parameters and the non-volatile parameter layout.

/// Firmware version byte reported by `GET_FIRMWARE_VERSION`.
pub const FIRMWARE_VERSION: u8 = 1;

// --- Analog sampling ---

/// Moving-average window per ADC channel (number of retained samples).
pub const SAMPLE_WINDOW: usize = 5;

/// Full-scale raw count of a channel sample (10-bit converter).
pub const ADC_MAX_COUNTS: u16 = 1023;

// --- Burner control ---

/// Burner turns ON when start water drops to `target - HYSTERESIS_LOW_C`.
pub const HYSTERESIS_LOW_C: i8 = 5;
/// Burner turns OFF when start water rises to `target + HYSTERESIS_HIGH_C`.
pub const HYSTERESIS_HIGH_C: i8 = 2;

// --- Heating curve ---

/// Lower clamp of the target start-water temperature (°C).
pub const WATER_TEMP_MIN_C: i8 = 10;
/// Upper clamp of the target start-water temperature (°C).
pub const WATER_TEMP_MAX_C: i8 = 70;

/// Heating-curve coefficient (x10) used when the parameter store is blank.
pub const DEFAULT_CURVE_COEFFICIENT: u16 = 14;
/// Heating-curve parallel shift (x10 degrees) used when the parameter store
/// is blank.
pub const DEFAULT_CURVE_PARALLEL_SHIFT: u16 = 150;

// --- Trimmers ---

/// Absolute temperature the day trimmer's zero offset maps to (°C).
pub const TRIMMER_REFERENCE_CELSIUS: i8 = 20;

// --- Mixing valve ---

/// Seconds for an end-to-end (LEFT to RIGHT) valve traversal.
pub const VALVE_MAX_MOVING_TIME_SECS: u16 = 120;

// --- Timing ---

/// Control loop period (milliseconds). Regulation dynamics are slow, one
/// cycle per second is plenty.
pub const CONTROL_PERIOD_MS: u32 = 1000;

/// How often the main loop polls the serial link for received bytes.
pub const LINK_POLL_PERIOD_MS: u32 = 50;

/// How long link bring-up may block at boot before giving up.
pub const LINK_BRING_UP_TIMEOUT_MS: u32 = 5_000;

// --- Serial link ---

/// Serial link speed (bit/s), 8 data bits, no parity, 1 stop bit.
pub const SERIAL_BAUD_RATE: u32 = 115_200;

// --- Non-volatile parameter layout ---
//
// Four bytes at fixed addresses: heating-curve coefficient (little endian)
// then parallel shift (little endian).

pub const PARAM_ADDR_CURVE_COEFFICIENT_LOW: u16 = 0;
pub const PARAM_ADDR_CURVE_COEFFICIENT_HIGH: u16 = 1;
pub const PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW: u16 = 2;
pub const PARAM_ADDR_CURVE_PARALLEL_SHIFT_HIGH: u16 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hysteresis_band_is_nonempty() {
        assert!(HYSTERESIS_LOW_C > 0);
        assert!(HYSTERESIS_HIGH_C > 0);
    }

    #[test]
    fn water_clamp_is_ordered() {
        assert!(WATER_TEMP_MIN_C < WATER_TEMP_MAX_C);
    }

    #[test]
    fn sample_window_is_usable() {
        assert!(SAMPLE_WINDOW > 0);
    }

    #[test]
    fn valve_half_travel_is_nonzero() {
        assert!(VALVE_MAX_MOVING_TIME_SECS / 2 > 0);
    }

    #[test]
    fn param_layout_is_contiguous() {
        assert_eq!(PARAM_ADDR_CURVE_COEFFICIENT_HIGH, PARAM_ADDR_CURVE_COEFFICIENT_LOW + 1);
        assert_eq!(PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW, PARAM_ADDR_CURVE_COEFFICIENT_HIGH + 1);
        assert_eq!(PARAM_ADDR_CURVE_PARALLEL_SHIFT_HIGH, PARAM_ADDR_CURVE_PARALLEL_SHIFT_LOW + 1);
    }

    #[test]
    fn timing_ratios_make_sense() {
        assert!(LINK_POLL_PERIOD_MS < CONTROL_PERIOD_MS);
    }
}
