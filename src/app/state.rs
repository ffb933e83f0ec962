//! State shared between the control loop and protocol dispatch.
//!
//! Single-byte values are plain atomics. The heating-curve pair is two
//! bytes wide per field and is read as a unit, so it sits behind a
//! critical section instead.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, AtomicI8, Ordering};

use critical_section::Mutex;

use crate::control::heating_curve::HeatingCurve;

pub struct SharedState {
    /// Boiler running (regulating) or idle (everything off).
    running: AtomicBool,
    /// Night setback active.
    night_mode: AtomicBool,
    day_temperature: AtomicI8,
    night_temperature: AtomicI8,
    /// Last computed target start-water temperature.
    target_water_temperature: AtomicI8,
    curve: Mutex<Cell<HeatingCurve>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            // The boiler regulates from power-on without waiting for a
            // supervisor command.
            running: AtomicBool::new(true),
            night_mode: AtomicBool::new(false),
            day_temperature: AtomicI8::new(0),
            night_temperature: AtomicI8::new(0),
            target_water_temperature: AtomicI8::new(0),
            curve: Mutex::new(Cell::new(HeatingCurve::default())),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Relaxed);
    }

    pub fn night_mode(&self) -> bool {
        self.night_mode.load(Ordering::Relaxed)
    }

    pub fn set_night_mode(&self, night: bool) {
        self.night_mode.store(night, Ordering::Relaxed);
    }

    pub fn day_temperature(&self) -> i8 {
        self.day_temperature.load(Ordering::Relaxed)
    }

    pub fn set_day_temperature(&self, celsius: i8) {
        self.day_temperature.store(celsius, Ordering::Relaxed);
    }

    pub fn night_temperature(&self) -> i8 {
        self.night_temperature.load(Ordering::Relaxed)
    }

    pub fn set_night_temperature(&self, celsius: i8) {
        self.night_temperature.store(celsius, Ordering::Relaxed);
    }

    /// Desired room temperature for the active day/night mode.
    pub fn desired_room_temperature(&self) -> i8 {
        if self.night_mode() {
            self.night_temperature()
        } else {
            self.day_temperature()
        }
    }

    pub fn target_water_temperature(&self) -> i8 {
        self.target_water_temperature.load(Ordering::Relaxed)
    }

    pub fn set_target_water_temperature(&self, celsius: i8) {
        self.target_water_temperature.store(celsius, Ordering::Relaxed);
    }

    pub fn curve(&self) -> HeatingCurve {
        critical_section::with(|cs| self.curve.borrow(cs).get())
    }

    pub fn set_curve(&self, curve: HeatingCurve) {
        critical_section::with(|cs| self.curve.borrow(cs).set(curve));
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
