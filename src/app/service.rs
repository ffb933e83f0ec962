//! Top-level controller: owns the sampler, sensor bank, regulation state
//! and mixing valve, and runs one regulation cycle per second.

use crate::app::ports::{AdcPort, LedPort, RelayPort, StoragePort};
use crate::app::state::SharedState;
use crate::control::{BurnerControl, HeatingCurve};
use crate::drivers::relay::RelayId;
use crate::drivers::status_led::LedId;
use crate::sampler::AnalogSampler;
use crate::sensors::{SensorBank, SensorId};
use crate::valve::{MixingValve, ValvePosition};

pub struct BoilerService {
    sampler: AnalogSampler,
    sensors: SensorBank,
    shared: SharedState,
    valve: MixingValve,
}

impl BoilerService {
    /// Load the persisted heating curve, prime the sampler and seed the
    /// desired temperatures from the trimmer pots.
    pub fn new(store: &mut impl StoragePort, adc: &mut impl AdcPort) -> Self {
        let mut sampler = AnalogSampler::new();
        sampler.prime(adc);

        let shared = SharedState::new();
        shared.set_curve(HeatingCurve::load(store));

        let sensors = SensorBank::new(&sampler, &shared);

        Self {
            sampler,
            sensors,
            shared,
            valve: MixingValve::new(),
        }
    }

    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    pub fn sampler(&self) -> &AnalogSampler {
        &self.sampler
    }

    pub fn valve(&self) -> &MixingValve {
        &self.valve
    }

    pub fn valve_mut(&mut self) -> &mut MixingValve {
        &mut self.valve
    }

    /// Current temperature of a sensor in Celsius.
    pub fn temperature(&self, sensor: SensorId) -> i8 {
        self.sensors.temperature(&self.sampler, sensor)
    }

    /// Replace the heating curve and persist it.
    pub fn set_curve(&mut self, store: &mut impl StoragePort, curve: HeatingCurve) {
        curve.persist(store);
        self.shared.set_curve(curve);
    }

    /// One regulation cycle. Called once per control period.
    pub fn tick(&mut self, hw: &mut (impl AdcPort + RelayPort + LedPort)) {
        self.sampler.sample(hw);
        self.sensors.poll_trimmers(&self.sampler, &self.shared);

        let outside = self.temperature(SensorId::Outside);
        let start_water = self.temperature(SensorId::RadiatorStart);

        // The target is recomputed even when idle so the supervisor always
        // reads a value matching the current conditions.
        let target = self
            .shared
            .curve()
            .water_target(self.shared.desired_room_temperature(), outside);
        self.shared.set_target_water_temperature(target);

        if self.shared.is_running() {
            BurnerControl::update(hw, start_water, target);
            hw.set_relay(RelayId::Pump, true);
            // Progressively feed the radiators; the valve was parked LEFT
            // by the last idle period.
            self.valve.set_position(hw, ValvePosition::Right);
            hw.set_led(LedId::BoilerIdle, false);
        } else {
            BurnerControl::force_off(hw);
            hw.set_relay(RelayId::Pump, false);
            // Park the valve so the next run starts on cold water.
            self.valve.set_position(hw, ValvePosition::Left);
            hw.set_led(LedId::BoilerIdle, true);
        }

        self.valve.task(hw);
    }
}
