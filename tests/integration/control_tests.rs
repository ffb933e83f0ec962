//! End-to-end regulation scenarios over mock hardware.

use boilerctl::app::BoilerService;
use boilerctl::config::VALVE_MAX_MOVING_TIME_SECS;
use boilerctl::control::HeatingCurve;
use boilerctl::drivers::relay::RelayId;
use boilerctl::drivers::status_led::LedId;
use boilerctl::sampler::ChannelId;
use boilerctl::valve::ValvePosition;

use crate::mock_hw::{MemStore, MockHardware};

// Raw counts with known calibrated meanings.
const RAW_OUTSIDE_0C: u16 = 500;
const RAW_DAY_TRIMMER_20C: u16 = 337;
const RAW_DAY_TRIMMER_31C: u16 = 500;
const RAW_NIGHT_TRIMMER_SETBACK_10: u16 = 294;
const RAW_START_WATER_0C: u16 = 468;
const RAW_START_WATER_58C: u16 = 400;

fn boot() -> (BoilerService, MockHardware, MemStore) {
    let mut hw = MockHardware::new();
    hw.set_adc(ChannelId::OutsideThermistor, RAW_OUTSIDE_0C);
    hw.set_adc(ChannelId::DayTrimmer, RAW_DAY_TRIMMER_20C);
    hw.set_adc(ChannelId::NightTrimmer, RAW_NIGHT_TRIMMER_SETBACK_10);
    hw.set_adc(ChannelId::RadiatorStartThermistor, RAW_START_WATER_0C);

    let mut store = MemStore::new();
    let service = BoilerService::new(&mut store, &mut hw);
    (service, hw, store)
}

#[test]
fn power_on_regulates_toward_curve_target() {
    let (mut service, mut hw, _store) = boot();
    assert!(service.shared().is_running());

    service.tick(&mut hw);

    // Blank store: built-in curve, outside 0 and desired 20 give 43.
    assert_eq!(service.shared().target_water_temperature(), 43);

    // Cold start water is far below the band: burner ignites, pump runs,
    // valve starts feeding the radiators.
    assert!(hw.relays[RelayId::Burner as usize]);
    assert!(hw.relays[RelayId::Pump as usize]);
    assert!(hw.relays[RelayId::ValveRight as usize]);
    assert!(!hw.relays[RelayId::ValveLeft as usize]);
    assert!(!hw.led(LedId::BoilerIdle));
    assert!(hw.led(LedId::ValveMoving));
}

#[test]
fn idle_mode_shuts_everything_down() {
    let (mut service, mut hw, _store) = boot();
    service.tick(&mut hw);
    assert!(hw.relays[RelayId::Burner as usize]);

    service.shared().set_running(false);
    service.tick(&mut hw);

    assert!(!hw.relays[RelayId::Burner as usize]);
    assert!(!hw.relays[RelayId::Pump as usize]);
    // Valve heads back LEFT so the next run starts on cold water.
    assert!(hw.relays[RelayId::ValveLeft as usize]);
    assert!(!hw.relays[RelayId::ValveRight as usize]);
    assert!(hw.led(LedId::BoilerIdle));
}

#[test]
fn idle_shutdown_ignores_sensor_values() {
    let (mut service, mut hw, _store) = boot();
    service.shared().set_running(false);

    // Freezing water would normally demand the burner.
    hw.set_adc(ChannelId::RadiatorStartThermistor, RAW_START_WATER_0C);
    service.tick(&mut hw);

    assert!(!hw.relays[RelayId::Burner as usize]);
    assert!(!hw.relays[RelayId::Pump as usize]);
}

#[test]
fn burner_extinguishes_once_water_is_hot() {
    let (mut service, mut hw, _store) = boot();
    service.tick(&mut hw);
    assert!(hw.relays[RelayId::Burner as usize]);

    // Water heats up; the moving average needs a full window to settle.
    hw.set_adc(ChannelId::RadiatorStartThermistor, RAW_START_WATER_58C);
    for _ in 0..5 {
        service.tick(&mut hw);
    }
    assert!(!hw.relays[RelayId::Burner as usize]);
}

#[test]
fn trimmer_turn_raises_the_target() {
    let (mut service, mut hw, _store) = boot();
    service.tick(&mut hw);
    assert_eq!(service.shared().target_water_temperature(), 43);

    hw.set_adc(ChannelId::DayTrimmer, RAW_DAY_TRIMMER_31C);
    for _ in 0..5 {
        service.tick(&mut hw);
    }

    assert_eq!(service.shared().day_temperature(), 31);
    // (14 * 31 + 150) / 10 = 58.
    assert_eq!(service.shared().target_water_temperature(), 58);
}

#[test]
fn night_mode_regulates_on_night_temperature() {
    let (mut service, mut hw, _store) = boot();
    service.tick(&mut hw);
    assert_eq!(service.shared().night_temperature(), 10);

    service.shared().set_night_mode(true);
    service.tick(&mut hw);

    // (14 * 10 + 150) / 10 = 29.
    assert_eq!(service.shared().target_water_temperature(), 29);
}

#[test]
fn valve_commits_position_after_full_travel() {
    let (mut service, mut hw, _store) = boot();

    service.tick(&mut hw);
    assert_eq!(service.valve().position(), ValvePosition::Left);
    assert!(service.valve().is_moving());

    // One second of travel already elapsed in the first tick.
    for _ in 0..VALVE_MAX_MOVING_TIME_SECS - 1 {
        service.tick(&mut hw);
    }
    assert_eq!(service.valve().position(), ValvePosition::Right);
    assert!(!service.valve().is_moving());
    assert!(!hw.relays[RelayId::ValveRight as usize]);
    assert!(!hw.led(LedId::ValveMoving));
}

#[test]
fn heating_curve_survives_reboot() {
    let (mut service, mut hw, mut store) = boot();

    let curve = HeatingCurve {
        coefficient: 20,
        parallel_shift: 200,
    };
    service.set_curve(&mut store, curve);
    assert!(store.writes >= 4);

    // Simulated reboot: a fresh controller reloads from the same store.
    let rebooted = BoilerService::new(&mut store, &mut hw);
    assert_eq!(rebooted.shared().curve(), curve);
}
