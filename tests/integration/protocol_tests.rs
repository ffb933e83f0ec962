//! Supervisor protocol scenarios: byte streams in, answer frames out.

use boilerctl::app::BoilerService;
use boilerctl::config::FIRMWARE_VERSION;
use boilerctl::protocol::{ProtocolEngine, MAGIC};
use boilerctl::sampler::ChannelId;
use boilerctl::valve::ValvePosition;

use crate::mock_hw::{MemStore, MockHardware, MockLink};

struct Bench {
    service: BoilerService,
    store: MemStore,
    engine: ProtocolEngine,
    hw: MockHardware,
    link: MockLink,
}

impl Bench {
    fn new() -> Self {
        let mut hw = MockHardware::new();
        hw.set_adc(ChannelId::OutsideThermistor, 500);
        hw.set_adc(ChannelId::DayTrimmer, 337);
        hw.set_adc(ChannelId::NightTrimmer, 294);
        hw.set_adc(ChannelId::RadiatorStartThermistor, 468);

        let mut store = MemStore::new();
        let service = BoilerService::new(&mut store, &mut hw);
        Self {
            service,
            store,
            engine: ProtocolEngine::new(),
            hw,
            link: MockLink::new(),
        }
    }

    /// Feed a byte stream and return everything transmitted in answer.
    fn exchange(&mut self, bytes: &[u8]) -> Vec<u8> {
        self.link.sent.clear();
        for &byte in bytes {
            self.engine
                .feed_byte(byte, &mut self.service, &mut self.store);
            self.engine.transmit_pending(&mut self.link);
        }
        self.link.sent.clone()
    }
}

#[test]
fn firmware_version_round_trip() {
    let mut bench = Bench::new();
    let answer = bench.exchange(&[MAGIC, 0]);
    assert_eq!(answer, vec![MAGIC, 0, FIRMWARE_VERSION]);
}

#[test]
fn heating_curve_set_then_get_round_trip() {
    let mut bench = Bench::new();

    // SET_HEATING_CURVE_PARAMETERS(140, 1500), little endian.
    let answer = bench.exchange(&[MAGIC, 12, 140, 0, 0xDC, 0x05]);
    assert_eq!(answer, vec![MAGIC, 12]);

    let answer = bench.exchange(&[MAGIC, 11]);
    assert_eq!(answer, vec![MAGIC, 11, 140, 0, 0xDC, 0x05]);
}

#[test]
fn heating_curve_survives_reinitialization() {
    let mut bench = Bench::new();
    bench.exchange(&[MAGIC, 12, 140, 0, 0xDC, 0x05]);

    // Reboot: a fresh controller reloads the pair from the store.
    let mut service = BoilerService::new(&mut bench.store, &mut bench.hw);
    let mut engine = ProtocolEngine::new();
    let mut link = MockLink::new();
    for &byte in &[MAGIC, 11] {
        engine.feed_byte(byte, &mut service, &mut bench.store);
        engine.transmit_pending(&mut link);
    }
    assert_eq!(link.sent, vec![MAGIC, 11, 140, 0, 0xDC, 0x05]);
}

#[test]
fn unknown_opcode_only_costs_one_frame() {
    let mut bench = Bench::new();

    // Invalid opcode, then a valid query: only the second one answers.
    let answer = bench.exchange(&[MAGIC, 0xFF, MAGIC, 0]);
    assert_eq!(answer, vec![MAGIC, 0, FIRMWARE_VERSION]);
}

#[test]
fn desired_temperatures_set_then_get() {
    let mut bench = Bench::new();

    let answer = bench.exchange(&[MAGIC, 6, 23, 0xF6]); // day 23, night -10
    assert_eq!(answer, vec![MAGIC, 6]);

    let answer = bench.exchange(&[MAGIC, 5]);
    assert_eq!(answer, vec![MAGIC, 5, 23, 0xF6]);
    assert_eq!(bench.service.shared().day_temperature(), 23);
    assert_eq!(bench.service.shared().night_temperature(), -10);
}

#[test]
fn night_mode_flag_round_trip() {
    let mut bench = Bench::new();
    assert!(!bench.service.shared().night_mode());

    bench.exchange(&[MAGIC, 4, 1]);
    assert!(bench.service.shared().night_mode());

    bench.exchange(&[MAGIC, 4, 0]);
    assert!(!bench.service.shared().night_mode());
}

#[test]
fn running_mode_query_and_remote_stop() {
    let mut bench = Bench::new();

    let answer = bench.exchange(&[MAGIC, 8]);
    assert_eq!(answer, vec![MAGIC, 8, 1]);

    bench.exchange(&[MAGIC, 9, 0]);
    assert!(!bench.service.shared().is_running());

    let answer = bench.exchange(&[MAGIC, 8]);
    assert_eq!(answer, vec![MAGIC, 8, 0]);
}

#[test]
fn raw_and_celsius_sensor_queries() {
    let mut bench = Bench::new();

    // Sampler was primed on the scripted raw values.
    let answer = bench.exchange(&[MAGIC, 1]);
    assert_eq!(answer, vec![MAGIC, 1, 244, 1, 212, 1]); // 500 LE, 468 LE

    // outside 0 °C, start water 0 °C.
    let answer = bench.exchange(&[MAGIC, 2]);
    assert_eq!(answer, vec![MAGIC, 2, 0, 0]);

    let answer = bench.exchange(&[MAGIC, 7]);
    assert_eq!(answer, vec![MAGIC, 7, 81, 1, 38, 1]); // 337 LE, 294 LE
}

#[test]
fn valve_position_reads_committed_position() {
    let mut bench = Bench::new();

    let answer = bench.exchange(&[MAGIC, 3]);
    assert_eq!(answer, vec![MAGIC, 3, ValvePosition::Left as u8]);

    // Start a movement; the reported position stays stale while moving.
    bench.service.tick(&mut bench.hw);
    assert!(bench.service.valve().is_moving());
    let answer = bench.exchange(&[MAGIC, 3]);
    assert_eq!(answer, vec![MAGIC, 3, ValvePosition::Left as u8]);
}

#[test]
fn target_temperature_query_after_regulation() {
    let mut bench = Bench::new();
    bench.service.tick(&mut bench.hw);

    let answer = bench.exchange(&[MAGIC, 10]);
    assert_eq!(answer, vec![MAGIC, 10, 43]);
}

#[test]
fn truncated_frame_stalls_until_completed() {
    let mut bench = Bench::new();

    // Half a SET_DESIRED_ROOM_TEMPERATURES command: no answer yet.
    let answer = bench.exchange(&[MAGIC, 6, 25]);
    assert!(answer.is_empty());

    // The missing byte arrives later and the command completes.
    let answer = bench.exchange(&[15]);
    assert_eq!(answer, vec![MAGIC, 6]);
    assert_eq!(bench.service.shared().day_temperature(), 25);
    assert_eq!(bench.service.shared().night_temperature(), 15);
}
