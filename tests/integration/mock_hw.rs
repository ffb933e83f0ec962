//! Mock hardware for integration tests.
//!
//! Records every relay command so tests can assert on the full history
//! without touching real GPIO registers, and serves scripted ADC values.

use boilerctl::app::ports::{AdcPort, LedPort, LinkPort, RelayPort, StoragePort};
use boilerctl::drivers::relay::{RelayId, RELAY_COUNT};
use boilerctl::drivers::status_led::{LedId, LED_COUNT};
use boilerctl::sampler::{ChannelId, CHANNEL_COUNT};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub adc: [u16; CHANNEL_COUNT],
    pub relays: [bool; RELAY_COUNT],
    pub leds: [bool; LED_COUNT],
    pub relay_calls: Vec<(RelayId, bool)>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            adc: [0; CHANNEL_COUNT],
            relays: [false; RELAY_COUNT],
            leds: [false; LED_COUNT],
            relay_calls: Vec::new(),
        }
    }

    pub fn set_adc(&mut self, channel: ChannelId, raw: u16) {
        self.adc[channel.index()] = raw;
    }

    pub fn led(&self, led: LedId) -> bool {
        self.leds[led as usize]
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcPort for MockHardware {
    fn convert(&mut self, channel: ChannelId) -> u16 {
        self.adc[channel.index()]
    }
}

impl RelayPort for MockHardware {
    fn set_relay(&mut self, relay: RelayId, energized: bool) {
        self.relays[relay as usize] = energized;
        self.relay_calls.push((relay, energized));
    }

    fn relay(&self, relay: RelayId) -> bool {
        self.relays[relay as usize]
    }
}

impl LedPort for MockHardware {
    fn set_led(&mut self, led: LedId, on: bool) {
        self.leds[led as usize] = on;
    }
}

// ── MemStore ──────────────────────────────────────────────────

/// In-memory parameter store starting from the erased-flash pattern.
pub struct MemStore {
    pub bytes: [u8; 16],
    pub writes: usize,
}

#[allow(dead_code)]
impl MemStore {
    pub fn new() -> Self {
        Self {
            bytes: [0xFF; 16],
            writes: 0,
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoragePort for MemStore {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
        self.writes += 1;
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// Captures every transmitted byte.
pub struct MockLink {
    pub sent: Vec<u8>,
    pub up: bool,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            up: true,
        }
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPort for MockLink {
    fn bring_up(&mut self, _timeout_ms: u32) -> bool {
        self.up
    }

    fn write_byte(&mut self, byte: u8) {
        self.sent.push(byte);
    }

    fn read_byte(&mut self, _timeout_ms: u32) -> Option<u8> {
        None
    }
}
