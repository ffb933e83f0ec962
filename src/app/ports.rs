//! Port traits decoupling the control core from the hardware.
//!
//! The service and protocol engine only ever see these traits; adapters
//! implement them for the real board and tests implement them with mocks.

use crate::drivers::relay::RelayId;
use crate::drivers::status_led::LedId;
use crate::sampler::ChannelId;

/// Analog-to-digital conversion of one channel.
pub trait AdcPort {
    /// Blocking single conversion, raw counts.
    fn convert(&mut self, channel: ChannelId) -> u16;
}

/// Relay outputs.
pub trait RelayPort {
    fn set_relay(&mut self, relay: RelayId, energized: bool);
    /// Last commanded state.
    fn relay(&self, relay: RelayId) -> bool;
}

/// Status LEDs.
pub trait LedPort {
    fn set_led(&mut self, led: LedId, on: bool);
}

/// Byte-addressed non-volatile parameter storage.
///
/// Writes are best effort. A failed write leaves the previous byte in
/// place and is not reported; the RAM copy of every parameter stays
/// authoritative until the next power cycle.
pub trait StoragePort {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);
}

/// Serial link to the supervisor bridge.
pub trait LinkPort {
    /// Blocking bring-up of the bridge. Returns `false` on timeout.
    fn bring_up(&mut self, timeout_ms: u32) -> bool;
    /// Queue one byte for transmission.
    fn write_byte(&mut self, byte: u8);
    /// Receive one byte, waiting at most `timeout_ms`.
    fn read_byte(&mut self, timeout_ms: u32) -> Option<u8>;
}
