//! Board adapter: ADC, relays and LEDs behind the port traits.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: conversions go through hw_init's oneshot ADC and the
//! relay/LED banks write the real GPIOs.
//! On host/test: conversions return injectable values so a simulated
//! main loop still regulates something.

use crate::app::ports::{AdcPort, LedPort, RelayPort};
use crate::drivers::relay::{RelayBank, RelayId};
use crate::drivers::status_led::{LedBank, LedId};
use crate::sampler::ChannelId;
#[cfg(not(target_os = "espidf"))]
use crate::sampler::CHANNEL_COUNT;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

pub struct HardwareAdapter {
    relays: RelayBank,
    leds: LedBank,
    #[cfg(not(target_os = "espidf"))]
    sim_adc: [u16; CHANNEL_COUNT],
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            relays: RelayBank::new(),
            leds: LedBank::new(),
            #[cfg(not(target_os = "espidf"))]
            sim_adc: [0; CHANNEL_COUNT],
        }
    }

    pub fn leds_mut(&mut self) -> &mut LedBank {
        &mut self.leds
    }

    /// Inject a raw conversion result for simulated runs.
    #[cfg(not(target_os = "espidf"))]
    pub fn set_sim_adc(&mut self, channel: ChannelId, raw: u16) {
        self.sim_adc[channel.index()] = raw;
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcPort for HardwareAdapter {
    #[cfg(target_os = "espidf")]
    fn convert(&mut self, channel: ChannelId) -> u16 {
        let adc_channel = match channel {
            ChannelId::OutsideThermistor => pins::ADC_CH_OUTSIDE_THERMISTOR,
            ChannelId::DayTrimmer => pins::ADC_CH_DAY_TRIMMER,
            ChannelId::NightTrimmer => pins::ADC_CH_NIGHT_TRIMMER,
            ChannelId::RadiatorStartThermistor => pins::ADC_CH_RADIATOR_START_THERMISTOR,
        };
        hw_init::adc1_read(adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn convert(&mut self, channel: ChannelId) -> u16 {
        self.sim_adc[channel.index()]
    }
}

impl RelayPort for HardwareAdapter {
    fn set_relay(&mut self, relay: RelayId, energized: bool) {
        self.relays.set(relay, energized);
    }

    fn relay(&self, relay: RelayId) -> bool {
        self.relays.get(relay)
    }
}

impl LedPort for HardwareAdapter {
    fn set_led(&mut self, led: LedId, on: bool) {
        self.leds.set(led, on);
    }
}
