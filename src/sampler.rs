//! Analog sampler: moving-average filtering of the raw ADC channels.
//!
//! Each channel keeps a ring buffer of the last [`SAMPLE_WINDOW`] raw
//! samples; the published value is the integer-truncated mean, recomputed
//! on every insertion. Published values are shared with protocol dispatch
//! and therefore live behind a critical section (a mean is wider than one
//! byte and must never be observed half-written).

use core::cell::Cell;

use critical_section::Mutex;

use crate::app::ports::AdcPort;
use crate::config::SAMPLE_WINDOW;

/// All sampled analog channels, in multiplexer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelId {
    OutsideThermistor = 0,
    DayTrimmer = 1,
    NightTrimmer = 2,
    RadiatorStartThermistor = 3,
}

/// Number of sampled channels.
pub const CHANNEL_COUNT: usize = 4;

impl ChannelId {
    /// Every channel, in sampling order.
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [
        ChannelId::OutsideThermistor,
        ChannelId::DayTrimmer,
        ChannelId::NightTrimmer,
        ChannelId::RadiatorStartThermistor,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One channel's moving-average window.
struct MovingAverage {
    samples: [u16; SAMPLE_WINDOW],
    oldest: usize,
}

impl MovingAverage {
    const fn new() -> Self {
        Self {
            samples: [0; SAMPLE_WINDOW],
            oldest: 0,
        }
    }

    /// Replace the oldest sample and return the window mean.
    fn push(&mut self, sample: u16) -> u16 {
        self.samples[self.oldest] = sample;
        self.oldest = (self.oldest + 1) % SAMPLE_WINDOW;

        let sum: u32 = self.samples.iter().map(|&s| u32::from(s)).sum();
        (sum / SAMPLE_WINDOW as u32) as u16
    }
}

/// Samples every channel once per control period and publishes the
/// filtered values.
pub struct AnalogSampler {
    windows: [MovingAverage; CHANNEL_COUNT],
    /// Last published mean per channel, read by protocol dispatch.
    published: Mutex<Cell<[u16; CHANNEL_COUNT]>>,
}

impl AnalogSampler {
    pub fn new() -> Self {
        Self {
            windows: [
                MovingAverage::new(),
                MovingAverage::new(),
                MovingAverage::new(),
                MovingAverage::new(),
            ],
            published: Mutex::new(Cell::new([0; CHANNEL_COUNT])),
        }
    }

    /// Fill the windows at init time so the first in-loop mean is already
    /// valid. One extra pass discards the converter's possibly-wrong first
    /// result.
    pub fn prime(&mut self, adc: &mut impl AdcPort) {
        for _ in 0..=SAMPLE_WINDOW {
            self.sample(adc);
        }
    }

    /// Sample every channel once and publish the new means.
    pub fn sample(&mut self, adc: &mut impl AdcPort) {
        let mut means = [0u16; CHANNEL_COUNT];
        for channel in ChannelId::ALL {
            let raw = adc.convert(channel);
            means[channel.index()] = self.windows[channel.index()].push(raw);
        }

        critical_section::with(|cs| self.published.borrow(cs).set(means));
    }

    /// Last published mean for a channel.
    pub fn value(&self, channel: ChannelId) -> u16 {
        critical_section::with(|cs| self.published.borrow(cs).get()[channel.index()])
    }

    /// Last published mean for a raw channel index.
    ///
    /// Returns 0 for an unknown channel, a deliberate silent-default
    /// policy; callers must not treat 0 as an error.
    pub fn value_raw(&self, channel: u8) -> u16 {
        let index = channel as usize;
        if index >= CHANNEL_COUNT {
            return 0;
        }
        critical_section::with(|cs| self.published.borrow(cs).get()[index])
    }
}
