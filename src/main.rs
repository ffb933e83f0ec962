//! Boiler controller firmware entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  HardwareAdapter        ParamStore       EspSerialLink     │
//! │  (Adc+Relay+Led ports)  (StoragePort)    (LinkPort)        │
//! │                                                            │
//! │  ─────────────── Port Trait Boundary ─────────────────     │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │         BoilerService (pure regulation)          │      │
//! │  │  Sampler · Sensors · Curve · Burner · Valve      │      │
//! │  └──────────────────────────────────────────────────┘      │
//! │                                                            │
//! │  ProtocolEngine (frame codec + dispatch)                   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The main loop polls the link every 50 ms and runs one regulation
//! cycle per second. Link bring-up blocks once at boot; its failure is
//! non-fatal and only latches the network-error LED.
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::{error, info, warn};

use boilerctl::adapters::{HardwareAdapter, ParamStore};
use boilerctl::app::ports::LinkPort;
use boilerctl::app::BoilerService;
use boilerctl::config::{CONTROL_PERIOD_MS, LINK_BRING_UP_TIMEOUT_MS, LINK_POLL_PERIOD_MS};
use boilerctl::drivers::hw_init;
use boilerctl::drivers::status_led::LedId;
use boilerctl::events;
use boilerctl::protocol::ProtocolEngine;

#[cfg(target_os = "espidf")]
fn open_link() -> boilerctl::error::Result<boilerctl::protocol::link::EspSerialLink> {
    boilerctl::protocol::link::EspSerialLink::new()
}

#[cfg(not(target_os = "espidf"))]
fn open_link() -> boilerctl::error::Result<boilerctl::protocol::link::NullLink> {
    Ok(boilerctl::protocol::link::NullLink)
}

fn main() -> Result<()> {
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("boilerctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = hw_init::init_peripherals() {
        // Without the ADC and the relay GPIOs there is nothing to control.
        error!("peripheral init failed: {e}, halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let mut store = match ParamStore::new() {
        Ok(store) => store,
        Err(e) => {
            warn!("parameter store init failed ({e}), running without persistence");
            ParamStore::volatile()
        }
    };

    let mut hw = HardwareAdapter::new();
    let mut service = BoilerService::new(&mut store, &mut hw);
    let mut engine = ProtocolEngine::new();

    // The bridge is optional: regulation works unsupervised, the LED is
    // the only failure report.
    let mut link = match open_link() {
        Ok(mut link) => {
            if link.bring_up(LINK_BRING_UP_TIMEOUT_MS) {
                info!("link: bridge is up");
                Some(link)
            } else {
                warn!("link: bring-up failed, running unsupervised");
                hw.leds_mut().set(LedId::NetworkError, true);
                Some(link)
            }
        }
        Err(e) => {
            warn!("link: {e}, running unsupervised");
            hw.leds_mut().set(LedId::NetworkError, true);
            None
        }
    };

    info!("entering control loop");

    let polls_per_cycle = CONTROL_PERIOD_MS / LINK_POLL_PERIOD_MS;
    let mut poll_count = 0;

    loop {
        // Link first: commands observed in this iteration take effect in
        // the regulation cycle below.
        if let Some(link) = link.as_mut() {
            link.poll();
        }
        events::drain_rx(|byte| engine.feed_byte(byte, &mut service, &mut store));
        if let Some(link) = link.as_mut() {
            engine.transmit_pending(link);
        }

        poll_count += 1;
        if poll_count >= polls_per_cycle {
            poll_count = 0;
            service.tick(&mut hw);
            hw.leds_mut().toggle(LedId::Status);
        }

        std::thread::sleep(Duration::from_millis(u64::from(LINK_POLL_PERIOD_MS)));
    }
}
