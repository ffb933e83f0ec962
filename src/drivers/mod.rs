//! Hardware drivers: peripheral init, relay bank and status LEDs.

pub mod hw_init;
pub mod relay;
pub mod status_led;
