//! Application core: hardware-independent control logic behind port traits.

pub mod ports;
pub mod service;
pub mod state;

pub use service::BoilerService;
pub use state::SharedState;
