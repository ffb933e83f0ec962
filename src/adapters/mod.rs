//! Port implementations binding the control core to the board.

pub mod hardware;
pub mod param_store;

pub use hardware::HardwareAdapter;
pub use param_store::ParamStore;
