//! Unified error types for the boiler controller firmware.
//!
//! The control core itself has no failing path: bad sensor or channel ids
//! produce documented sentinels and the loop keeps running. Errors exist
//! only at the hardware boundary (link bring-up, parameter-store init) and
//! are `Copy` so they can be passed around without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial/WiFi bridge link could not be set up.
    Link(LinkError),
    /// The non-volatile parameter store could not be accessed.
    Storage(StorageError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(e) => write!(f, "link: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The UART driver could not be installed (IDF return code).
    DriverInstall(i32),
    /// No answer from the bridge within the bring-up timeout.
    Timeout,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverInstall(rc) => write!(f, "UART driver install failed (rc={rc})"),
            Self::Timeout => write!(f, "bring-up timed out"),
        }
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// NVS flash partition initialisation failed (IDF return code).
    FlashInit(i32),
    /// The parameter blob could not be committed.
    Commit(i32),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlashInit(rc) => write!(f, "NVS flash init failed (rc={rc})"),
            Self::Commit(rc) => write!(f, "parameter commit failed (rc={rc})"),
        }
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
