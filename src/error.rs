//! Unified error type for the dual-relay firmware.
//!
//! The control core is total and has nothing to report; the only fallible
//! paths are configuration validation and parsing of requests arriving
//! from outside.  GPIO setup reports its own
//! [`HwInitError`](crate::drivers::hw_init::HwInitError).  All variants are `Copy` so they can be
//! handed around the control loop without allocation.

use core::fmt;

use crate::app::commands::RequestError;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    Config(&'static str),
    /// An inbound request could not be understood.
    Request(RequestError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Request(e) => write!(f, "request: {e}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<RequestError> for Error {
    fn from(e: RequestError) -> Self {
        Self::Request(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
