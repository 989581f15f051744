//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the switching rules: two channels, their OR-merged
//! aggregate, LED policy, and the names under which changes are reported.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod channel;
pub mod commands;
pub mod coordinator;
pub mod events;
pub mod ports;
pub mod service;
