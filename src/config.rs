//! Device configuration parameters
//!
//! Runtime switches that used to be build-time toggles, plus the timing
//! of the button polling loop.  Compiled-in defaults; there is no
//! persistent store on this device.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Short identifier strings (device name prefix, device class).
pub type Label = heapless::String<16>;

/// Upper bound accepted for the debounce window.
pub const MAX_DEBOUNCE_MS: u32 = 1000;

/// Core device configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    // --- Output policy ---
    /// Status LED mirrors the aggregate output (otherwise driven by `set-led`)
    pub led_follows_output: bool,
    /// A button press toggles its channel (otherwise it only raises a trigger)
    pub button_switches_output: bool,

    // --- Timing ---
    /// Raw input must be stable for longer than this before an edge is confirmed
    pub debounce_ms: u32,
    /// Sleep between control loop iterations (0 = yield only)
    pub poll_interval_ms: u32,

    // --- Identity ---
    /// Device name prefix; the MAC suffix is appended at boot
    pub device_name_prefix: Label,
    /// Device class announced to the home-automation controller
    pub device_class: Label,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            // Output policy
            led_follows_output: true,
            button_switches_output: true,

            // Timing
            debounce_ms: 10,
            poll_interval_ms: 1,

            // Identity
            device_name_prefix: label("sonoff"),
            device_class: label("socket"),
        }
    }
}

impl DeviceConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Config("debounce_ms must be non-zero"));
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::Config("debounce_ms must be at most 1000"));
        }
        if self.poll_interval_ms >= self.debounce_ms {
            return Err(Error::Config(
                "poll_interval_ms must be shorter than debounce_ms",
            ));
        }
        if self.device_name_prefix.is_empty() {
            return Err(Error::Config("device_name_prefix must not be empty"));
        }
        if self.device_class.is_empty() {
            return Err(Error::Config("device_class must not be empty"));
        }
        Ok(())
    }
}

fn label(s: &str) -> Label {
    let mut out = Label::new();
    // Callers only pass compile-time literals shorter than the capacity.
    let _ = out.push_str(s);
    out
}
