//! Device identity derived from the factory MAC address.
//!
//! Produces a stable device name in the form `<prefix>-xxyyzz` (last 3
//! bytes of the 6-byte MAC in lowercase hex).  The name is deterministic
//! across reboots and is what the home-automation controller lists.

/// Fixed-size device name (prefix up to 16 chars + `-` + 6 hex digits).
pub type DeviceName = heapless::String<24>;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
}

/// Derive the device name from `prefix` and the last 3 MAC bytes.
pub fn device_name(prefix: &str, mac: &MacAddress) -> DeviceName {
    use core::fmt::Write;
    let mut name = DeviceName::new();
    // Prefix is bounded by `config::Label`, so this always fits.
    let _ = write!(name, "{}-{:02x}{:02x}{:02x}", prefix, mac[3], mac[4], mac[5]);
    name
}
