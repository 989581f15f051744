//! GPIO assignments for the dual-relay switch module.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Matches the stock Sonoff dual-gang board map.

// ---------------------------------------------------------------------------
// Buttons (active-low momentary switches, external pull-up)
// ---------------------------------------------------------------------------

/// Gang 1 touch/push button.  Doubles as the boot-mode strap.
pub const BUTTON_1_GPIO: i32 = 0;
/// Gang 2 touch/push button.
pub const BUTTON_2_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Relays (HIGH = coil energised = load on)
// ---------------------------------------------------------------------------

pub const RELAY_1_GPIO: i32 = 12;
pub const RELAY_2_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Status LED (active-low: LOW = lit)
// ---------------------------------------------------------------------------

pub const LED_GPIO: i32 = 13;

/// Every input the firmware configures at boot.
pub const INPUT_PINS: [i32; 2] = [BUTTON_1_GPIO, BUTTON_2_GPIO];

/// Every output the firmware configures at boot.
pub const OUTPUT_PINS: [i32; 3] = [RELAY_1_GPIO, RELAY_2_GPIO, LED_GPIO];
