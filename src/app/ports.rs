//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OutputCoordinator (domain)
//! ```
//!
//! Driven adapters (relay board, notification transport, clock) implement
//! these traits.  The coordinator consumes them via generics, so the
//! domain core never touches hardware directly.  Buttons are not behind a
//! port: they read through `embedded_hal::digital::InputPin`.

use super::channel::ChannelId;
use super::events::Notification;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive relays and the LED.
///
/// Writes are fire-and-forget; a pin write cannot fail at this layer.
pub trait OutputPort {
    /// Energise (`true`) or release the relay for `channel`.
    fn set_relay(&mut self, channel: ChannelId, on: bool);

    /// Light (`true`) or extinguish the status LED.
    ///
    /// Polarity is the adapter's business; the status LED on the stock
    /// board is active-low.
    fn set_led(&mut self, lit: bool);
}

// ───────────────────────────────────────────────────────────────
// Notification sink (driven adapter: domain → home-automation controller)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`Notification`]s through this port.  Adapters decide
/// where they go (serial log, controller transport, test recorder).
pub trait NotificationSink {
    fn emit(&mut self, notification: &Notification);
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: hardware timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock, used only for debounce timing.
///
/// Wraps at `u32::MAX`; consumers compare with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}
