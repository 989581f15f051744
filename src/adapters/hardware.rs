//! Hardware adapter: bridges the relay board to the domain output port.
//!
//! Owns both relay drivers and the status LED, exposing them through
//! [`OutputPort`].  This is the only module in the system that drives
//! output pins.  Generic over the pin type so host tests can substitute
//! recording pins for [`GpioPin`](crate::drivers::gpio::GpioPin).

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::app::channel::ChannelId;
use crate::app::ports::OutputPort;
use crate::drivers::relay::Relay;
use crate::drivers::status_led::StatusLed;

/// Concrete adapter that combines all outputs behind the port trait.
pub struct HardwareAdapter<P> {
    relays: [Relay<P>; 2],
    led: StatusLed<P>,
}

impl<P: OutputPin<Error = Infallible>> HardwareAdapter<P> {
    pub fn new(relay_1: P, relay_2: P, led: P) -> Self {
        Self {
            relays: [Relay::new(relay_1), Relay::new(relay_2)],
            led: StatusLed::new(led),
        }
    }

    pub fn relay_on(&self, channel: ChannelId) -> bool {
        self.relays[channel.slot()].is_on()
    }

    pub fn led_lit(&self) -> bool {
        self.led.is_lit()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<P: OutputPin<Error = Infallible>> OutputPort for HardwareAdapter<P> {
    fn set_relay(&mut self, channel: ChannelId, on: bool) {
        self.relays[channel.slot()].set(on);
    }

    fn set_led(&mut self, lit: bool) {
        self.led.set(lit);
    }
}
