//! Relay driver (NPN-switched coil, HIGH = energised).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO through [`GpioPin`](super::gpio::GpioPin).
//! On host/test: any `OutputPin` with an infallible error type.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::gpio::write_level;

pub struct Relay<P> {
    pin: P,
    energised: bool,
}

impl<P: OutputPin<Error = Infallible>> Relay<P> {
    /// Wraps a pin that `init_peripherals()` left low (released).
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            energised: false,
        }
    }

    pub fn set(&mut self, on: bool) {
        write_level(&mut self.pin, on);
        self.energised = on;
    }

    pub fn is_on(&self) -> bool {
        self.energised
    }
}
