//! Single-colour status LED driver.
//!
//! The LED sits between 3V3 and the GPIO, so it is active-low: driving the
//! pin LOW lights it.  Callers speak in lit/unlit; the inversion lives here.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::gpio::write_level;

pub struct StatusLed<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin<Error = Infallible>> StatusLed<P> {
    /// Wraps a pin that `init_peripherals()` left low (lit).
    pub fn new(pin: P) -> Self {
        Self { pin, lit: true }
    }

    pub fn set(&mut self, lit: bool) {
        write_level(&mut self.pin, !lit);
        self.lit = lit;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
