//! `embedded-hal` view of a raw GPIO number.
//!
//! Drivers are generic over [`InputPin`] / [`OutputPin`] so they can run
//! against scripted pins on the host.  On target, [`GpioPin`] forwards to
//! the register helpers in [`hw_init`](super::hw_init); pin direction is
//! set up once by `init_peripherals()`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use super::hw_init;

/// A GPIO already configured by `init_peripherals()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioPin {
    gpio: i32,
}

impl GpioPin {
    pub const fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioPin {
    type Error = Infallible;
}

impl InputPin for GpioPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.gpio))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.gpio))
    }
}

impl OutputPin for GpioPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        Ok(())
    }
}

/// Read a pin whose error type is uninhabited.
pub(crate) fn read_level(pin: &mut impl InputPin<Error = Infallible>) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(never) => match never {},
    }
}

/// Drive a pin whose error type is uninhabited.
pub(crate) fn write_level(pin: &mut impl OutputPin<Error = Infallible>, high: bool) {
    let result = if high { pin.set_high() } else { pin.set_low() };
    if let Err(never) = result {
        match never {}
    }
}
