//! Button, relay and LED drivers, plus one-shot GPIO initialisation.

pub mod button;
pub mod gpio;
pub mod hw_init;
pub mod relay;
pub mod status_led;
