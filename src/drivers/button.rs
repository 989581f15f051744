//! Polled, time-debounced button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up: LOW = pressed,
//! HIGH = released.  The control loop calls [`DebouncedButton::poll`] on
//! every iteration, well inside the debounce window.
//!
//! ## Debounce
//!
//! Every change of the raw level restarts the timer, so a chattering
//! contact keeps postponing confirmation.  Once the raw level has been
//! stable for longer than the window and differs from the confirmed level,
//! it becomes the confirmed level and the edge callback fires once.
//!
//! ```text
//! raw   ‾‾‾|_|‾|_____________________
//!           0 1 3                14 ms
//! edge                           ▲ pressed (window 10 ms)
//! ```

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use super::gpio::read_level;

/// Raw level of a released (idle) button.
pub const RELEASED_LEVEL: bool = true;

/// Default debounce window.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// One physical button and its debounce state.
///
/// `on_edge` receives `(id, released)` synchronously from inside
/// [`poll`](Self::poll), at most once per confirmed transition.
pub struct DebouncedButton<P, F> {
    id: u8,
    pin: P,
    on_edge: F,
    debounce_ms: u32,
    /// Confirmed raw level; `None` until [`initialize`](Self::initialize).
    confirmed: Option<bool>,
    last_raw: bool,
    last_change_ms: u32,
}

impl<P, F> DebouncedButton<P, F>
where
    P: InputPin<Error = Infallible>,
    F: FnMut(u8, bool),
{
    pub fn new(id: u8, pin: P, debounce_ms: u32, on_edge: F) -> Self {
        Self {
            id,
            pin,
            on_edge,
            debounce_ms,
            confirmed: None,
            last_raw: RELEASED_LEVEL,
            last_change_ms: 0,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Seed the confirmed level from the current raw level.  Never fires
    /// the callback, whatever the pin reads.
    ///
    /// # Panics
    ///
    /// If called twice.
    pub fn initialize(&mut self) {
        assert!(
            self.confirmed.is_none(),
            "button {} initialized twice",
            self.id
        );
        let raw = read_level(&mut self.pin);
        self.confirmed = Some(raw);
        self.last_raw = raw;
    }

    /// Sample the pin once and run the debounce step.
    /// `now_ms` is the current monotonic time in milliseconds.
    ///
    /// # Panics
    ///
    /// If [`initialize`](Self::initialize) has not been called.
    pub fn poll(&mut self, now_ms: u32) {
        let Some(confirmed) = self.confirmed else {
            panic!("button {} polled before initialize()", self.id);
        };
        let raw = read_level(&mut self.pin);

        if raw != self.last_raw {
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) > self.debounce_ms && raw != confirmed {
            self.confirmed = Some(raw);
            (self.on_edge)(self.id, raw == RELEASED_LEVEL);
        }

        self.last_raw = raw;
    }

    /// Confirmed pressed state; `false` before initialization.
    pub fn is_pressed(&self) -> bool {
        self.confirmed.is_some_and(|level| level != RELEASED_LEVEL)
    }
}
