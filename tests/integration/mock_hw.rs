//! Mock hardware for integration tests.
//!
//! Records every output call and notification so tests can assert on the
//! full command history without touching real GPIO registers.  Scripted
//! pins let tests drive a button's raw level from outside.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use dualrelay::app::channel::ChannelId;
use dualrelay::app::events::Notification;
use dualrelay::app::ports::{NotificationSink, OutputPort};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Relay { channel: ChannelId, on: bool },
    Led { lit: bool },
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<OutputCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `channel`'s relay, if any.
    pub fn relay(&self, channel: ChannelId) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::Relay { channel: ch, on } if *ch == channel => Some(*on),
            _ => None,
        })
    }

    /// Last LED state written, if any.
    pub fn led(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::Led { lit } => Some(*lit),
            OutputCall::Relay { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl OutputPort for MockHardware {
    fn set_relay(&mut self, channel: ChannelId, on: bool) {
        self.calls.push(OutputCall::Relay { channel, on });
    }

    fn set_led(&mut self, lit: bool) {
        self.calls.push(OutputCall::Led { lit });
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the triggers emitted, in order.
    pub fn triggers(&self) -> Vec<&'static str> {
        self.notifications
            .iter()
            .filter(|n| n.is_trigger())
            .map(Notification::name)
            .collect()
    }

    /// Latest reported value of a capability.
    pub fn capability(&self, name: &str) -> Option<bool> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::Capability { name: n, value } if *n == name => Some(*value),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&mut self, notification: &Notification) {
        self.notifications.push(*notification);
    }
}

// ── Pins ──────────────────────────────────────────────────────

/// Input pin whose level the test sets through a shared handle.
#[derive(Clone)]
pub struct ScriptedPin(Rc<Cell<bool>>);

#[allow(dead_code)]
impl ScriptedPin {
    /// Idle button: pulled HIGH.
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn set_high(&self, high: bool) {
        self.0.set(high);
    }
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// Output pin that records every level written to it.
#[derive(Clone, Default)]
pub struct RecordingPin(Rc<RefCell<Vec<bool>>>);

#[allow(dead_code)]
impl RecordingPin {
    pub fn levels(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }

    pub fn level(&self) -> Option<bool> {
        self.0.borrow().last().copied()
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(false);
        Ok(())
    }
}
