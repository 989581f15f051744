//! Log-based notification sink adapter.
//!
//! Implements [`NotificationSink`] by writing every notification to the
//! ESP-IDF logger (UART in production).  The controller transport itself
//! is provided by the vendor integration layer and would implement the
//! same trait.

use log::info;

use crate::app::events::Notification;
use crate::app::ports::NotificationSink;

/// Adapter that logs every [`Notification`] to the serial console.
#[derive(Debug, Default)]
pub struct LogNotificationSink {
    emitted: u32,
}

impl LogNotificationSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    /// Notifications emitted since boot.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl NotificationSink for LogNotificationSink {
    fn emit(&mut self, notification: &Notification) {
        self.emitted = self.emitted.wrapping_add(1);
        match notification {
            Notification::Trigger { name, value } => {
                info!("TRIGGER | {} = {}", name, value);
            }
            Notification::Capability { name, value } => {
                info!("CAP     | {} = {}", name, value);
            }
        }
    }
}
