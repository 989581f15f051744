//! Outbound notifications and their names.
//!
//! The [`OutputCoordinator`](super::coordinator::OutputCoordinator) emits
//! these through the [`NotificationSink`](super::ports::NotificationSink)
//! port.  Every name the controller sees is produced by a function in this
//! module, so on/off direction and channel numbering stay consistent.

use super::channel::ChannelId;

/// Capability carrying the aggregate on/off state.
pub const CAP_ONOFF: &str = "onoff";

/// Trigger fired whenever the aggregate is set in bulk.
pub const TRIGGER_STATE: &str = "state";

/// Structured notifications emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Fire-and-forget flow trigger with a boolean payload.
    Trigger { name: &'static str, value: bool },

    /// Mirror of a capability value, reported alongside triggers.
    Capability { name: &'static str, value: bool },
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trigger { name, .. } | Self::Capability { name, .. } => name,
        }
    }

    pub fn value(&self) -> bool {
        match self {
            Self::Trigger { value, .. } | Self::Capability { value, .. } => *value,
        }
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, Self::Trigger { .. })
    }
}

/// Capability mirroring a single channel.
pub const fn channel_capability(channel: ChannelId) -> &'static str {
    match channel {
        ChannelId::One => "switch.1",
        ChannelId::Two => "switch.2",
    }
}

/// Directional trigger for a bulk change of both channels.
pub const fn aggregate_trigger(on: bool) -> &'static str {
    if on { "turned_on" } else { "turned_off" }
}

/// Directional trigger for a single channel.
pub const fn channel_trigger(channel: ChannelId, on: bool) -> &'static str {
    match (channel, on) {
        (ChannelId::One, true) => "turned_on_switch1",
        (ChannelId::One, false) => "turned_off_switch1",
        (ChannelId::Two, true) => "turned_on_switch2",
        (ChannelId::Two, false) => "turned_off_switch2",
    }
}

/// Trigger raised on every confirmed edge of the button mapped to `channel`.
pub const fn button_trigger(channel: ChannelId) -> &'static str {
    match channel {
        ChannelId::One => "button1",
        ChannelId::Two => "button2",
    }
}
