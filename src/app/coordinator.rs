//! Output coordinator: the hexagonal core.
//!
//! [`OutputCoordinator`] owns the two channel states and is the only place
//! they change.  Every mutation runs through one propagate path that
//! recomputes the aggregate, drives the relays and LED through the
//! [`OutputPort`], and reports through the [`NotificationSink`].
//!
//! ```text
//!  Button edge ──▶ ┌──────────────────────────┐ ──▶ NotificationSink
//!                  │    OutputCoordinator     │
//!  Request     ──▶ │  ch1 · ch2 · ch1 OR ch2  │ ──▶ OutputPort
//!                  └──────────────────────────┘
//! ```
//!
//! ## Notifications
//!
//! | Operation             | Capabilities                         | Triggers                         |
//! |-----------------------|--------------------------------------|----------------------------------|
//! | `set_aggregate(v)`    | `onoff`, `switch.1`, `switch.2`      | `state`, `turned_on`/`turned_off`|
//! | `set_channel(N, v)`   | `onoff`, `switch.N`                  | `turned_on_switchN`/`turned_off_switchN` |
//! | button edge           | -                                    | `buttonN` (payload = pressed)    |

use log::{debug, info, warn};

use super::channel::ChannelId;
use super::events::{
    aggregate_trigger, button_trigger, channel_capability, channel_trigger, Notification,
    CAP_ONOFF, TRIGGER_STATE,
};
use super::ports::{NotificationSink, OutputPort};
use crate::config::DeviceConfig;

/// Output policy flags, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPolicy {
    /// The status LED mirrors the aggregate state.
    pub led_follows_output: bool,
    /// A button press toggles the channel mapped to that button.
    pub button_switches_output: bool,
}

impl From<&DeviceConfig> for OutputPolicy {
    fn from(config: &DeviceConfig) -> Self {
        Self {
            led_follows_output: config.led_follows_output,
            button_switches_output: config.button_switches_output,
        }
    }
}

/// Owns both channel states and derives everything else from them.
pub struct OutputCoordinator {
    channels: [bool; 2],
    policy: OutputPolicy,
}

impl OutputCoordinator {
    /// Both channels start off.
    pub fn new(policy: OutputPolicy) -> Self {
        Self {
            channels: [false; 2],
            policy,
        }
    }

    pub fn policy(&self) -> OutputPolicy {
        self.policy
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Boot indication: relays released and LED lit while the rest of the
    /// firmware comes up.
    pub fn begin(&self, out: &mut impl OutputPort) {
        for id in ChannelId::ALL {
            out.set_relay(id, false);
        }
        out.set_led(true);
    }

    /// Leave boot indication: outputs reflect the owned state.
    ///
    /// With a manually driven LED it is switched off, matching the state a
    /// fresh `set-led` would expect.
    pub fn ready(&self, out: &mut impl OutputPort) {
        for id in ChannelId::ALL {
            out.set_relay(id, self.channel(id));
        }
        out.set_led(self.policy.led_follows_output && self.aggregate());
        info!(
            "Outputs ready: switch1={} switch2={} led_follows_output={}",
            self.channels[0], self.channels[1], self.policy.led_follows_output
        );
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Set both channels to `on` at once.
    pub fn set_aggregate(
        &mut self,
        on: bool,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) {
        self.channels = [on; 2];
        for id in ChannelId::ALL {
            out.set_relay(id, on);
        }
        if self.policy.led_follows_output {
            out.set_led(on);
        }
        info!("Aggregate set: {}", on);

        sink.emit(&Notification::Capability {
            name: CAP_ONOFF,
            value: on,
        });
        for id in ChannelId::ALL {
            sink.emit(&Notification::Capability {
                name: channel_capability(id),
                value: on,
            });
        }
        sink.emit(&Notification::Trigger {
            name: TRIGGER_STATE,
            value: on,
        });
        sink.emit(&Notification::Trigger {
            name: aggregate_trigger(on),
            value: on,
        });
    }

    /// Flip one channel.
    pub fn toggle_channel(
        &mut self,
        id: ChannelId,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) {
        let on = !self.channel(id);
        self.set_channel(id, on, out, sink);
    }

    /// Set one channel and propagate.  The other channel's relay is not
    /// written.
    ///
    /// Setting a channel to the value it already holds still drives the
    /// relay and reports, so the controller can resynchronise on demand.
    pub fn set_channel(
        &mut self,
        id: ChannelId,
        on: bool,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) {
        self.channels[id.slot()] = on;
        let aggregate = self.aggregate();

        out.set_relay(id, on);
        if self.policy.led_follows_output {
            out.set_led(aggregate);
        }
        info!("{} set: {} (aggregate {})", id, on, aggregate);

        sink.emit(&Notification::Capability {
            name: CAP_ONOFF,
            value: aggregate,
        });
        sink.emit(&Notification::Capability {
            name: channel_capability(id),
            value: on,
        });
        sink.emit(&Notification::Trigger {
            name: channel_trigger(id, on),
            value: on,
        });
    }

    /// Drive the LED directly.  Ignored while the LED mirrors the outputs.
    pub fn set_led(&mut self, lit: bool, out: &mut impl OutputPort) {
        if self.policy.led_follows_output {
            warn!("set-led ignored: LED follows output state");
            return;
        }
        out.set_led(lit);
    }

    /// React to a confirmed button edge.
    ///
    /// Every edge is reported as a `buttonN` trigger.  When buttons switch
    /// outputs, a press (never a release) toggles the mapped channel.
    ///
    /// # Panics
    ///
    /// A button id with no channel is a wiring bug in the firmware itself.
    pub fn handle_button(
        &mut self,
        button: u8,
        released: bool,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) {
        let Some(id) = ChannelId::from_index(button) else {
            panic!("button {button} is not mapped to a channel");
        };
        let pressed = !released;
        debug!("Button {} {}", button, if pressed { "pressed" } else { "released" });

        sink.emit(&Notification::Trigger {
            name: button_trigger(id),
            value: pressed,
        });

        if pressed && self.policy.button_switches_output {
            self.toggle_channel(id, out, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// `switch1 OR switch2`.
    pub fn aggregate(&self) -> bool {
        self.channels[0] || self.channels[1]
    }

    pub fn channel(&self, id: ChannelId) -> bool {
        self.channels[id.slot()]
    }

    pub fn channel_off(&self, id: ChannelId) -> bool {
        !self.channel(id)
    }
}
