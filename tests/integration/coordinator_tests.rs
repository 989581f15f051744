//! Integration tests for the request → coordinator → outputs pipeline.
//!
//! These run on the host (x86_64) and check the relay, LED and
//! notification side effects of each operation without real hardware.

use crate::mock_hw::{MockHardware, OutputCall, RecordingSink};

use dualrelay::app::channel::ChannelId;
use dualrelay::app::coordinator::{OutputCoordinator, OutputPolicy};
use dualrelay::app::events::Notification;

const DEFAULT_POLICY: OutputPolicy = OutputPolicy {
    led_follows_output: true,
    button_switches_output: true,
};

fn setup() -> (OutputCoordinator, MockHardware, RecordingSink) {
    (
        OutputCoordinator::new(DEFAULT_POLICY),
        MockHardware::new(),
        RecordingSink::new(),
    )
}

// ── Scenario 1: off/off, toggle 1 ────────────────────────────

#[test]
fn toggle_first_channel_from_all_off() {
    let (mut c, mut hw, mut sink) = setup();

    c.toggle_channel(ChannelId::One, &mut hw, &mut sink);

    assert!(c.channel(ChannelId::One));
    assert!(!c.channel(ChannelId::Two));
    assert!(c.aggregate());
    assert_eq!(hw.relay(ChannelId::One), Some(true));
    assert_eq!(hw.relay(ChannelId::Two), None, "relay 2 must not be written");
    assert_eq!(hw.led(), Some(true), "LED lit, pin driven low");
    assert_eq!(sink.triggers(), vec!["turned_on_switch1"]);
    assert_eq!(sink.capability("onoff"), Some(true));
}

// ── Scenario 2: on/off, toggle 2 ─────────────────────────────

#[test]
fn toggle_second_channel_keeps_aggregate_on() {
    let (mut c, mut hw, mut sink) = setup();
    c.toggle_channel(ChannelId::One, &mut hw, &mut sink);
    hw.clear();
    sink.clear();

    c.toggle_channel(ChannelId::Two, &mut hw, &mut sink);

    assert!(c.channel(ChannelId::Two));
    assert!(c.aggregate());
    assert_eq!(
        hw.calls,
        vec![
            OutputCall::Relay {
                channel: ChannelId::Two,
                on: true
            },
            OutputCall::Led { lit: true },
        ]
    );
    assert_eq!(sink.triggers(), vec!["turned_on_switch2"]);
}

// ── Scenario 3: on/on, toggle 1 ──────────────────────────────

#[test]
fn turning_one_channel_off_leaves_aggregate_on() {
    let (mut c, mut hw, mut sink) = setup();
    c.set_aggregate(true, &mut hw, &mut sink);
    hw.clear();
    sink.clear();

    c.toggle_channel(ChannelId::One, &mut hw, &mut sink);

    assert!(!c.channel(ChannelId::One));
    assert!(c.channel(ChannelId::Two));
    assert!(c.aggregate(), "channel 2 still on");
    assert_eq!(hw.relay(ChannelId::One), Some(false));
    assert_eq!(hw.relay(ChannelId::Two), None);
    assert_eq!(hw.led(), Some(true));
    assert_eq!(sink.triggers(), vec!["turned_off_switch1"]);
}

// ── Scenario 4: set_aggregate(false) from any state ──────────

#[test]
fn aggregate_off_clears_everything() {
    for (a, b) in [(false, false), (true, false), (false, true), (true, true)] {
        let (mut c, mut hw, mut sink) = setup();
        c.set_channel(ChannelId::One, a, &mut hw, &mut sink);
        c.set_channel(ChannelId::Two, b, &mut hw, &mut sink);
        hw.clear();
        sink.clear();

        c.set_aggregate(false, &mut hw, &mut sink);

        assert!(!c.aggregate());
        assert!(c.channel_off(ChannelId::One) && c.channel_off(ChannelId::Two));
        assert_eq!(hw.relay(ChannelId::One), Some(false));
        assert_eq!(hw.relay(ChannelId::Two), Some(false));
        assert_eq!(hw.led(), Some(false), "LED unlit, pin driven high");
        assert_eq!(sink.triggers(), vec!["state", "turned_off"]);
        assert_eq!(sink.capability("onoff"), Some(false));
        assert_eq!(sink.capability("switch.1"), Some(false));
        assert_eq!(sink.capability("switch.2"), Some(false));
    }
}

#[test]
fn aggregate_on_uses_turned_on_trigger() {
    let (mut c, mut hw, mut sink) = setup();
    c.set_aggregate(true, &mut hw, &mut sink);

    assert!(c.channel(ChannelId::One) && c.channel(ChannelId::Two));
    assert_eq!(sink.triggers(), vec!["state", "turned_on"]);
    assert!(
        sink.notifications
            .iter()
            .filter(|n| n.is_trigger())
            .all(Notification::value)
    );
}

// ── Directional asymmetry ────────────────────────────────────

#[test]
fn channel_one_never_emits_channel_two_trigger() {
    let (mut c, mut hw, mut sink) = setup();
    for _ in 0..4 {
        c.toggle_channel(ChannelId::One, &mut hw, &mut sink);
    }
    assert_eq!(
        sink.triggers(),
        vec![
            "turned_on_switch1",
            "turned_off_switch1",
            "turned_on_switch1",
            "turned_off_switch1"
        ]
    );
    assert!(sink.capability("switch.2").is_none());
}

#[test]
fn last_channel_off_turns_led_off() {
    let (mut c, mut hw, mut sink) = setup();
    c.set_channel(ChannelId::Two, true, &mut hw, &mut sink);
    assert_eq!(hw.led(), Some(true));

    c.set_channel(ChannelId::Two, false, &mut hw, &mut sink);
    assert_eq!(hw.led(), Some(false));
    assert_eq!(sink.capability("onoff"), Some(false));
}
