//! Console lines → event queue → service → replies.
//!
//! Exercises the inbound request names exactly as the controller sends
//! them, including the manual LED action.

use crate::mock_hw::{MockHardware, RecordingSink};

use dualrelay::adapters::console::{format_reply, read_requests};
use dualrelay::app::channel::ChannelId;
use dualrelay::app::service::SwitchService;
use dualrelay::config::DeviceConfig;
use dualrelay::events::EventQueue;

fn run(config: &DeviceConfig, script: &str) -> (Vec<String>, MockHardware, RecordingSink) {
    let queue = EventQueue::new();
    read_requests(script.as_bytes(), &queue);

    let mut service = SwitchService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let mut replies = Vec::new();
    queue.drain(|event| {
        if let Some(reply) = service.handle_event(event, &mut hw, &mut sink) {
            replies.push(format_reply(&reply));
        }
    });
    (replies, hw, sink)
}

#[test]
fn requests_then_queries() {
    let script = "\
set-on-channel-2
get-aggregate
get-channel-1-on
get-channel-1-off
get-channel-2-on
set-off-all
get-aggregate
";
    let (replies, hw, sink) = run(&DeviceConfig::default(), script);

    assert_eq!(
        replies,
        vec![
            "get-aggregate true",
            "get-channel-1-on false",
            "get-channel-1-off true",
            "get-channel-2-on true",
            "get-aggregate false",
        ]
    );
    assert_eq!(hw.relay(ChannelId::Two), Some(false));
    assert_eq!(sink.triggers(), vec!["turned_on_switch2", "state", "turned_off"]);
}

#[test]
fn invalid_lines_are_skipped() {
    let script = "toggle-channel-9\nset-aggregate\nflip\ntoggle-channel-1\nget-channel-1-on\n";
    let (replies, _, _) = run(&DeviceConfig::default(), script);
    assert_eq!(replies, vec!["get-channel-1-on true"]);
}

#[test]
fn status_line_reports_json() {
    let (replies, _, _) = run(&DeviceConfig::default(), "set-aggregate on\nstatus\n");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("status {"));
    assert!(replies[0].contains("\"onoff\":true"));
    assert!(replies[0].contains("\"switch2\":true"));
}

#[test]
fn manual_led_only_when_detached() {
    let following = DeviceConfig::default();
    let (_, hw, _) = run(&following, "set-led 1\n");
    assert!(hw.calls.is_empty(), "LED follows output: set-led ignored");

    let manual = DeviceConfig {
        led_follows_output: false,
        ..DeviceConfig::default()
    };
    let (_, hw, _) = run(&manual, "set-led 1\nset-on-all\nset-led 0\n");
    assert_eq!(hw.led(), Some(false));
    assert_eq!(hw.relay(ChannelId::One), Some(true));
}
