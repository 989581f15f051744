//! Application service: dispatch from the control loop into the core.
//!
//! [`SwitchService`] wraps the [`OutputCoordinator`] and turns queued
//! [`Event`]s (button edges, controller requests and queries) into calls on
//! it.  All I/O flows through port traits injected at call sites, so the
//! whole dispatch path runs against mock adapters in tests.

use log::info;
use serde::Serialize;

use crate::config::DeviceConfig;
use crate::events::{EdgeQueue, Event, EventQueue};

use super::channel::ChannelId;
use super::commands::{Inbound, Query, Request};
use super::coordinator::{OutputCoordinator, OutputPolicy};
use super::ports::{NotificationSink, OutputPort};

/// Answer to a [`Query`], handed back to whichever adapter asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryReply {
    pub query: Query,
    pub value: bool,
}

/// What the control loop hands back to the console after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Query(QueryReply),
    Status(StatusReport),
}

/// Point-in-time state snapshot, serialised for the console `status` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub onoff: bool,
    pub switch1: bool,
    pub switch2: bool,
    pub led_follows_output: bool,
    pub button_switches_output: bool,
    pub events_handled: u32,
}

pub struct SwitchService {
    coordinator: OutputCoordinator,
    events_handled: u32,
}

impl SwitchService {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            coordinator: OutputCoordinator::new(OutputPolicy::from(config)),
            events_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Boot indication while the rest of the system comes up.
    pub fn begin(&self, out: &mut impl OutputPort) {
        self.coordinator.begin(out);
    }

    /// Drive outputs to the owned state; the control loop starts after this.
    pub fn start(&self, out: &mut impl OutputPort) {
        self.coordinator.ready(out);
        info!("SwitchService started");
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Process one queued event.  Queries and status requests produce a
    /// reply; everything else acts through the ports.
    pub fn handle_event(
        &mut self,
        event: Event,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) -> Option<Reply> {
        self.events_handled = self.events_handled.wrapping_add(1);
        match event {
            Event::ButtonEdge { button, released } => {
                self.coordinator.handle_button(button, released, out, sink);
                None
            }
            Event::Inbound(inbound) => self.handle_inbound(inbound, out, sink).map(Reply::Query),
            Event::Status => Some(Reply::Status(self.status())),
        }
    }

    /// One control-loop pass: every pending button edge, then every pending
    /// console event.  Replies are handed to `on_reply` in order.
    pub fn service_queues(
        &mut self,
        edges: &EdgeQueue,
        inbound: &EventQueue,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
        mut on_reply: impl FnMut(Reply),
    ) {
        edges.drain(|event| {
            if let Some(reply) = self.handle_event(event, out, sink) {
                on_reply(reply);
            }
        });
        inbound.drain(|event| {
            if let Some(reply) = self.handle_event(event, out, sink) {
                on_reply(reply);
            }
        });
    }

    pub fn handle_inbound(
        &mut self,
        inbound: Inbound,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) -> Option<QueryReply> {
        match inbound {
            Inbound::Request(request) => {
                self.handle_request(request, out, sink);
                None
            }
            Inbound::Query(query) => Some(QueryReply {
                query,
                value: self.query(query),
            }),
        }
    }

    pub fn handle_request(
        &mut self,
        request: Request,
        out: &mut impl OutputPort,
        sink: &mut impl NotificationSink,
    ) {
        match request {
            Request::SetAggregate(on) => self.coordinator.set_aggregate(on, out, sink),
            Request::ToggleChannel(id) => self.coordinator.toggle_channel(id, out, sink),
            Request::SetChannel(id, on) => self.coordinator.set_channel(id, on, out, sink),
            Request::SetLed(lit) => self.coordinator.set_led(lit, out),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn query(&self, query: Query) -> bool {
        match query {
            Query::Aggregate => self.coordinator.aggregate(),
            Query::ChannelOn(id) => self.coordinator.channel(id),
            Query::ChannelOff(id) => self.coordinator.channel_off(id),
        }
    }

    pub fn status(&self) -> StatusReport {
        let policy = self.coordinator.policy();
        StatusReport {
            onoff: self.coordinator.aggregate(),
            switch1: self.coordinator.channel(ChannelId::One),
            switch2: self.coordinator.channel(ChannelId::Two),
            led_follows_output: policy.led_follows_output,
            button_switches_output: policy.button_switches_output,
            events_handled: self.events_handled,
        }
    }

    pub fn coordinator(&self) -> &OutputCoordinator {
        &self.coordinator
    }
}
