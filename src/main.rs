//! Dual-relay switch firmware: main entry point.
//!
//! Hexagonal architecture around a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter   LogNotificationSink   Esp32TimeAdapter      │
//! │  (OutputPort)      (NotificationSink)    (Clock)               │
//! │  console reader ──▶ EventQueue   EdgeQueue ◀── DebouncedButton │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          SwitchService / OutputCoordinator             │    │
//! │  │          ch1 · ch2 · aggregate · LED policy            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use dualrelay::adapters::console;
use dualrelay::adapters::device_id;
use dualrelay::adapters::hardware::HardwareAdapter;
use dualrelay::adapters::log_sink::LogNotificationSink;
use dualrelay::adapters::time::Esp32TimeAdapter;
use dualrelay::app::ports::Clock;
use dualrelay::app::service::SwitchService;
use dualrelay::config::DeviceConfig;
use dualrelay::drivers::button::DebouncedButton;
use dualrelay::drivers::gpio::GpioPin;
use dualrelay::drivers::hw_init;
use dualrelay::events::{EdgeQueue, Event, EventQueue};
use dualrelay::pins;

/// Filled by the console reader thread, drained by the control loop.
static EVENTS: EventQueue = EventQueue::new();

fn queue_button_edge(edges: &EdgeQueue, button: u8, released: bool) {
    if !edges.push(Event::ButtonEdge { button, released }) {
        warn!("Button {} edge dropped: edge queue full", button);
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("DualRelay v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = DeviceConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Hardware ───────────────────────────────────────────
    hw_init::init_peripherals()?;

    let mut hw = HardwareAdapter::new(
        GpioPin::new(pins::RELAY_1_GPIO),
        GpioPin::new(pins::RELAY_2_GPIO),
        GpioPin::new(pins::LED_GPIO),
    );
    let mut sink = LogNotificationSink::new();
    let clock = Esp32TimeAdapter::new();

    // ── 4. Core ───────────────────────────────────────────────
    let mut service = SwitchService::new(&config);
    service.begin(&mut hw);

    let mac = device_id::read_mac();
    let name = device_id::device_name(&config.device_name_prefix, &mac);
    info!("Device: {} (class {})", name, config.device_class);

    let edges = EdgeQueue::new();
    let mut button_1 = DebouncedButton::new(
        1,
        GpioPin::new(pins::BUTTON_1_GPIO),
        config.debounce_ms,
        |button, released| queue_button_edge(&edges, button, released),
    );
    let mut button_2 = DebouncedButton::new(
        2,
        GpioPin::new(pins::BUTTON_2_GPIO),
        config.debounce_ms,
        |button, released| queue_button_edge(&edges, button, released),
    );
    button_1.initialize();
    button_2.initialize();

    // ── 5. Inbound requests ───────────────────────────────────
    if let Err(e) = console::spawn_reader(&EVENTS) {
        warn!("Console reader unavailable ({}), buttons only", e);
    }

    service.start(&mut hw);
    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        let now_ms = clock.now_ms();
        button_1.poll(now_ms);
        button_2.poll(now_ms);

        service.service_queues(&edges, &EVENTS, &mut hw, &mut sink, |reply| {
            console::respond(&reply);
        });

        if config.poll_interval_ms == 0 {
            std::thread::yield_now();
        } else {
            FreeRtos::delay_ms(config.poll_interval_ms);
        }
    }
}
