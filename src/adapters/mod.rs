//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements        | Connects to                  |
//! |-------------|-------------------|------------------------------|
//! | `console`   | (inbound)         | UART console → `EventQueue`  |
//! | `device_id` | -                 | eFuse factory MAC            |
//! | `hardware`  | OutputPort        | Relay and LED GPIOs          |
//! | `log_sink`  | NotificationSink  | Serial log output            |
//! | `time`      | Clock             | ESP32 system timer           |

pub mod console;
pub mod device_id;
pub mod hardware;
pub mod log_sink;
pub mod time;
