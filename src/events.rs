//! Control-loop event queue.
//!
//! Events are produced by:
//! - Button callbacks (confirmed press/release edges), on the control thread
//! - The console reader thread (controller requests, queries, status)
//!
//! Each producer has its own queue.  Button edges go to an [`EdgeQueue`]
//! that only the control thread touches and that is emptied on every pass,
//! so console traffic can never displace a press.  Both are consumed by the
//! main control loop in FIFO order, edges first, and every mutation of the
//! output state runs to completion before the next one starts.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │ Buttons     │────▶│  EdgeQueue   │──┐   ┌──────────────┐
//! └─────────────┘     └──────────────┘  ├──▶│  Main Loop   │
//! ┌─────────────┐     ┌──────────────┐  │   │  (consumer)  │
//! │ Console     │────▶│  EventQueue  │──┘   └──────────────┘
//! └─────────────┘     └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::commands::Inbound;

/// Maximum number of pending console events.
pub const EVENT_QUEUE_CAP: usize = 16;

/// Pending button edges.  Each button confirms at most one edge per poll
/// and the queue is drained after every poll of both buttons.
pub const EDGE_QUEUE_CAP: usize = 4;

/// Work items for the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A button confirmed a debounced edge.
    ButtonEdge { button: u8, released: bool },
    /// A request or query from the controller side.
    Inbound(Inbound),
    /// Console asked for a full state snapshot.
    Status,
}

/// Bounded multi-producer queue feeding the control loop.
///
/// `const`-constructible so the firmware can keep one in a `static` shared
/// between the control loop and the console reader thread.
pub struct BoundedQueue<const N: usize> {
    channel: Channel<CriticalSectionRawMutex, Event, N>,
}

/// Queue fed by the console reader.
pub type EventQueue = BoundedQueue<EVENT_QUEUE_CAP>;

/// Queue fed by the button callbacks.
pub type EdgeQueue = BoundedQueue<EDGE_QUEUE_CAP>;

impl<const N: usize> BoundedQueue<N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue an event without blocking.
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: Event) -> bool {
        self.channel.try_send(event).is_ok()
    }

    /// Pop the next event, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<Event> {
        self.channel.try_receive().ok()
    }

    /// Drain all pending events into a callback, in FIFO order.
    ///
    /// Events pushed by the handler itself are processed in the same call.
    pub fn drain(&self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }
}

impl<const N: usize> Default for BoundedQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
