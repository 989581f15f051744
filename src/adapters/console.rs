//! Serial console request adapter.
//!
//! Stands in for the controller's inbound side: each line on the console
//! is `<name> [value]`, using the same action and condition names the
//! controller registers.  Parsed lines are queued for the control loop;
//! the reader thread never touches output state itself.
//!
//! ```text
//! > toggle-channel-1
//! > get-aggregate
//! get-aggregate true
//! > status
//! status {"onoff":true,"switch1":true,"switch2":false,...}
//! ```

use std::io::{self, BufRead, Read, Write};
use std::thread::JoinHandle;

use log::{info, warn};

use crate::app::commands::{Inbound, RequestError};
use crate::app::service::Reply;
use crate::error::Result;
use crate::events::{Event, EventQueue};

/// Stack for the reader thread; line parsing needs very little.
const READER_STACK_BYTES: usize = 4 * 1024;

/// Longest line accepted from the console.
pub const MAX_LINE_LEN: usize = 64;

/// Most bytes buffered for one line: the longest accepted line plus `\r\n`.
const LINE_BUF_BYTES: usize = MAX_LINE_LEN + 2;

/// Parse one console line into a queueable event.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.len() > MAX_LINE_LEN {
        return Err(RequestError::LineTooLong.into());
    }

    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let value = words.next();
    if words.next().is_some() {
        return Err(RequestError::TrailingInput.into());
    }

    if name == "status" {
        return Ok(Some(Event::Status));
    }
    let inbound = Inbound::parse(name, value)?;
    Ok(Some(Event::Inbound(inbound)))
}

/// Render a reply the way the console prints it.
pub fn format_reply(reply: &Reply) -> String {
    match reply {
        Reply::Query(q) => format!("{} {}", q.query.name(), q.value),
        Reply::Status(status) => match serde_json::to_string(status) {
            Ok(json) => format!("status {json}"),
            Err(e) => format!("status error: {e}"),
        },
    }
}

/// Print a reply on the console.
pub fn respond(reply: &Reply) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", format_reply(reply)) {
        warn!("console: reply dropped ({})", e);
    }
}

/// What one bounded read produced.
#[derive(Debug, PartialEq, Eq)]
enum RawLine {
    Line,
    TooLong,
    Eof,
}

/// Read one line into `buf`, holding at most [`LINE_BUF_BYTES`].  The tail
/// of an over-long line is consumed and thrown away.
fn read_line_bounded(input: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<RawLine> {
    buf.clear();
    let n = input
        .by_ref()
        .take(LINE_BUF_BYTES as u64)
        .read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(RawLine::Eof);
    }
    if buf.last() == Some(&b'\n') || n < LINE_BUF_BYTES {
        return Ok(RawLine::Line);
    }
    skip_rest_of_line(input)?;
    Ok(RawLine::TooLong)
}

fn skip_rest_of_line(input: &mut impl BufRead) -> io::Result<()> {
    loop {
        let available = match input.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(());
        }
        if let Some(end) = available.iter().position(|&b| b == b'\n') {
            input.consume(end + 1);
            return Ok(());
        }
        let len = available.len();
        input.consume(len);
    }
}

/// Read lines from `input` until EOF, queueing every valid request.
///
/// Rejected lines (noise, over-long, unknown names) are logged and skipped;
/// only EOF or a failing stream ends the loop.
pub fn read_requests(mut input: impl BufRead, queue: &EventQueue) {
    let mut buf = Vec::with_capacity(LINE_BUF_BYTES);
    loop {
        let parsed: Result<Option<Event>> = match read_line_bounded(&mut input, &mut buf) {
            Ok(RawLine::Eof) => break,
            Ok(RawLine::TooLong) => Err(RequestError::LineTooLong.into()),
            Ok(RawLine::Line) => match core::str::from_utf8(&buf) {
                Ok(line) => parse_line(line),
                Err(_) => Err(RequestError::NotText.into()),
            },
            Err(e) => {
                warn!("console: read failed ({})", e);
                break;
            }
        };
        match parsed {
            Ok(Some(event)) => {
                if !queue.push(event) {
                    warn!("console: event queue full, {:?} dropped", event);
                }
            }
            Ok(None) => {}
            Err(e) => warn!(
                "console: '{}' rejected: {}",
                String::from_utf8_lossy(&buf).trim(),
                e
            ),
        }
    }
    info!("console: input closed");
}

/// Spawn the reader thread on stdin (the UART console on target).
pub fn spawn_reader(queue: &'static EventQueue) -> io::Result<JoinHandle<()>> {
    info!("console: reader started");
    std::thread::Builder::new()
        .name("console".into())
        .stack_size(READER_STACK_BYTES)
        .spawn(move || read_requests(io::stdin().lock(), queue))
}
