//! Fuzz target: `console::parse_line`
//!
//! Feeds arbitrary UTF-8 lines into the console parser and asserts that it
//! never panics and that every accepted line re-parses to the same event.
//!
//! cargo fuzz run fuzz_console_line

#![no_main]

use dualrelay::adapters::console::{MAX_LINE_LEN, parse_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(event)) = parse_line(line) {
        assert!(line.trim().len() <= MAX_LINE_LEN, "over-long line accepted");
        // Parsing is pure: the same input yields the same event.
        assert_eq!(parse_line(line), Ok(Some(event)));
    }
});
