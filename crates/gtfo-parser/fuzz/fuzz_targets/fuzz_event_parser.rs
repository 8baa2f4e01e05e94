// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the event parser
//!
//! Feeds arbitrary input to `EventParser` line by line.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gtfo_parser::EventParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parser = EventParser::new();

        // Process each line - parser should never panic
        for line in input.lines() {
            if parser.process_line(line).is_err() {
                break;
            }
        }

        for record in parser.finish() {
            let _ = record.output();
            let _ = record.line();
        }
    }
});
