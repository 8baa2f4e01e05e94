// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for output classification

#![no_main]

use libfuzzer_sys::fuzz_target;

use gtfo_parser::classify;

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        let _ = classify(output);
    }
});
