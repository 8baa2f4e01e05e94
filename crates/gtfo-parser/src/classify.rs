// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Classification of `output` event text
//!
//! `go test` interleaves framing lines (`=== RUN`, `--- FAIL`, `FAIL\tpkg`)
//! with whatever the tests print. The first four bytes are enough to tell the
//! framing apart; anything else is either a located message such as
//! `"    foo_test.go:42: want 1, got 2\n"` or free text.

use std::sync::LazyLock;

use regex::Regex;

/// Outputs this short or shorter are framing debris
pub const DEBRIS_LEN: usize = 4;

const START_MARKER: &str = "=== ";
const RESULT_MARKER: &str = "--- ";
const AGGREGATE_MARKER: &str = "FAIL";

/// Matches an indented `name_test.go:line: message` fragment
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static LOCATED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:space:]]+([[:word:]]+_test\.go):([[:digit:]]+):[[:space:]](.*)\n$")
        .expect("constant regex pattern is valid")
});

/// A `file:line: message` fragment borrowed from the output text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedMessage<'a> {
    /// Test file name, e.g. `foo_test.go`
    pub file: &'a str,
    /// Line number as printed
    pub line: &'a str,
    /// Message text without the trailing newline
    pub message: &'a str,
}

impl<'a> LocatedMessage<'a> {
    /// Match `text` against the located-message shape
    #[must_use]
    pub fn find(text: &'a str) -> Option<Self> {
        let caps = LOCATED_PATTERN.captures(text)?;
        Some(Self {
            file: caps.get(1)?.as_str(),
            line: caps.get(2)?.as_str(),
            message: caps.get(3)?.as_str(),
        })
    }
}

/// What an `output` fragment means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind<'a> {
    /// Too short to classify
    Debris,
    /// `=== RUN`, `=== PAUSE`, `=== CONT`: names the current test
    StartMarker,
    /// `--- FAIL`, `--- PASS`, `--- SKIP`: the result line of a test
    ResultMarker,
    /// `FAIL` or `FAIL\tpkg\t0.1s`: the package summary
    AggregateMarker,
    /// A `file_test.go:line: message` fragment
    Located(LocatedMessage<'a>),
    /// Anything else: continuation lines, panics, prints
    FreeText(&'a str),
}

/// Classify the text of an `output` event
#[must_use]
pub fn classify(output: &str) -> OutputKind<'_> {
    if output.len() <= DEBRIS_LEN {
        return OutputKind::Debris;
    }

    if output.starts_with(START_MARKER) {
        OutputKind::StartMarker
    } else if output.starts_with(RESULT_MARKER) {
        OutputKind::ResultMarker
    } else if output.starts_with(AGGREGATE_MARKER) {
        OutputKind::AggregateMarker
    } else if let Some(located) = LocatedMessage::find(output) {
        OutputKind::Located(located)
    } else {
        OutputKind::FreeText(output)
    }
}
