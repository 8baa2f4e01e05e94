// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure extraction from `go test -json` output
//!
//! The stream for a failing test looks like this:
//!
//! ```text
//! Action | Output
//! ---    | ---
//! run    |
//! output | === RUN   TestX
//! output |     x_test.go:6: a
//! output |     x_test.go:7: b
//! output | --- FAIL: TestX (0.00s)
//! fail   |
//! output | FAIL
//! output | FAIL    example.com/m/pkg  0.105s
//! fail   |
//! ```
//!
//! `run` opens a test lifetime, `=== ` names it, located messages and free text
//! accumulate, and the first `fail` of the lifetime emits the record. Events
//! that arrive after the emission (such as the package summary above) keep
//! updating the emitted record. A lifetime that never fails is dropped on the
//! next `run`.
//!
//! # Example
//!
//! ```
//! use gtfo_parser::parse_str;
//!
//! let stream = r#"{"Action":"run","Package":"pkgA","Test":"TestX"}
//! {"Action":"output","Package":"pkgA","Test":"TestX","Output":"=== RUN   TestX\n"}
//! {"Action":"output","Package":"pkgA","Test":"TestX","Output":"    x_test.go:5: boom\n"}
//! {"Action":"fail","Package":"pkgA","Test":"TestX"}"#;
//!
//! let records = parse_str(stream).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].file, "x_test.go");
//! assert_eq!(records[0].line(), "5");
//! ```

use std::io::BufRead;

use tracing::{debug, trace};

use crate::classify::{OutputKind, classify};
use crate::error::ParseError;
use crate::event::{Action, Event};
use crate::record::FailureRecord;

/// Parse a complete event stream from a reader
///
/// # Errors
///
/// Returns `ParseError::Decode` on the first line that is not a valid event and
/// `ParseError::Io` if reading fails. No records are returned in either case.
pub fn parse_reader(reader: impl BufRead) -> Result<Vec<FailureRecord>, ParseError> {
    let mut parser = EventParser::new();
    for line in reader.lines() {
        parser.process_line(&line?)?;
    }
    Ok(parser.finish())
}

/// Parse a complete event stream held in memory
///
/// # Errors
///
/// Returns `ParseError::Decode` on the first line that is not a valid event.
pub fn parse_str(input: &str) -> Result<Vec<FailureRecord>, ParseError> {
    let mut parser = EventParser::new();
    for line in input.lines() {
        parser.process_line(line)?;
    }
    Ok(parser.finish())
}

/// Incremental parser over `go test -json` lines
#[derive(Debug, Default)]
pub struct EventParser {
    /// Record of the current test lifetime, until it is emitted
    current: FailureRecord,
    /// Index in `records` once the current lifetime has been emitted
    emitted: Option<usize>,
    records: Vec<FailureRecord>,
    lines_read: usize,
}

impl EventParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and apply one line of input
    ///
    /// Returns the record emitted by this line, if any.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Decode` if the line is not a valid event, blank
    /// lines included.
    pub fn process_line(&mut self, line: &str) -> Result<Option<&FailureRecord>, ParseError> {
        self.lines_read += 1;
        let event = Event::decode(line, self.lines_read)?;
        Ok(self.process_event(event))
    }

    /// Apply one decoded event
    ///
    /// Returns the record emitted by this event, if any.
    pub fn process_event(&mut self, event: Event) -> Option<&FailureRecord> {
        trace!(action = ?event.action, package = %event.package, test = %event.test, "event");

        match event.action {
            Action::Run => {
                self.current = FailureRecord::for_package(event.package);
                self.current.started_at = event.time;
                self.emitted = None;
                None
            }
            Action::Fail => self.fail(event.elapsed),
            Action::Output => {
                self.output(&event);
                None
            }
            Action::Pass | Action::Other => None,
        }
    }

    /// Records emitted so far
    #[must_use]
    pub fn records(&self) -> &[FailureRecord] {
        &self.records
    }

    /// Number of input lines read
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Finish parsing and return the emitted records in order
    #[must_use]
    pub fn finish(self) -> Vec<FailureRecord> {
        debug!(
            lines = self.lines_read,
            failures = self.records.len(),
            "finished parsing event stream"
        );
        self.records
    }

    fn fail(&mut self, elapsed: Option<f64>) -> Option<&FailureRecord> {
        if self.emitted.is_some() {
            return None;
        }

        let mut record = std::mem::take(&mut self.current);
        record.elapsed = elapsed;
        debug!(test = %record.name, package = %record.package, "test failed");

        self.emitted = Some(self.records.len());
        self.records.push(record);
        self.records.last()
    }

    fn output(&mut self, event: &Event) {
        match classify(&event.output) {
            OutputKind::StartMarker => self.active().name = event.test.clone(),
            OutputKind::Located(located) => {
                self.active()
                    .push_located(located.file, located.line, located.message);
            }
            OutputKind::FreeText(text) => self.active().push_overflow(text),
            OutputKind::Debris | OutputKind::ResultMarker | OutputKind::AggregateMarker => {}
        }
    }

    /// The record that output of the current lifetime goes to
    fn active(&mut self) -> &mut FailureRecord {
        let Self {
            current,
            emitted,
            records,
            ..
        } = self;
        match emitted.and_then(|i| records.get_mut(i)) {
            Some(record) => record,
            None => current,
        }
    }
}
