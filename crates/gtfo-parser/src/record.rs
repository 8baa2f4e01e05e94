// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure record types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A `file:line: message` fragment printed by a failing test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Line number, kept as printed
    pub line: String,
    /// First line of the message
    pub message: String,
}

impl Occurrence {
    /// Create an occurrence
    #[must_use]
    pub fn new(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            message: message.into(),
        }
    }
}

/// One failing test reconstructed from the event stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Test name as in `func TestName(t *testing.T)`
    pub name: String,
    /// Import path of the package owning the test
    pub package: String,
    /// Test file of the most recent located message
    pub file: String,
    /// Located messages, in the order they were printed
    pub occurrences: Vec<Occurrence>,
    /// Output that is not a located message, each fragment prefixed with `\n`
    pub overflow: String,
    /// Time of the `run` event that started the test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<FixedOffset>>,
    /// Elapsed seconds reported by the `fail` event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
}

impl FailureRecord {
    /// Start a record for a test of `package`
    #[must_use]
    pub fn for_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }

    /// Line number of the last located message, or `""` if there is none
    ///
    /// This is the line that `file` was taken from.
    #[must_use]
    pub fn line(&self) -> &str {
        self.occurrences
            .last()
            .map(|o| o.line.as_str())
            .unwrap_or_default()
    }

    /// Full output text: located messages joined by newlines, then overflow
    #[must_use]
    pub fn output(&self) -> String {
        let mut out = self
            .occurrences
            .iter()
            .map(|o| o.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&self.overflow);
        out
    }

    pub(crate) fn push_located(&mut self, file: &str, line: &str, message: &str) {
        self.file = file.to_string();
        self.occurrences.push(Occurrence::new(line, message));
    }

    pub(crate) fn push_overflow(&mut self, text: &str) {
        self.overflow.push('\n');
        self.overflow.push_str(text.trim_end_matches('\n'));
    }
}
