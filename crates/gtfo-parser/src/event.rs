// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Events from `go test -json`
//!
//! Each input line decodes to one [`Event`]. The Go encoder writes field names
//! in PascalCase (`{"Action":"run","Package":"example.com/pkg","Test":"TestX"}`);
//! lower-case names are accepted as well. Every field is optional, and an absent
//! or `null` field is equivalent to its zero value. `Time` is informational: a
//! value that is not RFC 3339 decodes to `None` instead of failing the line.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;

/// Lifecycle action carried by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// A test started running
    Run,
    /// The test or package printed output
    Output,
    /// The test or package passed
    Pass,
    /// The test or package failed
    Fail,
    /// Any other action (`pause`, `cont`, `skip`, `start`, ...)
    #[default]
    #[serde(other)]
    Other,
}

/// One decoded line of the event stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Event {
    /// Time the event was emitted
    #[serde(
        alias = "time",
        deserialize_with = "lenient_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<DateTime<FixedOffset>>,
    /// Lifecycle action
    #[serde(alias = "action", deserialize_with = "null_as_default")]
    pub action: Action,
    /// Import path of the package under test
    #[serde(alias = "package", deserialize_with = "null_as_default")]
    pub package: String,
    /// Test name, empty for package-level events
    #[serde(alias = "test", deserialize_with = "null_as_default")]
    pub test: String,
    /// Raw output fragment, usually ending with a newline
    #[serde(alias = "output", deserialize_with = "null_as_default")]
    pub output: String,
    /// Elapsed seconds, set on `pass` and `fail`
    #[serde(alias = "elapsed", skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
}

impl Event {
    /// Decode a single event
    ///
    /// `line` is the 1-based position of `json` in the stream and is only used
    /// for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Decode` if `json` is not a valid event.
    pub fn decode(json: &str, line: usize) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|source| ParseError::Decode { line, source })
    }

    /// Whether this event belongs to the package rather than a single test
    #[must_use]
    pub fn is_package_level(&self) -> bool {
        self.test.is_empty()
    }
}

/// Decode a field that Go would leave at its zero value when `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode `Time` as a string and keep it only if it is RFC 3339
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|time| DateTime::parse_from_rfc3339(time).ok()))
}
