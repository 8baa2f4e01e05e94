// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gtfo-parser

use thiserror::Error;

/// Errors that abort parsing of a `go test -json` stream
///
/// Both variants are fatal: the stream is expected to come from a compliant
/// producer, so no records are returned once one of them is raised.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An input line is not a valid JSON event
    #[error("invalid JSON event on line {line}: {source}")]
    Decode {
        /// 1-based line number in the input stream
        line: usize,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Error reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Line number of a decode failure, if this is one
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
