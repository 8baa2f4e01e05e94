// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gtfo-parser: failure extraction from `go test -json`
//!
//! This library crate turns the newline-delimited JSON events written by
//! `go test -json` into an ordered list of failing tests, each with the file,
//! line numbers and messages it printed.
//!
//! # Example
//!
//! ```no_run
//! use gtfo_parser::{EventParser, parse_reader};
//!
//! // Parse a complete stream
//! let records = parse_reader(std::io::stdin().lock()).unwrap();
//!
//! // Or feed lines one at a time
//! let mut parser = EventParser::new();
//! parser.process_line(r#"{"Action":"run","Package":"pkg","Test":"TestX"}"#).unwrap();
//! let records = parser.finish();
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod event;
pub mod parser;
pub mod record;

pub use classify::{LocatedMessage, OutputKind, classify};
pub use error::ParseError;
pub use event::{Action, Event};
pub use parser::{EventParser, parse_reader, parse_str};
pub use record::{FailureRecord, Occurrence};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::parser::{EventParser, parse_reader, parse_str};
    pub use crate::record::{FailureRecord, Occurrence};
}
