// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gtfo-format: template rendering of failing Go tests
//!
//! This library crate renders the failure records produced by `gtfo-parser`
//! through a user-supplied format such as `{{.Path}}:{{.Line}}: {{.Output}}\n`.
//! See [`fields`] for the available fields.
//!
//! # Example
//!
//! ```
//! use gtfo_format::Formatter;
//! use gtfo_parser::{FailureRecord, Occurrence};
//!
//! let record = FailureRecord {
//!     package: "example.com/m/pkg".to_string(),
//!     file: "x_test.go".to_string(),
//!     occurrences: vec![Occurrence::new("5", "boom")],
//!     ..Default::default()
//! };
//!
//! let formatter = Formatter::prepare(r"{{.Path}}:{{.Line}}: {{.Output}}\n", "example.com/m").unwrap();
//! assert_eq!(formatter.format(&record), "pkg/x_test.go:5: boom\n");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod escape;
pub mod fields;
pub mod formatter;
pub mod template;

pub use error::TemplateError;
pub use escape::escape;
pub use fields::{Field, RenderFields};
pub use formatter::{DEFAULT_FORMAT, Formatter};
pub use template::Template;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TemplateError;
    pub use crate::formatter::{DEFAULT_FORMAT, Formatter};
}
