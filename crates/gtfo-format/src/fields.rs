// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fields available to output templates
//!
//! | Field            | Meaning             | Example                                   |
//! |------------------|---------------------|-------------------------------------------|
//! | `{{.FullPackage}}` | Import path       | `example.com/m/internal/parser`           |
//! | `{{.Package}}`   | Module-relative     | `internal/parser`                         |
//! | `{{.Module}}`    | Module path         | `example.com/m`                           |
//! | `{{.File}}`      | Test file name      | `parser_test.go`                          |
//! | `{{.FullPath}}`  | Import path + file  | `example.com/m/internal/parser/parser_test.go` |
//! | `{{.Path}}`      | Relative file path  | `internal/parser/parser_test.go`          |
//! | `{{.Line}}`      | Line number         | `42`                                      |
//! | `{{.Output}}`    | Test output         | `want 1\ngot 2`                           |

use std::fmt;
use std::str::FromStr;

use gtfo_parser::FailureRecord;

/// A template field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Import path of the package
    FullPackage,
    /// Package path relative to the module
    Package,
    /// Module path
    Module,
    /// Test file name
    File,
    /// Import path joined with the file name
    FullPath,
    /// Relative package path joined with the file name
    Path,
    /// Line number of the last located message
    Line,
    /// Messages followed by unparsed output
    Output,
}

impl Field {
    /// Every field, in documentation order
    pub const ALL: [Field; 8] = [
        Field::FullPackage,
        Field::Package,
        Field::Module,
        Field::File,
        Field::FullPath,
        Field::Path,
        Field::Line,
        Field::Output,
    ];

    /// Name as written in a template
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::FullPackage => "FullPackage",
            Field::Package => "Package",
            Field::Module => "Module",
            Field::File => "File",
            Field::FullPath => "FullPath",
            Field::Path => "Path",
            Field::Line => "Line",
            Field::Output => "Output",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL.into_iter().find(|f| f.name() == s).ok_or(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values substituted into a template for one failure record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFields {
    /// Import path of the package
    pub full_package: String,
    /// Package path with the module prefix removed
    pub package: String,
    /// Module path
    pub module: String,
    /// Test file name
    pub file: String,
    /// `full_package` joined with `file`
    pub full_path: String,
    /// `package` joined with `file`
    pub path: String,
    /// Line number of the last located message
    pub line: String,
    /// Messages followed by unparsed output
    pub output: String,
}

impl RenderFields {
    /// Derive the fields of `record` within `module`
    #[must_use]
    pub fn new(record: &FailureRecord, module: &str) -> Self {
        let prefix = format!("{module}/");
        let package = record
            .package
            .strip_prefix(&prefix)
            .unwrap_or(record.package.as_str())
            .to_string();

        Self {
            full_path: join_path(&record.package, &record.file),
            path: join_path(&package, &record.file),
            full_package: record.package.clone(),
            package,
            module: module.to_string(),
            file: record.file.clone(),
            line: record.line().to_string(),
            output: record.output(),
        }
    }

    /// Value of `field`
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullPackage => &self.full_package,
            Field::Package => &self.package,
            Field::Module => &self.module,
            Field::File => &self.file,
            Field::FullPath => &self.full_path,
            Field::Path => &self.path,
            Field::Line => &self.line,
            Field::Output => &self.output,
        }
    }
}

/// Join slash-separated path parts, skipping empty ones
fn join_path(dir: &str, file: &str) -> String {
    match (dir.trim_end_matches('/'), file) {
        ("", file) => file.to_string(),
        (dir, "") => dir.to_string(),
        (dir, file) => format!("{dir}/{file}"),
    }
}
