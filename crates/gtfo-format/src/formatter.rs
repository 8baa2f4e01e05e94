// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering of failure records

use gtfo_parser::FailureRecord;

use crate::error::TemplateError;
use crate::escape::escape;
use crate::fields::RenderFields;
use crate::template::Template;

/// Format used when none is configured: `path:line: output` on one line each
pub const DEFAULT_FORMAT: &str = r"{{.Path}}:{{.Line}}: {{.Output}}\n";

/// A compiled format bound to a module
#[derive(Debug, Clone)]
pub struct Formatter {
    template: Template,
    module: String,
}

impl Formatter {
    /// Expand escape sequences in `format` and compile it
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError` if the format does not compile.
    pub fn prepare(format: &str, module: impl Into<String>) -> Result<Self, TemplateError> {
        let template = Template::compile(&escape(format))?;
        Ok(Self {
            template,
            module: module.into(),
        })
    }

    /// Module that package paths are made relative to
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Render one record
    #[must_use]
    pub fn format(&self, record: &FailureRecord) -> String {
        self.template
            .render(&RenderFields::new(record, &self.module))
    }

    /// Render `records` and concatenate the results
    #[must_use]
    pub fn format_all<'a>(&self, records: impl IntoIterator<Item = &'a FailureRecord>) -> String {
        records.into_iter().map(|r| self.format(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtfo_parser::Occurrence;
    use similar_asserts::assert_eq;

    fn record() -> FailureRecord {
        FailureRecord {
            name: "TestX".to_string(),
            package: "module/package".to_string(),
            file: "x_test.go".to_string(),
            occurrences: vec![Occurrence::new("5", "boom")],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_table() {
        let cases = [
            ("No format", "", "", FailureRecord::default(), ""),
            ("Fixed format", "test", "", FailureRecord::default(), "test"),
            (
                "Full package format",
                "{{.FullPackage}}",
                "",
                FailureRecord::for_package("package"),
                "package",
            ),
            (
                "Package format",
                "{{.Package}}",
                "module",
                FailureRecord::for_package("module/package"),
                "package",
            ),
            (
                "Formatting",
                r"{{.Module}}\n{{.Module}}\t{{.Module}}",
                "module",
                FailureRecord::default(),
                "module\nmodule\tmodule",
            ),
        ];

        for (description, format, module, record, expected) in cases {
            let formatter = Formatter::prepare(format, module).expect(description);
            assert_eq!(formatter.format(&record), expected, "{description}");
        }
    }

    #[test]
    fn test_default_format() {
        let formatter = Formatter::prepare(DEFAULT_FORMAT, "module").expect("compile");
        assert_eq!(formatter.format(&record()), "package/x_test.go:5: boom\n");

        let formatter = Formatter::prepare(DEFAULT_FORMAT, "").expect("compile");
        assert_eq!(formatter.format(&record()), "module/package/x_test.go:5: boom\n");
    }

    #[test]
    fn test_error_template() {
        assert!(Formatter::prepare("{{.Missing End }", "").is_err());
    }

    #[test]
    fn test_format_all_concatenates() {
        let formatter = Formatter::prepare(r"{{.Line}}\n", "").expect("compile");
        let mut second = record();
        second.occurrences.push(Occurrence::new("9", "again"));
        assert_eq!(formatter.format_all(&[record(), second]), "5\n9\n");
    }
}
