// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Escape sequences in user-supplied formats
//!
//! Shells make it awkward to pass a real newline in a flag value, so the
//! two-character sequences `\n`, `\r` and `\t` are expanded into the control
//! characters before the template is compiled. `\r\n` follows from the first
//! two.

const ESCAPES: [(&str, &str); 3] = [(r"\n", "\n"), (r"\r", "\r"), (r"\t", "\t")];

/// Expand `\n`, `\r` and `\t` into their control characters
#[must_use]
pub fn escape(format: &str) -> String {
    ESCAPES
        .iter()
        .fold(format.to_string(), |acc, (literal, control)| {
            acc.replace(literal, control)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_escape() {
        let cases = [
            ("", ""),
            ("abcd", "abcd"),
            (r"a\nb", "a\nb"),
            (r"a\nb\tc", "a\nb\tc"),
            (r"a\r\nb", "a\r\nb"),
            ("a\nb", "a\nb"),
        ];

        for (format, expected) in cases {
            assert_eq!(escape(format), expected, "format {format:?}");
        }
    }

    #[test]
    fn test_escape_leaves_other_sequences() {
        assert_eq!(escape(r"a\\b\x"), r"a\\b\x");
    }
}
