// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gtfo-format

use thiserror::Error;

/// Errors raised while compiling an output template
///
/// Offsets are byte positions of the opening `{{` in the escaped template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{{` without a matching `}}`
    #[error("unclosed action at offset {offset}")]
    UnclosedAction {
        /// Offset of the action
        offset: usize,
    },

    /// `{{}}` or an action holding only whitespace
    #[error("empty action at offset {offset}")]
    EmptyAction {
        /// Offset of the action
        offset: usize,
    },

    /// An action that is not a plain field reference
    #[error("unsupported action {action:?} at offset {offset}, expected {{{{.Field}}}}")]
    UnsupportedAction {
        /// Action text between the delimiters
        action: String,
        /// Offset of the action
        offset: usize,
    },

    /// A field reference to a field that does not exist
    #[error("unknown field {field:?} at offset {offset}")]
    UnknownField {
        /// Field name as written
        field: String,
        /// Offset of the action
        offset: usize,
    },
}
