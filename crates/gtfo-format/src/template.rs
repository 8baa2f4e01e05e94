// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output templates
//!
//! A template is literal text with `{{.Field}}` actions, in the style of Go's
//! `text/template`. Whitespace inside the delimiters is allowed, and the Go trim
//! markers `{{- ` and ` -}}` remove the whitespace before or after an action.
//! Anything else between `{{` and `}}` is rejected when the template is
//! compiled, so rendering cannot fail.

use tracing::debug;

use crate::error::TemplateError;
use crate::fields::{Field, RenderFields};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A compiled output template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// A parsed `{{ ... }}` action
struct Action {
    field: Field,
    trim_before: bool,
    trim_after: bool,
}

impl Template {
    /// Compile `source`
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError` for unclosed, empty or unsupported actions and
    /// for unknown field names.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;
        let mut trim_next = false;

        while let Some(start) = rest.find(OPEN) {
            push_literal(&mut segments, &rest[..start], trim_next);

            let action_offset = offset + start;
            let body_start = start + OPEN.len();
            let body_len = rest[body_start..]
                .find(CLOSE)
                .ok_or(TemplateError::UnclosedAction {
                    offset: action_offset,
                })?;
            let body = &rest[body_start..body_start + body_len];

            let action = parse_action(body, action_offset)?;
            if action.trim_before {
                trim_last_literal(&mut segments);
            }
            segments.push(Segment::Field(action.field));
            trim_next = action.trim_after;

            let consumed = body_start + body_len + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }
        push_literal(&mut segments, rest, trim_next);

        debug!(segments = segments.len(), "compiled output template");
        Ok(Self { segments })
    }

    /// Render the template with `fields`
    #[must_use]
    pub fn render(&self, fields: &RenderFields) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(fields.get(*field)),
            }
        }
        out
    }

    /// Fields referenced by the template, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str, trim_start: bool) {
    let text = if trim_start { text.trim_start() } else { text };
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
}

fn trim_last_literal(segments: &mut Vec<Segment>) {
    if let Some(Segment::Literal(text)) = segments.last_mut() {
        text.truncate(text.trim_end().len());
        if text.is_empty() {
            segments.pop();
        }
    }
}

fn parse_action(body: &str, offset: usize) -> Result<Action, TemplateError> {
    let trim_before = body
        .strip_prefix('-')
        .is_some_and(|b| b.starts_with(char::is_whitespace));
    let trim_after = body
        .strip_suffix('-')
        .is_some_and(|b| b.ends_with(char::is_whitespace));

    let mut inner = body;
    if trim_before {
        inner = &inner[1..];
    }
    if trim_after && !inner.is_empty() {
        inner = &inner[..inner.len() - 1];
    }
    let inner = inner.trim();

    if inner.is_empty() {
        return Err(TemplateError::EmptyAction { offset });
    }

    let name = inner
        .strip_prefix('.')
        .filter(|name| is_identifier(name))
        .ok_or_else(|| TemplateError::UnsupportedAction {
            action: inner.to_string(),
            offset,
        })?;

    let field = name
        .parse::<Field>()
        .map_err(|()| TemplateError::UnknownField {
            field: name.to_string(),
            offset,
        })?;

    Ok(Action {
        field,
        trim_before,
        trim_after,
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
