//! Replacement-template parser using winnow.
//!
//! Templates are the right-hand side of a pattern rule. Handles:
//! - Literal text segments
//! - Group back-references: `\1`..`\9`, `\g<name>`, `\g<12>` (`\g<0>` is
//!   the whole match)
//! - Escaped backslash: `\\`
//! - Case directives: `#UPPER#`, `#LOWER#`, `#MIXED#`
//!
//! Templates are parsed once at translator construction, so a malformed
//! template is rejected before it can ever be applied to an input.

use regex::Captures;
use thiserror::Error;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

/// An error that occurred while parsing a replacement template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A syntax error with location information.
    #[error("template syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },
}

/// Casing applied to expanded text following a case directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Verbatim casing (the initial mode).
    Mixed,
    /// Upper-case everything that follows.
    Upper,
    /// Lower-case everything that follows.
    Lower,
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted as-is (subject to the active case mode).
    Literal(String),
    /// A capture group reference by index; 0 is the whole match.
    Group(usize),
    /// A capture group reference by name.
    NamedGroup(String),
    /// A switch of the active case mode.
    Case(CaseMode),
}

/// A compiled replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Expand this template with the capture groups of one match.
    ///
    /// A group that did not participate in the match expands to the empty
    /// string. Case directives apply to all following literal and
    /// substituted text until the next directive.
    pub fn expand(&self, caps: &Captures<'_>) -> String {
        let mut out = String::new();
        let mut mode = CaseMode::Mixed;
        for segment in &self.segments {
            match segment {
                Segment::Case(m) => mode = *m,
                Segment::Literal(text) => push_cased(&mut out, text, mode),
                Segment::Group(index) => {
                    push_cased(&mut out, caps.get(*index).map_or("", |m| m.as_str()), mode);
                }
                Segment::NamedGroup(name) => {
                    push_cased(&mut out, caps.name(name).map_or("", |m| m.as_str()), mode);
                }
            }
        }
        out
    }
}

fn push_cased(out: &mut String, text: &str, mode: CaseMode) {
    match mode {
        CaseMode::Mixed => out.push_str(text),
        CaseMode::Upper => out.push_str(&text.to_uppercase()),
        CaseMode::Lower => out.push_str(&text.to_lowercase()),
    }
}

/// Parse a replacement template into segments.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => Ok(t),
        Ok(_) => Err(TemplateError::Syntax {
            column: column_of(input, remaining),
            message: match remaining.chars().next() {
                Some('\\') => {
                    r"incomplete escape, expected `\\`, `\1`..`\9`, or `\g<name>`".to_string()
                }
                Some(c) => format!("unexpected character: '{c}'"),
                None => "unexpected end of input".to_string(),
            },
        }),
        Err(e) => Err(TemplateError::Syntax {
            column: column_of(input, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// Calculate the 1-based column from original input and remaining input.
fn column_of(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len() + 1
}

/// Parse a complete template into segments, merging adjacent literals.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (case directive, escape, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((case_directive, escape, literal_char)).parse_next(input)
}

/// Parse a case directive. A `#` that does not open a directive is
/// consumed as a literal by `literal_char`.
fn case_directive(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "#UPPER#".value(Segment::Case(CaseMode::Upper)),
        "#LOWER#".value(Segment::Case(CaseMode::Lower)),
        "#MIXED#".value(Segment::Case(CaseMode::Mixed)),
    ))
    .parse_next(input)
}

/// Parse a backslash escape: `\\`, `\1`..`\9`, or `\g<...>`.
fn escape(input: &mut &str) -> ModalResult<Segment> {
    preceded(
        '\\',
        alt((
            '\\'.value(Segment::Literal("\\".to_string())),
            one_of('1'..='9')
                .map(|c: char| Segment::Group(c.to_digit(10).unwrap_or(0) as usize)),
            group_ref,
        )),
    )
    .parse_next(input)
}

/// Parse an explicit group reference: `g<name>` or `g<12>`.
fn group_ref(input: &mut &str) -> ModalResult<Segment> {
    preceded('g', delimited('<', group_name, '>')).parse_next(input)
}

/// Parse the name or index inside `\g<...>`.
fn group_name(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .map(|name: &str| {
            if name.chars().all(|c| c.is_ascii_digit()) {
                // An index too large to parse can never be a valid group.
                Segment::Group(name.parse().unwrap_or(usize::MAX))
            } else {
                Segment::NamedGroup(name.to_string())
            }
        })
        .parse_next(input)
}

/// Parse a single literal character (anything except a backslash).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['\\'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
