//! Error types and formatting
//!
//! The engine error enum covers the fail-fast conditions of both search
//! engines; parse failures are formatted into user-friendly strings with
//! ariadne.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::prelude::Simple;
use std::ops::Range;

use crate::lexer::Token;

/// Errors raised by the search engines
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A tower connective whose left branch is not itself a `^` compound,
    /// e.g. `s!s`
    #[error("malformed tower category: {0}")]
    MalformedTower(String),

    /// A connective outside the calculus at hand
    #[error("connective '{conn}' is not supported here (in {cat})")]
    UnsupportedConnective { conn: String, cat: String },

    /// The search exceeded its step budget
    #[error("proof search budget exhausted after {0} steps")]
    BudgetExhausted(usize),

    /// A composite proof in the trace admits no decomposition; the trace is
    /// inconsistent
    #[error("cannot reconstruct derivation of {sequent} for proof [{proof}]")]
    Reconstruction { sequent: String, proof: String },
}

/// Format lexer errors into a user-friendly string
pub fn format_lexer_errors(source: &str, errors: Vec<Simple<char>>) -> String {
    let mut output = Vec::new();

    for error in errors {
        let span = error.span();
        let report = Report::build(ReportKind::Error, (), span.start)
            .with_message("Lexical error")
            .with_label(
                Label::new(span.clone())
                    .with_message(format_lexer_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single lexer error into a readable message
fn format_lexer_error(error: &Simple<char>) -> String {
    let found = error
        .found()
        .map(|c| format!("'{}'", c))
        .unwrap_or_else(|| "end of input".to_string());

    format!("Unexpected character {}", found)
}

/// Format parser errors into a user-friendly string
///
/// The parser runs over a token stream that carries the lexer's character
/// spans, so error spans index the source directly.
pub fn format_parser_errors(source: &str, errors: Vec<Simple<Token>>) -> String {
    // An empty source has no lines for a report label to point into
    if source.is_empty() {
        return errors
            .iter()
            .map(|error| format!("Parse error: {}\n", format_parser_error(error)))
            .collect();
    }

    let mut output = Vec::new();

    for error in errors {
        let span = error.span();
        let char_span: Range<usize> = span.start.min(source.len())..span.end.min(source.len());

        let report = Report::build(ReportKind::Error, (), char_span.start)
            .with_message("Parse error")
            .with_label(
                Label::new(char_span.clone())
                    .with_message(format_parser_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single parser error into a readable message
fn format_parser_error(error: &Simple<Token>) -> String {
    let found = error
        .found()
        .map(|t| format!("'{}'", t))
        .unwrap_or_else(|| "end of input".to_string());

    let expected: Vec<String> = error
        .expected()
        .filter_map(|opt| opt.as_ref())
        .map(|t| format!("'{}'", t))
        .collect();

    if !expected.is_empty() {
        format!("Unexpected {}, expected one of: {}", found, expected.join(", "))
    } else {
        format!("Unexpected token {}", found)
    }
}
