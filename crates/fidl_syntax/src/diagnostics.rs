//! Diagnostics for the FIDL frontend.
//!
//! Every fatal condition the scanner or parser can hit is a [`ParseError`] variant. The enum is a
//! `thiserror` error for plain `Display`/`source()` use and a `miette::Diagnostic` so the CLI can
//! render it against the source text with a labelled span.
//!
//! ## Notes
//! - Only the mandatory header sections, version numbers and unterminated descriptions are fatal.
//!   Declaration-level problems never produce a `ParseError`; the parser leaves fields empty instead.

use std::num::ParseIntError;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

/// A fatal scan or parse failure.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// A mandatory grammatical element was missing or out of order.
    #[error("expected {expected}, found {}", describe_found(.found, .literal))]
    #[diagnostic(code(fidl::syntax))]
    Syntax {
        expected: &'static str,
        found: TokenKind,
        literal: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    /// A version `major`/`minor` value was not a valid integer.
    #[error("invalid {field} version `{literal}`: {source}")]
    #[diagnostic(
        code(fidl::number_format),
        help("version entries take a non-negative integer, e.g. `major 1`")
    )]
    NumberFormat {
        field: &'static str,
        literal: String,
        source: ParseIntError,
        #[label("not a valid integer")]
        span: SourceSpan,
    },

    /// A `<**` description was opened but end-of-input came before the closing `**>`.
    #[error("unterminated description: `<**` is never closed by `**>`")]
    #[diagnostic(code(fidl::unterminated_description), help("close the description with `**>`"))]
    UnterminatedDescription {
        #[label("description starts here")]
        span: SourceSpan,
    },

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    #[diagnostic(code(fidl::io))]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn syntax(expected: &'static str, found: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        ParseError::Syntax {
            expected,
            found,
            literal: literal.into(),
            span: span.into(),
        }
    }

    pub fn number_format(field: &'static str, literal: impl Into<String>, source: ParseIntError, span: Span) -> Self {
        ParseError::NumberFormat {
            field,
            literal: literal.into(),
            source,
            span: span.into(),
        }
    }

    pub fn unterminated_description(span: Span) -> Self {
        ParseError::UnterminatedDescription { span: span.into() }
    }

    /// Byte span of the offending input, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Syntax { span, .. }
            | ParseError::NumberFormat { span, .. }
            | ParseError::UnterminatedDescription { span } => {
                Some(Span::new(span.offset(), span.offset() + span.len()))
            }
            ParseError::Io(_) => None,
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

fn describe_found(kind: &TokenKind, literal: &str) -> String {
    match kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Keyword(_) | TokenKind::Punctuation(_) => kind.to_string(),
        _ => format!("{kind} `{literal}`"),
    }
}
