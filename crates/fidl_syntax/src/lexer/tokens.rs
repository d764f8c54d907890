//! Token types for the FIDL scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for single-character punctuation
//!
//! ## Notes
//! - The literal text always travels with the token (`Token::literal`), including for keywords and
//!   punctuation, so diagnostics can quote exactly what was found.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use fidl_core::lang::keywords::{self, KeywordId};
use fidl_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Runs ==========
    /// Letter followed by letters, digits, `.` or `_`.
    Ident,
    /// Run starting with an ASCII digit, continuing like an identifier (`12`, `1.5`, `2a`).
    Number,
    /// Content of a `<** ... **>` documentation comment, markers stripped.
    Description,
    /// Run of spaces, tabs, carriage returns and newlines.
    Whitespace,

    // ========== Special ==========
    /// Any character the scanner does not recognize.
    Illegal,
    Eof,
}

/// A token with its kind, literal text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The end-of-input token at byte offset `pos`.
    pub fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(pos, pos))
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword `{}`", keywords::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_char(*id)),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Description => write!(f, "description"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Keyword(_) | TokenKind::Punctuation(_) => write!(f, "{}", self.kind),
            _ => write!(f, "{} `{}`", self.kind, self.literal),
        }
    }
}
