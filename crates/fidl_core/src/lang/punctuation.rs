//! Single-character punctuation of the FIDL dialect.
//!
//! Every punctuation token is exactly one character, so the registry is keyed by `char`.
//!
//! ## Notes
//! - `<` is not punctuation on its own: it only matters as the first half of a description opener `<*`.
//! - `*` doubles as the wildcard suffix of an import path and as the description marker character.
//!
//! ## Examples
//! ```rust
//! use fidl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('^'), Some(PunctuationId::Circumflex));
//! assert_eq!(punctuation::as_char(PunctuationId::LBrace), '{');
//! assert_eq!(punctuation::from_char('='), None);
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    /// `*`: wildcard import
    Asterisk,
    Comma,
    /// `"`: opens and closes a quoted import source
    Quote,
    SingleQuote,
    /// `^`: change-notification marker on a parameter name
    Circumflex,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Registry entry: an id and the one character it stands for.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
}

pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo { id: PunctuationId::Asterisk, canonical: '*' },
    PunctuationInfo { id: PunctuationId::Comma, canonical: ',' },
    PunctuationInfo { id: PunctuationId::Quote, canonical: '"' },
    PunctuationInfo { id: PunctuationId::SingleQuote, canonical: '\'' },
    PunctuationInfo { id: PunctuationId::Circumflex, canonical: '^' },
    PunctuationInfo { id: PunctuationId::LBracket, canonical: '[' },
    PunctuationInfo { id: PunctuationId::RBracket, canonical: ']' },
    PunctuationInfo { id: PunctuationId::LBrace, canonical: '{' },
    PunctuationInfo { id: PunctuationId::RBrace, canonical: '}' },
];

/// The character a punctuation id is spelled with.
///
/// ## Panics
/// - If `id` has no registry entry (a programming error caught by the guardrail tests).
pub fn as_char(id: PunctuationId) -> char {
    match PUNCTUATION.iter().find(|p| p.id == id) {
        Some(entry) => entry.canonical,
        None => panic!("INVARIANT: {id:?} is missing from PUNCTUATION"),
    }
}

/// Resolve a character to its punctuation id; `None` for anything else.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}
