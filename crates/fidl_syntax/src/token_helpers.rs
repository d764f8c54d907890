//! Token predicates used by the parser.
//!
//! Keywords and punctuation are matched by registry id, never by spelling. The only words compared
//! as text are the unreserved linking words (`from`, `is`, `of`).

use crate::lexer::{Token, TokenKind};
use fidl_core::lang::keywords::{self, KeywordCategory, KeywordId};
use fidl_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        *self == TokenKind::Keyword(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        *self == TokenKind::Punctuation(id)
    }

    /// Return `true` if this token can stand in a name position.
    ///
    /// Keywords that cannot open a section or declaration are accepted, so a parameter called
    /// `version` or `out` still parses.
    pub fn is_name(&self) -> bool {
        match self {
            TokenKind::Ident => true,
            TokenKind::Keyword(id) => !self.starts_declaration() && keywords::category(*id) != KeywordCategory::Header,
            _ => false,
        }
    }

    /// Return `true` for the keywords that open a top-level declaration.
    pub fn starts_declaration(&self) -> bool {
        matches!(self, TokenKind::Keyword(id) if keywords::category(*id) == KeywordCategory::Declaration)
    }
}

impl Token {
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self.kind {
            TokenKind::Punctuation(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Return `true` for an identifier whose literal is exactly `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Ident && self.literal == word
    }

    pub fn is_name(&self) -> bool {
        self.kind.is_name()
    }

    pub fn starts_declaration(&self) -> bool {
        self.kind.starts_declaration()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    fn token(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal, Span::default())
    }

    #[test]
    fn test_names_exclude_structural_keywords() {
        assert!(TokenKind::Ident.is_name());
        assert!(TokenKind::Keyword(KeywordId::Version).is_name());
        assert!(TokenKind::Keyword(KeywordId::Out).is_name());
        assert!(TokenKind::Keyword(KeywordId::Selective).is_name());
        assert!(!TokenKind::Keyword(KeywordId::Method).is_name());
        assert!(!TokenKind::Keyword(KeywordId::Interface).is_name());
        assert!(!TokenKind::Punctuation(PunctuationId::LBrace).is_name());
    }

    #[test]
    fn test_declaration_keywords() {
        for id in [KeywordId::Attribute, KeywordId::Method, KeywordId::ArrayDef] {
            assert!(TokenKind::Keyword(id).starts_declaration());
        }
        assert!(!TokenKind::Keyword(KeywordId::In).starts_declaration());
    }

    #[test]
    fn test_linking_words_compare_literals() {
        assert!(token(TokenKind::Ident, "is").is_word("is"));
        assert!(!token(TokenKind::Ident, "isnt").is_word("is"));
        assert!(!token(TokenKind::Description, "is").is_word("is"));
    }
}
