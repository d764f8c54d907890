//! Scanner for FIDL interface definitions
//!
//! Handles tokenization including:
//! - Keywords (package, interface, method, ...) and dotted identifiers
//! - Number runs (version numbers): a digit followed by identifier characters
//! - `<** ... **>` documentation comments (DESCRIPTION tokens)
//! - Single-character punctuation
//! - Whitespace runs, which are returned as tokens rather than dropped
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::ParseError;
use fidl_core::lang::punctuation;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// The scanner never looks further ahead than one character:
//
// [Start] → peek() → whitespace run | ident run | number run | `<*` description | single char
//                                                                  ↓
//                                                   read until `**`, drop one more char
// ============================================================================

/// Pull-based scanner for FIDL source text.
///
/// Each call to [`Scanner::scan`] produces exactly one token. After the input is exhausted every
/// further call returns an `Eof` token.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// Scan the next token.
    ///
    /// ## Errors
    /// Returns [`ParseError::UnterminatedDescription`] if a `<*` description runs into end-of-input.
    pub fn scan(&mut self) -> Result<Token, ParseError> {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.source.len()));
        };

        let token = match c {
            _ if is_whitespace(c) => self.scan_whitespace(start),
            _ if c.is_ascii_alphabetic() => self.scan_ident(start),
            _ if c.is_ascii_digit() => self.scan_number(start),
            '<' if self.peek() == Some('*') => {
                self.advance();
                return self.scan_description(start);
            }
            _ => match punctuation::from_char(c) {
                Some(id) => self.token(TokenKind::Punctuation(id), start),
                None => self.token(TokenKind::Illegal, start),
            },
        };

        Ok(token)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.source[start..self.current_pos], Span::new(start, self.current_pos))
    }

    // ========================================================================
    // Runs
    // ========================================================================

    fn scan_whitespace(&mut self, start: usize) -> Token {
        self.advance_while(is_whitespace);
        self.token(TokenKind::Whitespace, start)
    }

    fn scan_ident(&mut self, start: usize) -> Token {
        self.advance_while(is_ident_continue);
        let text = &self.source[start..self.current_pos];
        let kind = match keyword_id(text) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        self.token(kind, start)
    }

    /// A digit run, extended over letters, `.` and `_` so `1.5` or `1a` stays one literal and
    /// fails as a number rather than splitting into several tokens.
    fn scan_number(&mut self, start: usize) -> Token {
        self.advance_while(is_ident_continue);
        self.token(TokenKind::Number, start)
    }

    /// Scan the rest of a description; `<*` has already been consumed.
    ///
    /// The character after `<*` (normally the second `*`) is dropped, content runs up to the first
    /// `**`, and the character after the closer (normally `>`) is dropped as well.
    fn scan_description(&mut self, start: usize) -> Result<Token, ParseError> {
        if self.advance().is_none() {
            return Err(ParseError::unterminated_description(Span::new(start, self.current_pos)));
        }

        let content_start = self.current_pos;
        loop {
            let Some(c) = self.advance() else {
                return Err(ParseError::unterminated_description(Span::new(start, self.current_pos)));
            };
            if c == '*' && self.peek() == Some('*') {
                let content_end = self.current_pos - 1;
                self.advance();
                self.advance();
                let content = &self.source[content_start..content_end];
                return Ok(Token::new(
                    TokenKind::Description,
                    content,
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Tokenize a whole source string.
///
/// The result includes whitespace tokens and always ends with a single `Eof` token.
///
/// ## Errors
/// Returns the first scan error (an unterminated description).
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidl_core::lang::keywords::KeywordId;
    use fidl_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn significant(source: &str) -> Vec<(TokenKind, String)> {
        lex(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.literal))
            .collect()
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let tokens = lex(" \t\n  package").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[0].literal, " \t\n  ");
        assert_eq!(tokens[1].kind, TokenKind::Keyword(KeywordId::Package));
    }

    #[test]
    fn test_crlf_is_whitespace() {
        assert_eq!(
            kinds("package\r\ndemo"),
            vec![
                TokenKind::Keyword(KeywordId::Package),
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_dotted_identifier_and_keyword() {
        let tokens = significant("package org.freedesktop_x.v2");
        assert_eq!(tokens[0], (TokenKind::Keyword(KeywordId::Package), "package".to_string()));
        assert_eq!(tokens[1], (TokenKind::Ident, "org.freedesktop_x.v2".to_string()));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = significant("Package PACKAGE package");
        assert_eq!(tokens[0].0, TokenKind::Ident);
        assert_eq!(tokens[1].0, TokenKind::Ident);
        assert_eq!(tokens[2].0, TokenKind::Keyword(KeywordId::Package));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = significant("interfaces methods");
        assert_eq!(tokens[0].0, TokenKind::Ident);
        assert_eq!(tokens[1].0, TokenKind::Ident);
    }

    #[test]
    fn test_description_markers_stripped() {
        let tokens = significant("<**desc**>interface");
        assert_eq!(tokens[0], (TokenKind::Description, "desc".to_string()));
        assert_eq!(tokens[1].0, TokenKind::Keyword(KeywordId::Interface));
    }

    #[test]
    fn test_description_keeps_inner_content_verbatim() {
        let tokens = significant("<** @description: a * b, c **>");
        assert_eq!(tokens[0], (TokenKind::Description, " @description: a * b, c ".to_string()));
    }

    #[test]
    fn test_description_span_covers_markers() {
        let tokens = lex("<**x**>").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 7));
    }

    #[test]
    fn test_unterminated_description_fails() {
        let err = lex("package demo <** never closed").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedDescription { .. }));
        assert_eq!(err.span().map(|s| s.start), Some(13));
    }

    #[test]
    fn test_description_opener_at_end_of_input_fails() {
        assert!(matches!(lex("<*"), Err(ParseError::UnterminatedDescription { .. })));
        assert!(matches!(lex("<**"), Err(ParseError::UnterminatedDescription { .. })));
        assert!(matches!(lex("<** *"), Err(ParseError::UnterminatedDescription { .. })));
    }

    #[test]
    fn test_lone_angle_bracket_is_illegal_and_keeps_next_char() {
        let tokens = significant("<a");
        assert_eq!(tokens[0], (TokenKind::Illegal, "<".to_string()));
        assert_eq!(tokens[1], (TokenKind::Ident, "a".to_string()));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("*,\"'^[]{}"),
            vec![
                TokenKind::Punctuation(PunctuationId::Asterisk),
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Punctuation(PunctuationId::Quote),
                TokenKind::Punctuation(PunctuationId::SingleQuote),
                TokenKind::Punctuation(PunctuationId::Circumflex),
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::Punctuation(PunctuationId::RBracket),
                TokenKind::Punctuation(PunctuationId::LBrace),
                TokenKind::Punctuation(PunctuationId::RBrace),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_run() {
        let tokens = significant("major 12");
        assert_eq!(tokens[1], (TokenKind::Number, "12".to_string()));
    }

    #[test]
    fn test_illegal_characters() {
        let tokens = significant("= / é");
        assert_eq!(tokens[0], (TokenKind::Illegal, "=".to_string()));
        assert_eq!(tokens[1], (TokenKind::Illegal, "/".to_string()));
        assert_eq!(tokens[2], (TokenKind::Illegal, "é".to_string()));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.scan().unwrap().kind, TokenKind::Ident);
        for _ in 0..3 {
            assert_eq!(scanner.scan().unwrap().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_number_run_swallows_trailing_word_characters() {
        let tokens = significant("major 1.5 minor 2a 3");
        assert_eq!(tokens[1], (TokenKind::Number, "1.5".to_string()));
        assert_eq!(tokens[3], (TokenKind::Number, "2a".to_string()));
        assert_eq!(tokens[4], (TokenKind::Number, "3".to_string()));
    }

    #[test]
    fn test_scan_yields_tokens_in_order() {
        let mut scanner = Scanner::new("a b");
        let first = scanner.scan().unwrap();
        assert_eq!((first.kind, first.literal.as_str()), (TokenKind::Ident, "a"));
        assert_eq!(scanner.scan().unwrap().kind, TokenKind::Whitespace);
        assert_eq!(scanner.scan().unwrap().kind, TokenKind::Ident);
        assert!(scanner.scan().unwrap().is_eof());
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }
}
