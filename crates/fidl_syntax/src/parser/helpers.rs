/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Reading tokens (`scan`, `scan_ignore_whitespace`) and handing one back (`unscan`)
/// - Expecting a mandatory keyword or punctuation in the header sections
/// - Lenient readers for names, type references and array markers
impl<'a> Parser<'a> {
    // ========================================================================
    // Reading
    // ========================================================================

    /// Return the next token, taking the pushed-back token first if there is one.
    fn scan(&mut self) -> Result<Token, ParseError> {
        match self.pending.take() {
            Some(token) => Ok(token),
            None => self.scanner.scan(),
        }
    }

    /// Hand `token` back so the next read returns it again.
    ///
    /// Only one token can be pending; pushing back twice without a read in between is a parser bug.
    fn unscan(&mut self, token: Token) {
        assert!(
            self.pending.is_none(),
            "INVARIANT: at most one token is pushed back between reads"
        );
        self.pending = Some(token);
    }

    /// Return the next non-whitespace token.
    fn scan_ignore_whitespace(&mut self) -> Result<Token, ParseError> {
        loop {
            let token = self.scan()?;
            if token.kind != TokenKind::Whitespace {
                return Ok(token);
            }
        }
    }

    // ========================================================================
    // Mandatory tokens (header sections)
    // ========================================================================

    /// Consume the given keyword or fail with a syntax error naming `expected`.
    fn expect_keyword(&mut self, id: KeywordId, expected: &'static str) -> Result<Token, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.is_keyword(id) {
            Ok(token)
        } else {
            Err(unexpected(expected, token))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &'static str) -> Result<Token, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.is_punctuation(id) {
            Ok(token)
        } else {
            Err(unexpected(expected, token))
        }
    }

    /// Consume an identifier and return its text.
    fn expect_ident(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.kind == TokenKind::Ident {
            Ok(token.literal)
        } else {
            Err(unexpected(expected, token))
        }
    }

    // ========================================================================
    // Lenient readers (declarations)
    // ========================================================================

    /// Read a type reference. Anything but an identifier is pushed back and yields `""`.
    fn type_name(&mut self) -> Result<String, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.kind == TokenKind::Ident {
            Ok(token.literal)
        } else {
            self.unscan(token);
            Ok(String::new())
        }
    }

    /// Read a declaration or parameter name. Non-name tokens are pushed back and yield `""`.
    fn name(&mut self) -> Result<String, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.is_name() {
            Ok(token.literal)
        } else {
            self.unscan(token);
            Ok(String::new())
        }
    }

    /// Consume the keyword `id` if it comes next.
    fn eat_keyword(&mut self, id: KeywordId) -> Result<bool, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.is_keyword(id) {
            Ok(true)
        } else {
            self.unscan(token);
            Ok(false)
        }
    }

    /// Read an optional `[]` marker.
    ///
    /// A `[` that is not followed by `]` is dropped and the follower is pushed back.
    fn array_marker(&mut self) -> Result<bool, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if !token.is_punctuation(PunctuationId::LBracket) {
            self.unscan(token);
            return Ok(false);
        }
        let close = self.scan_ignore_whitespace()?;
        if close.is_punctuation(PunctuationId::RBracket) {
            Ok(true)
        } else {
            self.unscan(close);
            Ok(false)
        }
    }

    /// Skip the linking word of `typedef X is T` / `array X of T`.
    ///
    /// Any token in that position is skipped; a different word is only worth a warning.
    fn linking_word(&mut self, word: &'static str) -> Result<(), ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if token.is_eof() {
            self.unscan(token);
            return Ok(());
        }
        if !token.is_word(word) {
            tracing::warn!(expected = word, found = %token, "unexpected linking word; skipping it");
        }
        Ok(())
    }
}

/// Build a syntax error from the token that was found instead.
fn unexpected(expected: &'static str, token: Token) -> ParseError {
    ParseError::syntax(expected, token.kind, token.literal, token.span)
}
