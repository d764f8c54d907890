/// Mandatory header sections: `package` (with imports) and `interface` (with version).
///
/// Unlike the declaration loop, every grammatical slip here is fatal.
impl<'a> Parser<'a> {
    /// `package <name> (import ...)*`
    fn package_section(&mut self) -> Result<PackageInfo, ParseError> {
        self.expect_keyword(KeywordId::Package, "`package`")?;
        let name = self.expect_ident("package name")?;

        let mut imports = Vec::new();
        while self.eat_keyword(KeywordId::Import)? {
            imports.push(self.import_clause()?);
        }

        Ok(PackageInfo { name, imports })
    }

    /// `import <path>[*] [from <source>]`; the `import` keyword is already consumed.
    fn import_clause(&mut self) -> Result<Import, ParseError> {
        let mut path = self.expect_ident("import path")?;

        let mut token = self.scan_ignore_whitespace()?;
        if token.is_punctuation(PunctuationId::Asterisk) {
            path.push('*');
            token = self.scan_ignore_whitespace()?;
        }

        let from = if token.is_word("from") {
            self.import_source()?
        } else if let Some(quote) = quote_of(&token) {
            self.quoted(quote)?
        } else {
            self.unscan(token);
            String::new()
        };

        Ok(Import { path, from })
    }

    /// The source model after `from`: a quoted string or a single bare identifier.
    fn import_source(&mut self) -> Result<String, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        if let Some(quote) = quote_of(&token) {
            return self.quoted(quote);
        }
        if token.kind == TokenKind::Ident {
            return Ok(token.literal);
        }
        tracing::warn!(found = %token, "import `from` without a source model");
        self.unscan(token);
        Ok(String::new())
    }

    /// Concatenate raw token text up to the closing `quote`.
    ///
    /// Whitespace inside the quotes is kept. End of input terminates the string.
    fn quoted(&mut self, quote: PunctuationId) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            let token = self.scan()?;
            if token.is_punctuation(quote) {
                return Ok(text);
            }
            if token.is_eof() {
                tracing::warn!("unterminated quoted import source");
                self.unscan(token);
                return Ok(text);
            }
            text.push_str(&token.literal);
        }
    }

    /// `[<description>] interface <name> { [version { major N minor N }]`
    fn interface_section(&mut self) -> Result<InterfaceInfo, ParseError> {
        let mut token = self.scan_ignore_whitespace()?;
        let mut description = None;
        if token.kind == TokenKind::Description {
            description = Some(token.literal);
            token = self.scan_ignore_whitespace()?;
        }
        if !token.is_keyword(KeywordId::Interface) {
            return Err(unexpected("`interface`", token));
        }

        let name = self.expect_ident("interface name")?;
        self.expect_punct(PunctuationId::LBrace, "`{` after the interface name")?;
        let (major_version, minor_version) = self.version_block()?;

        Ok(InterfaceInfo {
            name,
            description,
            major_version,
            minor_version,
        })
    }

    /// Optional `version { major N minor N }`; both entries are optional and may come in any order.
    fn version_block(&mut self) -> Result<(u32, u32), ParseError> {
        if !self.eat_keyword(KeywordId::Version)? {
            return Ok((0, 0));
        }
        self.expect_punct(PunctuationId::LBrace, "`{` after `version`")?;

        let (mut major, mut minor) = (0, 0);
        loop {
            let token = self.scan_ignore_whitespace()?;
            match token.kind {
                TokenKind::Keyword(KeywordId::Major) => major = self.version_number("major")?,
                TokenKind::Keyword(KeywordId::Minor) => minor = self.version_number("minor")?,
                TokenKind::Punctuation(PunctuationId::RBrace) => return Ok((major, minor)),
                _ => return Err(unexpected("`major`, `minor` or `}`", token)),
            }
        }
    }

    fn version_number(&mut self, field: &'static str) -> Result<u32, ParseError> {
        let token = self.scan_ignore_whitespace()?;
        token
            .literal
            .parse::<u32>()
            .map_err(|source| ParseError::number_format(field, token.literal.clone(), source, token.span))
    }
}

/// Quote punctuation that opens a quoted import source.
fn quote_of(token: &Token) -> Option<PunctuationId> {
    match token.punctuation_id() {
        Some(id @ (PunctuationId::Quote | PunctuationId::SingleQuote)) => Some(id),
        _ => None,
    }
}
