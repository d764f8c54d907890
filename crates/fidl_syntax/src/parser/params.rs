/// Parameter groups and parameter lists.
///
/// ```text
/// { in { <param>* } out { <param>* } }     method / broadcast body
/// { <param>* }                             struct body, or the list after in / out
/// [<description>] <Type>[[]] [^]<name>     param
/// ```
impl<'a> Parser<'a> {
    /// Read `in`/`out` groups until something else shows up.
    ///
    /// Braces around the groups are skipped. The first token that is neither a group keyword nor
    /// `{` is pushed back; for a well-formed body that is the closing `}`, which the declaration
    /// loop then skips.
    fn param_groups(&mut self) -> Result<(Vec<Param>, Vec<Param>), ParseError> {
        let mut in_params = Vec::new();
        let mut out_params = Vec::new();
        loop {
            let token = self.scan_ignore_whitespace()?;
            match token.kind {
                TokenKind::Keyword(KeywordId::In) => in_params.extend(self.param_list()?),
                TokenKind::Keyword(KeywordId::Out) => out_params.extend(self.param_list()?),
                TokenKind::Punctuation(PunctuationId::LBrace) => {}
                _ => {
                    self.unscan(token);
                    return Ok((in_params, out_params));
                }
            }
        }
    }

    /// Read `{ <param>* }`.
    ///
    /// Without an opening `{` the list is empty and nothing is consumed. Inside the list a nested
    /// `{` is skipped, and end of input or a declaration keyword ends the list without being
    /// consumed.
    fn param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        let open = self.scan_ignore_whitespace()?;
        if !open.is_punctuation(PunctuationId::LBrace) {
            self.unscan(open);
            return Ok(params);
        }

        loop {
            let token = self.scan_ignore_whitespace()?;
            if token.is_punctuation(PunctuationId::RBrace) {
                break;
            }
            if token.is_punctuation(PunctuationId::LBrace) {
                continue;
            }
            if token.is_eof() || token.starts_declaration() {
                self.unscan(token);
                break;
            }
            self.unscan(token);
            if let Some(param) = self.param()? {
                params.push(param);
            }
        }

        Ok(params)
    }

    /// Read one parameter.
    ///
    /// Returns `None` when the next token cannot start a parameter. That token is dropped,
    /// unless it ends the enclosing list (`}`, end of input, a declaration keyword), in which case
    /// it is pushed back. Either way at least one token is consumed or the list can end, so the
    /// caller always makes progress.
    fn param(&mut self) -> Result<Option<Param>, ParseError> {
        let mut token = self.scan_ignore_whitespace()?;
        let mut description = String::new();
        if token.kind == TokenKind::Description {
            description = token.literal;
            token = self.scan_ignore_whitespace()?;
        }

        if token.kind != TokenKind::Ident {
            if token.is_punctuation(PunctuationId::RBrace) || token.is_eof() || token.starts_declaration() {
                self.unscan(token);
            } else {
                tracing::debug!(token = %token, "dropping token that cannot start a parameter");
            }
            return Ok(None);
        }

        let ty = token.literal;
        let is_array = self.array_marker()?;

        let mut change_notification = false;
        let token = self.scan_ignore_whitespace()?;
        if token.is_punctuation(PunctuationId::Circumflex) {
            change_notification = true;
        } else {
            self.unscan(token);
        }
        let name = self.name()?;

        Ok(Some(Param {
            description,
            ty,
            name,
            is_array,
            change_notification,
        }))
    }
}
