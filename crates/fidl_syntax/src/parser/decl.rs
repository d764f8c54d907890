/// Declaration loop.
///
/// Each declaration is an optional description followed by a leading keyword. Parsing a
/// declaration never fails on grammar: missing parts are left empty and whatever token did not
/// fit is pushed back for the loop to look at.
impl<'a> Parser<'a> {
    /// Parse the next declaration, skipping tokens that cannot start one.
    ///
    /// Returns `Ok(None)` at end of input.
    fn next_declaration(&mut self) -> Result<Option<Declaration>, ParseError> {
        loop {
            let mut token = self.scan_ignore_whitespace()?;
            let mut description = String::new();
            if token.kind == TokenKind::Description {
                description = token.literal;
                token = self.scan_ignore_whitespace()?;
            }

            let decl = match token.kind {
                TokenKind::Eof => return Ok(None),
                TokenKind::Keyword(KeywordId::Attribute) => Declaration::Attribute(self.attribute(description)?),
                TokenKind::Keyword(KeywordId::Method) => Declaration::Method(self.method(description)?),
                TokenKind::Keyword(KeywordId::Broadcast) => Declaration::Broadcast(self.broadcast(description)?),
                TokenKind::Keyword(KeywordId::Struct) => Declaration::Struct(self.struct_decl(description)?),
                TokenKind::Keyword(KeywordId::TypeDef) => Declaration::TypeDef(self.typedef(description)?),
                TokenKind::Keyword(KeywordId::ArrayDef) => Declaration::ArrayDef(self.arraydef(description)?),
                // Two descriptions in a row: the later one belongs to whatever follows.
                TokenKind::Description => {
                    self.unscan(token);
                    continue;
                }
                _ => {
                    tracing::debug!(token = %token, "skipping token outside any declaration");
                    continue;
                }
            };
            return Ok(Some(decl));
        }
    }

    /// `attribute <Type>[[]] <name>`
    fn attribute(&mut self, description: String) -> Result<Attribute, ParseError> {
        let ty = self.type_name()?;
        let is_array = self.array_marker()?;
        let name = self.name()?;
        Ok(Attribute {
            description,
            ty,
            name,
            is_array,
        })
    }

    /// `method <name> [fireAndForget] { in { ... } out { ... } }`
    fn method(&mut self, description: String) -> Result<Method, ParseError> {
        let name = self.name()?;
        let fire_and_forget = self.eat_keyword(KeywordId::FireAndForget)?;
        let (in_params, out_params) = self.param_groups()?;
        Ok(Method {
            description,
            name,
            fire_and_forget,
            in_params,
            out_params,
        })
    }

    /// `broadcast <name> [selective] { out { ... } }`
    fn broadcast(&mut self, description: String) -> Result<Broadcast, ParseError> {
        let name = self.name()?;
        let selective = self.eat_keyword(KeywordId::Selective)?;
        let (in_params, out_params) = self.param_groups()?;
        if !in_params.is_empty() {
            tracing::warn!(broadcast = %name, count = in_params.len(), "broadcasts carry no `in` parameters; dropping them");
        }
        Ok(Broadcast {
            description,
            name,
            selective,
            out_params,
        })
    }

    /// `struct <name> { <fields> }`
    fn struct_decl(&mut self, description: String) -> Result<Struct, ParseError> {
        let name = self.name()?;
        let fields = self.param_list()?;
        Ok(Struct {
            description,
            name,
            fields,
        })
    }

    /// `typedef <name> is <Type>`
    fn typedef(&mut self, description: String) -> Result<TypeDef, ParseError> {
        let name = self.name()?;
        self.linking_word("is")?;
        let aliased_type = self.type_name()?;
        Ok(TypeDef {
            description,
            name,
            aliased_type,
        })
    }

    /// `array <name> of <Type>`
    fn arraydef(&mut self, description: String) -> Result<ArrayDef, ParseError> {
        let name = self.name()?;
        self.linking_word("of")?;
        let element_type = self.type_name()?;
        Ok(ArrayDef {
            description,
            name,
            element_type,
        })
    }
}
