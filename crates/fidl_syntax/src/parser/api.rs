/// Parse FIDL source text into an [`InterfaceFile`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// See [`Parser::parse`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<InterfaceFile, ParseError> {
    Parser::new(source).parse()
}

/// Read `reader` to the end and parse the text.
///
/// ## Errors
/// [`ParseError::Io`] if reading fails (including invalid UTF-8), otherwise as [`parse`].
pub fn parse_reader(mut reader: impl std::io::Read) -> Result<InterfaceFile, ParseError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse(&source)
}
