/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - The parser pulls tokens from the scanner one at a time. There is no token vector and no
///   lookahead beyond the single pushback slot.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// Token handed back with `unscan`; the next read returns it instead of scanning.
    pending: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over FIDL source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            pending: None,
        }
    }

    /// Parse the whole input into an [`InterfaceFile`].
    ///
    /// ## Errors
    /// - [`ParseError::Syntax`] when the package or interface header is missing or malformed.
    /// - [`ParseError::NumberFormat`] when a version entry is not an integer.
    /// - [`ParseError::UnterminatedDescription`] from the scanner.
    ///
    /// Nothing after the interface header is fatal: unrecognized top-level tokens are skipped.
    pub fn parse(mut self) -> Result<InterfaceFile, ParseError> {
        let mut file = InterfaceFile {
            package: self.package_section()?,
            interface: self.interface_section()?,
            ..InterfaceFile::default()
        };

        while let Some(decl) = self.next_declaration()? {
            tracing::trace!(kind = decl.kind_str(), name = decl.name(), "parsed declaration");
            file.push(decl);
        }

        tracing::debug!(
            package = %file.package.name,
            interface = %file.interface.name,
            declarations = file.declaration_count(),
            "parsed interface file"
        );
        Ok(file)
    }
}
