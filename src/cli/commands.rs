//! The actions behind the CLI flags: read a FIDL file, then lex it, or parse it and write bindings.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};

use crate::ast::InterfaceFile;
use crate::backend::{BindingGenerator, GeneratorConfig};
use crate::debug;
use crate::diagnostics::ParseError;
use crate::lexer::{self, TokenKind};
use crate::parser;

use super::{CliError, CliResult, DebugFormat, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Settings for [`generate_file`], collected from the CLI flags.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config: GeneratorConfig,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Dump the AST to stderr in this format before generating.
    pub debug: Option<DebugFormat>,
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Parse source text, rendering a failure as a diagnostic against the named file.
pub fn parse_source(file_path: &Path, source: &str) -> CliResult<InterfaceFile> {
    parser::parse(source).map_err(|err| CliError::failure(render_parse_error(file_path, source, err)))
}

/// Render a parse error with `miette`'s report handler, labelled against the source.
pub fn render_parse_error(file_path: &Path, source: &str, err: ParseError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(file_path.display().to_string(), source.to_string()));
    format!("{report:?}")
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|err| CliError::failure(render_parse_error(file_path, &source, err)))?;

    for tok in tokens.iter().filter(|t| t.kind != TokenKind::Whitespace) {
        println!("{:>5}..{:<5} {:<24} {:?}", tok.span.start, tok.span.end, tok.kind.to_string(), tok.literal);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a FIDL file and generate bindings for it.
pub fn generate_file(file_path: &Path, options: &GenerateOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let code = generate_source(file_path, &source, options)?;
    write_output(options.output.as_deref(), &code)?;
    Ok(ExitCode::SUCCESS)
}

/// Parse `source` and generate bindings, dumping the AST to stderr first if requested.
pub fn generate_source(file_path: &Path, source: &str, options: &GenerateOptions) -> CliResult<String> {
    let file = parse_source(file_path, source)?;

    if let Some(format) = options.debug {
        eprintln!("{}", render_debug(&file, format)?);
    }

    BindingGenerator::new(options.config.clone())
        .generate(&file)
        .map_err(|e| CliError::failure(format!("Code generation error: {e}")))
}

/// Render the AST in the requested debug format.
pub fn render_debug(file: &InterfaceFile, format: DebugFormat) -> CliResult<String> {
    match format {
        DebugFormat::Tree => Ok(debug::render_tree(file)),
        DebugFormat::Json => {
            debug::render_json(file).map_err(|e| CliError::failure(format!("Error serializing AST: {e}")))
        }
    }
}

fn write_output(output: Option<&Path>, code: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            fs::write(path, code)
                .map_err(|e| CliError::failure(format!("Error writing file '{}': {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), bytes = code.len(), "wrote bindings");
        }
        None => print!("{code}"),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::GenerationMode;

    const SOURCE: &str = "package org.demo interface Echo { method Ping { in { String text } out { String reply } } }";

    #[test]
    fn test_generate_source_sender() {
        let code = generate_source(Path::new("echo.fidl"), SOURCE, &GenerateOptions::default()).unwrap();
        assert!(code.contains("#[zbus::proxy("), "{code}");
        assert!(code.contains("fn ping(&self, text: String) -> zbus::Result<String>;"), "{code}");
    }

    #[test]
    fn test_generate_source_receiver() {
        let options = GenerateOptions {
            config: GeneratorConfig::new().with_mode(GenerationMode::Receiver),
            ..GenerateOptions::default()
        };
        let code = generate_source(Path::new("echo.fidl"), SOURCE, &options).unwrap();
        assert!(code.contains("pub trait EchoHandler"), "{code}");
        assert!(code.contains("#[zbus::interface(name = \"org.demo.Echo\")]"), "{code}");
    }

    #[test]
    fn test_parse_error_is_rendered_with_file_name() {
        let err = generate_source(Path::new("broken.fidl"), "interface Foo { }", &GenerateOptions::default())
            .unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("expected `package`"), "{}", err.message);
        assert!(err.message.contains("broken.fidl"), "{}", err.message);
    }

    #[test]
    fn test_generation_error_is_reported() {
        let err = generate_source(
            Path::new("nameless.fidl"),
            "package demo interface Foo { method { } }",
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert!(err.message.starts_with("Code generation error:"), "{}", err.message);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.fidl")).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_render_debug_formats() {
        let file = parser::parse(SOURCE).unwrap();
        let tree = render_debug(&file, DebugFormat::Tree).unwrap();
        assert!(tree.starts_with("package org.demo\n"));
        let json = render_debug(&file, DebugFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"Ping\""));
    }
}
