//! Syntax frontend for Franca-style FIDL interface definitions: scanner, parser, AST, diagnostics.
//!
//! The frontend turns IDL text into an [`ast::InterfaceFile`], which the binding generator and the
//! debug printer consume read-only.
//!
//! ## Notes
//! - This crate is "syntax-only": no duplicate/undefined-type checks and no code generation.
//! - Vocabulary identity (keywords/punctuation) comes from `fidl_core::lang` registries.
//! - Parsing is lenient below the header: unknown top-level content is skipped and malformed
//!   declarations come back partially filled instead of failing the parse.
//!
//! ## Examples
//! ```rust
//! use fidl_syntax::parser;
//!
//! let file = parser::parse("package demo interface Foo { }").unwrap();
//! assert_eq!(file.package.name, "demo");
//! assert_eq!(file.interface.name, "Foo");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
