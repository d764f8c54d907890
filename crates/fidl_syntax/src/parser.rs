//! Parser for FIDL interface definitions
//!
//! Pulls tokens from the [`Scanner`] on demand (with a single token of pushback) and builds an
//! [`InterfaceFile`] following a fixed grammar:
//!
//! 1. `package` clause with zero or more `import` clauses (mandatory, fail-fast)
//! 2. `interface` clause with an optional `version` block (mandatory, fail-fast)
//! 3. a lenient declaration loop (attributes, methods, broadcasts, structs, typedefs, arrays)
//!
//! ## Examples
//!
//! ```rust
//! use fidl_syntax::parser;
//!
//! let source = "package demo interface Foo { method ping { in { String msg } } }";
//! let file = parser::parse(source).unwrap();
//! assert_eq!(file.methods[0].name, "ping");
//! assert_eq!(file.methods[0].in_params[0].ty, "String");
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Scanner, Token, TokenKind};
use fidl_core::lang::keywords::KeywordId;
use fidl_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/header.rs");
include!("parser/decl.rs");
include!("parser/params.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
