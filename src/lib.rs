#![forbid(unsafe_code)]
//! fidlgen: Rust D-Bus bindings from Franca-style FIDL interface definitions
//!
//! This crate provides the generator tool: it parses FIDL with `fidl_syntax`, then emits either
//! client (sender) or server (receiver) bindings for the `zbus` attribute API.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod debug;
pub mod version;

pub use fidl_syntax::ast;
pub use fidl_syntax::diagnostics;
pub use fidl_syntax::lexer;
pub use fidl_syntax::parser;

pub use backend::{BindingGenerator, GenerationError, GenerationMode, GeneratorConfig};
