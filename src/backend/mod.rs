//! Backend: FIDL AST → Rust D-Bus bindings
//!
//! ## Modules
//!
//! - `config` - What to generate ([`GeneratorConfig`], [`GenerationMode`])
//! - `emit` - Token emission, validation with `syn` and formatting with `prettyplease`
//! - `errors` - [`GenerationError`]
//!
//! ## Notes
//!
//! - The generated code targets the `zbus` attribute API; this crate does not depend on `zbus`
//!   itself, it only writes source text.
//! - Generation is pure: it does not read or write files.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod emit;
pub mod errors;

pub use config::{GenerationMode, GeneratorConfig};
pub use emit::BindingGenerator;
pub use errors::GenerationError;
