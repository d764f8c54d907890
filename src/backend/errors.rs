//! Define error types for AST → Rust binding generation.
//!
//! These errors represent *backend* failures (as opposed to parse errors). Lenient parsing can leave
//! names empty or malformed; the generator refuses to emit code for them instead of guessing.

use thiserror::Error;

/// Error during binding generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A FIDL name cannot be turned into a Rust identifier (empty, or starts with a digit).
    #[error("{kind} name `{name}` cannot be used as a Rust identifier")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// A type reference did not produce a valid Rust type.
    #[error("type `{name}` cannot be mapped to a Rust type: {reason}")]
    InvalidType { name: String, reason: String },

    /// The emitted tokens did not form a valid Rust file.
    #[error("syn parse error: {0}")]
    SynParse(#[from] syn::Error),
}

impl GenerationError {
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        GenerationError::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}
