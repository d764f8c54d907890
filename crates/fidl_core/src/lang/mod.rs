//! FIDL language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, punctuation,
//! builtin FIDL types and the Rust reserved words the code generator has to escape.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings and
//! metadata via registry tables instead of comparing strings throughout the frontend.
//!
//! ## Examples
//! ```rust
//! use fidl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("package"), Some(KeywordId::Package));
//! assert_eq!(keywords::as_str(KeywordId::ArrayDef), "array");
//! ```

pub mod keywords;
pub mod punctuation;
pub mod rust_keywords;
pub mod types;
