//! Provide the canonical vocabulary of the Franca IDL dialect and the pure naming helpers shared by the
//! syntax frontend and the binding generator.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no AST types.
//! - Registries are `const` tables plus lookup functions, so every lookup is a pure function.

pub mod lang;
pub mod naming;
