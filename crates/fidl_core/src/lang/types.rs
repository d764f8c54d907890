//! Builtin FIDL type vocabulary.
//!
//! This registry maps the primitive type names of the IDL dialect to the Rust types used by the
//! generated D-Bus bindings. It replaces a process-wide lookup map with a `const` table and pure
//! lookup functions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`String` is builtin, `string` is a user type).
//! - `Float` widens to `f64` because D-Bus has no single-precision floating point type.
//! - Names that are not builtin are user-defined types (structs, typedefs, array aliases).
//!
//! ## Examples
//! ```rust
//! use fidl_core::lang::types::{self, FidlTypeId};
//!
//! assert_eq!(types::from_str("UInt32"), Some(FidlTypeId::UInt32));
//! assert_eq!(types::rust_type("Boolean"), Some("bool"));
//! assert_eq!(types::rust_type("Notification"), None);
//! ```

/// Stable identifier for builtin FIDL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FidlTypeId {
    String,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    ByteBuffer,
}

/// Metadata for a builtin FIDL type.
#[derive(Debug, Clone, Copy)]
pub struct FidlTypeInfo {
    pub id: FidlTypeId,
    pub canonical: &'static str,
    /// Rust spelling used by generated code.
    pub rust: &'static str,
    pub description: &'static str,
}

/// Registry of builtin FIDL types.
pub const FIDL_TYPES: &[FidlTypeInfo] = &[
    info(FidlTypeId::String, "String", "String", "UTF-8 string."),
    info(FidlTypeId::Boolean, "Boolean", "bool", "Boolean value."),
    info(FidlTypeId::Int8, "Int8", "i8", "Signed 8-bit integer."),
    info(FidlTypeId::Int16, "Int16", "i16", "Signed 16-bit integer."),
    info(FidlTypeId::Int32, "Int32", "i32", "Signed 32-bit integer."),
    info(FidlTypeId::Int64, "Int64", "i64", "Signed 64-bit integer."),
    info(FidlTypeId::UInt8, "UInt8", "u8", "Unsigned 8-bit integer."),
    info(FidlTypeId::UInt16, "UInt16", "u16", "Unsigned 16-bit integer."),
    info(FidlTypeId::UInt32, "UInt32", "u32", "Unsigned 32-bit integer."),
    info(FidlTypeId::UInt64, "UInt64", "u64", "Unsigned 64-bit integer."),
    info(FidlTypeId::Float, "Float", "f64", "Floating point value (widened)."),
    info(FidlTypeId::Double, "Double", "f64", "Double precision floating point value."),
    info(FidlTypeId::ByteBuffer, "ByteBuffer", "Vec<u8>", "Opaque byte buffer."),
];

/// Resolve a type name to a [`FidlTypeId`].
pub fn from_str(name: &str) -> Option<FidlTypeId> {
    FIDL_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the canonical spelling for a builtin type.
pub fn as_str(id: FidlTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a builtin type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: FidlTypeId) -> &'static FidlTypeInfo {
    match FIDL_TYPES.iter().find(|t| t.id == id) {
        Some(entry) => entry,
        None => panic!("INVARIANT: {id:?} is missing from FIDL_TYPES"),
    }
}

/// Return the Rust spelling of a builtin FIDL type name, or `None` for user-defined types.
pub fn rust_type(name: &str) -> Option<&'static str> {
    from_str(name).map(|id| info_for(id).rust)
}

const fn info(id: FidlTypeId, canonical: &'static str, rust: &'static str, description: &'static str) -> FidlTypeInfo {
    FidlTypeInfo {
        id,
        canonical,
        rust,
        description,
    }
}
