//! Define the reserved keyword vocabulary of the FIDL dialect.
//!
//! Every reserved word has a [`KeywordId`] and one row in [`KEYWORDS`] giving its spelling and
//! category. The scanner classifies identifier runs through [`from_str`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Package` is an identifier, not a keyword.
//! - The array-alias declaration is spelled `array` in source text (`array Names of String`).
//! - Linking words (`is`, `of`, `from`) are deliberately *not* reserved; the parser treats them positionally.
//!
//! ## Examples
//! ```rust
//! use fidl_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("method"), Some(KeywordId::Method));
//! assert_eq!(keywords::from_str("Method"), None);
//! assert_eq!(keywords::category(KeywordId::In), KeywordCategory::Direction);
//! ```

/// Reserved words of the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Header
    Package,
    Import,
    Interface,

    // Version block
    Version,
    Major,
    Minor,

    // Declarations
    Attribute,
    Method,
    Broadcast,
    Struct,
    TypeDef,
    ArrayDef,

    // Parameter directions
    In,
    Out,

    // Modifiers
    Selective,
    FireAndForget,
}

/// Where in the grammar a keyword belongs.
///
/// The parser uses the category to decide which keywords may double as names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Header,
    Version,
    Declaration,
    Direction,
    Modifier,
}

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// All reserved words, grouped by category.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Header
    info(
        KeywordId::Package,
        "package",
        KeywordCategory::Header,
        "Opens the mandatory package clause.",
    ),
    info(
        KeywordId::Import,
        "import",
        KeywordCategory::Header,
        "Imports a (possibly wildcard) path from another model.",
    ),
    info(
        KeywordId::Interface,
        "interface",
        KeywordCategory::Header,
        "Opens the mandatory interface clause.",
    ),
    // Version block
    info(
        KeywordId::Version,
        "version",
        KeywordCategory::Version,
        "Opens the optional interface version block.",
    ),
    info(KeywordId::Major, "major", KeywordCategory::Version, "Major version entry."),
    info(KeywordId::Minor, "minor", KeywordCategory::Version, "Minor version entry."),
    // Declarations
    info(
        KeywordId::Attribute,
        "attribute",
        KeywordCategory::Declaration,
        "Declares an interface attribute (D-Bus property).",
    ),
    info(
        KeywordId::Method,
        "method",
        KeywordCategory::Declaration,
        "Declares a method with in/out parameter groups.",
    ),
    info(
        KeywordId::Broadcast,
        "broadcast",
        KeywordCategory::Declaration,
        "Declares a broadcast (D-Bus signal) with out parameters.",
    ),
    info(
        KeywordId::Struct,
        "struct",
        KeywordCategory::Declaration,
        "Declares a struct with a field group.",
    ),
    info(
        KeywordId::TypeDef,
        "typedef",
        KeywordCategory::Declaration,
        "Declares a type alias: `typedef Name is Type`.",
    ),
    info(
        KeywordId::ArrayDef,
        "array",
        KeywordCategory::Declaration,
        "Declares an array alias: `array Name of Type`.",
    ),
    // Parameter directions
    info(KeywordId::In, "in", KeywordCategory::Direction, "Input parameter group."),
    info(KeywordId::Out, "out", KeywordCategory::Direction, "Output parameter group."),
    // Modifiers
    info(
        KeywordId::Selective,
        "selective",
        KeywordCategory::Modifier,
        "Marks a broadcast as selective.",
    ),
    info(
        KeywordId::FireAndForget,
        "fireAndForget",
        KeywordCategory::Modifier,
        "Marks a method as not expecting a reply.",
    ),
];

/// Source spelling of `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Registry row for `id`.
///
/// ## Panics
/// - If `id` has no registry row (a programming error caught by the guardrail tests).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(entry) => entry,
        None => panic!("INVARIANT: {id:?} is missing from KEYWORDS"),
    }
}

/// Resolve an exact, case-sensitive spelling; `None` for plain identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}
