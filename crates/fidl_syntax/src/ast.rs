//! Abstract Syntax Tree definitions for FIDL interface files.
//!
//! The root is [`InterfaceFile`]: the mandatory package and interface headers plus one ordered
//! sequence per declaration kind. The parser builds it once; consumers only read it.
//!
//! ## Notes
//! - Sequences keep source order and are never merged or de-duplicated.
//! - Lenient parsing may leave a field empty (e.g. a parameter whose name was missing). Consumers
//!   that need non-empty names (the code generator) must check.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier text as written in source (dotted names included).
pub type Ident = String;

/// A parsed interface definition file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InterfaceFile {
    pub package: PackageInfo,
    pub interface: InterfaceInfo,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
    pub broadcasts: Vec<Broadcast>,
    pub structs: Vec<Struct>,
    pub typedefs: Vec<TypeDef>,
    pub arraydefs: Vec<ArrayDef>,
}

impl InterfaceFile {
    /// Append a declaration to the sequence for its kind, preserving source order.
    pub fn push(&mut self, decl: Declaration) {
        match decl {
            Declaration::Attribute(a) => self.attributes.push(a),
            Declaration::Method(m) => self.methods.push(m),
            Declaration::Broadcast(b) => self.broadcasts.push(b),
            Declaration::Struct(s) => self.structs.push(s),
            Declaration::TypeDef(t) => self.typedefs.push(t),
            Declaration::ArrayDef(a) => self.arraydefs.push(a),
        }
    }

    /// Total number of declarations across all kinds.
    pub fn declaration_count(&self) -> usize {
        self.attributes.len()
            + self.methods.len()
            + self.broadcasts.len()
            + self.structs.len()
            + self.typedefs.len()
            + self.arraydefs.len()
    }

    /// Fully qualified interface name: `<package>.<interface>`.
    pub fn qualified_name(&self) -> String {
        if self.package.name.is_empty() {
            self.interface.name.clone()
        } else {
            format!("{}.{}", self.package.name, self.interface.name)
        }
    }
}

// ============================================================================
// Header
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PackageInfo {
    /// Dotted package name, e.g. `org.freedesktop`.
    pub name: Ident,
    pub imports: Vec<Import>,
}

/// `import <path>[*] [from "<source>"]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Import {
    /// Imported path; a wildcard import keeps its trailing `*` (`a.b.*`).
    pub path: String,
    /// Source model the path is imported from; empty when absent.
    pub from: String,
}

impl Import {
    pub fn is_wildcard(&self) -> bool {
        self.path.ends_with('*')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InterfaceInfo {
    pub name: Ident,
    pub description: Option<String>,
    pub major_version: u32,
    pub minor_version: u32,
}

// ============================================================================
// Declarations
// ============================================================================

/// One parsed top-level declaration.
///
/// The declaration loop dispatches on the leading keyword and produces one of these; the
/// [`InterfaceFile`] stores them per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Attribute(Attribute),
    Method(Method),
    Broadcast(Broadcast),
    Struct(Struct),
    TypeDef(TypeDef),
    ArrayDef(ArrayDef),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Attribute(a) => &a.name,
            Declaration::Method(m) => &m.name,
            Declaration::Broadcast(b) => &b.name,
            Declaration::Struct(s) => &s.name,
            Declaration::TypeDef(t) => &t.name,
            Declaration::ArrayDef(a) => &a.name,
        }
    }

    /// Keyword-style label for diagnostics and logging.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Declaration::Attribute(_) => "attribute",
            Declaration::Method(_) => "method",
            Declaration::Broadcast(_) => "broadcast",
            Declaration::Struct(_) => "struct",
            Declaration::TypeDef(_) => "typedef",
            Declaration::ArrayDef(_) => "array",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Attribute {
    pub description: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Ident,
    pub name: Ident,
    pub is_array: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Method {
    pub description: String,
    pub name: Ident,
    pub fire_and_forget: bool,
    pub in_params: Vec<Param>,
    pub out_params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Broadcast {
    pub description: String,
    pub name: Ident,
    pub selective: bool,
    pub out_params: Vec<Param>,
}

/// A typed, named entry of a parameter group or struct field group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Param {
    pub description: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Ident,
    pub name: Ident,
    pub is_array: bool,
    /// The name was written with the `^` change-notification marker.
    pub change_notification: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Struct {
    pub description: String,
    pub name: Ident,
    pub fields: Vec<Param>,
}

/// `typedef <name> is <aliased_type>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeDef {
    pub description: String,
    pub name: Ident,
    pub aliased_type: Ident,
}

/// `array <name> of <element_type>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArrayDef {
    pub description: String,
    pub name: Ident,
    pub element_type: Ident,
}

// ============================================================================
// Display (FIDL-like spellings, used in logs and the debug tree)
// ============================================================================

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if self.is_array {
            write!(f, "[]")?;
        }
        write!(f, " ")?;
        if self.change_notification {
            write!(f, "^")?;
        }
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}", self.path)?;
        if !self.from.is_empty() {
            write!(f, " from \"{}\"", self.from)?;
        }
        Ok(())
    }
}
