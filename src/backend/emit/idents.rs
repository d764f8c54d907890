//! Identifier and attribute helpers for emission.
//!
//! FIDL names are converted to Rust casing here and validated before they reach
//! `proc_macro2::Ident::new`, which panics on invalid input.

use fidl_core::lang::rust_keywords;
use fidl_core::naming;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::backend::GenerationError;

/// A FIDL name converted to a Rust identifier.
pub(super) struct RustName {
    pub ident: Ident,
    /// Converted spelling without any `r#` prefix.
    pub text: String,
    /// The name `zbus` would derive from `text` differs from the FIDL name, so the D-Bus name has
    /// to be spelled out with `#[zbus(name = "...")]`.
    pub needs_dbus_name: bool,
}

/// `snake_case` identifier for functions, fields, arguments and modules.
pub(super) fn snake(kind: &'static str, fidl_name: &str) -> Result<RustName, GenerationError> {
    let converted = naming::to_snake_case(fidl_name);
    let needs_dbus_name = naming::to_upper_camel_case(&converted) != fidl_name;
    make(kind, fidl_name, converted, needs_dbus_name)
}

/// `UpperCamelCase` identifier for types and traits.
pub(super) fn camel(kind: &'static str, fidl_name: &str) -> Result<RustName, GenerationError> {
    let converted = naming::to_upper_camel_case(fidl_name);
    let needs_dbus_name = converted != fidl_name;
    make(kind, fidl_name, converted, needs_dbus_name)
}

fn make(
    kind: &'static str,
    fidl_name: &str,
    converted: String,
    needs_dbus_name: bool,
) -> Result<RustName, GenerationError> {
    if !is_identifier(&converted) {
        return Err(GenerationError::invalid_identifier(kind, fidl_name));
    }

    if !rust_keywords::is_keyword(&converted) {
        return Ok(RustName {
            ident: Ident::new(&converted, Span::call_site()),
            text: converted,
            needs_dbus_name,
        });
    }

    if rust_keywords::can_be_raw(&converted) {
        Ok(RustName {
            ident: Ident::new_raw(&converted, Span::call_site()),
            text: converted,
            needs_dbus_name: true,
        })
    } else {
        let text = format!("{converted}_");
        Ok(RustName {
            ident: Ident::new(&text, Span::call_site()),
            text,
            needs_dbus_name: true,
        })
    }
}

/// Non-empty, ASCII alphanumerics and `_`, not starting with a digit, not a lone `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || (first == '_' && name.len() > 1))
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Turn a FIDL description into `#[doc = "..."]` attributes, one per non-empty line.
///
/// A leading `@description:` tag is dropped.
pub(super) fn doc_attrs(description: &str) -> TokenStream {
    let text = description.trim();
    let text = text.strip_prefix("@description:").unwrap_or(text);
    let lines: Vec<String> = text.lines().map(|line| format!(" {}", line.trim())).collect();

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let lines = match (first, last) {
        (Some(first), Some(last)) => &lines[first..=last],
        _ => return TokenStream::new(),
    };
    quote! { #(#[doc = #lines])* }
}

/// `#[zbus(...)]` with the given arguments, or nothing when there are none.
pub(super) fn zbus_attr(args: Vec<TokenStream>) -> TokenStream {
    if args.is_empty() {
        TokenStream::new()
    } else {
        quote! { #[zbus(#(#args),*)] }
    }
}

/// `name = "<fidl name>"` when zbus would otherwise pick a different D-Bus name.
pub(super) fn dbus_name_arg(name: &RustName, fidl_name: &str) -> Option<TokenStream> {
    name.needs_dbus_name.then(|| quote! { name = #fidl_name })
}
