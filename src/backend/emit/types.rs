//! Type emission: FIDL type references and the type declarations of a file.
//!
//! - Builtins map through `fidl_core::lang::types` (`UInt32` → `u32`, `ByteBuffer` → `Vec<u8>`).
//! - Anything else is a user type, referred to by its last dotted segment in `UpperCamelCase`.
//! - `IsArray` wraps the element type in `Vec<...>`.

use fidl_core::lang::types as fidl_types;
use fidl_core::naming;
use fidl_syntax::ast::{ArrayDef, InterfaceFile, Param, Struct, TypeDef};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::idents;
use crate::backend::{GenerationError, GeneratorConfig};

/// Rust type for a FIDL type reference.
pub(super) fn rust_type(name: &str, is_array: bool) -> Result<TokenStream, GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::InvalidType {
            name: String::new(),
            reason: "missing type name".to_string(),
        });
    }

    let base = match fidl_types::rust_type(name) {
        Some(spelling) => syn::parse_str::<syn::Type>(spelling)
            .map_err(|e| GenerationError::InvalidType {
                name: name.to_string(),
                reason: e.to_string(),
            })?
            .into_token_stream(),
        None => idents::camel("type", naming::last_segment(name))?.ident.into_token_stream(),
    };

    Ok(if is_array { quote! { Vec<#base> } } else { base })
}

pub(super) fn param_type(param: &Param) -> Result<TokenStream, GenerationError> {
    rust_type(&param.ty, param.is_array)
}

/// Return type for a group of out parameters: `()`, `T` or a tuple.
pub(super) fn out_type(params: &[Param]) -> Result<TokenStream, GenerationError> {
    match params {
        [] => Ok(quote! { () }),
        [single] => param_type(single),
        many => {
            let types = many.iter().map(param_type).collect::<Result<Vec<_>, _>>()?;
            Ok(quote! { (#(#types),*) })
        }
    }
}

/// Emit structs, typedefs and array definitions, in that order.
pub(super) fn emit_type_decls(file: &InterfaceFile, config: &GeneratorConfig) -> Result<TokenStream, GenerationError> {
    let structs = file
        .structs
        .iter()
        .map(|s| emit_struct(s, config))
        .collect::<Result<Vec<_>, _>>()?;
    let typedefs = file.typedefs.iter().map(emit_typedef).collect::<Result<Vec<_>, _>>()?;
    let arraydefs = file.arraydefs.iter().map(emit_arraydef).collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #(#structs)*
        #(#typedefs)*
        #(#arraydefs)*
    })
}

fn emit_struct(decl: &Struct, config: &GeneratorConfig) -> Result<TokenStream, GenerationError> {
    let name = idents::camel("struct", &decl.name)?.ident;
    let doc = idents::doc_attrs(&decl.description);

    let serde_derives = if config.serde {
        quote! { , serde::Serialize, serde::Deserialize }
    } else {
        TokenStream::new()
    };

    let mut fields = Vec::with_capacity(decl.fields.len());
    for field in &decl.fields {
        let field_name = idents::snake("field", &field.name)?;
        let ident = &field_name.ident;
        let ty = param_type(field)?;
        let field_doc = idents::doc_attrs(&field.description);
        let rename = if config.serde && field_name.text != field.name {
            let original = &field.name;
            quote! { #[serde(rename = #original)] }
        } else {
            TokenStream::new()
        };
        fields.push(quote! {
            #field_doc
            #rename
            pub #ident: #ty
        });
    }

    Ok(quote! {
        #doc
        #[derive(Debug, Clone, PartialEq, zbus::zvariant::Type #serde_derives)]
        pub struct #name {
            #(#fields),*
        }
    })
}

fn emit_typedef(decl: &TypeDef) -> Result<TokenStream, GenerationError> {
    let name = idents::camel("typedef", &decl.name)?.ident;
    let doc = idents::doc_attrs(&decl.description);
    let ty = rust_type(&decl.aliased_type, false)?;
    Ok(quote! {
        #doc
        pub type #name = #ty;
    })
}

fn emit_arraydef(decl: &ArrayDef) -> Result<TokenStream, GenerationError> {
    let name = idents::camel("array", &decl.name)?.ident;
    let doc = idents::doc_attrs(&decl.description);
    let ty = rust_type(&decl.element_type, true)?;
    Ok(quote! {
        #doc
        pub type #name = #ty;
    })
}
