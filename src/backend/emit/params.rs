//! Argument lists built from FIDL parameter groups.

use fidl_syntax::ast::Param;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{idents, types};
use crate::backend::GenerationError;

/// `name: Type` for each parameter.
pub(super) fn typed_args(params: &[Param]) -> Result<Vec<TokenStream>, GenerationError> {
    params
        .iter()
        .map(|param| {
            let ident = idents::snake("parameter", &param.name)?.ident;
            let ty = types::param_type(param)?;
            Ok(quote! { #ident: #ty })
        })
        .collect()
}

/// Just the argument identifiers, for forwarding calls.
pub(super) fn arg_names(params: &[Param]) -> Result<Vec<Ident>, GenerationError> {
    params
        .iter()
        .map(|param| Ok(idents::snake("parameter", &param.name)?.ident))
        .collect()
}

/// D-Bus names of the out parameters, for `#[zbus(out_args(...))]`.
pub(super) fn out_arg_names(params: &[Param]) -> Vec<&str> {
    params.iter().map(|param| param.name.as_str()).collect()
}
