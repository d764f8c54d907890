//! Emit Rust D-Bus bindings from a parsed FIDL file.
//!
//! This module defines [`BindingGenerator`] and wires together the focused submodules that
//! implement the emission. `mod.rs` is intentionally thin.
//!
//! ## Notes
//! - Emission produces tokens with `quote`, validates them as a `syn::File` and formats them via
//!   `prettyplease`.
//! - Both modes emit the same preamble (name/path constants) and type declarations; only the API
//!   surface differs.
//!
//! ## See also
//! - [`sender`]: client-side proxy trait
//! - [`receiver`]: server-side handler trait and interface wrapper
//! - [`types`]: type mapping and struct/typedef/array emission
//! - [`idents`]: naming, doc comments and `#[zbus(...)]` helpers

mod idents;
mod params;
mod receiver;
mod sender;
mod types;

use fidl_core::naming;
use fidl_syntax::ast::InterfaceFile;
use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{GenerationError, GenerationMode, GeneratorConfig};
use crate::version::FIDLGEN_VERSION;

/// Generate Rust bindings for one interface file.
///
/// ## Examples
/// ```rust
/// use fidlgen::backend::{BindingGenerator, GeneratorConfig};
///
/// let file = fidl_syntax::parser::parse("package org.demo interface Echo { method Ping }").unwrap();
/// let code = BindingGenerator::new(GeneratorConfig::default()).generate(&file).unwrap();
/// assert!(code.contains("pub trait Echo"));
/// assert!(code.contains("fn ping(&self) -> zbus::Result<()>;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingGenerator {
    config: GeneratorConfig,
}

impl BindingGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate formatted Rust source for `file`.
    ///
    /// ## Errors
    /// - [`GenerationError::InvalidIdentifier`] / [`GenerationError::InvalidType`] when a name or type
    ///   left behind by lenient parsing cannot be emitted.
    /// - [`GenerationError::SynParse`] if the emitted tokens are not a valid Rust file.
    #[tracing::instrument(skip_all, fields(interface = %file.qualified_name(), mode = self.config.mode.as_str()))]
    pub fn generate(&self, file: &InterfaceFile) -> Result<String, GenerationError> {
        let tokens = self.emit_file_tokens(file)?;
        let syntax_tree: syn::File = syn::parse2(tokens)?;
        let formatted = prettyplease::unparse(&syntax_tree);
        tracing::debug!(bytes = formatted.len(), "generated bindings");

        if !self.config.emit_header {
            return Ok(formatted);
        }
        let header = format!(
            "// Generated by fidlgen v{} from {}. Do not edit.\n\n",
            FIDLGEN_VERSION,
            file.qualified_name()
        );
        Ok(header + &formatted)
    }

    fn emit_file_tokens(&self, file: &InterfaceFile) -> Result<TokenStream, GenerationError> {
        let preamble = emit_preamble(file);
        let type_decls = types::emit_type_decls(file, &self.config)?;
        let api = match self.config.mode {
            GenerationMode::Sender => sender::emit_proxy(file)?,
            GenerationMode::Receiver => receiver::emit_server(file)?,
        };

        let items = quote! {
            #preamble
            #type_decls
            #api
        };

        match &self.config.module {
            Some(module) => {
                let module = idents::snake("module", module)?.ident;
                Ok(quote! {
                    pub mod #module {
                        #items
                    }
                })
            }
            None => Ok(items),
        }
    }
}

/// D-Bus name, default object path and version of the interface.
fn emit_preamble(file: &InterfaceFile) -> TokenStream {
    let interface_name = file.qualified_name();
    let default_path = naming::dbus_object_path(&interface_name);
    let major = Literal::u32_unsuffixed(file.interface.major_version);
    let minor = Literal::u32_unsuffixed(file.interface.minor_version);
    quote! {
        /// D-Bus interface name.
        pub const INTERFACE_NAME: &str = #interface_name;
        /// Conventional object path for the interface.
        pub const DEFAULT_PATH: &str = #default_path;
        /// Interface version as `(major, minor)`.
        pub const INTERFACE_VERSION: (u32, u32) = (#major, #minor);
    }
}
