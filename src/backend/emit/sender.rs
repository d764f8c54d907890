//! Sender (client) emission: a `#[zbus::proxy]` trait.
//!
//! For an interface `Notifications` this emits `trait Notifications`, from which zbus derives
//! `NotificationsProxy` and `NotificationsProxyBlocking`.

use fidl_core::naming;
use fidl_syntax::ast::{Attribute, Broadcast, InterfaceFile, Method};
use proc_macro2::TokenStream;
use quote::quote;

use super::{idents, params, types};
use crate::backend::GenerationError;

pub(super) fn emit_proxy(file: &InterfaceFile) -> Result<TokenStream, GenerationError> {
    let interface_name = file.qualified_name();
    let default_path = naming::dbus_object_path(&interface_name);
    let trait_name = idents::camel("interface", &file.interface.name)?.ident;
    let doc = idents::doc_attrs(file.interface.description.as_deref().unwrap_or_default());

    let methods = file.methods.iter().map(emit_method).collect::<Result<Vec<_>, _>>()?;
    let properties = file.attributes.iter().map(emit_property).collect::<Result<Vec<_>, _>>()?;
    let signals = file.broadcasts.iter().map(emit_signal).collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #doc
        #[zbus::proxy(
            interface = #interface_name,
            default_service = #interface_name,
            default_path = #default_path
        )]
        pub trait #trait_name {
            #(#methods)*
            #(#properties)*
            #(#signals)*
        }
    })
}

fn emit_method(method: &Method) -> Result<TokenStream, GenerationError> {
    let name = idents::snake("method", &method.name)?;
    let ident = &name.ident;
    let doc = idents::doc_attrs(&method.description);
    let args = params::typed_args(&method.in_params)?;

    let mut zbus_args: Vec<TokenStream> = idents::dbus_name_arg(&name, &method.name).into_iter().collect();
    let ret = if method.fire_and_forget {
        if !method.out_params.is_empty() {
            tracing::warn!(method = %method.name, "fire-and-forget method declares out parameters; ignoring them");
        }
        zbus_args.push(quote! { no_reply });
        quote! { () }
    } else {
        types::out_type(&method.out_params)?
    };
    let zbus = idents::zbus_attr(zbus_args);

    Ok(quote! {
        #doc
        #zbus
        fn #ident(&self, #(#args),*) -> zbus::Result<#ret>;
    })
}

fn emit_property(attribute: &Attribute) -> Result<TokenStream, GenerationError> {
    let name = idents::snake("attribute", &attribute.name)?;
    let ident = &name.ident;
    let doc = idents::doc_attrs(&attribute.description);
    let ty = types::rust_type(&attribute.ty, attribute.is_array)?;

    let mut zbus_args = vec![quote! { property }];
    zbus_args.extend(idents::dbus_name_arg(&name, &attribute.name));
    let zbus = idents::zbus_attr(zbus_args);

    Ok(quote! {
        #doc
        #zbus
        fn #ident(&self) -> zbus::Result<#ty>;
    })
}

fn emit_signal(broadcast: &Broadcast) -> Result<TokenStream, GenerationError> {
    let name = idents::snake("broadcast", &broadcast.name)?;
    let ident = &name.ident;
    let doc = idents::doc_attrs(&broadcast.description);
    let args = params::typed_args(&broadcast.out_params)?;

    let mut zbus_args = vec![quote! { signal }];
    zbus_args.extend(idents::dbus_name_arg(&name, &broadcast.name));
    let zbus = idents::zbus_attr(zbus_args);

    Ok(quote! {
        #doc
        #zbus
        fn #ident(&self, #(#args),*) -> zbus::Result<()>;
    })
}
