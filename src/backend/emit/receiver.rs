//! Receiver (server) emission.
//!
//! For an interface `Notifications` this emits:
//! - `trait NotificationsHandler`: one method per FIDL method and one getter per attribute,
//!   implemented by the user;
//! - `struct NotificationsServer<H>` with a `#[zbus::interface]` impl forwarding every call to the
//!   handler;
//! - an `emit_<broadcast>` associated function per broadcast that sends the signal through a
//!   `SignalEmitter`.

use fidl_syntax::ast::{Attribute, Broadcast, InterfaceFile, Method};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{idents, params, types};
use crate::backend::GenerationError;

pub(super) fn emit_server(file: &InterfaceFile) -> Result<TokenStream, GenerationError> {
    let interface_name = file.qualified_name();
    let base = idents::camel("interface", &file.interface.name)?;
    let handler = format_ident!("{}Handler", base.text);
    let server = format_ident!("{}Server", base.text);
    let doc = idents::doc_attrs(file.interface.description.as_deref().unwrap_or_default());

    let mut handler_items = Vec::new();
    let mut interface_items = Vec::new();
    for method in &file.methods {
        let (handler_item, interface_item) = emit_method(method)?;
        handler_items.push(handler_item);
        interface_items.push(interface_item);
    }
    for attribute in &file.attributes {
        let (handler_item, interface_item) = emit_property(attribute)?;
        handler_items.push(handler_item);
        interface_items.push(interface_item);
    }
    let emitters = file.broadcasts.iter().map(emit_signal).collect::<Result<Vec<_>, _>>()?;

    let handler_doc = format!(" Server-side implementation of `{interface_name}`.");
    let server_doc = format!(" Serves a [`{handler}`] on the bus as `{interface_name}`.");

    Ok(quote! {
        #doc
        #[doc = #handler_doc]
        pub trait #handler: Send + Sync + 'static {
            #(#handler_items)*
        }

        #[doc = #server_doc]
        pub struct #server<H> {
            handler: H,
        }

        impl<H: #handler> #server<H> {
            pub fn new(handler: H) -> Self {
                Self { handler }
            }

            pub fn handler(&self) -> &H {
                &self.handler
            }

            #(#emitters)*
        }

        #[zbus::interface(name = #interface_name)]
        impl<H: #handler> #server<H> {
            #(#interface_items)*
        }
    })
}

/// Handler trait method and the forwarding `#[zbus::interface]` method.
fn emit_method(method: &Method) -> Result<(TokenStream, TokenStream), GenerationError> {
    let name = idents::snake("method", &method.name)?;
    let ident = &name.ident;
    let doc = idents::doc_attrs(&method.description);
    let args = params::typed_args(&method.in_params)?;
    let arg_names = params::arg_names(&method.in_params)?;

    let mut zbus_args: Vec<TokenStream> = idents::dbus_name_arg(&name, &method.name).into_iter().collect();
    let ret = if method.fire_and_forget {
        quote! { () }
    } else {
        if method.out_params.len() > 1 {
            let out_names = params::out_arg_names(&method.out_params);
            zbus_args.push(quote! { out_args(#(#out_names),*) });
        }
        types::out_type(&method.out_params)?
    };
    let zbus = idents::zbus_attr(zbus_args);

    let handler_item = quote! {
        #doc
        fn #ident(&self, #(#args),*) -> #ret;
    };
    let interface_item = quote! {
        #doc
        #zbus
        async fn #ident(&self, #(#args),*) -> #ret {
            self.handler.#ident(#(#arg_names),*)
        }
    };
    Ok((handler_item, interface_item))
}

/// Handler getter and the `#[zbus(property)]` forwarding getter.
fn emit_property(attribute: &Attribute) -> Result<(TokenStream, TokenStream), GenerationError> {
    let name = idents::snake("attribute", &attribute.name)?;
    let ident = &name.ident;
    let doc = idents::doc_attrs(&attribute.description);
    let ty = types::rust_type(&attribute.ty, attribute.is_array)?;

    let mut zbus_args = vec![quote! { property }];
    zbus_args.extend(idents::dbus_name_arg(&name, &attribute.name));
    let zbus = idents::zbus_attr(zbus_args);

    let handler_item = quote! {
        #doc
        fn #ident(&self) -> #ty;
    };
    let interface_item = quote! {
        #doc
        #zbus
        async fn #ident(&self) -> #ty {
            self.handler.#ident()
        }
    };
    Ok((handler_item, interface_item))
}

/// `emit_<name>(emitter, args...)` sending the broadcast as a D-Bus signal.
fn emit_signal(broadcast: &Broadcast) -> Result<TokenStream, GenerationError> {
    let name = idents::snake("broadcast", &broadcast.name)?;
    let ident = format_ident!("emit_{}", name.text);
    let doc = idents::doc_attrs(&broadcast.description);
    let args = params::typed_args(&broadcast.out_params)?;
    let arg_names = params::arg_names(&broadcast.out_params)?;
    let member = &broadcast.name;
    let emit_doc = format!(" Emit the `{member}` signal.");

    Ok(quote! {
        #doc
        #[doc = #emit_doc]
        pub async fn #ident(
            emitter: &zbus::object_server::SignalEmitter<'_>,
            #(#args),*
        ) -> zbus::Result<()> {
            emitter.emit(INTERFACE_NAME, #member, &(#(#arg_names,)*)).await
        }
    })
}
