//! Code generation for the `AutoConfig` trait implementation.
//!
//! Each field becomes one visitor call in `collect_fields` and one in
//! `apply_fields`, emitted in declaration order so duplicate keys resolve
//! the same way on every run.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::parse::{FieldRole, ParsedField, ParsedInput};


/// Visitor call emitted into `collect_fields` for one field.
fn collect_call(field: &ParsedField) -> Option<TokenStream> {
    let ParsedField { ident, name, role } = field;
    match role {
        FieldRole::Leaf { key } | FieldRole::ReadOnly { key } => {
            Some(quote! { collector.leaf(#name, #key, &self.#ident); })
        }
        FieldRole::Untagged => Some(quote! { collector.untagged(#name); }),
        FieldRole::Nested => Some(quote! { collector.nested(#name, &self.#ident); }),
        FieldRole::Skip => None,
    }
}

/// Visitor call emitted into `apply_fields` for one field.
fn apply_call(field: &ParsedField) -> Option<TokenStream> {
    let ParsedField { ident, name, role } = field;
    match role {
        FieldRole::Leaf { key } => Some(quote! { applier.leaf(#name, #key, &mut self.#ident); }),
        FieldRole::ReadOnly { key } => Some(quote! { applier.read_only(#name, #key); }),
        FieldRole::Untagged => Some(quote! { applier.untagged(#name); }),
        FieldRole::Nested => Some(quote! { applier.nested(#name, &mut self.#ident); }),
        FieldRole::Skip => None,
    }
}

/// Names the visitor parameter, prefixing it with `_` when the body is empty
/// so structs without mapped fields compile without warnings.
fn visitor_ident(name: &str, body: &[TokenStream]) -> syn::Ident {
    let text = if body.is_empty() {
        format!("_{name}")
    } else {
        name.to_owned()
    };
    syn::Ident::new(&text, proc_macro2::Span::call_site())
}

/// Generate the `AutoConfig` implementation for `input`.
pub(crate) fn generate_impl(
    input: &DeriveInput,
    parsed: &ParsedInput,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let collect_body: Vec<_> = parsed.fields.iter().filter_map(collect_call).collect();
    let apply_body: Vec<_> = parsed.fields.iter().filter_map(apply_call).collect();
    let collector = visitor_ident("collector", &collect_body);
    let applier = visitor_ident("applier", &apply_body);
    quote! {
        impl #impl_generics #krate::AutoConfig for #ident #ty_generics #where_clause {
            fn collect_fields(&self, #collector: &mut #krate::Collector) {
                #( #collect_body )*
            }

            fn apply_fields(&mut self, #applier: &mut #krate::Applier<'_>) {
                #( #apply_body )*
            }
        }
    }
}
