//! Expansion pipeline for `#[derive(AutoConfig)]`.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::DeriveInput;

/// Parses `input` and generates the trait implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = runtime_path(&parsed.struct_attrs);
    Ok(generate::generate_impl(input, &parsed, &krate))
}

/// Path through which generated code names the runtime crate: the
/// `crate = "..."` override when given, `autoconfig` otherwise.
fn runtime_path(attrs: &parse::StructAttrs) -> TokenStream {
    attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { autoconfig }, ToTokens::to_token_stream)
}
