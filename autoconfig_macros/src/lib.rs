//! Procedural macros for `autoconfig`.
//!
//! The [`AutoConfig`] derive emits an `autoconfig::AutoConfig` implementation
//! that reports each named field to the collection and apply visitors in
//! declaration order. Field behaviour is selected with
//! `#[autoconfig(...)]` attributes:
//!
//! - `key = "name"` declares the symbolic key of a leaf field;
//! - `nested` recurses into a field whose type also implements the trait;
//! - `read_only` collects a keyed leaf but never writes it;
//! - `skip` leaves the field out of both passes.
//!
//! A leaf without `key` is still visited so the runtime can report it.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for [`autoconfig::AutoConfig`].
#[proc_macro_derive(AutoConfig, attributes(autoconfig))]
pub fn derive_auto_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
