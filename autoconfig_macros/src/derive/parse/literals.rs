//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a string literal from `key = "..."`.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}
