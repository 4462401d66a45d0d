//! Parsing utilities for the `AutoConfig` derive macro.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::lit_str;

/// Struct-level attributes recognised by `#[derive(AutoConfig)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[autoconfig(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `autoconfig::`.
    pub crate_path: Option<syn::Path>,
}

/// How a field takes part in collection and application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldRole {
    /// Keyed leaf, collected and written.
    Leaf { key: String },
    /// Keyed leaf, collected but never written.
    ReadOnly { key: String },
    /// Leaf without a declared key; reported at runtime.
    Untagged,
    /// Nested struct visited recursively.
    Nested,
    /// Ignored by both passes.
    Skip,
}

/// Raw field attributes before validation.
#[derive(Default)]
struct FieldAttrs {
    key: Option<LitStr>,
    nested: Option<Span>,
    read_only: Option<Span>,
    skip: Option<Span>,
}

/// Iterate all `#[autoconfig(...)]` attributes once and apply a callback.
fn parse_autoconfig<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("autoconfig")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn attr_name(meta: &ParseNestedMeta) -> String {
    meta.path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string)
}

fn set_flag(slot: &mut Option<Span>, meta: &ParseNestedMeta, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{name}` attribute")));
    }
    *slot = Some(meta.path.span());
    Ok(())
}

/// Extracts `#[autoconfig(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised. Unknown keys are rejected so that a
/// misspelt attribute does not silently change which fields are mapped.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_autoconfig(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            return Ok(());
        }
        Err(meta.error(format!(
            "unknown autoconfig struct attribute `{}`",
            attr_name(meta)
        )))
    })?;
    Ok(out)
}

fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    let name = attr_name(meta);
    match name.as_str() {
        "key" => {
            if out.key.is_some() {
                return Err(meta.error("duplicate `key` attribute"));
            }
            out.key = Some(lit_str(meta, "key")?);
            Ok(())
        }
        "nested" => set_flag(&mut out.nested, meta, "nested"),
        "read_only" => set_flag(&mut out.read_only, meta, "read_only"),
        "skip" => set_flag(&mut out.skip, meta, "skip"),
        _ => Err(meta.error(format!("unknown autoconfig field attribute `{name}`"))),
    }
}

/// Parses field-level `#[autoconfig(...)]` attributes into a [`FieldRole`].
///
/// Recognised keys are `key`, `nested`, `read_only`, and `skip`. `skip`
/// excludes every other key, `nested` excludes `key` and `read_only`, and
/// `read_only` requires `key`.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldRole> {
    let mut out = FieldAttrs::default();
    parse_autoconfig(&field.attrs, |meta| apply_field_attr(meta, &mut out))?;
    resolve_role(out)
}

fn resolve_role(attrs: FieldAttrs) -> syn::Result<FieldRole> {
    let FieldAttrs {
        key,
        nested,
        read_only,
        skip,
    } = attrs;
    if let Some(span) = skip {
        if key.is_some() || nested.is_some() || read_only.is_some() {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with other autoconfig attributes",
            ));
        }
        return Ok(FieldRole::Skip);
    }
    if let Some(span) = nested {
        if key.is_some() || read_only.is_some() {
            return Err(syn::Error::new(
                span,
                "`nested` fields take their keys from the nested struct; remove `key` and `read_only`",
            ));
        }
        return Ok(FieldRole::Nested);
    }
    match (key, read_only) {
        (Some(key), Some(_)) => Ok(FieldRole::ReadOnly { key: key.value() }),
        (Some(key), None) => Ok(FieldRole::Leaf { key: key.value() }),
        (None, Some(span)) => Err(syn::Error::new(span, "`read_only` requires `key`")),
        (None, None) => Ok(FieldRole::Untagged),
    }
}
