//! Input parsing for the `AutoConfig` derive macro.
//!
//! This module gathers the struct's fields and attribute metadata in one pass
//! so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::{FieldRole, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed role.
pub(crate) struct ParsedField {
    /// Field identifier as written, used for member access.
    pub ident: syn::Ident,
    /// Field name without any raw identifier prefix, used in paths.
    pub name: String,
    pub role: FieldRole,
}

/// Everything the generator needs from the user's struct.
pub(crate) struct ParsedInput {
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields are accepted; enums, unions, tuple structs
/// and unit structs are rejected with a spanned error.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "AutoConfig requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "AutoConfig can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let role = parse_field_attrs(field)?;
        let name = ident.unraw().to_string();
        fields.push(ParsedField { ident, name, role });
    }
    Ok(ParsedInput {
        struct_attrs,
        fields,
    })
}
