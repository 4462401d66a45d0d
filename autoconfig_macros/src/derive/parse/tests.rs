//! Tests for `#[autoconfig(...)]` attribute parsing.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::{FieldRole, parse_input};

fn roles(input: &DeriveInput) -> Result<Vec<FieldRole>> {
    let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
    Ok(parsed.fields.into_iter().map(|f| f.role).collect())
}

fn parse_error(input: &DeriveInput) -> Result<String> {
    match parse_input(input) {
        Ok(_) => Err(anyhow!("expected parse failure")),
        Err(err) => Ok(err.to_string()),
    }
}

#[test]
fn recognises_every_field_role() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[autoconfig(key = "name")]
            name: String,
            #[autoconfig(key = "id", read_only)]
            id: String,
            #[autoconfig(nested)]
            inner: Inner,
            #[autoconfig(skip)]
            cache: Vec<u8>,
            port: u16,
        }
    };
    let found = roles(&input)?;
    let expected = vec![
        FieldRole::Leaf { key: "name".into() },
        FieldRole::ReadOnly { key: "id".into() },
        FieldRole::Nested,
        FieldRole::Skip,
        FieldRole::Untagged,
    ];
    ensure!(found == expected, "unexpected roles: {found:?}");
    Ok(())
}

#[test]
fn keeps_empty_key_for_runtime_reporting() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[autoconfig(key = "")]
            name: String,
        }
    };
    let found = roles(&input)?;
    ensure!(
        found == vec![FieldRole::Leaf { key: String::new() }],
        "unexpected roles: {found:?}"
    );
    Ok(())
}

#[test]
fn strips_raw_identifier_prefix_from_names() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[autoconfig(key = "kind")]
            r#type: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let field = parsed
        .fields
        .first()
        .ok_or_else(|| anyhow!("missing field"))?;
    ensure!(field.name == "type", "unexpected name {}", field.name);
    Ok(())
}

#[test]
fn parses_crate_alias() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[autoconfig(crate = "my_alias")]
        struct Demo {}
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(
        parsed.struct_attrs.crate_path.is_some(),
        "crate path not recorded"
    );
    Ok(())
}

#[rstest]
#[case::skip_with_key(
    parse_quote! { struct D { #[autoconfig(skip, key = "a")] a: u8 } },
    "`skip` cannot be combined"
)]
#[case::nested_with_key(
    parse_quote! { struct D { #[autoconfig(nested, key = "a")] a: Inner } },
    "`nested` fields take their keys"
)]
#[case::read_only_without_key(
    parse_quote! { struct D { #[autoconfig(read_only)] a: u8 } },
    "`read_only` requires `key`"
)]
#[case::duplicate_key(
    parse_quote! { struct D { #[autoconfig(key = "a", key = "b")] a: u8 } },
    "duplicate `key` attribute"
)]
#[case::non_string_key(
    parse_quote! { struct D { #[autoconfig(key = 5)] a: u8 } },
    "key must be a string"
)]
#[case::unknown_field_attr(
    parse_quote! { struct D { #[autoconfig(kye = "a")] a: u8 } },
    "unknown autoconfig field attribute `kye`"
)]
#[case::unknown_struct_attr(
    parse_quote! { #[autoconfig(prefix = "x")] struct D { a: u8 } },
    "unknown autoconfig struct attribute `prefix`"
)]
#[case::tuple_struct(
    parse_quote! { struct D(u8); },
    "AutoConfig requires named fields"
)]
#[case::enum_input(
    parse_quote! { enum D { A } },
    "AutoConfig can only be derived for structs"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let message = parse_error(&input)?;
    ensure!(
        message.contains(expected),
        "expected '{expected}' in error, got '{message}'"
    );
    Ok(())
}
