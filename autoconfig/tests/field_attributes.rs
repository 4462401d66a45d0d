//! Tests for field attributes handled by the derive macro.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use autoconfig::{
    AutoConfig, ConfigValue, Diagnostic, SymbolTable, ValueKind, apply, collect, configure,
};
use rstest::rstest;

#[derive(Debug, Default, AutoConfig)]
struct Annotated {
    #[autoconfig(key = "name")]
    name: String,
    #[autoconfig(key = "id", read_only)]
    id: String,
    #[autoconfig(skip)]
    scratch: Vec<String>,
    untagged: bool,
    #[autoconfig(key = "")]
    blank: bool,
    #[autoconfig(key = "ratio")]
    ratio: f64,
}

fn table() -> SymbolTable {
    [
        ("name", ConfigValue::from("svc")),
        ("id", ConfigValue::from("abc-123")),
        ("ratio", ConfigValue::from(0.75)),
        ("untagged", ConfigValue::from(true)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn apply_reports_each_skipped_field() {
    let mut destination = Annotated {
        scratch: vec!["keep".into()],
        ..Annotated::default()
    };
    let report = apply(&mut destination, &table()).expect("apply");
    assert_eq!(report.applied(), ["name"]);
    assert_eq!(
        report.diagnostics(),
        &[
            Diagnostic::ReadOnly {
                key: "id".into(),
                path: "id".into(),
            },
            Diagnostic::MissingKey {
                path: "untagged".into(),
            },
            Diagnostic::MissingKey {
                path: "blank".into(),
            },
            Diagnostic::UnsupportedKind {
                key: "ratio".into(),
                path: "ratio".into(),
                kind: ValueKind::Float,
            },
        ]
    );
    assert!(destination.id.is_empty());
    assert!(!destination.untagged);
    assert_eq!(destination.scratch, vec!["keep".to_owned()]);
}

#[test]
fn read_only_fields_are_still_collected() {
    let source = Annotated {
        name: "svc".into(),
        id: "abc-123".into(),
        ratio: 0.5,
        ..Annotated::default()
    };
    let collection = collect(&source).expect("collect");
    let table = collection.table();
    assert_eq!(table.get("id"), Some(&ConfigValue::from("abc-123")));
    assert_eq!(table.get("ratio"), Some(&ConfigValue::Float(0.5)));
    assert_eq!(table.len(), 3);
    let missing: Vec<_> = collection
        .diagnostics()
        .iter()
        .map(Diagnostic::path)
        .collect();
    assert_eq!(missing, vec!["untagged", "blank"]);
}

#[derive(Debug, Default, AutoConfig)]
struct Optional {
    #[autoconfig(key = "name")]
    name: Option<String>,
    #[autoconfig(key = "port")]
    port: Option<u16>,
}

#[test]
fn option_leaves_skip_none_and_fill_some() {
    let source = Optional {
        name: Some("edge".into()),
        port: None,
    };
    let collection = collect(&source).expect("collect");
    assert_eq!(collection.table().len(), 1);

    let mut destination = Optional {
        name: None,
        port: Some(1),
    };
    configure(&source, &mut destination).expect("configure");
    assert_eq!(destination.name.as_deref(), Some("edge"));
    assert_eq!(destination.port, Some(1));
}

#[derive(Debug, Default, AutoConfig)]
struct Depth {
    #[autoconfig(key = "depth")]
    depth: u32,
}

#[derive(Debug, Default, AutoConfig)]
struct Container {
    #[autoconfig(nested)]
    boxed: Box<Depth>,
    #[autoconfig(nested)]
    maybe: Option<Depth>,
}

#[rstest]
#[case::absent(None, 0)]
#[case::present(Some(Depth { depth: 0 }), 9)]
fn optional_nested_structs(#[case] maybe: Option<Depth>, #[case] expected: u32) {
    let table: SymbolTable = [("depth", 9_i64)].into_iter().collect();
    let mut destination = Container {
        boxed: Box::default(),
        maybe,
    };
    apply(&mut destination, &table).expect("apply");
    assert_eq!(destination.boxed.depth, 9);
    assert_eq!(destination.maybe.map_or(0, |leaf| leaf.depth), expected);
}

#[derive(Debug, Default, AutoConfig)]
struct RawNames {
    #[autoconfig(key = "kind")]
    r#type: String,
    missing: u8,
}

#[test]
fn raw_identifiers_are_reported_without_prefix() {
    let mut destination = RawNames::default();
    let table: SymbolTable = [("kind", "widget")].into_iter().collect();
    let report = apply(&mut destination, &table).expect("apply");
    assert_eq!(destination.r#type, "widget");
    assert_eq!(destination.missing, 0);
    assert_eq!(
        report.diagnostics(),
        &[Diagnostic::MissingKey {
            path: "missing".into()
        }]
    );
}

#[derive(Debug, Default, AutoConfig)]
struct Generic<T: autoconfig::Leaf + Default> {
    #[autoconfig(key = "value")]
    value: T,
}

#[test]
fn generic_leaves_use_the_concrete_kind() {
    let table: SymbolTable = [("value", 42_i64)].into_iter().collect();
    let mut numeric = Generic::<u64>::default();
    apply(&mut numeric, &table).expect("apply");
    assert_eq!(numeric.value, 42);

    let mut textual = Generic::<String>::default();
    assert!(apply(&mut textual, &table).is_err());
    assert!(textual.value.is_empty());
}

#[derive(AutoConfig)]
struct Empty {}

#[test]
fn empty_struct_collects_nothing() {
    let collection = collect(&Empty {}).expect("collect");
    assert!(collection.table().is_empty());
    assert!(collection.diagnostics().is_empty());
}
