//! Tests for JSON and base64 persistence of symbol tables and other
//! serialisable values.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use autoconfig::{AutoConfig, PersistError, SymbolTable, apply, collect, persist};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, AutoConfig)]
struct Settings {
    #[autoconfig(key = "name")]
    name: String,
    #[autoconfig(key = "retries")]
    retries: u8,
    #[autoconfig(key = "verbose")]
    verbose: bool,
}

#[test]
fn collected_table_survives_a_file_round_trip() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("table.json");
    let source = Settings {
        name: "batch".into(),
        retries: 3,
        verbose: true,
    };
    let table = collect(&source).expect("collect").into_parts().0;
    persist::to_file(&path, &table).expect("write table");

    let restored: SymbolTable = persist::from_file(&path).expect("read table");
    assert_eq!(restored, table);

    let mut destination = Settings::default();
    apply(&mut destination, &restored).expect("apply");
    assert_eq!(destination, source);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    id: u32,
    tags: Vec<String>,
}

#[test]
fn writer_and_reader_round_trip() {
    let record = Record {
        id: 7,
        tags: vec!["a".into(), "b".into()],
    };
    let mut buf = Vec::new();
    persist::to_writer(&mut buf, &record).expect("write");
    assert_eq!(
        String::from_utf8(buf.clone()).expect("utf8"),
        r#"{"id":7,"tags":["a","b"]}"#
    );
    let restored: Record = persist::from_reader(buf.as_slice()).expect("read");
    assert_eq!(restored, record);
}

#[test]
fn string_helpers_round_trip() {
    let json = persist::to_string(&Record { id: 1, tags: Vec::new() }).expect("encode");
    let restored: Record = persist::from_str(&json).expect("decode");
    assert_eq!(restored.id, 1);
}

#[test]
fn missing_file_reports_path_and_io_source() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = persist::from_file::<_, Record>(&path).expect_err("file is missing");
    match err {
        PersistError::File { path: reported, source } => {
            assert_eq!(reported, path);
            assert!(matches!(*source, PersistError::Io(_)));
        }
        other => panic!("expected file error, got {other:?}"),
    }
}

#[test]
fn malformed_json_reports_json_source() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").expect("write fixture");
    let err = persist::from_file::<_, Record>(&path).expect_err("invalid json");
    assert!(err.to_string().contains("bad.json"), "{err}");
    assert!(matches!(
        err,
        PersistError::File { ref source, .. } if matches!(**source, PersistError::Json(_))
    ));
}

#[test]
fn collected_table_survives_a_base64_file_round_trip() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("table.b64");
    let source = Settings {
        name: "batch".into(),
        retries: 3,
        verbose: true,
    };
    let table = collect(&source).expect("collect").into_parts().0;
    persist::to_base64_file(&path, &table).expect("write table");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.chars().all(|c| c.is_ascii_alphanumeric() || "+/=".contains(c)));

    let restored: SymbolTable = persist::from_base64_file(&path).expect("read table");
    let mut destination = Settings::default();
    apply(&mut destination, &restored).expect("apply");
    assert_eq!(destination, source);
}

#[test]
fn base64_writer_and_reader_round_trip() {
    let record = Record {
        id: 42,
        tags: vec!["edge".into()],
    };
    let mut buf = Vec::new();
    persist::to_base64_writer(&mut buf, &record).expect("write");
    buf.push(b'\n');
    let restored: Record = persist::from_base64_reader(buf.as_slice()).expect("read");
    assert_eq!(restored, record);
}

#[rstest]
#[case::not_base64("not base64!")]
#[case::truncated("AAA")]
fn malformed_base64_is_rejected(#[case] input: &str) {
    let err = persist::from_base64_str::<Record>(input).expect_err("invalid base64");
    assert!(matches!(err, PersistError::Base64(_)), "{err:?}");
}

#[test]
fn base64_of_the_wrong_shape_reports_binary_error() {
    let err = persist::from_base64_str::<Record>("AQ==").expect_err("too short for a record");
    assert!(matches!(err, PersistError::Binary(_)), "{err:?}");
}
