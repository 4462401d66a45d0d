//! Unit tests for error aggregation and coercion conversion.

use rstest::rstest;

use super::AutoconfigError;
use crate::{CoercionFailure, IntegerValue, ValueKind};

fn mismatch(key: &str) -> AutoconfigError {
    AutoconfigError::KindMismatch {
        key: key.into(),
        path: key.into(),
        expected: ValueKind::Boolean,
        actual: ValueKind::Text,
    }
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(AutoconfigError::try_aggregate(Vec::new()).is_none());
}

#[test]
fn single_error_is_not_wrapped() {
    let outcome = AutoconfigError::aggregate(vec![mismatch("a")]);
    assert!(
        matches!(outcome, AutoconfigError::KindMismatch { ref key, .. } if key == "a"),
        "expected KindMismatch, got {outcome:?}"
    );
}

#[test]
fn multiple_errors_keep_visit_order() {
    match AutoconfigError::aggregate(vec![mismatch("first"), mismatch("second")]) {
        AutoconfigError::Aggregate(aggregate) => {
            assert_eq!(aggregate.len(), 2);
            assert_eq!(aggregate.first().and_then(AutoconfigError::key), Some("first"));
            let display = aggregate.to_string();
            assert!(display.starts_with("1:"), "first entry missing: {display}");
            assert!(display.contains("\n2:"), "second entry missing: {display}");
            let owned: Vec<_> = aggregate.into_iter().collect();
            assert_eq!(owned.len(), 2);
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn aggregate_panics_on_empty() {
    let result = std::panic::catch_unwind(|| AutoconfigError::aggregate(Vec::new()));
    assert!(result.is_err());
}

#[rstest]
#[case::mismatch(
    CoercionFailure::KindMismatch { expected: ValueKind::Integer, actual: ValueKind::Boolean },
    true
)]
#[case::range(
    CoercionFailure::OutOfRange { value: IntegerValue::Signed(-1), target: "u8" },
    true
)]
#[case::unsupported(CoercionFailure::Unsupported { kind: ValueKind::Float }, false)]
fn coercion_failures_map_to_errors(#[case] failure: CoercionFailure, #[case] is_error: bool) {
    let converted = AutoconfigError::from_coercion("port", "server.port", failure);
    assert_eq!(converted.is_some(), is_error);
    if let Some(err) = converted {
        assert_eq!(err.key(), Some("port"));
        assert!(err.to_string().contains("server.port"), "{err}");
    }
}

#[test]
fn figment_errors_become_option_errors() {
    let err = AutoconfigError::from(figment::Error::from("boom"));
    assert!(matches!(err, AutoconfigError::Options(_)));
    assert!(err.to_string().contains("boom"));
}
