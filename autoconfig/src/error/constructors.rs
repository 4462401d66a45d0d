//! Constructors and accessors for `AutoconfigError`.

use super::{AggregatedErrors, AutoconfigError};
use crate::{CoercionFailure, Diagnostic};

impl AutoconfigError {
    /// Tries to build an [`AutoconfigError`] from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no errors are supplied;
    /// * the error itself when exactly one is supplied; and
    /// * [`Self::Aggregate`] combining every error, in order, for two or
    ///   more inputs.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors: Vec<Self> = errors.into_iter().collect();
        if errors.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors))));
        }
        errors.pop()
    }

    /// Build an [`AutoconfigError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`AutoconfigError::try_aggregate`] to
    /// avoid panicking when the error list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Converts a leaf coercion failure into an error for `key` at `path`.
    ///
    /// Returns `None` for [`CoercionFailure::Unsupported`], which is a
    /// diagnostic rather than an error.
    #[must_use]
    pub fn from_coercion(key: &str, path: &str, failure: CoercionFailure) -> Option<Self> {
        match failure {
            CoercionFailure::KindMismatch { expected, actual } => Some(Self::KindMismatch {
                key: key.to_owned(),
                path: path.to_owned(),
                expected,
                actual,
            }),
            CoercionFailure::OutOfRange { value, target } => Some(Self::IntegerOutOfRange {
                key: key.to_owned(),
                path: path.to_owned(),
                value,
                target,
            }),
            CoercionFailure::Unsupported { .. } => None,
        }
    }

    /// Declared key the error refers to, when it concerns a single field.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoconfig::{AutoconfigError, ValueKind};
    ///
    /// let err = AutoconfigError::KindMismatch {
    ///     key: "enabled".into(),
    ///     path: "enabled".into(),
    ///     expected: ValueKind::Boolean,
    ///     actual: ValueKind::Text,
    /// };
    /// assert_eq!(err.key(), Some("enabled"));
    /// ```
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KindMismatch { key, .. } | Self::IntegerOutOfRange { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Diagnostics carried by a strict-mode failure.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Diagnostics(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}
