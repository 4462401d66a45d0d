//! Aggregation container and iteration support for multiple
//! `AutoconfigError` values.

use std::{error::Error, fmt};

use super::AutoconfigError;

/// Collection of [`AutoconfigError`]s produced during a single pass, in the
/// order the failing fields were visited.
///
/// # Examples
///
/// ```
/// use autoconfig::{AutoconfigError, ValueKind};
///
/// let mismatch = |key: &str| AutoconfigError::KindMismatch {
///     key: key.into(),
///     path: key.into(),
///     expected: ValueKind::Boolean,
///     actual: ValueKind::Text,
/// };
/// let e = AutoconfigError::aggregate(vec![mismatch("a"), mismatch("b")]);
/// if let AutoconfigError::Aggregate(agg) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<AutoconfigError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<AutoconfigError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, AutoconfigError> {
        self.0.iter()
    }

    /// First error recorded.
    #[must_use]
    pub fn first(&self) -> Option<&AutoconfigError> {
        self.0.first()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a AutoconfigError;
    type IntoIter = std::slice::Iter<'a, AutoconfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = AutoconfigError;
    type IntoIter = std::vec::IntoIter<AutoconfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
