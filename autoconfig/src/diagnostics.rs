//! Non-fatal findings recorded while walking a struct.

use std::fmt;

use crate::ValueKind;

/// Something worth reporting that did not stop the traversal.
///
/// Every diagnostic is logged at `warn` through `tracing` when it is
/// recorded and is also returned to the caller in a
/// [`crate::Collection`] or [`crate::Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A leaf field carries no declared key, or an empty one.
    MissingKey {
        /// Dotted path of the field.
        path: String,
    },
    /// A key was collected twice; the later field won.
    DuplicateKey {
        /// Declared key.
        key: String,
        /// Dotted path of the field whose value was kept.
        path: String,
    },
    /// The destination field is marked read-only and was not written.
    ReadOnly {
        /// Declared key.
        key: String,
        /// Dotted path of the field.
        path: String,
    },
    /// The destination leaf kind is never written.
    UnsupportedKind {
        /// Declared key.
        key: String,
        /// Dotted path of the field.
        path: String,
        /// Kind declared by the destination leaf.
        kind: ValueKind,
    },
}

impl Diagnostic {
    /// Dotted path of the field the diagnostic refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingKey { path }
            | Self::DuplicateKey { path, .. }
            | Self::ReadOnly { path, .. }
            | Self::UnsupportedKind { path, .. } => path,
        }
    }

    /// Declared key involved, if the field had one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey { .. } => None,
            Self::DuplicateKey { key, .. }
            | Self::ReadOnly { key, .. }
            | Self::UnsupportedKind { key, .. } => Some(key),
        }
    }

    pub(crate) fn emit(&self) {
        tracing::warn!(path = %self.path(), key = ?self.key(), "{self}");
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { path } => {
                write!(f, "field '{path}' has no declared key and was skipped")
            }
            Self::DuplicateKey { key, path } => {
                write!(f, "key '{key}' declared more than once; '{path}' wins")
            }
            Self::ReadOnly { key, path } => {
                write!(f, "field '{path}' (key '{key}') is read-only and was skipped")
            }
            Self::UnsupportedKind { key, path, kind } => write!(
                f,
                "field '{path}' (key '{key}') has unsupported kind {kind} and was skipped"
            ),
        }
    }
}
