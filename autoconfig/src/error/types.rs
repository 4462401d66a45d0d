//! Primary error enum for configuration mapping flows.

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::{Diagnostic, IntegerValue, ValueKind};

/// Errors that can occur while mapping one struct onto another.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AutoconfigError {
    /// The stored value's kind differs from the destination leaf's kind.
    #[error("cannot assign {actual} value to {expected} field '{path}' (key '{key}')")]
    KindMismatch {
        /// Declared key shared by source and destination.
        key: String,
        /// Dotted path of the destination field.
        path: String,
        /// Kind declared by the destination leaf.
        expected: ValueKind,
        /// Kind of the collected value.
        actual: ValueKind,
    },

    /// An integer does not fit the destination field's width.
    #[error("integer {value} for key '{key}' does not fit {target} field '{path}'")]
    IntegerOutOfRange {
        /// Declared key shared by source and destination.
        key: String,
        /// Dotted path of the destination field.
        path: String,
        /// Collected integer.
        value: IntegerValue,
        /// Destination Rust type.
        target: &'static str,
    },

    /// Nesting went deeper than the configured limit.
    #[error("nesting limit of {limit} exceeded at '{path}'")]
    DepthExceeded {
        /// Dotted path of the nested field that was not entered.
        path: String,
        /// Configured maximum depth.
        limit: usize,
    },

    /// Strict mode turned recorded diagnostics into a failure.
    #[error("strict mode rejected {} diagnostic(s); first: {}", .0.len(), first_diagnostic(.0))]
    Diagnostics(Vec<Diagnostic>),

    /// Mapper options could not be loaded.
    #[error("invalid autoconfig options: {0}")]
    Options(#[from] Box<figment::Error>),

    /// Several fields failed during one pass.
    #[error("multiple autoconfig errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

fn first_diagnostic(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .first()
        .map_or_else(|| String::from("none"), ToString::to_string)
}
