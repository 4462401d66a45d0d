//! Error types produced by the collection and apply passes.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::AutoconfigError;

/// Result alias used throughout the crate.
pub type AutoconfigResult<T> = Result<T, AutoconfigError>;

#[cfg(test)]
mod tests;
