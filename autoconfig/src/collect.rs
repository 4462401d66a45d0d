//! Read pass: flattens a struct's keyed leaves into a [`SymbolTable`].

use crate::diagnostics::Diagnostic;
use crate::trail::Trail;
use crate::{AutoConfig, AutoconfigError, AutoconfigResult, Leaf, SymbolTable};

/// Visitor handed to [`AutoConfig::collect_fields`].
///
/// Derived implementations call one method per field in declaration order.
/// Hand-written implementations should do the same so duplicate keys resolve
/// predictably.
#[derive(Debug)]
pub struct Collector {
    trail: Trail,
    table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    failures: Vec<AutoconfigError>,
}

impl Collector {
    pub(crate) const fn new(max_depth: usize) -> Self {
        Self {
            trail: Trail::new(max_depth),
            table: SymbolTable::new(),
            diagnostics: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Records the value of a keyed leaf field.
    ///
    /// An empty `key` is reported as [`Diagnostic::MissingKey`]. A leaf with
    /// nothing to contribute, such as an empty `Option`, is skipped. When the
    /// key was already collected the new value replaces the old one and a
    /// [`Diagnostic::DuplicateKey`] is recorded.
    pub fn leaf<T: Leaf>(&mut self, field: &'static str, key: &str, value: &T) {
        if key.is_empty() {
            self.untagged(field);
            return;
        }
        let Some(value) = value.to_value() else {
            return;
        };
        if self.table.insert(key, value).is_some() {
            self.record(Diagnostic::DuplicateKey {
                key: key.to_owned(),
                path: self.trail.path_to(field),
            });
        }
    }

    /// Records a leaf field that carries no declared key.
    pub fn untagged(&mut self, field: &'static str) {
        self.record(Diagnostic::MissingKey {
            path: self.trail.path_to(field),
        });
    }

    /// Recurses into a nested struct, merging its keys into the same table.
    pub fn nested<C: AutoConfig + ?Sized>(&mut self, field: &'static str, value: &C) {
        if let Err(err) = self.trail.descend(field) {
            tracing::warn!(error = %err, "skipping nested field");
            self.failures.push(err);
            return;
        }
        value.collect_fields(self);
        self.trail.ascend();
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(self) -> AutoconfigResult<Collection> {
        let (collection, failures) = self.finish_partial();
        AutoconfigError::try_aggregate(failures).map_or(Ok(collection), Err)
    }

    /// Returns whatever was collected along with the failures, so a caller
    /// can still apply the fields that were reached.
    pub(crate) fn finish_partial(self) -> (Collection, Vec<AutoconfigError>) {
        tracing::debug!(
            keys = self.table.len(),
            failed = self.failures.len(),
            diagnostics = self.diagnostics.len(),
            "collected fields"
        );
        let collection = Collection {
            table: self.table,
            diagnostics: self.diagnostics,
        };
        (collection, self.failures)
    }
}

/// Outcome of a successful collection pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Collection {
    /// Collected key to value mapping.
    #[must_use]
    pub const fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Fields that were skipped or overwritten while collecting.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Splits the collection into its table and diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (SymbolTable, Vec<Diagnostic>) {
        (self.table, self.diagnostics)
    }
}
