//! Write pass: assigns symbol table entries to matching destination leaves.

use crate::diagnostics::Diagnostic;
use crate::trail::Trail;
use crate::{AutoConfig, AutoconfigError, AutoconfigResult, CoercionFailure, Leaf, SymbolTable};

/// Visitor handed to [`AutoConfig::apply_fields`].
///
/// Every field is handled independently: a failure on one leaf is recorded
/// and the walk continues with its siblings. Assignments made before a
/// failure are kept.
#[derive(Debug)]
pub struct Applier<'a> {
    table: &'a SymbolTable,
    trail: Trail,
    applied: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    failures: Vec<AutoconfigError>,
}

impl<'a> Applier<'a> {
    pub(crate) const fn new(table: &'a SymbolTable, max_depth: usize) -> Self {
        Self {
            table,
            trail: Trail::new(max_depth),
            applied: Vec::new(),
            diagnostics: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Assigns the table entry for `key` to `slot`.
    ///
    /// - An empty `key` records [`Diagnostic::MissingKey`].
    /// - A key with no table entry leaves `slot` untouched.
    /// - A kind or range mismatch is recorded as an error.
    /// - A non-writable leaf kind records [`Diagnostic::UnsupportedKind`].
    pub fn leaf<T: Leaf>(&mut self, field: &'static str, key: &str, slot: &mut T) {
        if key.is_empty() {
            self.untagged(field);
            return;
        }
        let table = self.table;
        let Some(value) = table.get(key) else {
            return;
        };
        match slot.assign(value) {
            Ok(()) => self.applied.push(key.to_owned()),
            Err(CoercionFailure::Unsupported { kind }) => {
                self.record(Diagnostic::UnsupportedKind {
                    key: key.to_owned(),
                    path: self.trail.path_to(field),
                    kind,
                });
            }
            Err(failure) => {
                let path = self.trail.path_to(field);
                if let Some(err) = AutoconfigError::from_coercion(key, &path, failure) {
                    tracing::warn!(key, path = %path, error = %err, "failed to apply field");
                    self.failures.push(err);
                }
            }
        }
    }

    /// Records a keyed destination field that must not be written.
    ///
    /// The diagnostic is only raised when the table actually holds a value
    /// for `key`; otherwise there was nothing to write.
    pub fn read_only(&mut self, field: &'static str, key: &str) {
        if key.is_empty() {
            self.untagged(field);
            return;
        }
        if self.table.contains_key(key) {
            self.record(Diagnostic::ReadOnly {
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

    /// Recurses into a nested struct with the same table.
    pub fn nested<C: AutoConfig + ?Sized>(&mut self, field: &'static str, value: &mut C) {
        if let Err(err) = self.trail.descend(field) {
            tracing::warn!(error = %err, "skipping nested field");
            self.failures.push(err);
            return;
        }
        value.apply_fields(self);
        self.trail.ascend();
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(self) -> AutoconfigResult<Report> {
        let (report, failures) = self.finish_partial();
        AutoconfigError::try_aggregate(failures).map_or(Ok(report), Err)
    }

    pub(crate) fn finish_partial(self) -> (Report, Vec<AutoconfigError>) {
        tracing::debug!(
            applied = self.applied.len(),
            failed = self.failures.len(),
            diagnostics = self.diagnostics.len(),
            "applied fields"
        );
        let report = Report {
            applied: self.applied,
            diagnostics: self.diagnostics,
        };
        (report, self.failures)
    }
}

/// Outcome of a successful apply or configure call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    applied: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Keys written to the destination, in visit order.
    #[must_use]
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Non-fatal findings from the passes that produced this report.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` when no diagnostics were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub(crate) fn prepend_diagnostics(&mut self, mut earlier: Vec<Diagnostic>) {
        earlier.append(&mut self.diagnostics);
        self.diagnostics = earlier;
    }
}
