//! Orchestration of the collection and apply passes.

use crate::{
    Applier, AutoConfig, AutoconfigError, AutoconfigResult, Collection, Collector,
    ConfigureOptions, Diagnostic, Report, SymbolTable,
};

/// Collects the keyed leaves of `source` with default options.
///
/// # Errors
///
/// Returns [`AutoconfigError::DepthExceeded`] when `source` nests deeper than
/// [`ConfigureOptions::DEFAULT_MAX_DEPTH`].
pub fn collect<S: AutoConfig + ?Sized>(source: &S) -> AutoconfigResult<Collection> {
    collect_with(&ConfigureOptions::default(), source)
}

/// Collects the keyed leaves of `source`.
///
/// # Errors
///
/// Returns [`AutoconfigError::DepthExceeded`] when the nesting limit is hit,
/// or [`AutoconfigError::Diagnostics`] in strict mode when any field was
/// skipped or overwritten.
pub fn collect_with<S: AutoConfig + ?Sized>(
    options: &ConfigureOptions,
    source: &S,
) -> AutoconfigResult<Collection> {
    let mut collector = Collector::new(options.max_depth);
    source.collect_fields(&mut collector);
    let collection = collector.finish()?;
    enforce_strict(options, collection.diagnostics())?;
    Ok(collection)
}

/// Applies `table` to `destination` with default options.
///
/// # Errors
///
/// Returns the coercion failure for the first failing field, or
/// [`AutoconfigError::Aggregate`] listing every failure in visit order.
/// Fields assigned before or after a failure stay assigned.
pub fn apply<D: AutoConfig + ?Sized>(
    destination: &mut D,
    table: &SymbolTable,
) -> AutoconfigResult<Report> {
    apply_with(&ConfigureOptions::default(), destination, table)
}

/// Applies `table` to `destination`.
///
/// # Errors
///
/// As for [`apply`], plus [`AutoconfigError::Diagnostics`] in strict mode.
pub fn apply_with<D: AutoConfig + ?Sized>(
    options: &ConfigureOptions,
    destination: &mut D,
    table: &SymbolTable,
) -> AutoconfigResult<Report> {
    let mut applier = Applier::new(table, options.max_depth);
    destination.apply_fields(&mut applier);
    let report = applier.finish()?;
    enforce_strict(options, report.diagnostics())?;
    Ok(report)
}

/// Copies every keyed leaf of `source` into the matching leaf of
/// `destination`.
///
/// # Examples
///
/// ```
/// use autoconfig::{AutoConfig, configure};
///
/// #[derive(AutoConfig)]
/// struct Source {
///     #[autoconfig(key = "name")]
///     name: String,
///     #[autoconfig(key = "enabled")]
///     enabled: bool,
/// }
///
/// #[derive(AutoConfig, Default)]
/// struct Destination {
///     #[autoconfig(key = "name")]
///     name: String,
///     #[autoconfig(key = "active")]
///     active: bool,
/// }
///
/// let source = Source { name: "x".into(), enabled: true };
/// let mut destination = Destination::default();
/// let report = configure(&source, &mut destination)?;
/// assert_eq!(destination.name, "x");
/// assert!(!destination.active);
/// assert_eq!(report.applied(), ["name"]);
/// # Ok::<_, autoconfig::AutoconfigError>(())
/// ```
///
/// # Errors
///
/// See [`collect_with`] and [`apply_with`].
pub fn configure<S, D>(source: &S, destination: &mut D) -> AutoconfigResult<Report>
where
    S: AutoConfig + ?Sized,
    D: AutoConfig + ?Sized,
{
    configure_with(&ConfigureOptions::default(), source, destination)
}

/// Copies keyed leaves from `source` to `destination` using `options`.
///
/// Collector diagnostics come first in the returned report, followed by
/// those raised while applying. In strict mode the check runs once over the
/// combined list, after the destination has been written.
///
/// A source field nested past the limit does not stop the rest of the
/// source from being applied; its failure is returned alongside any apply
/// failures, collection failures first.
///
/// # Errors
///
/// See [`collect_with`] and [`apply_with`].
pub fn configure_with<S, D>(
    options: &ConfigureOptions,
    source: &S,
    destination: &mut D,
) -> AutoconfigResult<Report>
where
    S: AutoConfig + ?Sized,
    D: AutoConfig + ?Sized,
{
    let mut collector = Collector::new(options.max_depth);
    source.collect_fields(&mut collector);
    let (collection, mut failures) = collector.finish_partial();
    let (table, collected) = collection.into_parts();

    let mut applier = Applier::new(&table, options.max_depth);
    destination.apply_fields(&mut applier);
    let (mut report, applied_failures) = applier.finish_partial();
    failures.extend(applied_failures);
    if let Some(err) = AutoconfigError::try_aggregate(failures) {
        return Err(err);
    }
    report.prepend_diagnostics(collected);
    enforce_strict(options, report.diagnostics())?;
    Ok(report)
}

fn enforce_strict(options: &ConfigureOptions, diagnostics: &[Diagnostic]) -> AutoconfigResult<()> {
    if options.strict && !diagnostics.is_empty() {
        return Err(AutoconfigError::Diagnostics(diagnostics.to_vec()));
    }
    Ok(())
}
