//! Core crate for the `autoconfig` field mapper.
//!
//! `autoconfig` copies scalar settings between two independently declared
//! structs. Each leaf field names a *declared key*; a collection pass
//! flattens the source into a [`SymbolTable`] keyed by those names, and an
//! apply pass writes every matching entry into the destination, recursing
//! through nested structs on both sides.
//!
//! The [`AutoConfig`] trait is normally derived. The derive macro lives in the
//! companion `autoconfig_macros` crate and is re-exported here.
//!
//! ```
//! use autoconfig::{AutoConfig, configure};
//!
//! #[derive(AutoConfig)]
//! struct Listener {
//!     #[autoconfig(key = "port")]
//!     port: u16,
//! }
//!
//! #[derive(AutoConfig)]
//! struct Service {
//!     #[autoconfig(key = "service-name")]
//!     name: String,
//!     #[autoconfig(nested)]
//!     listener: Listener,
//! }
//!
//! #[derive(AutoConfig, Default)]
//! struct Settings {
//!     #[autoconfig(key = "service-name")]
//!     name: String,
//!     #[autoconfig(key = "port")]
//!     port: u32,
//! }
//!
//! let service = Service {
//!     name: "api".into(),
//!     listener: Listener { port: 8080 },
//! };
//! let mut settings = Settings::default();
//! configure(&service, &mut settings)?;
//! assert_eq!(settings.name, "api");
//! assert_eq!(settings.port, 8080);
//! # Ok::<_, autoconfig::AutoconfigError>(())
//! ```

pub use autoconfig_macros::AutoConfig;

mod apply;
mod collect;
mod configure;
mod diagnostics;
mod error;
mod options;
pub mod persist;
mod registry;
mod table;
mod timestamp;
mod trail;
mod value;

pub use apply::{Applier, Report};
pub use collect::{Collection, Collector};
pub use configure::{apply, apply_with, collect, collect_with, configure, configure_with};
pub use diagnostics::Diagnostic;
pub use error::{AggregatedErrors, AutoconfigError, AutoconfigResult};
pub use options::{ConfigureOptions, ENV_PREFIX};
pub use persist::PersistError;
pub use registry::{Registry, RegistryError};
pub use table::SymbolTable;
pub use timestamp::timestamp_from_f64;
pub use value::{CoercionFailure, ConfigValue, IntegerValue, Leaf, ValueKind};

/// Trait implemented for structs whose keyed fields can be collected and
/// applied.
///
/// Derive it with `#[derive(AutoConfig)]`; the generated methods visit the
/// fields in declaration order. A manual implementation is equivalent:
///
/// ```
/// use autoconfig::{Applier, AutoConfig, Collector};
///
/// struct Limits {
///     retries: u8,
/// }
///
/// impl AutoConfig for Limits {
///     fn collect_fields(&self, collector: &mut Collector) {
///         collector.leaf("retries", "retries", &self.retries);
///     }
///
///     fn apply_fields(&mut self, applier: &mut Applier<'_>) {
///         applier.leaf("retries", "retries", &mut self.retries);
///     }
/// }
///
/// let table = autoconfig::collect(&Limits { retries: 3 })?.into_parts().0;
/// assert_eq!(table.len(), 1);
/// # Ok::<_, autoconfig::AutoconfigError>(())
/// ```
pub trait AutoConfig {
    /// Reports every field of `self` to `collector`.
    fn collect_fields(&self, collector: &mut Collector);

    /// Offers every field of `self` to `applier` for assignment.
    fn apply_fields(&mut self, applier: &mut Applier<'_>);
}

impl<T: AutoConfig + ?Sized> AutoConfig for Box<T> {
    fn collect_fields(&self, collector: &mut Collector) {
        (**self).collect_fields(collector);
    }

    fn apply_fields(&mut self, applier: &mut Applier<'_>) {
        (**self).apply_fields(applier);
    }
}

/// An absent nested struct contributes nothing and receives nothing.
impl<T: AutoConfig> AutoConfig for Option<T> {
    fn collect_fields(&self, collector: &mut Collector) {
        if let Some(inner) = self {
            inner.collect_fields(collector);
        }
    }

    fn apply_fields(&mut self, applier: &mut Applier<'_>) {
        if let Some(inner) = self {
            inner.apply_fields(applier);
        }
    }
}

/// Returns `fallback` when `value` equals the type's default.
///
/// # Examples
///
/// ```
/// use autoconfig::fallback_if_default;
///
/// assert_eq!(fallback_if_default(String::new(), "y".to_owned()), "y");
/// assert_eq!(fallback_if_default(0, 1), 1);
/// assert_eq!(fallback_if_default(5, 1), 5);
/// ```
#[must_use]
pub fn fallback_if_default<T: Default + PartialEq>(value: T, fallback: T) -> T {
    if value == T::default() {
        fallback
    } else {
        value
    }
}
