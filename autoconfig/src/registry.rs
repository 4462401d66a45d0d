//! Name-keyed constructor registry.
//!
//! A [`Registry`] maps names to constructors and builds fresh instances on
//! demand. One mutex guards both registration and instantiation, so a
//! registry can be shared freely between threads.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;

type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Errors raised by [`Registry::instantiate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No constructor was registered under the requested name.
    #[error("no constructor registered for '{name}'")]
    NotRegistered {
        /// Requested name.
        name: String,
    },
}

/// Thread-safe mapping from name to constructor.
///
/// # Examples
///
/// ```
/// use autoconfig::Registry;
///
/// let registry: Registry<String> = Registry::new(|| "dummy".to_owned());
/// registry.register("a", || "a".to_owned());
///
/// assert_eq!(registry.instantiate("a").as_deref(), Ok("a"));
/// assert!(registry.instantiate("c").is_err());
/// assert_eq!(registry.instantiate_or_fallback("c"), ("dummy".to_owned(), false));
/// ```
pub struct Registry<T> {
    fallback: Constructor<T>,
    constructors: Mutex<HashMap<String, Constructor<T>>>,
}

impl<T> Registry<T> {
    /// Creates an empty registry whose misses produce `fallback()`.
    #[must_use]
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            fallback: Box::new(fallback),
            constructors: Mutex::new(HashMap::new()),
        }
    }

    /// Registers `constructor` under `name`.
    ///
    /// Returns `true` when an earlier constructor for `name` was replaced.
    pub fn register<N, F>(&self, name: N, constructor: F) -> bool
    where
        N: Into<String>,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let key: String = name.into();
        tracing::debug!(name = %key, "registering constructor");
        self.constructors
            .lock()
            .insert(key, Box::new(constructor))
            .is_some()
    }

    /// Builds a new instance of the type registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] when `name` is unknown.
    pub fn instantiate(&self, name: &str) -> Result<T, RegistryError> {
        let constructors = self.constructors.lock();
        constructors.get(name).map(|build| build()).ok_or_else(|| {
            RegistryError::NotRegistered {
                name: name.to_owned(),
            }
        })
    }

    /// Builds the instance registered under `name`, or the fallback.
    ///
    /// The flag is `true` when `name` was found.
    #[must_use]
    pub fn instantiate_or_fallback(&self, name: &str) -> (T, bool) {
        self.instantiate(name).map_or_else(
            |err| {
                tracing::warn!(error = %err, "using fallback instance");
                ((self.fallback)(), false)
            },
            |instance| (instance, true),
        )
    }

    /// Returns `true` when `name` has a constructor.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.lock().contains_key(name)
    }

    /// Registered names in lexical order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.lock().len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.lock().is_empty()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}
