//! Tunables for the collection and apply passes.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::AutoconfigResult;

/// Prefix for environment variables read by [`ConfigureOptions::load`].
pub const ENV_PREFIX: &str = "AUTOCONFIG_";

/// Options controlling one mapping call.
///
/// # Examples
///
/// ```
/// use autoconfig::ConfigureOptions;
///
/// let options = ConfigureOptions::default().with_max_depth(4).strict(true);
/// assert_eq!(options.max_depth, 4);
/// assert!(options.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigureOptions {
    /// Maximum number of nested struct levels entered below the root.
    pub max_depth: usize,
    /// Fail the call when any diagnostic was recorded.
    pub strict: bool,
}

impl ConfigureOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Layers `AUTOCONFIG_`-prefixed environment variables over the
    /// defaults.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads options from the environment.
    ///
    /// `AUTOCONFIG_MAX_DEPTH` and `AUTOCONFIG_STRICT` override the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AutoconfigError::Options`] when a variable cannot be
    /// parsed into the expected type.
    pub fn load() -> AutoconfigResult<Self> {
        let options: Self = Self::figment().extract()?;
        tracing::debug!(
            max_depth = options.max_depth,
            strict = options.strict,
            "loaded autoconfig options"
        );
        Ok(options)
    }
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}
