//! Conversions from external error types into `AutoconfigError`.

use super::AutoconfigError;

impl From<figment::Error> for AutoconfigError {
    fn from(e: figment::Error) -> Self {
        Self::Options(Box::new(e))
    }
}
