//! Metadata store access port trait.

use crate::domain::error::AppEnvError;
use crate::domain::metadata::MetadataValue;

pub trait MetadataPort {
    /// Look up a single key.
    ///
    /// Returns `Err(AppEnvError::MetadataUnavailable)` when the store itself
    /// cannot be located, `Ok(None)` when the key is absent.
    fn get_value(&self, key: &str) -> Result<Option<MetadataValue>, AppEnvError>;
}
