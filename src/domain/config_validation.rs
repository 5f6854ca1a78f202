//! Launch-time configuration validation.
//!
//! Checks that every recognized key resolves to a string before any
//! dependent feature runs.

use crate::domain::config_key::ConfigKey;
use crate::domain::environment::Environment;
use crate::domain::error::AppEnvError;
use crate::ports::metadata_port::MetadataPort;

pub fn validate_metadata(store: &dyn MetadataPort) -> Result<(), AppEnvError> {
    let env = Environment::new(store);
    for key in ConfigKey::ALL {
        env.configuration(key)?;
    }
    Ok(())
}

/// Like [`validate_metadata`] but reports every failing key.
///
/// An unavailable store is reported once rather than per key.
pub fn check_metadata(store: &dyn MetadataPort) -> Vec<AppEnvError> {
    let env = Environment::new(store);
    let mut problems = Vec::new();
    for key in ConfigKey::ALL {
        match env.configuration(key) {
            Ok(_) => {}
            Err(e @ AppEnvError::MetadataUnavailable { .. }) => {
                tracing::warn!(error = %e, "metadata store unavailable");
                return vec![e];
            }
            Err(e) => {
                tracing::warn!(key = key.identifier(), error = %e, "configuration check failed");
                problems.push(e);
            }
        }
    }
    problems
}
