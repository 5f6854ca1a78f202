//! Process-wide metadata store.
//!
//! The host installs its store once at startup; any code can then build an
//! [`Environment`] over it without threading the store through. Until a store
//! is installed every lookup fails with `MetadataUnavailable`.

use crate::domain::environment::Environment;
use crate::domain::error::AppEnvError;
use crate::domain::metadata::MetadataValue;
use crate::ports::metadata_port::MetadataPort;
use std::sync::OnceLock;

static PROCESS_STORE: OnceLock<Box<dyn MetadataPort + Send + Sync>> = OnceLock::new();
static PROCESS_METADATA: ProcessMetadata = ProcessMetadata;

/// Install the process-wide store. Fails if one is already installed.
pub fn install<P>(port: P) -> Result<(), AppEnvError>
where
    P: MetadataPort + Send + Sync + 'static,
{
    PROCESS_STORE
        .set(Box::new(port))
        .map_err(|_| AppEnvError::AlreadyInstalled)?;
    tracing::debug!("process metadata store installed");
    Ok(())
}

pub fn is_installed() -> bool {
    PROCESS_STORE.get().is_some()
}

/// Handle to whatever store has been installed for this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMetadata;

impl MetadataPort for ProcessMetadata {
    fn get_value(&self, key: &str) -> Result<Option<MetadataValue>, AppEnvError> {
        match PROCESS_STORE.get() {
            Some(store) => store.get_value(key),
            None => Err(AppEnvError::MetadataUnavailable {
                source_name: "process metadata store".to_string(),
            }),
        }
    }
}

pub fn process_environment() -> Environment<'static> {
    Environment::new(&PROCESS_METADATA)
}
