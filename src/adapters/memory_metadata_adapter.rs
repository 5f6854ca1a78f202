//! In-memory metadata store.

use crate::domain::error::AppEnvError;
use crate::domain::metadata::MetadataValue;
use crate::ports::metadata_port::MetadataPort;
use std::collections::HashMap;

/// A metadata dictionary supplied directly by the caller.
///
/// `None` models a host that never populated a store at all.
#[derive(Debug, Clone)]
pub struct InMemoryMetadataAdapter {
    entries: Option<HashMap<String, MetadataValue>>,
}

impl InMemoryMetadataAdapter {
    pub fn new() -> Self {
        Self {
            entries: Some(HashMap::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self { entries: None }
    }

    pub fn with_value(mut self, key: &str, value: MetadataValue) -> Self {
        self.entries
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value);
        self
    }

    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_value(key, MetadataValue::from(value))
    }
}

impl From<HashMap<String, MetadataValue>> for InMemoryMetadataAdapter {
    fn from(entries: HashMap<String, MetadataValue>) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}

impl MetadataPort for InMemoryMetadataAdapter {
    fn get_value(&self, key: &str) -> Result<Option<MetadataValue>, AppEnvError> {
        let entries = self
            .entries
            .as_ref()
            .ok_or_else(|| AppEnvError::MetadataUnavailable {
                source_name: "in-memory metadata".to_string(),
            })?;
        Ok(entries.get(key).cloned())
    }
}
