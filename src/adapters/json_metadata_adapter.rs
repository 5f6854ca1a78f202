//! JSON bundle manifest adapter.
//!
//! The manifest root must be an object. Values keep their JSON type so a
//! numeric `protocol` is reported as an integer rather than coerced. `null`
//! entries are treated as absent.

use crate::domain::error::AppEnvError;
use crate::domain::metadata::MetadataValue;
use crate::ports::metadata_port::MetadataPort;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

pub struct JsonMetadataAdapter {
    entries: BTreeMap<String, MetadataValue>,
}

impl JsonMetadataAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppEnvError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppEnvError::MetadataUnavailable {
                source_name: source_name.clone(),
            },
            _ => AppEnvError::Io(e),
        })?;
        tracing::debug!(path = %source_name, "loaded JSON metadata");
        Self::parse(&content, source_name)
    }

    pub fn from_string(content: &str) -> Result<Self, AppEnvError> {
        Self::parse(content, "<string>".to_string())
    }

    fn parse(content: &str, source_name: String) -> Result<Self, AppEnvError> {
        let root: Value =
            serde_json::from_str(content).map_err(|e| AppEnvError::MetadataParse {
                source_name: source_name.clone(),
                reason: e.to_string(),
            })?;
        let Value::Object(map) = root else {
            return Err(AppEnvError::MetadataParse {
                source_name,
                reason: "manifest root must be an object".to_string(),
            });
        };
        let entries = map
            .into_iter()
            .filter_map(|(k, v)| convert(v).map(|v| (k, v)))
            .collect();
        Ok(Self { entries })
    }
}

fn convert(value: Value) -> Option<MetadataValue> {
    Some(match value {
        Value::Null => return None,
        Value::Bool(b) => MetadataValue::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => MetadataValue::Integer(i),
            None => MetadataValue::Real(n.as_f64()?),
        },
        Value::String(s) => MetadataValue::String(s),
        Value::Array(items) => {
            MetadataValue::Array(items.into_iter().filter_map(convert).collect())
        }
        Value::Object(map) => MetadataValue::Dictionary(
            map.into_iter()
                .filter_map(|(k, v)| convert(v).map(|v| (k, v)))
                .collect(),
        ),
    })
}

impl MetadataPort for JsonMetadataAdapter {
    fn get_value(&self, key: &str) -> Result<Option<MetadataValue>, AppEnvError> {
        Ok(self.entries.get(key).cloned())
    }
}
