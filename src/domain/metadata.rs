//! Dynamically-typed values held by a metadata store.
//!
//! Bundle manifests carry strings alongside numbers, booleans and nested
//! containers. Lookups hand back a [`MetadataValue`] and callers convert
//! with a checked accessor such as [`MetadataValue::into_string`].

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<MetadataValue>),
    Dictionary(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Take the string out, handing back any other kind unchanged.
    pub fn into_string(self) -> Result<String, Self> {
        match self {
            MetadataValue::String(s) => Ok(s),
            other => Err(other),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MetadataValue::String(_) => "string",
            MetadataValue::Integer(_) => "integer",
            MetadataValue::Real(_) => "real",
            MetadataValue::Boolean(_) => "boolean",
            MetadataValue::Array(_) => "array",
            MetadataValue::Dictionary(_) => "dictionary",
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Real(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Boolean(value)
    }
}
