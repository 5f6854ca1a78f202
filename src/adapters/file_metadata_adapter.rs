//! INI bundle metadata adapter.
//!
//! Keys are read from the `[bundle]` section, falling back to keys declared
//! before any section header. INI carries no types, so every value is a
//! string.
//!
//! Only lines whose first non-blank character is `#` or `;` are comments;
//! both characters are kept verbatim inside values. Values lose leading and
//! trailing whitespace, which INI cannot represent.

use crate::domain::error::AppEnvError;
use crate::domain::metadata::MetadataValue;
use crate::ports::metadata_port::MetadataPort;
use configparser::ini::Ini;
use std::io::ErrorKind;
use std::path::Path;

pub const BUNDLE_SECTION: &str = "bundle";
const TOP_LEVEL_SECTION: &str = "default";

pub struct FileMetadataAdapter {
    config: Ini,
}

impl FileMetadataAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppEnvError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppEnvError::MetadataUnavailable {
                source_name: source_name.clone(),
            },
            _ => AppEnvError::Io(e),
        })?;
        tracing::debug!(path = %source_name, "loaded INI metadata");
        Self::parse(content, source_name)
    }

    pub fn from_string(content: &str) -> Result<Self, AppEnvError> {
        Self::parse(content.to_string(), "<string>".to_string())
    }

    fn parse(content: String, source_name: String) -> Result<Self, AppEnvError> {
        // Bundle keys are case-sensitive.
        let mut defaults = Ini::new_cs().defaults();
        // configparser cuts values at any comment symbol, so none are registered
        // and whole-line comments are dropped before parsing instead.
        defaults.comment_symbols = Vec::new();
        let mut config = Ini::new_from_defaults(defaults);
        config
            .read(strip_comment_lines(&content))
            .map_err(|reason| AppEnvError::MetadataParse {
                source_name,
                reason,
            })?;
        Ok(Self { config })
    }
}

fn strip_comment_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !matches!(line.trim_start().chars().next(), Some('#' | ';')))
        .collect::<Vec<_>>()
        .join("\n")
}

impl MetadataPort for FileMetadataAdapter {
    fn get_value(&self, key: &str) -> Result<Option<MetadataValue>, AppEnvError> {
        let value = self
            .config
            .get(BUNDLE_SECTION, key)
            .or_else(|| self.config.get(TOP_LEVEL_SECTION, key));
        Ok(value.map(MetadataValue::String))
    }
}
