//! Domain error types.

/// Top-level error type for appenv.
#[derive(Debug, thiserror::Error)]
pub enum AppEnvError {
    #[error("metadata store unavailable: {source_name}")]
    MetadataUnavailable { source_name: String },

    #[error("{}", describe_lookup_failure(identifier, *found))]
    KeyNotFoundOrWrongType {
        identifier: String,
        /// Kind of the stored value when the key exists but is not a string.
        found: Option<&'static str>,
    },

    #[error("metadata parse error in {source_name}: {reason}")]
    MetadataParse { source_name: String, reason: String },

    #[error("process metadata store is already installed")]
    AlreadyInstalled,

    #[error("unknown configuration key '{name}'")]
    UnknownKey { name: String },

    #[error("unknown metadata format '{name}' (expected ini or json)")]
    UnknownFormat { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn describe_lookup_failure(identifier: &str, found: Option<&'static str>) -> String {
    match found {
        None => format!("missing metadata key '{identifier}'"),
        Some(kind) => format!("metadata key '{identifier}' holds {kind}, expected string"),
    }
}

impl AppEnvError {
    pub fn missing(identifier: &str) -> Self {
        AppEnvError::KeyNotFoundOrWrongType {
            identifier: identifier.to_string(),
            found: None,
        }
    }

    pub fn wrong_type(identifier: &str, found: &'static str) -> Self {
        AppEnvError::KeyNotFoundOrWrongType {
            identifier: identifier.to_string(),
            found: Some(found),
        }
    }
}

impl From<&AppEnvError> for std::process::ExitCode {
    fn from(err: &AppEnvError) -> Self {
        let code: u8 = match err {
            AppEnvError::Io(_) => 1,
            AppEnvError::MetadataUnavailable { .. }
            | AppEnvError::MetadataParse { .. }
            | AppEnvError::AlreadyInstalled => 2,
            AppEnvError::KeyNotFoundOrWrongType { .. } => 3,
            AppEnvError::UnknownKey { .. } | AppEnvError::UnknownFormat { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
