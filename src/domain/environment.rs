//! Typed access to application configuration held in a metadata store.

use crate::domain::config_key::ConfigKey;
use crate::domain::error::AppEnvError;
use crate::ports::metadata_port::MetadataPort;

/// Accessor over an injected metadata store.
///
/// Holds no state of its own: every call performs exactly one read against
/// the store and nothing is cached, so results track the store.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    store: &'a dyn MetadataPort,
}

/// Every configuration value, resolved in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub server_url: String,
    pub protocol: String,
}

impl<'a> Environment<'a> {
    pub fn new(store: &'a dyn MetadataPort) -> Self {
        Self { store }
    }

    /// Return the string stored under `key`'s identifier, unmodified.
    pub fn configuration(&self, key: ConfigKey) -> Result<String, AppEnvError> {
        let identifier = key.identifier();
        tracing::debug!(key = identifier, "looking up configuration");

        match self.store.get_value(identifier)? {
            None => Err(AppEnvError::missing(identifier)),
            Some(value) => value
                .into_string()
                .map_err(|other| AppEnvError::wrong_type(identifier, other.kind())),
        }
    }

    pub fn server_url(&self) -> Result<String, AppEnvError> {
        self.configuration(ConfigKey::ServerUrl)
    }

    pub fn connection_protocol(&self) -> Result<String, AppEnvError> {
        self.configuration(ConfigKey::ConnectionProtocol)
    }

    pub fn resolve_all(&self) -> Result<ResolvedConfig, AppEnvError> {
        Ok(ResolvedConfig {
            server_url: self.server_url()?,
            protocol: self.connection_protocol()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_metadata_adapter::InMemoryMetadataAdapter;
    use crate::domain::metadata::MetadataValue;
    use std::cell::Cell;

    fn example_store() -> InMemoryMetadataAdapter {
        InMemoryMetadataAdapter::new()
            .with_string("server_url", "https://api.example.com")
            .with_string("protocol", "https")
    }

    #[test]
    fn returns_both_values() {
        let store = example_store();
        let env = Environment::new(&store);
        assert_eq!(
            env.configuration(ConfigKey::ServerUrl).unwrap(),
            "https://api.example.com"
        );
        assert_eq!(env.configuration(ConfigKey::ConnectionProtocol).unwrap(), "https");
    }

    #[test]
    fn value_is_not_trimmed_or_validated() {
        let store = InMemoryMetadataAdapter::new().with_string("server_url", "  not a url \n");
        let env = Environment::new(&store);
        assert_eq!(env.server_url().unwrap(), "  not a url \n");
    }

    #[test]
    fn empty_string_is_returned_as_stored() {
        let store = InMemoryMetadataAdapter::new().with_string("protocol", "");
        let env = Environment::new(&store);
        assert_eq!(env.connection_protocol().unwrap(), "");
    }

    #[test]
    fn missing_key_is_an_error() {
        let store = InMemoryMetadataAdapter::new().with_string("protocol", "https");
        let err = Environment::new(&store).server_url().unwrap_err();
        assert!(matches!(
            err,
            AppEnvError::KeyNotFoundOrWrongType { ref identifier, found: None }
                if identifier == "server_url"
        ));
    }

    #[test]
    fn non_string_value_is_an_error() {
        let store = InMemoryMetadataAdapter::new()
            .with_string("server_url", "https://api.example.com")
            .with_value("protocol", MetadataValue::Integer(443));
        let err = Environment::new(&store).connection_protocol().unwrap_err();
        assert!(matches!(
            err,
            AppEnvError::KeyNotFoundOrWrongType { ref identifier, found: Some("integer") }
                if identifier == "protocol"
        ));
    }

    #[test]
    fn unavailable_store_fails_every_key() {
        let store = InMemoryMetadataAdapter::unavailable();
        let env = Environment::new(&store);
        for key in ConfigKey::ALL {
            assert!(matches!(
                env.configuration(key),
                Err(AppEnvError::MetadataUnavailable { .. })
            ));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let store = example_store();
        let env = Environment::new(&store);
        let first = env.server_url().unwrap();
        let second = env.server_url().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_all_collects_both() {
        let store = example_store();
        let resolved = Environment::new(&store).resolve_all().unwrap();
        assert_eq!(
            resolved,
            ResolvedConfig {
                server_url: "https://api.example.com".into(),
                protocol: "https".into(),
            }
        );
    }

    #[test]
    fn resolve_all_stops_at_first_failure() {
        let store = InMemoryMetadataAdapter::new().with_string("protocol", "https");
        let err = Environment::new(&store).resolve_all().unwrap_err();
        assert!(matches!(
            err,
            AppEnvError::KeyNotFoundOrWrongType { ref identifier, .. } if identifier == "server_url"
        ));
    }

    struct CountingStore {
        reads: Cell<usize>,
    }

    impl MetadataPort for CountingStore {
        fn get_value(&self, _key: &str) -> Result<Option<MetadataValue>, AppEnvError> {
            self.reads.set(self.reads.get() + 1);
            Ok(Some(MetadataValue::from("value")))
        }
    }

    #[test]
    fn each_lookup_reads_the_store_once() {
        let store = CountingStore { reads: Cell::new(0) };
        let env = Environment::new(&store);
        env.server_url().unwrap();
        env.server_url().unwrap();
        assert_eq!(store.reads.get(), 2);
    }
}
