//! Recognized configuration keys and their metadata identifiers.

use crate::domain::error::AppEnvError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ServerUrl,
    ConnectionProtocol,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::ServerUrl, ConfigKey::ConnectionProtocol];

    /// The literal key this setting is stored under in the metadata store.
    pub fn identifier(self) -> &'static str {
        match self {
            ConfigKey::ServerUrl => "server_url",
            ConfigKey::ConnectionProtocol => "protocol",
        }
    }

    /// Name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            ConfigKey::ServerUrl => "server-url",
            ConfigKey::ConnectionProtocol => "protocol",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ConfigKey {
    type Err = AppEnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.identifier() == s || k.cli_name() == s)
            .ok_or_else(|| AppEnvError::UnknownKey { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_fixed_literals() {
        assert_eq!(ConfigKey::ServerUrl.identifier(), "server_url");
        assert_eq!(ConfigKey::ConnectionProtocol.identifier(), "protocol");
    }

    #[test]
    fn identifiers_are_non_empty_and_stable() {
        for key in ConfigKey::ALL {
            let first = key.identifier();
            assert!(!first.is_empty());
            assert_eq!(first, key.identifier());
        }
    }

    #[test]
    fn identifiers_are_distinct() {
        assert_ne!(
            ConfigKey::ServerUrl.identifier(),
            ConfigKey::ConnectionProtocol.identifier()
        );
    }

    #[test]
    fn display_prints_identifier() {
        assert_eq!(ConfigKey::ServerUrl.to_string(), "server_url");
        assert_eq!(ConfigKey::ConnectionProtocol.to_string(), "protocol");
    }

    #[test]
    fn parses_identifier_and_cli_name() {
        assert_eq!("server_url".parse::<ConfigKey>().unwrap(), ConfigKey::ServerUrl);
        assert_eq!("server-url".parse::<ConfigKey>().unwrap(), ConfigKey::ServerUrl);
        assert_eq!(
            "protocol".parse::<ConfigKey>().unwrap(),
            ConfigKey::ConnectionProtocol
        );
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "port".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, AppEnvError::UnknownKey { name } if name == "port"));
    }
}
