//! Connection configuration sourced from the process environment

use std::time::Duration;

use thiserror::Error;

/// Default database name, matching the collection the hub was built for.
const DEFAULT_DATABASE: &str = "bdoci";
/// Default collection holding the documentation records.
const DEFAULT_COLLECTION: &str = "docs";
/// How long server selection may take before the connection counts as failed.
const SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

/// Errors while resolving the connection settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MONGODB_URI is not set")]
    MissingUri,
}

/// Settings for the one-shot document fetch
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// MongoDB connection string
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection name
    pub collection: String,
    /// Server selection timeout applied to the client
    pub server_selection_timeout: Duration,
}

impl ConnectionConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// `MONGODB_URI` is required; `DOCHUB_DATABASE` and `DOCHUB_COLLECTION`
    /// override the built-in names.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through a lookup function.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let uri = lookup("MONGODB_URI").ok_or(ConfigError::MissingUri)?;

        Ok(Self {
            uri,
            database: lookup("DOCHUB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: lookup("DOCHUB_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            server_selection_timeout: Duration::from_millis(SERVER_SELECTION_TIMEOUT_MS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uri_is_an_error() {
        let result = ConnectionConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingUri)));
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConnectionConfig::from_lookup(|key| match key {
            "MONGODB_URI" => Some("mongodb://localhost:27017".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "bdoci");
        assert_eq!(config.collection, "docs");
        assert_eq!(config.server_selection_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_environment_overrides() {
        let config = ConnectionConfig::from_lookup(|key| match key {
            "MONGODB_URI" => Some("mongodb://db.example.com".to_string()),
            "DOCHUB_DATABASE" => Some("handbook".to_string()),
            "DOCHUB_COLLECTION" => Some("pages".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.database, "handbook");
        assert_eq!(config.collection, "pages");
    }
}
