//! Document store adapter backed by MongoDB
//!
//! One bulk read at startup: connect, ping, `find({})`, normalize, close.
//! There is no retry and no caching; a failure here is terminal and is
//! rendered by the UI as a full-screen error state.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::Client;
use thiserror::Error;

use super::config::{ConfigError, ConnectionConfig};
use super::document::{Document, RawDocument};

/// Terminal failures on the startup fetch path
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("MongoDB connection error: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("An unexpected error occurred while fetching documents: {0}")]
    Fetch(#[source] mongodb::error::Error),
}

impl StoreError {
    /// Sort a driver error into the connection or the unexpected bucket.
    fn from_driver(err: mongodb::error::Error) -> Self {
        match &*err.kind {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_)
            | ErrorKind::Authentication { .. }
            | ErrorKind::InvalidArgument { .. } => Self::Connection(err),
            _ => Self::Fetch(err),
        }
    }

    /// Remediation line shown under the error message, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::Connection(_) => {
                Some("Please check your connection string and network settings.")
            }
            Self::Fetch(_) => None,
        }
    }
}

/// Fetch every document in the configured collection, normalized.
///
/// The server selection timeout from the config bounds how long an
/// unreachable server can stall startup.
pub async fn fetch_all(config: &ConnectionConfig) -> Result<Vec<Document>, StoreError> {
    tracing::info!("Connecting to MongoDB...");

    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(StoreError::from_driver)?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options).map_err(StoreError::from_driver)?;
    let database = client.database(&config.database);

    // Ping first so an unreachable server fails here, not inside the read.
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(StoreError::from_driver)?;
    tracing::info!("Connection successful");

    tracing::info!("Fetching data from '{}' collection...", config.collection);
    let collection = database.collection::<RawDocument>(&config.collection);
    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(StoreError::from_driver)?;

    let mut docs = Vec::new();
    while let Some(raw) = cursor.try_next().await.map_err(StoreError::from_driver)? {
        docs.push(Document::from_raw(raw));
    }
    tracing::info!("Found {} documents", docs.len());

    drop(cursor);
    client.shutdown().await;
    tracing::info!("MongoDB connection closed");

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_carry_the_connection_hint() {
        let err = StoreError::Config(ConfigError::MissingUri);
        assert_eq!(
            err.hint(),
            Some("Please check your connection string and network settings.")
        );
        assert_eq!(err.to_string(), "MONGODB_URI is not set");
    }
}
