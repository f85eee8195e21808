//! Food lookup providers
//!
//! Defines the Provider enum, ProviderError types, and factory for creating provider
//! instances from configuration.

use std::time::Duration;

use thiserror::Error;

use crate::config::{ProviderConfig, ProviderKind};
use crate::food::{FoodDetail, Suggestion};

mod catalog;
mod graphql;

pub use catalog::{Catalog, CatalogEntry, DEFAULT_LIMIT as DEFAULT_CATALOG_LIMIT};
pub use graphql::GraphqlClient;

/// Errors that can occur while talking to a food provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Provider is missing required configuration
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint returned a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Endpoint answered with GraphQL errors
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// Failed to parse the response payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// No food with the requested name
    #[error("Food not found: {0}")]
    NotFound(String),

    /// Request was superseded before it finished
    #[error("Request cancelled")]
    Cancelled,
}

/// Food provider implementations
#[derive(Debug)]
pub enum Provider {
    /// Remote GraphQL food endpoint
    Graphql(GraphqlClient),
    /// Offline catalog loaded from a TOML file
    Catalog(Catalog),
}

impl Provider {
    /// Create a provider from configuration
    ///
    /// Returns an error if the configuration is incomplete (e.g., catalog kind without a
    /// catalog path) or the catalog file cannot be loaded.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        match config.kind {
            ProviderKind::Graphql => {
                let endpoint = config.endpoint.trim();
                if endpoint.is_empty() {
                    return Err(ProviderError::NotConfigured(
                        "Missing endpoint in [provider] config".to_string(),
                    ));
                }

                let token = config
                    .token
                    .as_ref()
                    .filter(|t| !t.trim().is_empty())
                    .cloned();

                Ok(Provider::Graphql(GraphqlClient::new(
                    endpoint.to_string(),
                    token,
                    Duration::from_millis(config.timeout_ms),
                )?))
            }
            ProviderKind::Catalog => {
                let path = config.catalog_path.as_ref().ok_or_else(|| {
                    ProviderError::NotConfigured(
                        "Missing catalog_path in [provider] config".to_string(),
                    )
                })?;

                let catalog = Catalog::load(path)?
                    .with_limit(config.limit)
                    .with_latency(Duration::from_millis(config.latency_ms));
                Ok(Provider::Catalog(catalog))
            }
        }
    }

    /// Look up suggestions for a committed term
    pub async fn search(&self, term: &str) -> Result<Vec<Suggestion>, ProviderError> {
        match self {
            Provider::Graphql(client) => client.search(term).await,
            Provider::Catalog(catalog) => catalog.search(term).await,
        }
    }

    /// Fetch the detail record for a food name
    pub async fn fetch_detail(&self, name: &str) -> Result<FoodDetail, ProviderError> {
        match self {
            Provider::Graphql(client) => client.fetch_detail(name).await,
            Provider::Catalog(catalog) => catalog.fetch_detail(name).await,
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
