use thiserror::Error;

use crate::provider::ProviderError;

/// Custom error types for calorie-search
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Lookup worker failed: {0}")]
    Worker(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
