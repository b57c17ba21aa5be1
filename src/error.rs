use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the page from its URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// An hrecipe fragment lacks a mandatory field
    #[error("Recipe #{index} is missing mandatory field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// Failed to write the report
    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),

    /// Failed to serialize the report
    #[error("Failed to serialize report: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
