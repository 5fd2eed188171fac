//! Error types for the Ronda framework.
//!
//! Missing metrics and instruments without data are expected conditions and
//! are never reported through this type. It covers the failures that do
//! surface: bad input, unknown identifiers and collaborator errors.

use thiserror::Error;

/// The main error type for Ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a language code is not supported.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Error when a reporting period is not recognized.
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Error when a date is out of range or invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error when a rule group is not found.
    #[error("Rule group not found: {0}")]
    RuleGroupNotFound(String),

    /// Error loading or validating configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
pub type Result<T> = std::result::Result<T, RondaError>;
