//! Error types for FMP API client.

use ronda_traits::{Date, RondaError};
use thiserror::Error;

/// Errors that can occur when using the FMP API.
#[derive(Debug, Error)]
pub enum FmpError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("FMP API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// TTM figures requested for a past date.
    #[error("TTM data is only available as of today, not {0}; use an annual or quarterly period")]
    HistoricalTtm(Date),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl From<FmpError> for RondaError {
    fn from(err: FmpError) -> Self {
        Self::DataFetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_data_fetch() {
        let as_of = Date::from_ymd_opt(2005, 1, 1).unwrap();
        let err: RondaError = FmpError::HistoricalTtm(as_of).into();
        assert!(matches!(err, RondaError::DataFetch(ref msg) if msg.contains("2005-01-01")));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FmpError::MissingApiKey.to_string(),
            "FMP_API_KEY environment variable not set"
        );
        assert!(FmpError::Api("HTTP 500".to_string()).to_string().contains("500"));
    }
}
