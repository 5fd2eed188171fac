//! Analyst configuration.
//!
//! The display language and fetch parameters are passed to the evaluator
//! explicitly so that identical inputs always render identical output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Language, Period, Result, RondaError};

/// Default number of snapshots requested from a metrics provider.
pub const DEFAULT_LIMIT: u32 = 10;

/// Configuration for a fundamentals analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalystConfig {
    /// Language used for reasoning labels (default: English)
    pub language: Language,

    /// Reporting period requested from the provider (default: TTM)
    pub period: Period,

    /// Maximum number of snapshots requested per symbol (default: 10)
    pub limit: u32,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            period: Period::Ttm,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl AnalystConfig {
    /// Set the display language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the reporting period.
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Set the snapshot limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Check the configuration for values the provider cannot serve.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Config`] if `limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(RondaError::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| RondaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalystConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.period, Period::Ttm);
        assert_eq!(config.limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnalystConfig::default()
            .with_language(Language::Zh)
            .with_period(Period::Annual)
            .with_limit(4);
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.period, Period::Annual);
        assert_eq!(config.limit, 4);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalystConfig::from_json(r#"{"language": "zh"}"#).unwrap();
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.period, Period::Ttm);
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn test_from_json_rejects_zero_limit() {
        let result = AnalystConfig::from_json(r#"{"limit": 0}"#);
        assert!(matches!(result, Err(RondaError::Config(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = AnalystConfig::from_path("/nonexistent/ronda.json");
        assert!(matches!(result, Err(RondaError::Config(_))));
    }
}
