//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    metrics::{assemble_financial_metrics, select_snapshots},
    types::{FinancialGrowth, FinancialRatios, KeyMetrics},
};
use chrono::Utc;
use reqwest::Client;
use ronda_traits::{Date, FinancialMetrics, Period};
use std::env;
use tracing::debug;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or a `.env`
    /// file exists but cannot be read.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint, "FMP request");
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Endpoint path for a per-period resource. TTM uses the `-ttm` variant,
    /// which takes neither a period nor a limit.
    fn endpoint(resource: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
        let symbol = symbol.to_uppercase();
        if period == Period::Ttm {
            return format!("{resource}-ttm?symbol={symbol}");
        }
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        format!(
            "{resource}?symbol={symbol}&period={}{limit_param}",
            period.as_str()
        )
    }

    /// Get financial ratios for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `period` - Annual, quarterly or trailing twelve months
    /// * `limit` - Number of periods to return (ignored for TTM)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialRatios>> {
        self.get(&Self::endpoint("ratios", symbol, period, limit))
            .await
    }

    /// Get key metrics for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn key_metrics(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<KeyMetrics>> {
        self.get(&Self::endpoint("key-metrics", symbol, period, limit))
            .await
    }

    /// Get period-over-period growth for a symbol.
    ///
    /// FMP has no TTM growth endpoint, so TTM requests the latest annual
    /// entries instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn financial_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialGrowth>> {
        let period = if period == Period::Ttm {
            Period::Annual
        } else {
            period
        };
        self.get(&Self::endpoint("financial-growth", symbol, period, limit))
            .await
    }

    /// Get metric snapshots for a symbol, most recent first.
    ///
    /// Ratios, key metrics and growth are fetched concurrently and all three
    /// must succeed. TTM figures are only available as of today, so a TTM
    /// request for an earlier `as_of` fails instead of returning current
    /// data.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `as_of` - Latest report date to include
    /// * `period` - Annual, quarterly or trailing twelve months
    /// * `limit` - Maximum number of snapshots to return
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::HistoricalTtm`] for a TTM request before today,
    /// or the first error of the three requests.
    pub async fn financial_metrics(
        &self,
        symbol: &str,
        as_of: Date,
        period: Period,
        limit: u32,
    ) -> Result<Vec<FinancialMetrics>> {
        let today = Utc::now().date_naive();
        check_as_of(period, as_of, today)?;

        let responses = tokio::join!(
            self.ratios(symbol, period, Some(limit)),
            self.key_metrics(symbol, period, Some(limit)),
            self.financial_growth(symbol, period, Some(limit)),
        );

        let snapshots = assemble_responses(symbol, period, today, responses)?;
        let selected = select_snapshots(
            snapshots,
            symbol,
            as_of,
            period,
            usize::try_from(limit).unwrap_or(usize::MAX),
        );
        debug!(symbol, count = selected.len(), "assembled financial metrics");
        Ok(selected)
    }
}

/// Reject TTM requests for a date before `today`.
fn check_as_of(period: Period, as_of: Date, today: Date) -> Result<()> {
    if period == Period::Ttm && as_of < today {
        return Err(FmpError::HistoricalTtm(as_of));
    }
    Ok(())
}

/// Join the three endpoint responses, failing on the first error.
fn assemble_responses(
    symbol: &str,
    period: Period,
    fetched_on: Date,
    (ratios, key_metrics, growth): (
        Result<Vec<FinancialRatios>>,
        Result<Vec<KeyMetrics>>,
        Result<Vec<FinancialGrowth>>,
    ),
) -> Result<Vec<FinancialMetrics>> {
    Ok(assemble_financial_metrics(
        symbol,
        period,
        &ratios?,
        &key_metrics?,
        &growth?,
        fetched_on,
    ))
}
