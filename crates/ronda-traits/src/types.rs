//! Common types used throughout the Ronda framework.
//!
//! This module defines the metric snapshot consumed by the evaluator and the
//! small enums (votes, languages, reporting periods) shared by every crate.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::RondaError;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Typically a ticker symbol like "AAPL" or "MSFT".
pub type Symbol = String;

/// Directional classification produced by a rule group or by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalVote {
    /// Metrics point to upside.
    Bullish,
    /// Metrics point to downside.
    Bearish,
    /// No clear direction.
    Neutral,
}

impl SignalVote {
    /// Map a threshold count to a vote where a high count is favourable.
    ///
    /// 0 is bearish, 1 is neutral, 2 or more is bullish.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Bearish,
            1 => Self::Neutral,
            _ => Self::Bullish,
        }
    }

    /// Map a threshold count to a vote where a high count is unfavourable.
    ///
    /// Used for valuation ratios: 0 is bullish (cheap), 1 is neutral,
    /// 2 or more is bearish (expensive).
    #[must_use]
    pub const fn from_inverted_score(score: u8) -> Self {
        match score {
            0 => Self::Bullish,
            1 => Self::Neutral,
            _ => Self::Bearish,
        }
    }

    /// Lowercase identifier, also the localization key for the vote label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SignalVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalVote {
    type Err = RondaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bullish" => Ok(Self::Bullish),
            "bearish" => Ok(Self::Bearish),
            "neutral" => Ok(Self::Neutral),
            other => Err(RondaError::InvalidData(format!("Unknown signal: {other}"))),
        }
    }
}

/// Display language for human-readable reasoning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Simplified Chinese.
    #[serde(rename = "zh")]
    Zh,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = RondaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::En),
            "zh" | "zh-cn" | "chinese" => Ok(Self::Zh),
            other => Err(RondaError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Reporting period of a metrics snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Annual reports (10-K filings).
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
    /// Trailing twelve months.
    #[default]
    Ttm,
}

impl Period {
    /// Get the identifier used in configuration and provider requests.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
            Self::Ttm => "ttm",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = RondaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annual" | "fy" => Ok(Self::Annual),
            "quarter" | "quarterly" => Ok(Self::Quarter),
            "ttm" => Ok(Self::Ttm),
            other => Err(RondaError::UnknownPeriod(other.to_string())),
        }
    }
}

/// A point-in-time record of fundamental metrics for one instrument.
///
/// Every metric is optional. A missing value is distinct from zero: it never
/// raises and fails any threshold test it participates in.
///
/// Ratios such as margins and growth rates are expressed as fractions
/// (`0.15` is 15%).
///
/// # Example
///
/// ```
/// use ronda_traits::FinancialMetrics;
///
/// let metrics = FinancialMetrics {
///     return_on_equity: Some(0.21),
///     price_to_earnings_ratio: Some(18.0),
///     ..FinancialMetrics::new("AAPL")
/// };
/// assert!(metrics.net_margin.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// End date of the reporting period, if known.
    #[serde(default)]
    pub report_period: Option<Date>,
    /// Reporting period kind.
    #[serde(default)]
    pub period: Period,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Option<String>,

    // Profitability
    /// Return on equity.
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    /// Net profit margin.
    #[serde(default)]
    pub net_margin: Option<f64>,
    /// Operating margin.
    #[serde(default)]
    pub operating_margin: Option<f64>,

    // Growth
    /// Revenue growth.
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    /// Earnings growth.
    #[serde(default)]
    pub earnings_growth: Option<f64>,
    /// Book value growth.
    #[serde(default)]
    pub book_value_growth: Option<f64>,

    // Financial health
    /// Current ratio.
    #[serde(default)]
    pub current_ratio: Option<f64>,
    /// Debt to equity.
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    /// Free cash flow per share.
    #[serde(default)]
    pub free_cash_flow_per_share: Option<f64>,
    /// Earnings per share.
    #[serde(default)]
    pub earnings_per_share: Option<f64>,

    // Valuation
    /// Price to earnings ratio.
    #[serde(default)]
    pub price_to_earnings_ratio: Option<f64>,
    /// Price to book ratio.
    #[serde(default)]
    pub price_to_book_ratio: Option<f64>,
    /// Price to sales ratio.
    #[serde(default)]
    pub price_to_sales_ratio: Option<f64>,
}

impl FinancialMetrics {
    /// Create an empty snapshot for a symbol with every metric absent.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Set the reporting period end date.
    #[must_use]
    pub const fn with_report_period(mut self, date: Date) -> Self {
        self.report_period = Some(date);
        self
    }

    /// Set the reporting period kind.
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Number of metrics carrying a value.
    #[must_use]
    pub fn populated_fields(&self) -> usize {
        [
            self.return_on_equity,
            self.net_margin,
            self.operating_margin,
            self.revenue_growth,
            self.earnings_growth,
            self.book_value_growth,
            self.current_ratio,
            self.debt_to_equity,
            self.free_cash_flow_per_share,
            self.earnings_per_share,
            self.price_to_earnings_ratio,
            self.price_to_book_ratio,
            self.price_to_sales_ratio,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}
