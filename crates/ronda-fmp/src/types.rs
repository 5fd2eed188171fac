//! Data types for FMP API responses.
//!
//! Every numeric field is optional: FMP omits or nulls values it cannot
//! compute, and those must stay distinguishable from zero. The `-ttm`
//! endpoints suffix their field names with `TTM` and carry no date; the
//! aliases below let the same struct read both shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn parse_date(date: Option<&str>) -> Option<NaiveDate> {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Financial ratios from the `ratios` and `ratios-ttm` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Period end date (absent for TTM).
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Fiscal period label, e.g. `FY` or `Q3`.
    #[serde(default)]
    pub period: Option<String>,
    /// Reporting currency.
    #[serde(default)]
    pub reported_currency: Option<String>,

    // Profitability
    /// Net profit margin.
    #[serde(alias = "netProfitMarginTTM")]
    pub net_profit_margin: Option<f64>,
    /// Operating profit margin.
    #[serde(alias = "operatingProfitMarginTTM")]
    pub operating_profit_margin: Option<f64>,

    // Liquidity and leverage
    /// Current ratio.
    #[serde(alias = "currentRatioTTM")]
    pub current_ratio: Option<f64>,
    /// Debt to equity ratio.
    #[serde(alias = "debtToEquityRatioTTM")]
    pub debt_to_equity_ratio: Option<f64>,

    // Per share
    /// Free cash flow per share.
    #[serde(alias = "freeCashFlowPerShareTTM")]
    pub free_cash_flow_per_share: Option<f64>,
    /// Net income per share.
    #[serde(alias = "netIncomePerShareTTM")]
    pub net_income_per_share: Option<f64>,

    // Valuation
    /// Price to earnings ratio.
    #[serde(alias = "priceToEarningsRatioTTM")]
    pub price_to_earnings_ratio: Option<f64>,
    /// Price to book ratio.
    #[serde(alias = "priceToBookRatioTTM")]
    pub price_to_book_ratio: Option<f64>,
    /// Price to sales ratio.
    #[serde(alias = "priceToSalesRatioTTM")]
    pub price_to_sales_ratio: Option<f64>,
}

impl FinancialRatios {
    /// Parse the date string into a `NaiveDate`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }
}

/// Key metrics from the `key-metrics` and `key-metrics-ttm` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Period end date (absent for TTM).
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Fiscal period label.
    #[serde(default)]
    pub period: Option<String>,
    /// Return on equity.
    #[serde(alias = "returnOnEquityTTM")]
    pub return_on_equity: Option<f64>,
    /// Current ratio.
    #[serde(alias = "currentRatioTTM")]
    pub current_ratio: Option<f64>,
    /// Market capitalization.
    #[serde(alias = "marketCapTTM")]
    pub market_cap: Option<f64>,
}

impl KeyMetrics {
    /// Parse the date string into a `NaiveDate`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }
}

/// Period-over-period growth from the `financial-growth` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGrowth {
    /// Period end date.
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Fiscal period label.
    #[serde(default)]
    pub period: Option<String>,
    /// Revenue growth.
    pub revenue_growth: Option<f64>,
    /// Net income growth.
    pub net_income_growth: Option<f64>,
    /// EPS growth.
    #[serde(rename = "epsgrowth")]
    pub eps_growth: Option<f64>,
    /// Book value per share growth.
    #[serde(rename = "bookValueperShareGrowth")]
    pub book_value_per_share_growth: Option<f64>,
}

impl FinancialGrowth {
    /// Parse the date string into a `NaiveDate`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }

    /// Earnings growth, preferring EPS growth over net income growth.
    #[must_use]
    pub fn earnings_growth(&self) -> Option<f64> {
        self.eps_growth.or(self.net_income_growth)
    }
}
