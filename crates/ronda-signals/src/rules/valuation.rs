//! Price ratio rule group.

use ronda_traits::{FinancialMetrics, Language, Localizer, RuleGroup, SignalVote};
use serde::{Deserialize, Serialize};

use super::count_above;
use crate::details::{MetricDetail, render_details};

/// Ceilings for the price ratio rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRatiosConfig {
    /// P/E above this counts as expensive (default: 25.0)
    pub max_price_to_earnings_ratio: f64,

    /// P/B above this counts as expensive (default: 3.0)
    pub max_price_to_book_ratio: f64,

    /// P/S above this counts as expensive (default: 5.0)
    pub max_price_to_sales_ratio: f64,
}

impl Default for PriceRatiosConfig {
    fn default() -> Self {
        Self {
            max_price_to_earnings_ratio: 25.0,
            max_price_to_book_ratio: 3.0,
            max_price_to_sales_ratio: 5.0,
        }
    }
}

/// Price ratio rule group.
///
/// The score counts *expensive* ratios, so the vote mapping is inverted:
/// two or more is bearish, zero is bullish.
///
/// # Example
///
/// ```
/// use ronda_signals::rules::PriceRatios;
/// use ronda_traits::{FinancialMetrics, RuleGroup, SignalVote};
///
/// let metrics = FinancialMetrics {
///     price_to_earnings_ratio: Some(30.0),
///     price_to_book_ratio: Some(4.0),
///     price_to_sales_ratio: Some(6.0),
///     ..FinancialMetrics::new("RICH")
/// };
/// let rule = PriceRatios::default();
/// assert_eq!(rule.vote(rule.score(&metrics)), SignalVote::Bearish);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceRatios {
    config: PriceRatiosConfig,
}

impl PriceRatios {
    /// Create a new price ratio rule group with the given ceilings.
    #[must_use]
    pub const fn new(config: PriceRatiosConfig) -> Self {
        Self { config }
    }

    /// Get the ceilings.
    #[must_use]
    pub const fn config(&self) -> &PriceRatiosConfig {
        &self.config
    }
}

impl RuleGroup for PriceRatios {
    fn name(&self) -> &str {
        "price_ratios_signal"
    }

    fn score(&self, metrics: &FinancialMetrics) -> u8 {
        count_above(&[
            (metrics.price_to_earnings_ratio, self.config.max_price_to_earnings_ratio),
            (metrics.price_to_book_ratio, self.config.max_price_to_book_ratio),
            (metrics.price_to_sales_ratio, self.config.max_price_to_sales_ratio),
        ])
    }

    fn vote(&self, score: u8) -> SignalVote {
        SignalVote::from_inverted_score(score)
    }

    fn details(
        &self,
        metrics: &FinancialMetrics,
        localizer: &dyn Localizer,
        language: Language,
    ) -> String {
        render_details(
            &[
                MetricDetail::fixed("pe_ratio", metrics.price_to_earnings_ratio),
                MetricDetail::fixed("pb_ratio", metrics.price_to_book_ratio),
                MetricDetail::fixed("ps_ratio", metrics.price_to_sales_ratio),
            ],
            localizer,
            language,
        )
    }

    fn required_metrics(&self) -> &[&str] {
        &["price_to_earnings_ratio", "price_to_book_ratio", "price_to_sales_ratio"]
    }
}
