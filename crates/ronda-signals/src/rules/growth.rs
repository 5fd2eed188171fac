//! Growth rule group.

use ronda_traits::{FinancialMetrics, Language, Localizer, RuleGroup, SignalVote};
use serde::{Deserialize, Serialize};

use super::count_above;
use crate::details::{MetricDetail, render_details};

/// Thresholds for the growth rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Minimum revenue growth (default: 0.10)
    pub min_revenue_growth: f64,

    /// Minimum earnings growth (default: 0.10)
    pub min_earnings_growth: f64,

    /// Minimum book value growth (default: 0.10)
    pub min_book_value_growth: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            min_revenue_growth: 0.10,
            min_earnings_growth: 0.10,
            min_book_value_growth: 0.10,
        }
    }
}

/// Growth rule group.
///
/// Counts how many of revenue, earnings and book value growth exceed their
/// thresholds, with the same 0/1/2+ mapping as profitability.
#[derive(Debug, Clone, Default)]
pub struct Growth {
    config: GrowthConfig,
}

impl Growth {
    /// Create a new growth rule group with the given thresholds.
    #[must_use]
    pub const fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Get the thresholds.
    #[must_use]
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }
}

impl RuleGroup for Growth {
    fn name(&self) -> &str {
        "growth_signal"
    }

    fn score(&self, metrics: &FinancialMetrics) -> u8 {
        count_above(&[
            (metrics.revenue_growth, self.config.min_revenue_growth),
            (metrics.earnings_growth, self.config.min_earnings_growth),
            (metrics.book_value_growth, self.config.min_book_value_growth),
        ])
    }

    fn vote(&self, score: u8) -> SignalVote {
        SignalVote::from_score(score)
    }

    fn details(
        &self,
        metrics: &FinancialMetrics,
        localizer: &dyn Localizer,
        language: Language,
    ) -> String {
        render_details(
            &[
                MetricDetail::percent("revenue_growth", metrics.revenue_growth),
                MetricDetail::percent("earnings_growth", metrics.earnings_growth),
                MetricDetail::percent("book_value_growth", metrics.book_value_growth),
            ],
            localizer,
            language,
        )
    }

    fn required_metrics(&self) -> &[&str] {
        &["revenue_growth", "earnings_growth", "book_value_growth"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_i18n::StringTable;

    fn metrics(rg: Option<f64>, eg: Option<f64>, bvg: Option<f64>) -> FinancialMetrics {
        FinancialMetrics {
            revenue_growth: rg,
            earnings_growth: eg,
            book_value_growth: bvg,
            ..FinancialMetrics::new("TEST")
        }
    }

    #[test]
    fn test_two_of_three_is_bullish() {
        let rule = Growth::default();
        let m = metrics(Some(0.12), Some(0.15), Some(0.05));
        assert_eq!(rule.score(&m), 2);
        assert_eq!(rule.vote(rule.score(&m)), SignalVote::Bullish);
    }

    #[test]
    fn test_negative_growth_is_bearish() {
        let rule = Growth::default();
        let m = metrics(Some(-0.10), Some(-0.30), Some(0.0));
        assert_eq!(rule.score(&m), 0);
        assert_eq!(rule.vote(0), SignalVote::Bearish);
    }

    #[test]
    fn test_missing_growth_is_bearish() {
        let rule = Growth::default();
        assert_eq!(rule.vote(rule.score(&metrics(None, None, None))), SignalVote::Bearish);
    }

    #[test]
    fn test_details() {
        let rule = Growth::default();
        let m = metrics(Some(0.12), None, Some(0.05));
        assert_eq!(
            rule.details(&m, &StringTable, Language::En),
            "Revenue Growth: 12.00%, Earnings Growth: N/A, Book Value Growth: 5.00%"
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let rule = Growth::new(GrowthConfig {
            min_revenue_growth: 0.0,
            min_earnings_growth: 0.0,
            min_book_value_growth: 0.0,
        });
        assert_eq!(rule.score(&metrics(Some(0.01), Some(0.01), Some(0.0))), 2);
        approx::assert_relative_eq!(rule.config().min_book_value_growth, 0.0);
    }
}
