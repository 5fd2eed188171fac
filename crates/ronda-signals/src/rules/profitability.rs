//! Profitability rule group.

use ronda_traits::{FinancialMetrics, Language, Localizer, RuleGroup, SignalVote};
use serde::{Deserialize, Serialize};

use super::count_above;
use crate::details::{MetricDetail, render_details};

/// Thresholds for the profitability rule group.
///
/// Each threshold is exclusive: a metric must be strictly above it to count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityConfig {
    /// Minimum return on equity (default: 0.15)
    pub min_return_on_equity: f64,

    /// Minimum net margin (default: 0.20)
    pub min_net_margin: f64,

    /// Minimum operating margin (default: 0.15)
    pub min_operating_margin: f64,
}

impl Default for ProfitabilityConfig {
    fn default() -> Self {
        Self {
            min_return_on_equity: 0.15,
            min_net_margin: 0.20,
            min_operating_margin: 0.15,
        }
    }
}

/// Profitability rule group.
///
/// Counts how many of return on equity, net margin and operating margin
/// clear their thresholds. Zero is bearish, one is neutral, two or more is
/// bullish.
///
/// # Example
///
/// ```
/// use ronda_signals::rules::Profitability;
/// use ronda_traits::{FinancialMetrics, RuleGroup, SignalVote};
///
/// let metrics = FinancialMetrics {
///     return_on_equity: Some(0.25),
///     net_margin: Some(0.22),
///     ..FinancialMetrics::new("AAPL")
/// };
/// let rule = Profitability::default();
/// assert_eq!(rule.vote(rule.score(&metrics)), SignalVote::Bullish);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Profitability {
    config: ProfitabilityConfig,
}

impl Profitability {
    /// Create a new profitability rule group with the given thresholds.
    #[must_use]
    pub const fn new(config: ProfitabilityConfig) -> Self {
        Self { config }
    }

    /// Get the thresholds.
    #[must_use]
    pub const fn config(&self) -> &ProfitabilityConfig {
        &self.config
    }
}

impl RuleGroup for Profitability {
    fn name(&self) -> &str {
        "profitability_signal"
    }

    fn score(&self, metrics: &FinancialMetrics) -> u8 {
        count_above(&[
            (metrics.return_on_equity, self.config.min_return_on_equity),
            (metrics.net_margin, self.config.min_net_margin),
            (metrics.operating_margin, self.config.min_operating_margin),
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
                MetricDetail::percent("roe", metrics.return_on_equity),
                MetricDetail::percent("net_margin", metrics.net_margin),
                MetricDetail::percent("op_margin", metrics.operating_margin),
            ],
            localizer,
            language,
        )
    }

    fn required_metrics(&self) -> &[&str] {
        &["return_on_equity", "net_margin", "operating_margin"]
    }
}
