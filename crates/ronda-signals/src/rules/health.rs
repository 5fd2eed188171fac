//! Financial health rule group.

use ronda_traits::{FinancialMetrics, Language, Localizer, RuleGroup, SignalVote};
use serde::{Deserialize, Serialize};

use crate::details::{MetricDetail, render_details};

/// Thresholds for the financial health rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialHealthConfig {
    /// Current ratio must exceed this (default: 1.5)
    pub min_current_ratio: f64,

    /// Debt-to-equity must stay below this (default: 0.5)
    pub max_debt_to_equity: f64,

    /// Free cash flow per share must exceed this fraction of EPS (default: 0.8)
    pub min_fcf_to_eps: f64,
}

impl Default for FinancialHealthConfig {
    fn default() -> Self {
        Self {
            min_current_ratio: 1.5,
            max_debt_to_equity: 0.5,
            min_fcf_to_eps: 0.8,
        }
    }
}

/// Financial health rule group.
///
/// Scores one point each for:
/// - current ratio above the liquidity threshold
/// - debt-to-equity below the leverage ceiling (zero debt passes)
/// - free cash flow per share above a fraction of EPS, when both are known
#[derive(Debug, Clone, Default)]
pub struct FinancialHealth {
    config: FinancialHealthConfig,
}

impl FinancialHealth {
    /// Create a new financial health rule group with the given thresholds.
    #[must_use]
    pub const fn new(config: FinancialHealthConfig) -> Self {
        Self { config }
    }

    /// Get the thresholds.
    #[must_use]
    pub const fn config(&self) -> &FinancialHealthConfig {
        &self.config
    }

    fn cash_conversion_ok(&self, metrics: &FinancialMetrics) -> bool {
        match (
            metrics.free_cash_flow_per_share,
            metrics.earnings_per_share,
        ) {
            (Some(fcf), Some(eps)) => fcf > eps * self.config.min_fcf_to_eps,
            _ => false,
        }
    }
}

impl RuleGroup for FinancialHealth {
    fn name(&self) -> &str {
        "financial_health_signal"
    }

    fn score(&self, metrics: &FinancialMetrics) -> u8 {
        let liquid = metrics
            .current_ratio
            .is_some_and(|v| v > self.config.min_current_ratio);
        let low_leverage = metrics
            .debt_to_equity
            .is_some_and(|v| v < self.config.max_debt_to_equity);

        u8::from(liquid) + u8::from(low_leverage) + u8::from(self.cash_conversion_ok(metrics))
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
                MetricDetail::fixed("current_ratio", metrics.current_ratio),
                MetricDetail::fixed("debt_to_equity", metrics.debt_to_equity),
                MetricDetail::fixed("fcf_per_share", metrics.free_cash_flow_per_share),
                MetricDetail::fixed("eps", metrics.earnings_per_share),
            ],
            localizer,
            language,
        )
    }

    fn required_metrics(&self) -> &[&str] {
        &[
            "current_ratio",
            "debt_to_equity",
            "free_cash_flow_per_share",
            "earnings_per_share",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_i18n::StringTable;

    fn metrics(
        cr: Option<f64>,
        de: Option<f64>,
        fcf: Option<f64>,
        eps: Option<f64>,
    ) -> FinancialMetrics {
        FinancialMetrics {
            current_ratio: cr,
            debt_to_equity: de,
            free_cash_flow_per_share: fcf,
            earnings_per_share: eps,
            ..FinancialMetrics::new("TEST")
        }
    }

    #[test]
    fn test_healthy_balance_sheet() {
        let rule = FinancialHealth::default();
        let m = metrics(Some(2.0), Some(0.3), Some(5.0), Some(5.5));
        assert_eq!(rule.score(&m), 3);
        assert_eq!(rule.vote(3), SignalVote::Bullish);
    }

    #[test]
    fn test_zero_debt_passes_leverage_check() {
        let rule = FinancialHealth::default();
        let m = metrics(None, Some(0.0), None, None);
        assert_eq!(rule.score(&m), 1);
        assert_eq!(rule.vote(1), SignalVote::Neutral);
    }

    #[test]
    fn test_high_leverage_fails() {
        let rule = FinancialHealth::default();
        assert_eq!(rule.score(&metrics(None, Some(0.5), None, None)), 0);
        assert_eq!(rule.score(&metrics(None, Some(1.2), None, None)), 0);
    }

    #[test]
    fn test_cash_conversion_requires_both_values() {
        let rule = FinancialHealth::default();
        assert_eq!(rule.score(&metrics(None, None, Some(5.0), None)), 0);
        assert_eq!(rule.score(&metrics(None, None, None, Some(5.0))), 0);
        // 4.0 is exactly 0.8 * 5.0, not strictly above
        assert_eq!(rule.score(&metrics(None, None, Some(4.0), Some(5.0))), 0);
        assert_eq!(rule.score(&metrics(None, None, Some(4.1), Some(5.0))), 1);
    }

    #[test]
    fn test_negative_eps_with_zero_fcf() {
        let rule = FinancialHealth::default();
        assert_eq!(rule.score(&metrics(None, None, Some(0.0), Some(-1.0))), 1);
    }

    #[test]
    fn test_nothing_known_is_bearish() {
        let rule = FinancialHealth::default();
        let m = metrics(None, None, None, None);
        assert_eq!(rule.vote(rule.score(&m)), SignalVote::Bearish);
    }

    #[test]
    fn test_details() {
        let rule = FinancialHealth::default();
        let m = metrics(Some(2.0), Some(0.3), None, Some(5.5));
        assert_eq!(
            rule.details(&m, &StringTable, Language::En),
            "Current Ratio: 2.00, Debt to Equity: 0.30, FCF per Share: N/A, EPS: 5.50"
        );
    }
}
