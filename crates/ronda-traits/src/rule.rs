//! Rule group trait for scoring one theme of a metrics snapshot.
//!
//! A rule group checks a handful of thresholds against a
//! [`FinancialMetrics`] snapshot, counts how many hold, and maps that count
//! to a [`SignalVote`]. Alongside the vote it renders a short explanation of
//! the metrics it looked at.

use serde::{Deserialize, Serialize};

use crate::{FinancialMetrics, Language, Localizer, SignalVote};

/// Outcome of evaluating one rule group against one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroupResult {
    /// The group's vote.
    pub signal: SignalVote,
    /// Number of thresholds that held.
    pub score: u8,
    /// Localized `label: value` entries joined with `", "`.
    pub details: String,
}

/// An independent thematic scoring rule producing one vote.
///
/// Implementations should be thread-safe (`Send + Sync`) and pure: the
/// result depends only on the snapshot, the localizer and the language.
///
/// # Example
///
/// ```
/// use ronda_traits::{FinancialMetrics, Language, Localizer, RuleGroup, SignalVote};
///
/// struct CheapEarnings;
///
/// impl RuleGroup for CheapEarnings {
///     fn name(&self) -> &str {
///         "cheap_earnings_signal"
///     }
///
///     fn score(&self, metrics: &FinancialMetrics) -> u8 {
///         u8::from(metrics.price_to_earnings_ratio.is_some_and(|pe| pe < 10.0))
///     }
///
///     fn vote(&self, score: u8) -> SignalVote {
///         SignalVote::from_score(score * 2)
///     }
///
///     fn details(&self, _: &FinancialMetrics, _: &dyn Localizer, _: Language) -> String {
///         String::new()
///     }
///
///     fn required_metrics(&self) -> &[&str] {
///         &["price_to_earnings_ratio"]
///     }
/// }
/// ```
pub trait RuleGroup: Send + Sync {
    /// Returns the key this group's result is filed under, e.g.
    /// `"profitability_signal"`.
    fn name(&self) -> &str;

    /// Counts the thresholds that hold. Absent metrics never hold.
    fn score(&self, metrics: &FinancialMetrics) -> u8;

    /// Maps a score to a vote.
    fn vote(&self, score: u8) -> SignalVote;

    /// Renders the explanation for the metrics this group reads.
    fn details(
        &self,
        metrics: &FinancialMetrics,
        localizer: &dyn Localizer,
        language: Language,
    ) -> String;

    /// Returns the snapshot fields this group reads.
    fn required_metrics(&self) -> &[&str];

    /// Scores, votes and explains in one step.
    fn evaluate(
        &self,
        metrics: &FinancialMetrics,
        localizer: &dyn Localizer,
        language: Language,
    ) -> RuleGroupResult {
        let score = self.score(metrics);
        RuleGroupResult {
            signal: self.vote(score),
            score,
            details: self.details(metrics, localizer, language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Localizer for Echo {
        fn localize(&self, key: &str, _language: Language) -> String {
            key.to_string()
        }
    }

    struct HasRoe;

    impl RuleGroup for HasRoe {
        fn name(&self) -> &str {
            "has_roe_signal"
        }

        fn score(&self, metrics: &FinancialMetrics) -> u8 {
            u8::from(metrics.return_on_equity.is_some()) * 2
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
            format!(
                "{}: {:?}",
                localizer.localize("roe", language),
                metrics.return_on_equity
            )
        }

        fn required_metrics(&self) -> &[&str] {
            &["return_on_equity"]
        }
    }

    #[test]
    fn test_default_evaluate() {
        let metrics = FinancialMetrics {
            return_on_equity: Some(0.2),
            ..FinancialMetrics::new("AAPL")
        };
        let result = HasRoe.evaluate(&metrics, &Echo, Language::En);
        assert_eq!(result.signal, SignalVote::Bullish);
        assert_eq!(result.score, 2);
        assert_eq!(result.details, "roe: Some(0.2)");
    }

    #[test]
    fn test_missing_metric_scores_zero() {
        let result = HasRoe.evaluate(&FinancialMetrics::new("AAPL"), &Echo, Language::En);
        assert_eq!(result.signal, SignalVote::Bearish);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_rule_group_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn RuleGroup>>();
    }

    #[test]
    fn test_result_serializes() {
        let result = RuleGroupResult {
            signal: SignalVote::Neutral,
            score: 1,
            details: "ROE: N/A".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["signal"], "neutral");
        assert_eq!(json["score"], 1);
        assert_eq!(json["details"], "ROE: N/A");
    }
}
