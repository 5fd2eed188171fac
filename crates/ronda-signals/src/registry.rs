//! Rule group registry for discovering and describing the built-in groups.

use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

/// Rule group category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    /// Returns and margins
    Profitability,
    /// Period-over-period growth
    Growth,
    /// Liquidity, leverage and cash conversion
    Health,
    /// Price multiples
    Valuation,
}

impl RuleCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Profitability => "Return on equity and margin thresholds",
            Self::Growth => "Revenue, earnings and book value growth thresholds",
            Self::Health => "Balance sheet strength and cash conversion",
            Self::Valuation => "Price multiples, where expensive is bearish",
        }
    }
}

/// Metadata about a rule group.
#[derive(Debug, Clone, Serialize)]
pub struct RuleGroupInfo {
    /// Key the group's result is filed under
    pub name: &'static str,

    /// Category classification
    pub category: RuleCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Status phase reported while the group runs
    pub phase: &'static str,

    /// Snapshot fields the group reads
    pub metrics: &'static [&'static str],

    /// Whether a high score maps to a bearish vote
    pub inverted: bool,
}

/// Get information about all built-in rule groups, in evaluation order.
#[must_use]
pub fn available_rule_groups() -> Vec<RuleGroupInfo> {
    vec![
        RuleGroupInfo {
            name: "profitability_signal",
            category: RuleCategory::Profitability,
            description: "ROE > 15%, net margin > 20%, operating margin > 15%",
            phase: "Analyzing profitability",
            metrics: &["return_on_equity", "net_margin", "operating_margin"],
            inverted: false,
        },
        RuleGroupInfo {
            name: "growth_signal",
            category: RuleCategory::Growth,
            description: "Revenue, earnings and book value growth > 10%",
            phase: "Analyzing growth",
            metrics: &["revenue_growth", "earnings_growth", "book_value_growth"],
            inverted: false,
        },
        RuleGroupInfo {
            name: "financial_health_signal",
            category: RuleCategory::Health,
            description: "Current ratio > 1.5, D/E < 0.5, FCF/share > 0.8 x EPS",
            phase: "Analyzing financial health",
            metrics: &[
                "current_ratio",
                "debt_to_equity",
                "free_cash_flow_per_share",
                "earnings_per_share",
            ],
            inverted: false,
        },
        RuleGroupInfo {
            name: "price_ratios_signal",
            category: RuleCategory::Valuation,
            description: "P/E > 25, P/B > 3, P/S > 5 count against the stock",
            phase: "Analyzing valuation ratios",
            metrics: &[
                "price_to_earnings_ratio",
                "price_to_book_ratio",
                "price_to_sales_ratio",
            ],
            inverted: true,
        },
    ]
}

/// Get all rule groups in a specific category.
#[must_use]
pub fn rule_groups_by_category(category: &RuleCategory) -> Vec<RuleGroupInfo> {
    available_rule_groups()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific rule group by name.
#[must_use]
pub fn get_rule_group_info(name: &str) -> Option<RuleGroupInfo> {
    available_rule_groups()
        .into_iter()
        .find(|info| info.name == name)
}

/// Look up a rule group by name.
///
/// # Errors
///
/// Returns [`RondaError::RuleGroupNotFound`] if no built-in group has that
/// name.
pub fn require_rule_group(name: &str) -> Result<RuleGroupInfo> {
    get_rule_group_info(name).ok_or_else(|| RondaError::RuleGroupNotFound(name.to_string()))
}

/// Status phase for a rule group, falling back to a generic label.
#[must_use]
pub fn phase_for(name: &str) -> &'static str {
    get_rule_group_info(name).map_or("Analyzing", |info| info.phase)
}
