//! The four fundamental rule groups.
//!
//! Each group checks three thresholds against the latest snapshot and votes:
//! - Profitability: return on equity, net margin, operating margin
//! - Growth: revenue, earnings and book value growth
//! - Financial health: liquidity, leverage, cash conversion
//! - Price ratios: P/E, P/B, P/S (a high count is bearish)

mod growth;
mod health;
mod profitability;
mod valuation;

pub use growth::{Growth, GrowthConfig};
pub use health::{FinancialHealth, FinancialHealthConfig};
pub use profitability::{Profitability, ProfitabilityConfig};
pub use valuation::{PriceRatios, PriceRatiosConfig};

use ronda_traits::RuleGroup;

/// The default rule groups in evaluation order.
#[must_use]
pub fn default_rule_groups() -> Vec<Box<dyn RuleGroup>> {
    vec![
        Box::new(Profitability::default()),
        Box::new(Growth::default()),
        Box::new(FinancialHealth::default()),
        Box::new(PriceRatios::default()),
    ]
}

/// Count values strictly above their threshold. Absent values never count.
pub(crate) fn count_above(checks: &[(Option<f64>, f64)]) -> u8 {
    checks
        .iter()
        .filter(|(value, threshold)| value.is_some_and(|v| v > *threshold))
        .count() as u8
}
