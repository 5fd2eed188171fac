//! Swapping in custom rule groups and a status reporter.
//!
//! This example demonstrates:
//! - Tightening a built-in rule group's thresholds
//! - Adding a user-defined rule group alongside the defaults
//! - Observing progress through a custom status reporter

use ronda::prelude::*;
use ronda::signals::details::{MetricDetail, MetricFormat, render_details};
use ronda::signals::rules::{Growth, PriceRatios, PriceRatiosConfig, Profitability};

/// Bullish when P/E is in single digits and the company earns money.
struct DeepValue;

impl RuleGroup for DeepValue {
    fn name(&self) -> &str {
        "deep_value_signal"
    }

    fn score(&self, metrics: &FinancialMetrics) -> u8 {
        let cheap = metrics.price_to_earnings_ratio.is_some_and(|pe| pe > 0.0 && pe < 10.0);
        let profitable = metrics.earnings_per_share.is_some_and(|eps| eps > 0.0);
        u8::from(cheap) + u8::from(profitable)
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
                MetricDetail {
                    key: "pe_ratio",
                    value: metrics.price_to_earnings_ratio,
                    format: MetricFormat::Fixed,
                },
                MetricDetail {
                    key: "eps",
                    value: metrics.earnings_per_share,
                    format: MetricFormat::Fixed,
                },
            ],
            localizer,
            language,
        )
    }

    fn required_metrics(&self) -> &[&str] {
        &["price_to_earnings_ratio", "earnings_per_share"]
    }
}

/// Prints every progress notification.
struct PrintStatus;

impl StatusReporter for PrintStatus {
    fn report_status(&self, component: &str, symbol: &str, phase: &str) {
        println!("[{component}] {symbol}: {phase}");
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let as_of = Date::from_ymd_opt(2024, 12, 31)
        .ok_or_else(|| RondaError::InvalidDate("2024-12-31".to_string()))?;

    let store: InMemoryMetrics = [FinancialMetrics {
        return_on_equity: Some(0.18),
        net_margin: Some(0.12),
        operating_margin: Some(0.16),
        revenue_growth: Some(0.04),
        earnings_per_share: Some(3.2),
        price_to_earnings_ratio: Some(8.5),
        price_to_book_ratio: Some(1.1),
        price_to_sales_ratio: Some(0.9),
        ..FinancialMetrics::new("VALU")
    }]
    .into_iter()
    .collect();

    let strict_valuation = PriceRatios::new(PriceRatiosConfig {
        max_price_to_earnings_ratio: 15.0,
        max_price_to_book_ratio: 1.5,
        max_price_to_sales_ratio: 2.0,
    });

    let analyst = FundamentalsAnalyst::default()
        .with_rules(vec![
            Box::new(Profitability::default()),
            Box::new(Growth::default()),
            Box::new(strict_valuation),
            Box::new(DeepValue),
        ])
        .with_reporter(PrintStatus);

    let report = analyst.analyze(&store, &["VALU"], as_of)?;
    println!("\n{}", report.to_json_pretty()?);

    Ok(())
}
