//! Fundamental analysis over hand-entered metrics.
//!
//! This example demonstrates:
//! - Building an in-memory metrics store
//! - Running the fundamentals analyst for several symbols
//! - Reading per-rule-group reasoning in English and Chinese
//! - Serializing the report to JSON

use ronda::prelude::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let as_of = Date::from_ymd_opt(2024, 12, 31)
        .ok_or_else(|| RondaError::InvalidDate("2024-12-31".to_string()))?;

    let store: InMemoryMetrics = [
        // Strong on every axis
        FinancialMetrics {
            return_on_equity: Some(0.45),
            net_margin: Some(0.24),
            operating_margin: Some(0.30),
            revenue_growth: Some(0.12),
            earnings_growth: Some(0.15),
            book_value_growth: Some(0.11),
            current_ratio: Some(1.8),
            debt_to_equity: Some(0.4),
            free_cash_flow_per_share: Some(6.5),
            earnings_per_share: Some(6.1),
            price_to_earnings_ratio: Some(18.0),
            price_to_book_ratio: Some(2.5),
            price_to_sales_ratio: Some(4.0),
            ..FinancialMetrics::new("GOOD")
        },
        // Expensive and shrinking
        FinancialMetrics {
            return_on_equity: Some(0.05),
            net_margin: Some(0.02),
            operating_margin: Some(0.04),
            revenue_growth: Some(-0.08),
            earnings_growth: Some(-0.30),
            current_ratio: Some(0.9),
            debt_to_equity: Some(2.1),
            price_to_earnings_ratio: Some(80.0),
            price_to_book_ratio: Some(9.0),
            price_to_sales_ratio: Some(12.0),
            ..FinancialMetrics::new("POOR")
        },
    ]
    .into_iter()
    .collect();

    let symbols = ["GOOD", "POOR", "NONE"];

    for language in [Language::En, Language::Zh] {
        let analyst = FundamentalsAnalyst::new(AnalystConfig::default().with_language(language));
        let report = analyst.analyze(&store, &symbols, as_of)?;

        println!("\n=== {language} ===");
        for (symbol, signal) in &report {
            println!("{symbol}: {} ({}%)", signal.signal, signal.confidence);
            for (name, result) in &signal.reasoning {
                println!("  {name:<24} {:<8} {}", result.signal, result.details);
            }
        }

        let missing: Vec<_> = symbols
            .iter()
            .filter(|s| report.get(s).is_none())
            .collect();
        println!("no data: {missing:?}");
    }

    let report = FundamentalsAnalyst::default().analyze(&store, &symbols, as_of)?;
    println!("\n{}", report.to_json_pretty()?);

    Ok(())
}
