//! Fundamental analysis on live FMP data.
//!
//! This example demonstrates:
//! - Fetching ratios, key metrics and growth from the FMP API
//! - Preloading the snapshots into an in-memory store
//! - Running the analyst and printing a one-row-per-symbol table
//!
//! Requires `FMP_API_KEY` in the environment or a `.env` file.

use ronda::prelude::*;
use ronda_fmp::FmpClient;

/// Symbols to analyze.
const UNIVERSE: &[&str] = &["AAPL", "MSFT", "NVDA", "JPM", "WMT"];

/// As-of date for the analysis.
const AS_OF: &str = "2024-12-31";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = FmpClient::from_env()
        .map_err(|_| "Failed to initialize FMP client. Set FMP_API_KEY environment variable.")?;

    let as_of: Date = AS_OF.parse()?;
    let config = AnalystConfig::default().with_period(Period::Annual).with_limit(4);

    let mut store = InMemoryMetrics::new();
    for symbol in UNIVERSE {
        match client
            .financial_metrics(symbol, as_of, config.period, config.limit)
            .await
        {
            Ok(snapshots) => store.extend(snapshots),
            Err(e) => eprintln!("Skipping {symbol}: {e}"),
        }
    }

    let report = FundamentalsAnalyst::new(config).analyze(&store, UNIVERSE, as_of)?;

    println!("{}", report.to_frame()?);

    for (symbol, signal) in &report {
        if let Some(ratios) = signal.rule("price_ratios_signal") {
            println!("{symbol}: {}", ratios.details);
        }
    }

    Ok(())
}
