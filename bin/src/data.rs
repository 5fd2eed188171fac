//! Data loading utilities for the Ronda CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ronda_fmp::FmpClient;
use ronda_traits::{FinancialMetrics, InMemoryMetrics, Period, RondaError};
use tracing::info;

/// Fetch snapshots for every symbol from FMP into an in-memory store.
///
/// # Errors
///
/// Fails on the first symbol whose fetch fails. A symbol with no reports is
/// not a failure; it simply has no snapshots.
pub(crate) async fn load_metrics(
    client: &FmpClient,
    symbols: &[String],
    as_of: NaiveDate,
    period: Period,
    limit: u32,
) -> Result<InMemoryMetrics> {
    let mut store = InMemoryMetrics::new();

    for symbol in symbols {
        let fetched = client.financial_metrics(symbol, as_of, period, limit).await;
        add_fetched(&mut store, symbol, fetched)?;
    }

    Ok(store)
}

/// Add one symbol's fetch result to the store.
fn add_fetched(
    store: &mut InMemoryMetrics,
    symbol: &str,
    fetched: ronda_fmp::Result<Vec<FinancialMetrics>>,
) -> Result<()> {
    let snapshots =
        fetched.with_context(|| format!("failed to fetch financial metrics for {symbol}"))?;
    info!(symbol, count = snapshots.len(), "loaded financial metrics");
    store.extend(snapshots);
    Ok(())
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, RondaError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| RondaError::InvalidDate(format!("{date_str}: {e}")))
}

/// Trim and uppercase symbols, dropping blanks and repeats while keeping
/// the first occurrence's position.
pub(crate) fn normalize_symbols(symbols: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let symbol = symbol.trim().to_uppercase();
        if !symbol.is_empty() && !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}
