//! Assembly of FMP responses into [`FinancialMetrics`] snapshots.

use ronda_traits::{Date, FinancialMetrics, InMemoryMetrics, MetricsProvider, Period};

use crate::types::{FinancialGrowth, FinancialRatios, KeyMetrics};

/// Build snapshots from the three FMP responses for one symbol.
///
/// Ratios drive the result: each ratios entry becomes one snapshot, joined
/// with the key metrics and growth entries of the same date. For
/// [`Period::Ttm`] the single TTM ratios and key-metrics entries are joined
/// with the most recent annual growth entry up to `fetched_on`, and the
/// snapshot is dated `fetched_on`: TTM figures describe the day they were
/// fetched, so they never satisfy an earlier as-of date.
#[must_use]
pub fn assemble_financial_metrics(
    symbol: &str,
    period: Period,
    ratios: &[FinancialRatios],
    key_metrics: &[KeyMetrics],
    growth: &[FinancialGrowth],
    fetched_on: Date,
) -> Vec<FinancialMetrics> {
    let symbol = symbol.to_uppercase();

    if period == Period::Ttm {
        let latest_growth = growth
            .iter()
            .find(|g| g.parsed_date().is_none_or(|d| d <= fetched_on));
        return ratios
            .first()
            .map(|r| {
                snapshot(&symbol, period, r, key_metrics.first(), latest_growth)
                    .with_report_period(fetched_on)
            })
            .into_iter()
            .collect();
    }

    ratios
        .iter()
        .map(|r| {
            let date = r.parsed_date();
            let km = key_metrics.iter().find(|k| k.parsed_date() == date);
            let g = growth.iter().find(|g| g.parsed_date() == date);
            let mut m = snapshot(&symbol, period, r, km, g);
            m.report_period = date;
            m
        })
        .collect()
}

fn snapshot(
    symbol: &str,
    period: Period,
    r: &FinancialRatios,
    km: Option<&KeyMetrics>,
    g: Option<&FinancialGrowth>,
) -> FinancialMetrics {
    FinancialMetrics {
        currency: r.reported_currency.clone(),
        return_on_equity: km.and_then(|k| k.return_on_equity),
        net_margin: r.net_profit_margin,
        operating_margin: r.operating_profit_margin,
        revenue_growth: g.and_then(|g| g.revenue_growth),
        earnings_growth: g.and_then(FinancialGrowth::earnings_growth),
        book_value_growth: g.and_then(|g| g.book_value_per_share_growth),
        current_ratio: r.current_ratio.or_else(|| km.and_then(|k| k.current_ratio)),
        debt_to_equity: r.debt_to_equity_ratio,
        free_cash_flow_per_share: r.free_cash_flow_per_share,
        earnings_per_share: r.net_income_per_share,
        price_to_earnings_ratio: r.price_to_earnings_ratio,
        price_to_book_ratio: r.price_to_book_ratio,
        price_to_sales_ratio: r.price_to_sales_ratio,
        ..FinancialMetrics::new(symbol).with_period(period)
    }
}

/// Keep snapshots reported on or before `as_of`, most recent first, at most
/// `limit` of them.
#[must_use]
pub fn select_snapshots(
    snapshots: Vec<FinancialMetrics>,
    symbol: &str,
    as_of: Date,
    period: Period,
    limit: usize,
) -> Vec<FinancialMetrics> {
    let store: InMemoryMetrics = snapshots.into_iter().collect();
    store
        .fetch_financial_metrics(&symbol.to_uppercase(), as_of, period, limit)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIOS: &str = r#"[
        {
            "symbol": "AAPL", "date": "2024-09-28", "period": "FY", "reportedCurrency": "USD",
            "netProfitMargin": 0.24, "operatingProfitMargin": 0.32,
            "currentRatio": 0.87, "debtToEquityRatio": 1.87,
            "freeCashFlowPerShare": 7.09, "netIncomePerShare": 6.11,
            "priceToEarningsRatio": 37.3, "priceToBookRatio": 61.4, "priceToSalesRatio": 8.9
        },
        {
            "symbol": "AAPL", "date": "2023-09-30", "period": "FY", "reportedCurrency": "USD",
            "netProfitMargin": 0.25, "operatingProfitMargin": 0.30,
            "currentRatio": 0.99, "debtToEquityRatio": 1.79,
            "freeCashFlowPerShare": 6.33, "netIncomePerShare": 6.16,
            "priceToEarningsRatio": 27.8, "priceToBookRatio": 42.8, "priceToSalesRatio": 7.0
        }
    ]"#;

    const KEY_METRICS: &str = r#"[
        {"symbol": "AAPL", "date": "2024-09-28", "returnOnEquity": 1.64},
        {"symbol": "AAPL", "date": "2023-09-30", "returnOnEquity": 1.56}
    ]"#;

    const GROWTH: &str = r#"[
        {"symbol": "AAPL", "date": "2024-09-28", "revenueGrowth": 0.02, "epsgrowth": -0.008, "bookValueperShareGrowth": -0.08}
    ]"#;

    fn fixtures() -> (Vec<FinancialRatios>, Vec<KeyMetrics>, Vec<FinancialGrowth>) {
        (
            serde_json::from_str(RATIOS).unwrap(),
            serde_json::from_str(KEY_METRICS).unwrap(),
            serde_json::from_str(GROWTH).unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_annual_snapshots_aligned_by_date() {
        let (ratios, km, growth) = fixtures();
        let snapshots =
            assemble_financial_metrics("aapl", Period::Annual, &ratios, &km, &growth, date(2025, 1, 1));
        assert_eq!(snapshots.len(), 2);

        let latest = &snapshots[0];
        assert_eq!(latest.symbol, "AAPL");
        assert_eq!(latest.period, Period::Annual);
        assert_eq!(latest.report_period, Some(date(2024, 9, 28)));
        assert_eq!(latest.currency.as_deref(), Some("USD"));
        assert_eq!(latest.return_on_equity, Some(1.64));
        assert_eq!(latest.revenue_growth, Some(0.02));
        assert_eq!(latest.earnings_growth, Some(-0.008));
        assert_eq!(latest.earnings_per_share, Some(6.11));
        assert_eq!(latest.price_to_sales_ratio, Some(8.9));

        // No growth entry for 2023
        let older = &snapshots[1];
        assert_eq!(older.return_on_equity, Some(1.56));
        assert!(older.revenue_growth.is_none());
        assert!(older.book_value_growth.is_none());
    }

    #[test]
    fn test_ttm_snapshot_uses_latest_growth() {
        let ratios: Vec<FinancialRatios> = serde_json::from_str(
            r#"[{"symbol": "AAPL", "netProfitMarginTTM": 0.24, "priceToEarningsRatioTTM": 34.0}]"#,
        )
        .unwrap();
        let km: Vec<KeyMetrics> =
            serde_json::from_str(r#"[{"symbol": "AAPL", "returnOnEquityTTM": 1.5, "currentRatioTTM": 0.9}]"#)
                .unwrap();
        let (_, _, growth) = fixtures();

        let snapshots =
            assemble_financial_metrics("AAPL", Period::Ttm, &ratios, &km, &growth, date(2025, 1, 1));
        assert_eq!(snapshots.len(), 1);
        let m = &snapshots[0];
        assert_eq!(m.report_period, Some(date(2025, 1, 1)));
        assert_eq!(m.period, Period::Ttm);
        assert_eq!(m.return_on_equity, Some(1.5));
        assert_eq!(m.current_ratio, Some(0.9));
        assert_eq!(m.price_to_earnings_ratio, Some(34.0));
        assert_eq!(m.book_value_growth, Some(-0.08));
    }

    #[test]
    fn test_no_ratios_means_no_snapshots() {
        let (_, km, growth) = fixtures();
        let today = date(2025, 1, 1);
        assert!(assemble_financial_metrics("AAPL", Period::Annual, &[], &km, &growth, today).is_empty());
        assert!(assemble_financial_metrics("AAPL", Period::Ttm, &[], &km, &growth, today).is_empty());
    }

    #[test]
    fn test_select_snapshots_filters_by_as_of() {
        let (ratios, km, growth) = fixtures();
        let snapshots =
            assemble_financial_metrics("AAPL", Period::Annual, &ratios, &km, &growth, date(2025, 1, 1));

        let selected = select_snapshots(snapshots.clone(), "AAPL", date(2024, 1, 1), Period::Annual, 10);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].report_period, Some(date(2023, 9, 30)));

        let limited = select_snapshots(snapshots, "aapl", date(2025, 1, 1), Period::Annual, 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].report_period, Some(date(2024, 9, 28)));
    }

    fn ttm_fixtures() -> (Vec<FinancialRatios>, Vec<KeyMetrics>, Vec<FinancialGrowth>) {
        let ratios = serde_json::from_str(
            r#"[{"symbol": "AAPL", "netProfitMarginTTM": 0.24, "priceToEarningsRatioTTM": 34.0}]"#,
        )
        .unwrap();
        let km = serde_json::from_str(r#"[{"symbol": "AAPL", "returnOnEquityTTM": 1.5}]"#).unwrap();
        let (_, _, growth) = fixtures();
        (ratios, km, growth)
    }

    #[test]
    fn test_ttm_snapshot_excluded_from_earlier_as_of() {
        let (ratios, km, growth) = ttm_fixtures();
        let snapshots =
            assemble_financial_metrics("AAPL", Period::Ttm, &ratios, &km, &growth, date(2025, 1, 1));

        let selected = select_snapshots(snapshots.clone(), "AAPL", date(2005, 1, 1), Period::Ttm, 10);
        assert!(selected.is_empty());

        let current = select_snapshots(snapshots, "AAPL", date(2025, 1, 1), Period::Ttm, 10);
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_ttm_growth_ignores_entries_after_fetch_date() {
        let (ratios, km, _) = ttm_fixtures();
        let growth: Vec<FinancialGrowth> = serde_json::from_str(
            r#"[
                {"symbol": "AAPL", "date": "2025-09-27", "revenueGrowth": 0.06},
                {"symbol": "AAPL", "date": "2024-09-28", "revenueGrowth": 0.02}
            ]"#,
        )
        .unwrap();

        let snapshots =
            assemble_financial_metrics("AAPL", Period::Ttm, &ratios, &km, &growth, date(2025, 1, 1));
        assert_eq!(snapshots[0].revenue_growth, Some(0.02));
    }
}
