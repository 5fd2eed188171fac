//! Metrics provider seam and an in-memory implementation.

use std::collections::HashMap;

use crate::{Date, FinancialMetrics, Period, Result, Symbol};

/// Source of historical financial metric snapshots.
///
/// Implementations return snapshots for `symbol` reported on or before
/// `as_of`, most recent first, at most `limit` of them. Snapshots must carry
/// the date their figures describe; [`InMemoryMetrics`] treats an undated
/// snapshot as current and returns it for any `as_of`. An empty vector means
/// there is no data and is not an error. Failures of the underlying source
/// are reported through the `Result` and are the caller's to handle.
pub trait MetricsProvider: Send + Sync {
    /// Fetch snapshots for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data source fails.
    fn fetch_financial_metrics(
        &self,
        symbol: &str,
        as_of: Date,
        period: Period,
        limit: usize,
    ) -> Result<Vec<FinancialMetrics>>;
}

impl<T: MetricsProvider + ?Sized> MetricsProvider for &T {
    fn fetch_financial_metrics(
        &self,
        symbol: &str,
        as_of: Date,
        period: Period,
        limit: usize,
    ) -> Result<Vec<FinancialMetrics>> {
        (**self).fetch_financial_metrics(symbol, as_of, period, limit)
    }
}

/// Metrics provider backed by snapshots held in memory.
///
/// Useful for tests and for running the synchronous evaluator over data that
/// was fetched ahead of time.
///
/// # Example
///
/// ```
/// use ronda_traits::{Date, FinancialMetrics, InMemoryMetrics, MetricsProvider, Period};
///
/// let mut store = InMemoryMetrics::new();
/// store.insert(FinancialMetrics::new("AAPL"));
///
/// let as_of = Date::from_ymd_opt(2024, 12, 31).unwrap();
/// let snapshots = store
///     .fetch_financial_metrics("AAPL", as_of, Period::Ttm, 10)
///     .unwrap();
/// assert_eq!(snapshots.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetrics {
    snapshots: HashMap<Symbol, Vec<FinancialMetrics>>,
}

impl InMemoryMetrics {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one snapshot under its own symbol.
    pub fn insert(&mut self, metrics: FinancialMetrics) {
        self.snapshots
            .entry(metrics.symbol.clone())
            .or_default()
            .push(metrics);
    }

    /// Add several snapshots.
    pub fn extend(&mut self, metrics: impl IntoIterator<Item = FinancialMetrics>) {
        for m in metrics {
            self.insert(m);
        }
    }

    /// Number of symbols with at least one snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the store holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Symbols present in the store, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<_> = self.snapshots.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

impl FromIterator<FinancialMetrics> for InMemoryMetrics {
    fn from_iter<I: IntoIterator<Item = FinancialMetrics>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl MetricsProvider for InMemoryMetrics {
    fn fetch_financial_metrics(
        &self,
        symbol: &str,
        as_of: Date,
        period: Period,
        limit: usize,
    ) -> Result<Vec<FinancialMetrics>> {
        let Some(all) = self.snapshots.get(symbol) else {
            return Ok(Vec::new());
        };

        // Undated snapshots are treated as current
        let mut matching: Vec<FinancialMetrics> = all
            .iter()
            .filter(|m| m.period == period)
            .filter(|m| m.report_period.is_none_or(|d| d <= as_of))
            .cloned()
            .collect();

        // Most recent first; undated sorts ahead of dated
        matching.sort_by(|a, b| match (a.report_period, b.report_period) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(x), Some(y)) => y.cmp(&x),
        });
        matching.truncate(limit);

        Ok(matching)
    }
}
