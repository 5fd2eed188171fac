//! The fundamentals analyst: rule groups in, one signal per symbol out.

use std::fmt;

use ronda_combine::{Combiner, MajorityVoteCombiner};
use ronda_i18n::StringTable;
use ronda_traits::{
    AnalystConfig, Date, FinancialMetrics, Localizer, MetricsProvider, NoopStatus, Result,
    RuleGroup, StatusReporter,
};
use tracing::debug;

use crate::registry::phase_for;
use crate::report::{AnalystReport, FundamentalSignal};
use crate::rules::default_rule_groups;

/// Component name used for status reports and outgoing messages.
pub const COMPONENT: &str = "fundamentals_agent";

/// Status phase reported before fetching snapshots.
pub const PHASE_FETCHING: &str = "Fetching financial metrics";
/// Status phase reported when a symbol has no snapshots.
pub const PHASE_NO_DATA: &str = "Failed: No financial metrics found";
/// Status phase reported before votes are combined.
pub const PHASE_COMBINING: &str = "Calculating final signal";
/// Status phase reported once a symbol is finished.
pub const PHASE_DONE: &str = "Done";

/// Evaluates metric snapshots with a set of rule groups and combines their
/// votes into one signal per symbol.
///
/// Evaluation is synchronous and pure apart from status notifications: the
/// same snapshot, rules and language always yield the same signal.
///
/// # Example
///
/// ```
/// use ronda_signals::FundamentalsAnalyst;
/// use ronda_traits::{FinancialMetrics, SignalVote};
///
/// let metrics = FinancialMetrics {
///     return_on_equity: Some(0.20),
///     net_margin: Some(0.25),
///     operating_margin: Some(0.18),
///     revenue_growth: Some(0.12),
///     earnings_growth: Some(0.15),
///     current_ratio: Some(2.0),
///     debt_to_equity: Some(0.3),
///     free_cash_flow_per_share: Some(5.0),
///     earnings_per_share: Some(5.0),
///     price_to_earnings_ratio: Some(15.0),
///     price_to_book_ratio: Some(2.0),
///     price_to_sales_ratio: Some(3.0),
///     ..FinancialMetrics::new("AAPL")
/// };
///
/// let signal = FundamentalsAnalyst::default().evaluate(&metrics);
/// assert_eq!(signal.signal, SignalVote::Bullish);
/// assert_eq!(signal.confidence, 100);
/// ```
pub struct FundamentalsAnalyst {
    config: AnalystConfig,
    rules: Vec<Box<dyn RuleGroup>>,
    combiner: Box<dyn Combiner>,
    localizer: Box<dyn Localizer>,
    reporter: Box<dyn StatusReporter>,
}

impl fmt::Debug for FundamentalsAnalyst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("FundamentalsAnalyst")
            .field("config", &self.config)
            .field("rules", &rules)
            .field("combiner", &self.combiner.name())
            .finish_non_exhaustive()
    }
}

impl Default for FundamentalsAnalyst {
    fn default() -> Self {
        Self::new(AnalystConfig::default())
    }
}

impl FundamentalsAnalyst {
    /// Create an analyst with the default rule groups, majority voting, the
    /// built-in string tables and no status output.
    #[must_use]
    pub fn new(config: AnalystConfig) -> Self {
        Self {
            config,
            rules: default_rule_groups(),
            combiner: Box::new(MajorityVoteCombiner),
            localizer: Box::new(StringTable),
            reporter: Box::new(NoopStatus),
        }
    }

    /// Replace the localizer used for details labels.
    #[must_use]
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Replace the status reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl StatusReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Replace the vote combiner.
    #[must_use]
    pub fn with_combiner(mut self, combiner: impl Combiner + 'static) -> Self {
        self.combiner = Box::new(combiner);
        self
    }

    /// Replace the rule groups. Results are reported in the given order.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Box<dyn RuleGroup>>) -> Self {
        self.rules = rules;
        self
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalystConfig {
        &self.config
    }

    /// Names of the active rule groups, in evaluation order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate one snapshot.
    #[must_use]
    pub fn evaluate(&self, metrics: &FinancialMetrics) -> FundamentalSignal {
        let symbol = metrics.symbol.as_str();
        let language = self.config.language;

        let mut votes = Vec::with_capacity(self.rules.len());
        let mut reasoning = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            self.reporter
                .report_status(COMPONENT, symbol, phase_for(rule.name()));
            let result = rule.evaluate(metrics, self.localizer.as_ref(), language);
            debug!(
                symbol,
                rule = rule.name(),
                score = result.score,
                signal = %result.signal,
                "rule group evaluated"
            );
            votes.push(result.signal);
            reasoning.push((rule.name().to_string(), result));
        }

        self.reporter.report_status(COMPONENT, symbol, PHASE_COMBINING);
        let consensus = self.combiner.combine(&votes);

        FundamentalSignal {
            signal: consensus.signal,
            confidence: consensus.confidence,
            reasoning,
        }
    }

    /// Fetch snapshots for one symbol and evaluate the most recent.
    ///
    /// Returns `Ok(None)` when the provider has no snapshot for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails.
    pub fn analyze_symbol<P: MetricsProvider + ?Sized>(
        &self,
        provider: &P,
        symbol: &str,
        as_of: Date,
    ) -> Result<Option<FundamentalSignal>> {
        self.reporter.report_status(COMPONENT, symbol, PHASE_FETCHING);
        let snapshots = provider.fetch_financial_metrics(
            symbol,
            as_of,
            self.config.period,
            usize::try_from(self.config.limit).unwrap_or(usize::MAX),
        )?;

        let Some(latest) = snapshots.first() else {
            self.reporter.report_status(COMPONENT, symbol, PHASE_NO_DATA);
            debug!(symbol, %as_of, "no financial metrics, skipping");
            return Ok(None);
        };

        let signal = self.evaluate(latest);
        self.reporter.report_status(COMPONENT, symbol, PHASE_DONE);
        Ok(Some(signal))
    }

    /// Analyze every symbol in order. Symbols without data are left out of
    /// the report.
    ///
    /// # Errors
    ///
    /// Returns the first provider error encountered.
    pub fn analyze<P, S>(&self, provider: &P, symbols: &[S], as_of: Date) -> Result<AnalystReport>
    where
        P: MetricsProvider + ?Sized,
        S: AsRef<str>,
    {
        let mut report = AnalystReport::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if let Some(signal) = self.analyze_symbol(provider, symbol, as_of)? {
                report.insert(symbol, signal);
            }
        }
        debug!(
            requested = symbols.len(),
            analyzed = report.len(),
            "fundamentals analysis complete"
        );
        Ok(report)
    }
}
