#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Quick Start
//!
//! ```
//! use ronda::prelude::*;
//!
//! let store: InMemoryMetrics = [FinancialMetrics {
//!     return_on_equity: Some(0.20),
//!     net_margin: Some(0.25),
//!     operating_margin: Some(0.18),
//!     price_to_earnings_ratio: Some(15.0),
//!     ..FinancialMetrics::new("AAPL")
//! }]
//! .into_iter()
//! .collect();
//!
//! let analyst = FundamentalsAnalyst::new(AnalystConfig::default());
//! let as_of = Date::from_ymd_opt(2024, 12, 31).unwrap();
//! let report = analyst.analyze(&store, &["AAPL"], as_of)?;
//!
//! let aapl = report.get("AAPL").unwrap();
//! assert_eq!(aapl.signal, SignalVote::Neutral);
//! # Ok::<(), RondaError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Data model and collaborator traits ([`RuleGroup`],
//!   [`MetricsProvider`], [`Localizer`], [`StatusReporter`])
//! - [`signals`] - Rule groups, [`FundamentalsAnalyst`] and [`AnalystReport`]
//! - [`combine`] - Vote aggregation ([`Combiner`])
//! - [`i18n`] - English and Chinese display strings
//! - [`fmp`] - Financial Modeling Prep client

/// Version information for the ronda crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions.
pub mod traits {
    pub use ronda_traits::*;
}

pub use ronda_combine::Combiner;
pub use ronda_traits::{Localizer, MetricsProvider, RuleGroup, StatusReporter};

pub use ronda_traits::{Result, RondaError};

pub use ronda_traits::{
    AnalystConfig, Date, FinancialMetrics, InMemoryMetrics, Language, Period, SignalVote, Symbol,
};

// ============================================================================
// Rule Groups and Analyst
// ============================================================================

/// Rule groups, the fundamentals analyst and its report.
///
/// ## Rule Groups
///
/// | Name | Scores | Vote |
/// |------|--------|------|
/// | `profitability_signal` | ROE > 15%, net margin > 20%, op. margin > 15% | 0 bearish, 1 neutral, 2+ bullish |
/// | `growth_signal` | revenue, earnings, book value growth > 10% | same |
/// | `financial_health_signal` | current ratio > 1.5, D/E < 0.5, FCF/share > 0.8 x EPS | same |
/// | `price_ratios_signal` | P/E > 25, P/B > 3, P/S > 5 | 0 bullish, 1 neutral, 2+ bearish |
pub mod signals {
    pub use ronda_signals::*;
}

pub use ronda_signals::{AnalystReport, FundamentalSignal, FundamentalsAnalyst, TracingStatus};

// ============================================================================
// Vote Aggregation
// ============================================================================

/// Vote aggregation strategies.
pub mod combine {
    pub use ronda_combine::*;
}

// ============================================================================
// Localization
// ============================================================================

/// Display string tables.
pub mod i18n {
    pub use ronda_i18n::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get an API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add it to a `.env` file
pub mod fmp {
    pub use ronda_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{AnalystReport, Combiner, FundamentalSignal, FundamentalsAnalyst};
}

// ============================================================================
// Tests
// ============================================================================
