#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Ronda fundamental signal evaluator.
//!
//! This crate provides the data model (metric snapshots, votes, languages)
//! and the seams the evaluator is built around: rule groups, the metrics
//! provider, localization and status reporting.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod config;
pub mod error;
pub mod localize;
pub mod provider;
pub mod rule;
pub mod status;
pub mod types;

// Re-exports
pub use config::AnalystConfig;
pub use error::{Result, RondaError};
pub use localize::Localizer;
pub use provider::{InMemoryMetrics, MetricsProvider};
pub use rule::{RuleGroup, RuleGroupResult};
pub use status::{NoopStatus, StatusReporter};
pub use types::{Date, FinancialMetrics, Language, Period, SignalVote, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
