//! Fundamental rule groups and the analyst that runs them.
//!
//! This crate provides:
//! - Rule groups: profitability, growth, financial health and price ratios
//! - Detail rendering: localized `label: value` strings per rule group
//! - A registry describing the built-in rule groups
//! - [`FundamentalsAnalyst`]: evaluates snapshots and combines the votes
//! - [`AnalystReport`]: per-symbol signals as JSON, a named message, or a
//!   polars `DataFrame`
//!
//! # Example
//!
//! ```
//! use ronda_signals::FundamentalsAnalyst;
//! use ronda_traits::{Date, FinancialMetrics, InMemoryMetrics};
//!
//! let store: InMemoryMetrics = [FinancialMetrics {
//!     return_on_equity: Some(0.30),
//!     ..FinancialMetrics::new("AAPL")
//! }]
//! .into_iter()
//! .collect();
//!
//! let as_of = Date::from_ymd_opt(2024, 12, 31).unwrap();
//! let report = FundamentalsAnalyst::default()
//!     .analyze(&store, &["AAPL", "MSFT"], as_of)
//!     .unwrap();
//!
//! assert_eq!(report.len(), 1);
//! assert!(report.get("MSFT").is_none());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod analyst;
pub mod details;
pub mod registry;
pub mod report;
pub mod rules;
pub mod status;

// Re-export key types
pub use analyst::{COMPONENT, FundamentalsAnalyst};
pub use registry::{RuleCategory, RuleGroupInfo};
pub use report::{AnalystMessage, AnalystReport, FundamentalSignal};
pub use rules::default_rule_groups;
pub use status::TracingStatus;
