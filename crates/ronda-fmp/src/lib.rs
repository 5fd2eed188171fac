//! Financial Modeling Prep (FMP) API client for Ronda.
//!
//! This crate fetches ratios, key metrics and growth figures from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API and
//! assembles them into [`ronda_traits::FinancialMetrics`] snapshots.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_fmp::FmpClient;
//! use ronda_traits::{Date, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let as_of = Date::from_ymd_opt(2024, 12, 31).unwrap();
//!
//!     // TTM is only available as of today; past dates need annual or quarter
//!     let snapshots = client
//!         .financial_metrics("AAPL", as_of, Period::Annual, 10)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod metrics;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use metrics::{assemble_financial_metrics, select_snapshots};
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
