//! Vote aggregation strategies for Ronda.
//!
//! Each rule group casts one [`SignalVote`](ronda_traits::SignalVote). A
//! [`Combiner`] turns those votes into an overall signal with a confidence
//! percentage.
//!
//! # Examples
//!
//! ```rust
//! use ronda_combine::{Combiner, MajorityVoteCombiner};
//! use ronda_traits::SignalVote::{Bearish, Bullish, Neutral};
//!
//! let consensus = MajorityVoteCombiner.combine(&[Bullish, Bullish, Neutral, Bearish]);
//! assert_eq!(consensus.signal, Bullish);
//! assert_eq!(consensus.confidence, 50);
//! ```

mod combiner;
mod majority;

// Re-export main types
pub use combiner::{Combiner, Consensus};
pub use majority::MajorityVoteCombiner;
