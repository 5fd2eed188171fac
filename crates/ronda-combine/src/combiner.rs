//! Core trait definition for vote combiners.

use ronda_traits::SignalVote;
use serde::{Deserialize, Serialize};

/// Overall signal derived from a set of rule-group votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consensus {
    /// Winning direction.
    pub signal: SignalVote,

    /// Share of votes agreeing with the stronger side, as a 0-100 percentage.
    pub confidence: u8,

    /// Number of bullish votes.
    pub bullish: usize,

    /// Number of bearish votes.
    pub bearish: usize,

    /// Number of neutral votes.
    pub neutral: usize,
}

impl Consensus {
    /// Total number of votes tallied.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.bullish + self.bearish + self.neutral
    }
}

/// Combines rule-group votes into a single [`Consensus`].
///
/// All implementations must be thread-safe (Send + Sync) and must not fail:
/// an empty vote list yields a neutral consensus with zero confidence.
///
/// # Examples
///
/// ```rust
/// use ronda_combine::{Combiner, Consensus};
/// use ronda_traits::SignalVote;
///
/// struct AlwaysNeutral;
///
/// impl Combiner for AlwaysNeutral {
///     fn combine(&self, votes: &[SignalVote]) -> Consensus {
///         Consensus {
///             signal: SignalVote::Neutral,
///             confidence: 0,
///             bullish: 0,
///             bearish: 0,
///             neutral: votes.len(),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "always_neutral"
///     }
/// }
/// ```
pub trait Combiner: Send + Sync {
    /// Combine votes into an overall signal.
    fn combine(&self, votes: &[SignalVote]) -> Consensus;

    /// Name of this combination strategy.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_total() {
        let consensus = Consensus {
            signal: SignalVote::Bullish,
            confidence: 50,
            bullish: 2,
            bearish: 1,
            neutral: 1,
        };
        assert_eq!(consensus.total(), 4);
    }

    #[test]
    fn test_combiner_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Combiner>>();
    }
}
