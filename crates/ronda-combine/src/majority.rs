//! Simple majority vote combination.

use ronda_traits::SignalVote;

use crate::combiner::{Combiner, Consensus};

/// Majority combiner: the side with more votes wins, ties are neutral.
///
/// Confidence is the share of all votes held by the larger of the bullish
/// and bearish counts, rounded to two decimals (ties to even) and expressed
/// as a whole percent. Neutral votes dilute
/// confidence but never win on their own, so four neutral votes give a
/// neutral signal at 0% while a 2-2 split gives neutral at 50%.
///
/// # Examples
///
/// ```rust
/// use ronda_combine::{Combiner, MajorityVoteCombiner};
/// use ronda_traits::SignalVote::{Bearish, Bullish, Neutral};
///
/// let tie = MajorityVoteCombiner.combine(&[Bullish, Bullish, Bearish, Bearish]);
/// assert_eq!(tie.signal, Neutral);
/// assert_eq!(tie.confidence, 50);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityVoteCombiner;

impl MajorityVoteCombiner {
    /// `count / total` rounded to two decimals, as a percentage.
    fn percentage(count: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        // Half-way shares such as 1/8 round to even: 12, not 13
        let pct = (count as f64 / total as f64 * 100.0).round_ties_even();
        pct.clamp(0.0, 100.0) as u8
    }
}

impl Combiner for MajorityVoteCombiner {
    fn combine(&self, votes: &[SignalVote]) -> Consensus {
        let count = |side: SignalVote| votes.iter().filter(|&&v| v == side).count();
        let bullish = count(SignalVote::Bullish);
        let bearish = count(SignalVote::Bearish);
        let neutral = count(SignalVote::Neutral);

        let signal = match bullish.cmp(&bearish) {
            std::cmp::Ordering::Greater => SignalVote::Bullish,
            std::cmp::Ordering::Less => SignalVote::Bearish,
            std::cmp::Ordering::Equal => SignalVote::Neutral,
        };

        Consensus {
            signal,
            confidence: Self::percentage(bullish.max(bearish), votes.len()),
            bullish,
            bearish,
            neutral,
        }
    }

    fn name(&self) -> &str {
        "majority_vote"
    }
}
