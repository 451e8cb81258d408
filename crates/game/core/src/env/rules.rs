//! Rule-set factory interface.

use crate::env::MatchRng;
use crate::state::{Character, Party};
use crate::stats::Value;

/// Builds characters and parties for a rule set.
///
/// Implementations bind every action and function attribute a character
/// needs; the engine never adds any of its own.
pub trait RuleSet<N: Value = i64> {
    /// One freshly rolled character spending `points`.
    fn generate_character(&self, points: N, rng: &mut MatchRng) -> Character<N>;

    /// A party of `members` characters sharing `points` evenly.
    fn generate_party(&self, members: usize, points: N, rng: &mut MatchRng) -> Party<N> {
        let share = match members {
            0 | 1 => points,
            n => points / N::from_i64(n as i64),
        };
        Party::from_members(
            (0..members)
                .map(|_| self.generate_character(share, rng))
                .collect(),
        )
    }
}
