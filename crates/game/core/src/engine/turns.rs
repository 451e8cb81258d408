use crate::env::RuleSet;
use crate::state::CharacterId;
use crate::stats::Value;

use super::{Game, TurnError};

/// Turn order methods for Game.
///
/// There is no turn queue: every call reshuffles the able characters, so the
/// next actor is drawn fresh after each resolved action.
impl<R, N> Game<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    /// All able characters, uniformly shuffled with the match RNG.
    pub fn turn_order(&mut self) -> Vec<CharacterId> {
        let mut order = self.roster.able();
        self.rng.shuffle(&mut order);
        order
    }

    /// Head of a fresh turn order.
    pub fn next_character(&mut self) -> Result<CharacterId, TurnError> {
        self.turn_order()
            .first()
            .copied()
            .ok_or(TurnError::NoAbleCharacters)
    }
}
