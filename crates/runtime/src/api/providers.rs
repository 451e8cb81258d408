//! Abstraction for sourcing player and NPC decisions.
//!
//! Runtime users plug in [`DecisionProvider`] implementations so a match can
//! run with human input, scripted fixtures, or AI policies.
use arena_core::{CharacterId, Roster, Value};

/// Answers the two questions the engine asks: which menu label, and which
/// single target.
///
/// Different implementations can handle:
/// - Player input (from a UI)
/// - NPC AI decisions
/// - Scripted/replayed decisions
/// - Testing fixtures
///
/// Returning `None` cancels, exactly like picking "Cancel" in a menu.
pub trait DecisionProvider<N: Value = i64> {
    /// Pick one of `labels` for `actor`.
    fn choose_label(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        labels: &[String],
    ) -> Option<String>;

    /// Pick one of `candidates` as the target of `actor`'s action.
    fn choose_target(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        candidates: &[CharacterId],
    ) -> Option<CharacterId>;
}

/// A provider that always takes the first option.
/// Useful for testing or as a fallback.
pub struct FirstChoiceProvider;

impl<N: Value> DecisionProvider<N> for FirstChoiceProvider {
    fn choose_label(&mut self, _: &Roster<N>, _: CharacterId, labels: &[String]) -> Option<String> {
        labels.first().cloned()
    }

    fn choose_target(
        &mut self,
        _: &Roster<N>,
        _: CharacterId,
        candidates: &[CharacterId],
    ) -> Option<CharacterId> {
        candidates.first().copied()
    }
}
