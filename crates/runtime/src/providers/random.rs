//! Uniformly random decisions.

use arena_core::{CharacterId, MatchRng, Roster, Value};

use crate::api::DecisionProvider;

/// Picks every label and target uniformly at random from its own seeded RNG.
///
/// Labels listed with [`RandomProvider::avoiding`] are skipped while anything
/// else is on offer, so a headless player never wanders into "Quit".
pub struct RandomProvider {
    rng: MatchRng,
    avoid: Vec<String>,
}

impl RandomProvider {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(MatchRng::new(seed))
    }

    pub fn from_rng(rng: MatchRng) -> Self {
        Self {
            rng,
            avoid: Vec::new(),
        }
    }

    pub fn avoiding<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid.extend(labels.into_iter().map(Into::into));
        self
    }
}

impl<N: Value> DecisionProvider<N> for RandomProvider {
    fn choose_label(
        &mut self,
        _roster: &Roster<N>,
        actor: CharacterId,
        labels: &[String],
    ) -> Option<String> {
        let preferred: Vec<&String> = labels
            .iter()
            .filter(|label| !self.avoid.contains(*label))
            .collect();
        let choice = if preferred.is_empty() {
            self.rng.choose(labels).cloned()
        } else {
            self.rng.choose(&preferred).map(|label| (*label).clone())
        };
        tracing::debug!(%actor, ?choice, "random label");
        choice
    }

    fn choose_target(
        &mut self,
        _roster: &Roster<N>,
        actor: CharacterId,
        candidates: &[CharacterId],
    ) -> Option<CharacterId> {
        let choice = self.rng.choose(candidates).copied();
        tracing::debug!(%actor, ?choice, "random target");
        choice
    }
}
