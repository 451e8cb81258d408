//! Pre-recorded decisions, for replays and tests.

use std::collections::VecDeque;

use arena_core::{CharacterId, Roster, Value};

use crate::api::DecisionProvider;

/// Answers from two queues, in order.
///
/// A queued label that is not on offer is still returned; the menu treats it
/// as a cancel. `"Cancel"` and an exhausted queue both answer `None`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    labels: VecDeque<String>,
    targets: VecDeque<Option<CharacterId>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Option<CharacterId>>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> (usize, usize) {
        (self.labels.len(), self.targets.len())
    }
}

impl<N: Value> DecisionProvider<N> for ScriptedProvider {
    fn choose_label(&mut self, _: &Roster<N>, _: CharacterId, _: &[String]) -> Option<String> {
        self.labels.pop_front().filter(|label| label != "Cancel")
    }

    fn choose_target(
        &mut self,
        _: &Roster<N>,
        _: CharacterId,
        _: &[CharacterId],
    ) -> Option<CharacterId> {
        self.targets.pop_front().flatten()
    }
}
