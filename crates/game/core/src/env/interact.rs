//! The interaction surface the engine blocks on.

use std::collections::BTreeMap;

use crate::state::{CharacterId, Roster};
use crate::stats::Value;

/// Whoever answers the engine's questions and watches what it does.
///
/// Every decision is a blocking call. `None` always means "Cancel".
pub trait Interaction<N: Value = i64> {
    /// Picks one label of the current menu level for `actor`.
    fn query(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        labels: &[String],
    ) -> Option<String>;

    /// Picks one of `candidates` as the single target of an action.
    fn choose_target(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        candidates: &[CharacterId],
        indent: usize,
    ) -> Option<CharacterId>;

    /// A committed action is about to be invoked.
    fn action(
        &mut self,
        roster: &Roster<N>,
        action: &str,
        source: CharacterId,
        targets: &[CharacterId],
    );

    /// Shows an informational key/value panel.
    fn display(&mut self, title: &str, data: &BTreeMap<String, String>, indent: usize);

    /// Clears whatever the surface is showing.
    fn clear(&mut self) {}

    /// A rejected or retried selection, explained.
    fn notice(&mut self, _message: &str) {}

    /// Redraw hook called once per loop iteration.
    fn refresh(&mut self, _roster: &Roster<N>) {}

    /// Outcome text of a flow step.
    fn log(&mut self, _text: &str) {}
}
