//! The interaction surface a headless match runs against.

use std::collections::BTreeMap;

use arena_core::{Character, CharacterId, Interaction, Roster, Value};

use crate::api::DecisionProvider;
use crate::repository::{LogEntry, Logbook};

/// Routes decisions to the player provider (party 0) or the NPC provider
/// (everyone else) and keeps the match logbook.
pub struct Session<N: Value = i64> {
    player: Box<dyn DecisionProvider<N>>,
    npc: Box<dyn DecisionProvider<N>>,
    logbook: Logbook<N>,
}

impl<N: Value> Session<N> {
    pub fn new(
        player: Box<dyn DecisionProvider<N>>,
        npc: Box<dyn DecisionProvider<N>>,
    ) -> Self {
        Self {
            player,
            npc,
            logbook: Logbook::new(),
        }
    }

    /// Continues an earlier logbook instead of starting empty.
    pub fn with_logbook(mut self, logbook: Logbook<N>) -> Self {
        self.logbook = logbook;
        self
    }

    pub fn logbook(&self) -> &Logbook<N> {
        &self.logbook
    }

    pub fn into_logbook(self) -> Logbook<N> {
        self.logbook
    }

    fn provider_for(&mut self, actor: CharacterId) -> &mut dyn DecisionProvider<N> {
        if actor.is_player() {
            self.player.as_mut()
        } else {
            self.npc.as_mut()
        }
    }
}

impl<N: Value> Interaction<N> for Session<N> {
    fn query(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        labels: &[String],
    ) -> Option<String> {
        let choice = self.provider_for(actor).choose_label(roster, actor, labels);
        tracing::debug!(%actor, ?labels, ?choice, "menu");
        choice
    }

    fn choose_target(
        &mut self,
        roster: &Roster<N>,
        actor: CharacterId,
        candidates: &[CharacterId],
        _indent: usize,
    ) -> Option<CharacterId> {
        let choice = self
            .provider_for(actor)
            .choose_target(roster, actor, candidates);
        tracing::debug!(%actor, candidates = candidates.len(), ?choice, "target");
        choice
    }

    fn action(
        &mut self,
        roster: &Roster<N>,
        action: &str,
        source: CharacterId,
        targets: &[CharacterId],
    ) {
        let Some(source) = roster.character(source).map(Character::snapshot) else {
            tracing::warn!(%source, action, "action from unknown character");
            return;
        };
        let target = targets
            .iter()
            .filter_map(|&id| roster.character(id))
            .map(Character::snapshot)
            .collect();
        tracing::debug!(action, source = %source.name, "action committed");
        self.logbook.push(LogEntry::Action {
            action: action.to_owned(),
            source,
            target,
        });
    }

    fn display(&mut self, title: &str, data: &BTreeMap<String, String>, indent: usize) {
        tracing::debug!(title, indent, ?data, "panel");
    }

    fn clear(&mut self) {
        tracing::trace!("clear");
    }

    fn notice(&mut self, message: &str) {
        tracing::debug!(message, "notice");
        self.logbook.push_message(message);
    }

    fn log(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        tracing::info!("{}", text.trim_end());
        self.logbook.push_message(text);
    }
}

#[cfg(test)]
mod tests {
    use arena_core::Party;

    use super::*;
    use crate::api::FirstChoiceProvider;
    use crate::providers::ScriptedProvider;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        for name in ["Ann", "Bob"] {
            let mut character = Character::new(name);
            character.set("HP/Current", 4);
            roster.push(Party::from_members(vec![character]));
        }
        roster
    }

    const ANN: CharacterId = CharacterId::new(0, 0);
    const BOB: CharacterId = CharacterId::new(1, 0);

    #[test]
    fn decisions_are_routed_by_party() {
        let roster = roster();
        let mut session: Session = Session::new(
            Box::new(ScriptedProvider::new().with_labels(["Inspect"])),
            Box::new(FirstChoiceProvider),
        );
        let labels = vec![String::from("Attack"), String::from("Pass")];

        assert_eq!(session.query(&roster, BOB, &labels).as_deref(), Some("Attack"));
        assert_eq!(session.query(&roster, ANN, &labels).as_deref(), Some("Inspect"));
        assert_eq!(session.query(&roster, ANN, &labels), None);
        assert_eq!(session.choose_target(&roster, BOB, &[ANN, BOB], 8), Some(ANN));
    }

    #[test]
    fn actions_are_recorded_with_snapshots() {
        let roster = roster();
        let mut session: Session =
            Session::new(Box::new(FirstChoiceProvider), Box::new(FirstChoiceProvider));

        session.action(&roster, "Attack", ANN, &[BOB]);

        match &session.logbook().entries()[0] {
            LogEntry::Action {
                action,
                source,
                target,
            } => {
                assert_eq!(action, "Attack");
                assert_eq!(source.name, "Ann");
                assert_eq!(target.len(), 1);
                assert_eq!(target[0].attributes["HP/Current"], 4);
            }
            other => panic!("expected an action, got {other:?}"),
        }
    }

    #[test]
    fn notices_and_flow_text_become_messages() {
        let mut session: Session =
            Session::new(Box::new(FirstChoiceProvider), Box::new(FirstChoiceProvider));

        session.notice("selection cancelled");
        session.log("");
        session.log("a new party appeared!\n");

        let messages: Vec<&str> = session.logbook().messages().collect();
        assert_eq!(messages, vec!["selection cancelled", "a new party appeared!\n"]);
    }
}
