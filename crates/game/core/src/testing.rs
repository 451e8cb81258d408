//! Shared fixtures for unit tests.

use std::collections::{BTreeMap, VecDeque};

use crate::action::{ActionDescriptor, Filter, Scope};
use crate::env::{Interaction, MatchRng, RuleSet};
use crate::state::{Character, CharacterId, Roster};
use crate::stats::keys;

/// A character with `hp` out of `hp.max(1)` hit points and nothing bound.
pub fn fighter(name: &str, hp: i64) -> Character {
    let mut character = Character::new(name);
    character.set(keys::HP_TOTAL, hp.max(1));
    character.set(keys::HP_CURRENT, hp);
    character
}

/// Minimal rule set: 5 HP, one attack for 1 damage.
pub struct TestRules;

impl RuleSet for TestRules {
    fn generate_character(&self, points: i64, rng: &mut MatchRng) -> Character {
        let mut character = fighter("Grunt", 5);
        character.set(keys::EXPERIENCE, points + rng.range(0, 1));
        character.bind_descriptor(
            ActionDescriptor::new("Attack", |ctx| {
                for &target in ctx.targets() {
                    if let Some(foe) = ctx.character_mut(target) {
                        foe.add(keys::HP_CURRENT, -1);
                    }
                }
                String::from("poke")
            })
            .with_scope(Scope::Enemy)
            .with_filter(Filter::OnlyAlive),
        );
        character
    }
}

/// Scripted interaction that records everything it is told.
///
/// Labels are answered in order; `"Cancel"` or an exhausted script answers
/// `None`. Target choices work the same way.
#[derive(Default)]
pub struct Recorder {
    labels: VecDeque<String>,
    targets: VecDeque<Option<CharacterId>>,
    pub actions: Vec<(String, CharacterId, Vec<CharacterId>)>,
    pub notices: Vec<String>,
    pub panels: Vec<(String, BTreeMap<String, String>, usize)>,
    pub cleared: usize,
}

impl Recorder {
    pub fn new(labels: &[&str], targets: &[Option<CharacterId>]) -> Self {
        Self {
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
            targets: targets.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Scripted labels not yet asked for.
    pub fn pending(&self) -> usize {
        self.labels.len()
    }
}

impl Interaction for Recorder {
    fn query(&mut self, _: &Roster, _: CharacterId, _: &[String]) -> Option<String> {
        self.labels.pop_front().filter(|label| label != "Cancel")
    }

    fn choose_target(
        &mut self,
        _: &Roster,
        _: CharacterId,
        _: &[CharacterId],
        _: usize,
    ) -> Option<CharacterId> {
        self.targets.pop_front().flatten()
    }

    fn action(&mut self, _: &Roster, action: &str, source: CharacterId, targets: &[CharacterId]) {
        self.actions
            .push((action.to_owned(), source, targets.to_vec()));
    }

    fn display(&mut self, title: &str, data: &BTreeMap<String, String>, indent: usize) {
        self.panels.push((title.to_owned(), data.clone(), indent));
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}
