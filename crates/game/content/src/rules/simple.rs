//! The smallest playable rule set.
//!
//! Every character starts with Attack 1, Defence 1 and no Experience, has
//! `Experience × 2 + 5` hit points and knows one move: hit one living enemy
//! for its Attack value. Finishing someone off earns half their Experience
//! plus one.

use arena_core::{
    ActionContext, ActionDescriptor, Character, Filter, MatchRng, RuleSet, Scope, keys,
};

use crate::names::NameTable;

pub const ATTACK: &str = "Attack";
pub const DEFENCE: &str = "Defence";
pub const ALIVE: &str = "Alive";

#[derive(Clone, Debug, Default)]
pub struct SimpleRules {
    names: NameTable,
}

impl SimpleRules {
    pub fn new(names: NameTable) -> Self {
        Self { names }
    }
}

impl RuleSet for SimpleRules {
    fn generate_character(&self, _points: i64, rng: &mut MatchRng) -> Character {
        let mut character = Character::new(self.names.generate(rng));

        character.set(ATTACK, 1);
        character.set(DEFENCE, 1);
        character.set(keys::EXPERIENCE, 0);
        character.bind_function(keys::HP_TOTAL, |object| object.get(keys::EXPERIENCE) * 2 + 5);
        character.bind_function(ALIVE, |object| i64::from(object.get(keys::HP_CURRENT) > 0));
        let total = character.get(keys::HP_TOTAL);
        character.set(keys::HP_CURRENT, total);

        character.bind_descriptor(
            ActionDescriptor::new(ATTACK, attack)
                .with_scope(Scope::Enemy)
                .with_filter(Filter::OnlyAlive),
        );
        character
    }
}

fn attack(ctx: &mut ActionContext<'_>) -> String {
    let source = ctx.source();
    let damage = ctx.source_attribute(ATTACK);
    let mut earned = 0;
    let mut lines = Vec::new();

    for &target in ctx.targets() {
        let name = ctx.name_of(target);
        let Some(foe) = ctx.character_mut(target) else {
            continue;
        };
        foe.add(keys::HP_CURRENT, -damage);
        if foe.get(ALIVE) == 0 {
            earned += foe.get(keys::EXPERIENCE) / 2 + 1;
            lines.push(format!("{name} takes {damage} damage and falls."));
        } else {
            lines.push(format!("{name} takes {damage} damage."));
        }
    }

    if let Some(attacker) = ctx.character_mut(source) {
        attacker.add(keys::EXPERIENCE, earned);
    }

    format!("{} attacks! {}", ctx.name_of(source), lines.join(" "))
}
