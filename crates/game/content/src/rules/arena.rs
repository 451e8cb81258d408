//! The arena rule set: rolled stats, levels, magic and potions.
//!
//! Derived attributes:
//! - `Level` = isqrt(Experience / 10) + 1
//! - `HP/Total` = 10 + Level × 5 + Defence
//! - `MP/Total` = Level × 2 + Magic
//!
//! | action           | scope   | filter         | cost           |
//! |------------------|---------|----------------|----------------|
//! | `Attack`         | enemy   | only alive     |                |
//! | `Skill/Heal`     | ally    | only unhealthy | 2 MP           |
//! | `Skill/Fireball` | enemies | only alive     | 4 MP           |
//! | `Skill/Revive`   | ally    | only dead      | 6 MP           |
//! | `Item/Potion`    | ally    | only unhealthy | 1 Items/Potion |
//! | `Pass`           | self    | none           |                |

use arena_core::{
    ActionContext, ActionDescriptor, Character, CharacterId, Filter, MatchRng, Object, RuleSet,
    Scope, keys,
};

use crate::catalog::Catalog;

pub const ATTACK: &str = "Attack";
pub const DEFENCE: &str = "Defence";
pub const MAGIC: &str = "Magic";
pub const LEVEL: &str = "Level";
pub const POTIONS: &str = "Items/Potion";

pub const HEAL: &str = "Skill/Heal";
pub const FIREBALL: &str = "Skill/Fireball";
pub const REVIVE: &str = "Skill/Revive";
pub const POTION: &str = "Item/Potion";
pub const PASS: &str = "Pass";

const HEAL_COST: i64 = 2;
const FIREBALL_COST: i64 = 4;
const REVIVE_COST: i64 = 6;
const POTION_HEAL: i64 = 10;

/// Rolls characters from a point budget and a content catalog.
#[derive(Clone, Debug, Default)]
pub struct ArenaRules {
    catalog: Catalog,
}

impl ArenaRules {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl RuleSet for ArenaRules {
    /// Attack, Defence and Magic start at 1 each; the rest of `points` is
    /// spread over them at random. Experience is rolled in `0..=points`.
    fn generate_character(&self, points: i64, rng: &mut MatchRng) -> Character {
        let mut character = Character::new(self.catalog.names.generate(rng));

        let mut stats = [1_i64; 3];
        for _ in 0..(points - 3).max(0) {
            stats[rng.below(stats.len())] += 1;
        }
        character.set(ATTACK, stats[0]);
        character.set(DEFENCE, stats[1]);
        character.set(MAGIC, stats[2]);
        character.set(keys::EXPERIENCE, rng.range(0, points.max(0)));
        character.set(POTIONS, self.catalog.potions);

        character.bind_function(LEVEL, level);
        character.bind_function(keys::HP_TOTAL, |object| {
            10 + object.get(LEVEL) * 5 + object.get(DEFENCE)
        });
        character.bind_function(keys::MP_TOTAL, |object| {
            object.get(LEVEL) * 2 + object.get(MAGIC)
        });
        let hp = character.get(keys::HP_TOTAL);
        let mp = character.get(keys::MP_TOTAL);
        character.set(keys::HP_CURRENT, hp);
        character.set(keys::MP_CURRENT, mp);

        for (slot, &capacity) in &self.catalog.slots {
            character.set_slot_capacity(slot.clone(), capacity);
        }
        for item in self.catalog.starting_gear(rng) {
            if let Err(error) = character.equip(item) {
                tracing::debug!(%error, "starting gear left in the pack");
            }
        }

        bind_actions(&mut character);
        character
    }
}

fn level(object: &Object) -> i64 {
    (object.get(keys::EXPERIENCE).max(0) / 10).isqrt() + 1
}

fn bind_actions(character: &mut Character) {
    character.bind_descriptor(
        ActionDescriptor::new(ATTACK, attack)
            .with_scope(Scope::Enemy)
            .with_filter(Filter::OnlyAlive),
    );
    character.bind_descriptor(
        ActionDescriptor::new(HEAL, heal)
            .with_scope(Scope::Ally)
            .with_filter(Filter::OnlyUnhealthy)
            .with_cost(keys::MP_CURRENT, HEAL_COST),
    );
    character.bind_descriptor(
        ActionDescriptor::new(FIREBALL, fireball)
            .with_scope(Scope::Enemies)
            .with_filter(Filter::OnlyAlive)
            .with_cost(keys::MP_CURRENT, FIREBALL_COST),
    );
    character.bind_descriptor(
        ActionDescriptor::new(REVIVE, revive)
            .with_scope(Scope::Ally)
            .with_filter(Filter::OnlyDead)
            .with_cost(keys::MP_CURRENT, REVIVE_COST),
    );
    character.bind_descriptor(
        ActionDescriptor::new(POTION, potion)
            .with_scope(Scope::Ally)
            .with_filter(Filter::OnlyUnhealthy)
            .with_cost(POTIONS, 1),
    );
    character.bind_descriptor(ActionDescriptor::new(PASS, pass));
}

// ============================================================================
// Effects
// ============================================================================

/// Deals `amount` to `target`, never below zero HP. Returns the damage line
/// and the Experience earned if the blow was fatal.
fn wound(ctx: &mut ActionContext<'_>, target: CharacterId, amount: i64) -> (String, i64) {
    let name = ctx.name_of(target);
    let Some(foe) = ctx.character_mut(target) else {
        return (String::new(), 0);
    };
    foe.add_capped(keys::HP_CURRENT, keys::HP_TOTAL, -amount);
    if foe.alive() {
        (format!("{name} takes {amount} damage."), 0)
    } else {
        (
            format!("{name} takes {amount} damage and falls."),
            foe.get(keys::EXPERIENCE) / 2 + 1,
        )
    }
}

fn restore(ctx: &mut ActionContext<'_>, target: CharacterId, amount: i64) -> String {
    let name = ctx.name_of(target);
    match ctx.character_mut(target) {
        Some(friend) => {
            let before = friend.get(keys::HP_CURRENT);
            let after = friend.add_capped(keys::HP_CURRENT, keys::HP_TOTAL, amount);
            format!("{name} recovers {} HP.", after - before)
        }
        None => String::new(),
    }
}

fn award(ctx: &mut ActionContext<'_>, earned: i64) {
    let source = ctx.source();
    if earned > 0 {
        if let Some(attacker) = ctx.character_mut(source) {
            attacker.add(keys::EXPERIENCE, earned);
        }
    }
}

fn attack(ctx: &mut ActionContext<'_>) -> String {
    let strength = ctx.source_attribute(ATTACK);
    let mut lines = vec![format!("{} attacks!", ctx.name_of(ctx.source()))];
    let mut earned = 0;

    for &target in ctx.targets() {
        let defence = ctx.character(target).map_or(0, |foe| foe.get(DEFENCE));
        let damage = (ctx.rng().range(1, strength) - defence / 2).max(1);
        let (line, experience) = wound(ctx, target, damage);
        lines.push(line);
        earned += experience;
    }

    award(ctx, earned);
    lines.join(" ")
}

fn fireball(ctx: &mut ActionContext<'_>) -> String {
    let magic = ctx.source_attribute(MAGIC);
    let level = ctx.source_attribute(LEVEL);
    let mut lines = vec![format!("{} hurls a fireball!", ctx.name_of(ctx.source()))];
    let mut earned = 0;

    for &target in ctx.targets() {
        let defence = ctx.character(target).map_or(0, |foe| foe.get(DEFENCE));
        let damage = (ctx.rng().range(1, magic) + level - defence / 2).max(1);
        let (line, experience) = wound(ctx, target, damage);
        lines.push(line);
        earned += experience;
    }

    award(ctx, earned);
    lines.join(" ")
}

fn heal(ctx: &mut ActionContext<'_>) -> String {
    let magic = ctx.source_attribute(MAGIC);
    let level = ctx.source_attribute(LEVEL);
    let mut lines = vec![format!("{} casts a healing spell.", ctx.name_of(ctx.source()))];

    for &target in ctx.targets() {
        let amount = ctx.rng().range(1, magic * 2) + level;
        lines.push(restore(ctx, target, amount));
    }
    lines.join(" ")
}

fn revive(ctx: &mut ActionContext<'_>) -> String {
    let mut lines = vec![format!("{} calls the fallen back.", ctx.name_of(ctx.source()))];

    for &target in ctx.targets() {
        let name = ctx.name_of(target);
        if let Some(friend) = ctx.character_mut(target) {
            let hp = (friend.get(keys::HP_TOTAL) / 2).max(1);
            friend.set(keys::HP_CURRENT, hp);
            lines.push(format!("{name} rises with {hp} HP."));
        }
    }
    lines.join(" ")
}

fn potion(ctx: &mut ActionContext<'_>) -> String {
    let mut lines = vec![format!("{} uses a potion.", ctx.name_of(ctx.source()))];
    for &target in ctx.targets() {
        lines.push(restore(ctx, target, POTION_HEAL));
    }
    lines.join(" ")
}

fn pass(ctx: &mut ActionContext<'_>) -> String {
    format!("{} waits.", ctx.name_of(ctx.source()))
}
