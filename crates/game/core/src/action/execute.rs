//! Action invocation.
//!
//! Invocation is hosted on the roster rather than on a character: an effect
//! needs mutable access to its source *and* its targets, which may live in
//! different parties.

use crate::action::ActionError;
use crate::env::MatchRng;
use crate::state::{Character, CharacterId, Roster};
use crate::stats::Value;

/// Everything an effect may touch while it runs.
pub struct ActionContext<'a, N: Value = i64> {
    roster: &'a mut Roster<N>,
    source: CharacterId,
    targets: &'a [CharacterId],
    rng: &'a mut MatchRng,
}

impl<'a, N: Value> ActionContext<'a, N> {
    pub fn new(
        roster: &'a mut Roster<N>,
        source: CharacterId,
        targets: &'a [CharacterId],
        rng: &'a mut MatchRng,
    ) -> Self {
        Self {
            roster,
            source,
            targets,
            rng,
        }
    }

    pub fn source(&self) -> CharacterId {
        self.source
    }

    /// Confirmed targets, in roster order.
    ///
    /// The slice outlives the context borrow, so effects can iterate it while
    /// mutating characters.
    pub fn targets(&self) -> &'a [CharacterId] {
        self.targets
    }

    pub fn roster(&self) -> &Roster<N> {
        self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster<N> {
        self.roster
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character<N>> {
        self.roster.character(id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character<N>> {
        self.roster.character_mut(id)
    }

    /// Attribute of the acting character, default if it vanished.
    pub fn source_attribute(&self, key: &str) -> N {
        self.character(self.source)
            .map(|character| character.get(key))
            .unwrap_or_default()
    }

    /// Display name of a character, for descriptions.
    pub fn name_of(&self, id: CharacterId) -> String {
        self.character(id)
            .map(|character| character.name().display())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn rng(&mut self) -> &mut MatchRng {
        self.rng
    }
}

impl<N: Value> Roster<N> {
    /// Pays for and runs `action` bound on `actor` against `targets`.
    ///
    /// Affordability is checked first; on failure nothing is mutated.
    pub fn invoke(
        &mut self,
        actor: CharacterId,
        action: &str,
        targets: &[CharacterId],
        rng: &mut MatchRng,
    ) -> Result<String, ActionError> {
        let character = self
            .character_mut(actor)
            .ok_or(ActionError::UnknownCharacter(actor))?;
        character.can_afford(action)?;

        let descriptor = character
            .descriptor(action)
            .ok_or_else(|| ActionError::unknown(action))?;
        let effect = descriptor.effect();
        let costs = descriptor.costs().to_vec();

        for cost in &costs {
            character.add(&cost.attribute, N::zero() - cost.amount);
        }

        let mut context = ActionContext::new(self, actor, targets, rng);
        Ok(effect(&mut context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionDescriptor, Filter, Scope};
    use crate::state::Party;
    use crate::stats::keys;

    const CASTER: CharacterId = CharacterId::new(0, 0);
    const FOE: CharacterId = CharacterId::new(1, 0);

    fn roster(mp: i64) -> Roster {
        let mut caster: Character = Character::new("Mira");
        caster.set(keys::HP_TOTAL, 10);
        caster.set(keys::HP_CURRENT, 10);
        caster.set(keys::MP_CURRENT, mp);
        caster.bind_descriptor(
            ActionDescriptor::new("Skill/Bolt", |ctx| {
                for &target in ctx.targets() {
                    if let Some(foe) = ctx.character_mut(target) {
                        foe.add(keys::HP_CURRENT, -3);
                    }
                }
                format!("{} casts a bolt", ctx.name_of(ctx.source()))
            })
            .with_scope(Scope::Enemy)
            .with_filter(Filter::OnlyAlive)
            .with_cost(keys::MP_CURRENT, 2),
        );

        let mut foe: Character = Character::new("Grub");
        foe.set(keys::HP_TOTAL, 8);
        foe.set(keys::HP_CURRENT, 8);

        let mut roster = Roster::new();
        roster.push(Party::from_members(vec![caster]));
        roster.push(Party::from_members(vec![foe]));
        roster
    }

    fn hp(roster: &Roster, id: CharacterId) -> i64 {
        roster.character(id).unwrap().get(keys::HP_CURRENT)
    }

    #[test]
    fn invoke_deducts_costs_then_runs_effect() {
        let mut roster = roster(5);
        let mut rng = MatchRng::new(1);

        let description = roster.invoke(CASTER, "Skill/Bolt", &[FOE], &mut rng).unwrap();

        assert_eq!(description, "Mira casts a bolt");
        assert_eq!(hp(&roster, FOE), 5);
        assert_eq!(roster.character(CASTER).unwrap().get(keys::MP_CURRENT), 3);
    }

    #[test]
    fn unaffordable_action_mutates_nothing() {
        let mut roster = roster(1);
        let mut rng = MatchRng::new(1);
        let before_foe = roster.character(FOE).unwrap().snapshot();
        let before_caster = roster.character(CASTER).unwrap().snapshot();

        let error = roster
            .invoke(CASTER, "Skill/Bolt", &[FOE], &mut rng)
            .unwrap_err();

        assert!(matches!(error, ActionError::InsufficientResource { .. }));
        assert_eq!(roster.character(FOE).unwrap().snapshot(), before_foe);
        assert_eq!(roster.character(CASTER).unwrap().snapshot(), before_caster);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut roster = roster(5);
        let mut rng = MatchRng::new(1);

        assert!(matches!(
            roster.invoke(CASTER, "Skill/Nap", &[FOE], &mut rng),
            Err(ActionError::UnknownAction { .. })
        ));
        assert!(matches!(
            roster.invoke(CharacterId::new(4, 0), "Skill/Bolt", &[FOE], &mut rng),
            Err(ActionError::UnknownCharacter(_))
        ));
    }
}
