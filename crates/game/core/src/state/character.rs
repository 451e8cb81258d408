//! Characters: an attribute object with a name, gear and bound actions.

use std::collections::BTreeMap;

use crate::action::{
    ActionContext, ActionDescriptor, ActionError, EquipError, Filter, ResourceCost, Scope,
};
use crate::state::{Item, Name};
use crate::stats::{Object, Value, keys};

/// A combatant.
///
/// Actions are kept in binding order; rebinding a name replaces the
/// descriptor without moving it.
#[derive(Clone, Debug)]
pub struct Character<N: Value = i64> {
    name: Name,
    object: Object<N>,
    equipment: Vec<Item>,
    slots: BTreeMap<String, usize>,
    actions: Vec<ActionDescriptor<N>>,
}

impl<N: Value> Character<N> {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            object: Object::new(),
            equipment: Vec::new(),
            slots: BTreeMap::new(),
            actions: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<Name>) {
        self.name = name.into();
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn object(&self) -> &Object<N> {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Object<N> {
        &mut self.object
    }

    pub fn get(&self, key: &str) -> N {
        self.object.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: N) {
        self.object.set(key, value);
    }

    pub fn add(&mut self, key: &str, delta: N) -> N {
        self.object.add(key, delta)
    }

    pub fn add_capped(&mut self, key: &str, cap_key: &str, delta: N) -> N {
        self.object.add_capped(key, cap_key, delta)
    }

    pub fn bind_function<F>(&mut self, key: impl Into<String>, function: F)
    where
        F: Fn(&Object<N>) -> N + Send + Sync + 'static,
    {
        self.object.bind_function(key, function);
    }

    pub fn attributes(&self) -> Vec<String> {
        self.object.attributes()
    }

    /// HP/Current above zero.
    pub fn alive(&self) -> bool {
        self.get(keys::HP_CURRENT) > N::zero()
    }

    /// Alive and not incapacitated.
    pub fn able(&self) -> bool {
        self.alive() && self.get(keys::INCAPACITATED) <= N::zero()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Registers or overwrites an action.
    pub fn bind<F>(
        &mut self,
        name: impl Into<String>,
        visible: bool,
        effect: F,
        scope: Scope,
        filter: Filter,
        costs: Vec<ResourceCost<N>>,
    ) where
        F: Fn(&mut ActionContext<'_, N>) -> String + Send + Sync + 'static,
    {
        self.bind_descriptor(
            ActionDescriptor::new(name, effect)
                .with_visibility(visible)
                .with_scope(scope)
                .with_filter(filter)
                .with_costs(costs),
        );
    }

    /// Registers or overwrites a prepared descriptor.
    pub fn bind_descriptor(&mut self, descriptor: ActionDescriptor<N>) {
        match self
            .actions
            .iter_mut()
            .find(|bound| bound.name() == descriptor.name())
        {
            Some(bound) => *bound = descriptor,
            None => self.actions.push(descriptor),
        }
    }

    pub fn unbind(&mut self, name: &str) -> Option<ActionDescriptor<N>> {
        let index = self.actions.iter().position(|bound| bound.name() == name)?;
        Some(self.actions.remove(index))
    }

    pub fn descriptor(&self, name: &str) -> Option<&ActionDescriptor<N>> {
        self.actions.iter().find(|bound| bound.name() == name)
    }

    /// Every bound action, in binding order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionDescriptor<N>> {
        self.actions.iter()
    }

    /// Names of menu-visible actions, in binding order.
    pub fn visible_actions(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter(|bound| bound.is_visible())
            .map(|bound| bound.name().to_owned())
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&ActionDescriptor<N>, ActionError> {
        self.descriptor(name).ok_or_else(|| ActionError::unknown(name))
    }

    pub fn scope(&self, name: &str) -> Result<Scope, ActionError> {
        self.lookup(name).map(ActionDescriptor::scope)
    }

    pub fn filter(&self, name: &str) -> Result<Filter, ActionError> {
        self.lookup(name).map(ActionDescriptor::filter)
    }

    pub fn costs(&self, name: &str) -> Result<&[ResourceCost<N>], ActionError> {
        self.lookup(name).map(ActionDescriptor::costs)
    }

    /// Checks every cost of `name` against current attributes.
    pub fn can_afford(&self, name: &str) -> Result<(), ActionError> {
        for cost in self.costs(name)? {
            let available = self.get(&cost.attribute);
            if available < cost.amount {
                return Err(ActionError::InsufficientResource {
                    action: name.to_owned(),
                    attribute: cost.attribute.clone(),
                    required: cost.amount.to_string(),
                    available: available.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Costs rendered for a menu, e.g. `"2 MP"`. Empty for free actions.
    pub fn resource_label(&self, name: &str) -> Result<String, ActionError> {
        Ok(self
            .costs(name)?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "))
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn equipment(&self) -> &[Item] {
        &self.equipment
    }

    pub fn slot_capacity(&self, slot: &str) -> usize {
        self.slots.get(slot).copied().unwrap_or(0)
    }

    pub fn set_slot_capacity(&mut self, slot: impl Into<String>, capacity: usize) {
        self.slots.insert(slot.into(), capacity);
    }

    /// Wears `item` if its slot exists and has room.
    pub fn equip(&mut self, item: Item) -> Result<(), EquipError> {
        let Some(&capacity) = self.slots.get(&item.slot) else {
            return Err(EquipError::UnknownSlot { slot: item.slot });
        };
        let used = self
            .equipment
            .iter()
            .filter(|worn| worn.slot == item.slot)
            .count();
        if used >= capacity {
            return Err(EquipError::SlotFull {
                slot: item.slot,
                capacity,
            });
        }
        self.equipment.push(item);
        Ok(())
    }

    /// Takes off everything, in the order it was put on.
    pub fn unequip_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.equipment)
    }

    /// Evaluated view for logs and inspection panels.
    pub fn snapshot(&self) -> CharacterSnapshot<N> {
        CharacterSnapshot {
            name: self.name.full(),
            attributes: self.object.evaluate(),
            equipment: self.equipment.clone(),
        }
    }
}

/// Everything about a character that can be written down.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot<N: Value = i64> {
    pub name: String,
    pub attributes: BTreeMap<String, N>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        let mut hero = Character::new(Name::new("Ada", "Byron"));
        hero.set(keys::HP_TOTAL, 20);
        hero.set(keys::HP_CURRENT, 20);
        hero.set(keys::MP_CURRENT, 3);
        hero.bind("Attack", true, |_| String::new(), Scope::Enemy, Filter::OnlyAlive, vec![]);
        hero.bind(
            "Skill/Heal",
            true,
            |_| String::new(),
            Scope::Ally,
            Filter::OnlyUnhealthy,
            vec![ResourceCost::new(keys::MP_CURRENT, 2)],
        );
        hero.bind("Regenerate", false, |_| String::new(), Scope::SelfOnly, Filter::None, vec![]);
        hero
    }

    #[test]
    fn alive_and_able_follow_attributes() {
        let mut hero = hero();
        assert!(hero.alive());
        assert!(hero.able());

        hero.set(keys::INCAPACITATED, 1);
        assert!(hero.alive());
        assert!(!hero.able());

        hero.set(keys::INCAPACITATED, 0);
        hero.set(keys::HP_CURRENT, 0);
        assert!(!hero.alive());
        assert!(!hero.able());
    }

    #[test]
    fn visible_actions_keep_binding_order() {
        let mut hero = hero();
        assert_eq!(hero.visible_actions(), vec!["Attack", "Skill/Heal"]);

        hero.bind("Attack", true, |_| String::new(), Scope::Enemies, Filter::None, vec![]);
        assert_eq!(hero.visible_actions(), vec!["Attack", "Skill/Heal"]);
        assert_eq!(hero.scope("Attack").unwrap(), Scope::Enemies);
    }

    #[test]
    fn lookups_fail_for_unbound_names() {
        let hero = hero();
        assert_eq!(hero.filter("Skill/Heal").unwrap(), Filter::OnlyUnhealthy);
        assert!(matches!(
            hero.scope("Dance"),
            Err(ActionError::UnknownAction { .. })
        ));
        assert!(hero.filter("Dance").is_err());
    }

    #[test]
    fn affordability_and_labels() {
        let mut hero = hero();
        assert!(hero.can_afford("Skill/Heal").is_ok());
        assert_eq!(hero.resource_label("Skill/Heal").unwrap(), "2 MP");
        assert_eq!(hero.resource_label("Attack").unwrap(), "");

        hero.set(keys::MP_CURRENT, 1);
        assert_eq!(
            hero.can_afford("Skill/Heal"),
            Err(ActionError::InsufficientResource {
                action: "Skill/Heal".into(),
                attribute: keys::MP_CURRENT.into(),
                required: "2".into(),
                available: "1".into(),
            })
        );
    }

    #[test]
    fn equip_respects_slot_capacity() {
        let mut hero = hero();
        hero.set_slot_capacity("weapon", 1);

        assert!(hero.equip(Item::new("Sword", "weapon")).is_ok());
        assert_eq!(
            hero.equip(Item::new("Axe", "weapon")),
            Err(EquipError::SlotFull {
                slot: "weapon".into(),
                capacity: 1
            })
        );
        assert!(matches!(
            hero.equip(Item::new("Hat", "head")),
            Err(EquipError::UnknownSlot { .. })
        ));

        assert_eq!(hero.unequip_all(), vec![Item::new("Sword", "weapon")]);
        assert!(hero.equipment().is_empty());
    }

    #[test]
    fn snapshot_evaluates_functions() {
        let mut hero = hero();
        hero.bind_function("Level", |object| object.get(keys::EXPERIENCE) / 10 + 1);
        hero.set(keys::EXPERIENCE, 25);

        let snapshot = hero.snapshot();
        assert_eq!(snapshot.name, "Ada Byron");
        assert_eq!(snapshot.attributes["Level"], 3);
        assert_eq!(snapshot.attributes[keys::HP_CURRENT], 20);
    }
}
