//! Starting equipment and slot layout.

use std::collections::BTreeMap;

use arena_core::{Item, MatchRng};

use crate::names::NameTable;

/// Content a rule set draws on when rolling characters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Catalog {
    pub names: NameTable,
    /// Slot name → how many items fit.
    pub slots: BTreeMap<String, usize>,
    /// Candidate starting gear; one item is drawn per slot.
    pub gear: Vec<Item>,
    /// Potions each character starts with.
    pub potions: i64,
}

impl Catalog {
    pub fn builtin() -> Self {
        let slots = [("weapon", 1), ("armour", 1), ("trinket", 2)]
            .into_iter()
            .map(|(slot, capacity)| (slot.to_owned(), capacity))
            .collect();
        let gear = [
            ("Short Sword", "weapon"),
            ("Mace", "weapon"),
            ("Quarterstaff", "weapon"),
            ("Leather Vest", "armour"),
            ("Chain Shirt", "armour"),
            ("Lucky Coin", "trinket"),
            ("Bone Charm", "trinket"),
        ]
        .into_iter()
        .map(|(name, slot)| Item::new(name, slot))
        .collect();

        Self {
            names: NameTable::builtin(),
            slots,
            gear,
            potions: 1,
        }
    }

    /// One random item per slot, for slots with room that have any gear
    /// listed.
    pub fn starting_gear(&self, rng: &mut MatchRng) -> Vec<Item> {
        self.slots
            .iter()
            .filter(|&(_, &capacity)| capacity > 0)
            .filter_map(|(slot, _)| {
                let options: Vec<&Item> =
                    self.gear.iter().filter(|item| &item.slot == slot).collect();
                rng.choose(&options).map(|item| (*item).clone())
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_gear_covers_each_stocked_slot_once() {
        let catalog = Catalog::builtin();
        let gear = catalog.starting_gear(&mut MatchRng::new(4));
        let slots: Vec<&str> = gear.iter().map(|item| item.slot.as_str()).collect();
        assert_eq!(slots, vec!["armour", "trinket", "weapon"]);
    }

    #[test]
    fn slots_without_gear_are_skipped() {
        let mut catalog = Catalog::builtin();
        catalog.gear.retain(|item| item.slot == "weapon");
        let gear = catalog.starting_gear(&mut MatchRng::new(4));
        assert_eq!(gear.len(), 1);
        assert_eq!(gear[0].slot, "weapon");
    }

    #[test]
    fn zero_capacity_slots_get_no_gear() {
        let mut catalog = Catalog::builtin();
        catalog.slots.insert(String::from("trinket"), 0);
        let gear = catalog.starting_gear(&mut MatchRng::new(4));
        let slots: Vec<&str> = gear.iter().map(|item| item.slot.as_str()).collect();
        assert_eq!(slots, vec!["armour", "weapon"]);
    }
}
