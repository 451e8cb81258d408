//! Parties: ordered members plus a shared inventory.

use crate::state::{Character, Item};
use crate::stats::Value;

#[derive(Clone, Debug)]
pub struct Party<N: Value = i64> {
    members: Vec<Character<N>>,
    inventory: Vec<Item>,
}

impl<N: Value> Default for Party<N> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            inventory: Vec::new(),
        }
    }
}

impl<N: Value> Party<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<Character<N>>) -> Self {
        Self {
            members,
            inventory: Vec::new(),
        }
    }

    pub fn push(&mut self, character: Character<N>) {
        self.members.push(character);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Character<N>] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Character<N>> {
        self.members.get(index)
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut Character<N>> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character<N>> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character<N>> {
        self.members.iter_mut()
    }

    /// No member is alive. An empty party counts as defeated.
    pub fn defeated(&self) -> bool {
        self.members.iter().all(|member| !member.alive())
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|member| member.alive()).count()
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Appends `items`, preserving their order. Duplicates are kept.
    pub fn merge_inventory(&mut self, items: impl IntoIterator<Item = Item>) {
        self.inventory.extend(items);
    }

    /// Removes and returns the whole inventory.
    pub fn take_inventory(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.inventory)
    }

    /// Removes the first item with the given name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.name == name)?;
        Some(self.inventory.remove(index))
    }
}
