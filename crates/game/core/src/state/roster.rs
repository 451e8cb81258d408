//! The parties of a match and handles into them.

use std::fmt;

use crate::state::{Character, Party};
use crate::stats::Value;

/// Stable address of a character: party index plus member index.
///
/// Handles stay valid until a party in front of them is removed, which only
/// happens when a victory is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId {
    pub party: usize,
    pub member: usize,
}

impl CharacterId {
    pub const fn new(party: usize, member: usize) -> Self {
        Self { party, member }
    }

    /// Party 0 is the player party.
    pub const fn is_player(&self) -> bool {
        self.party == 0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.party, self.member)
    }
}

/// Ordered parties; index 0 is player-controlled.
#[derive(Clone, Debug)]
pub struct Roster<N: Value = i64> {
    parties: Vec<Party<N>>,
}

impl<N: Value> Default for Roster<N> {
    fn default() -> Self {
        Self {
            parties: Vec::new(),
        }
    }
}

impl<N: Value> Roster<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, party: Party<N>) -> usize {
        self.parties.push(party);
        self.parties.len() - 1
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn parties(&self) -> &[Party<N>] {
        &self.parties
    }

    pub fn party(&self, index: usize) -> Option<&Party<N>> {
        self.parties.get(index)
    }

    pub fn party_mut(&mut self, index: usize) -> Option<&mut Party<N>> {
        self.parties.get_mut(index)
    }

    pub fn remove_party(&mut self, index: usize) -> Option<Party<N>> {
        (index < self.parties.len()).then(|| self.parties.remove(index))
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character<N>> {
        self.parties.get(id.party)?.member(id.member)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character<N>> {
        self.parties.get_mut(id.party)?.member_mut(id.member)
    }

    /// Every handle, party by party, in member order.
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.parties
            .iter()
            .enumerate()
            .flat_map(|(party, members)| {
                (0..members.len()).map(move |member| CharacterId::new(party, member))
            })
    }

    /// Handles of one party; empty for an unknown index.
    pub fn party_ids(&self, party: usize) -> impl Iterator<Item = CharacterId> + '_ {
        let len = self.parties.get(party).map_or(0, Party::len);
        (0..len).map(move |member| CharacterId::new(party, member))
    }

    /// Whether the party owning `id` is defeated. Unknown parties count as
    /// defeated.
    pub fn is_defeated(&self, id: CharacterId) -> bool {
        self.parties.get(id.party).is_none_or(Party::defeated)
    }

    /// Index of the first defeated party, scanning in order.
    pub fn first_defeated(&self) -> Option<usize> {
        self.parties.iter().position(Party::defeated)
    }

    /// Handles of every able character, in roster order.
    pub fn able(&self) -> Vec<CharacterId> {
        self.ids()
            .filter(|&id| self.character(id).is_some_and(Character::able))
            .collect()
    }
}
