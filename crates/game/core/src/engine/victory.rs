use crate::env::{Interaction, RuleSet};
use crate::stats::{Value, keys};

use super::Game;

impl<R, N> Game<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    /// Applies a won fight.
    ///
    /// Every defeated party other than the player's hands its inventory and
    /// its members' equipment to party 0 and is removed. The defeated
    /// characters' Experience is pooled; each alive player character gains
    /// `max(1, pool / player party size)`.
    ///
    /// With no defeated opponent nothing is awarded or removed.
    pub fn do_victory(&mut self, interaction: &mut dyn Interaction<N>) -> String {
        let losers: Vec<usize> = (1..self.roster.len())
            .filter(|&index| self.roster.party(index).is_some_and(|party| party.defeated()))
            .collect();
        if losers.is_empty() {
            return String::from("No opposing party has been defeated.");
        }

        let mut loot = Vec::new();
        let mut pool = N::zero();
        for &index in losers.iter().rev() {
            if let Some(mut party) = self.roster.remove_party(index) {
                let mut spoils = party.take_inventory();
                for member in party.iter_mut() {
                    pool = pool + member.get(keys::EXPERIENCE);
                    spoils.extend(member.unequip_all());
                }
                loot.push(spoils);
            }
        }

        let mut text = String::from("The player party was victorious!");
        if let Some(player) = self.roster.party_mut(0) {
            // Removed back to front; hand loot over in party order.
            player.merge_inventory(loot.into_iter().rev().flatten());

            let size = N::from_i64(player.len().max(1) as i64);
            let reward = (pool / size).max_of(N::one());
            for member in player.iter_mut().filter(|member| member.alive()) {
                member.add(keys::EXPERIENCE, reward);
            }
            text.push_str(&format!("\nEach survivor gains {reward} experience."));
        }

        interaction.clear();
        text
    }
}
