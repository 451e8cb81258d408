//! Targeting system for actions.
//!
//! An action declares *where* its targets come from ([`Scope`]) and *which*
//! of those qualify ([`Filter`]). The roster turns the pair into a concrete
//! [`TargetSelection`]:
//!
//! 1. scope → candidate set (self, own party, other parties, everyone)
//! 2. filter → eligible subset, in roster order
//! 3. empty → [`ActionError::NoEligibleTargets`]
//! 4. area scopes hit the whole subset; single scopes ask the interaction
//!    surface to pick one

use crate::action::ActionError;
use crate::state::{CharacterId, Roster};
use crate::stats::{Value, keys};

// ============================================================================
// Scope
// ============================================================================

/// Which parties an action may draw targets from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Scope {
    /// The acting character only.
    #[default]
    #[strum(serialize = "self")]
    SelfOnly,
    /// One member of the actor's party (chosen).
    Ally,
    /// Every member of the actor's party.
    Party,
    /// One member of any other party (chosen).
    Enemy,
    /// Every member of every other party.
    Enemies,
    /// Every character in the match.
    Everyone,
}

impl Scope {
    /// Returns true if the scope resolves to a single, chosen target.
    pub const fn is_single(&self) -> bool {
        matches!(self, Scope::Ally | Scope::Enemy)
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Status predicate narrowing a candidate set.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Filter {
    /// Everyone in scope.
    #[default]
    None,
    /// HP/Current == HP/Total.
    OnlyHealthy,
    /// HP/Current > 0.
    OnlyAlive,
    /// Alive but below HP/Total.
    OnlyUnhealthy,
    /// HP/Current <= 0.
    OnlyDead,
    /// Members of parties that still have someone standing.
    OnlyUndefeated,
}

impl Filter {
    /// Returns true if the character behind `id` passes this filter.
    ///
    /// Unknown handles never pass.
    pub fn admits<N: Value>(&self, roster: &Roster<N>, id: CharacterId) -> bool {
        let Some(character) = roster.character(id) else {
            return false;
        };

        match self {
            Filter::None => true,
            Filter::OnlyHealthy => {
                character.get(keys::HP_CURRENT) == character.get(keys::HP_TOTAL)
            }
            Filter::OnlyAlive => character.alive(),
            Filter::OnlyUnhealthy => {
                character.alive() && character.get(keys::HP_CURRENT) < character.get(keys::HP_TOTAL)
            }
            Filter::OnlyDead => !character.alive(),
            Filter::OnlyUndefeated => !roster.is_defeated(id),
        }
    }
}

// ============================================================================
// Target Selection
// ============================================================================

/// Outcome of scope + filter for one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSelection {
    /// Area scopes: every listed character is hit.
    All(Vec<CharacterId>),
    /// Single scopes: exactly one of the listed characters must be chosen.
    ChooseOne(Vec<CharacterId>),
}

impl TargetSelection {
    /// Eligible characters, in roster order.
    pub fn candidates(&self) -> &[CharacterId] {
        match self {
            TargetSelection::All(ids) | TargetSelection::ChooseOne(ids) => ids,
        }
    }
}

impl<N: Value> Roster<N> {
    /// Candidate set for `scope` as seen from `actor`, before filtering.
    pub fn candidates(&self, actor: CharacterId, scope: Scope) -> Vec<CharacterId> {
        match scope {
            Scope::SelfOnly => vec![actor],
            Scope::Ally | Scope::Party => self.party_ids(actor.party).collect(),
            Scope::Enemy | Scope::Enemies => self
                .ids()
                .filter(|id| id.party != actor.party)
                .collect(),
            Scope::Everyone => self.ids().collect(),
        }
    }

    /// Scope → filter → selection for an action bound on `actor`.
    pub fn eligible_targets(
        &self,
        actor: CharacterId,
        action: &str,
    ) -> Result<TargetSelection, ActionError> {
        let character = self
            .character(actor)
            .ok_or(ActionError::UnknownCharacter(actor))?;
        let scope = character.scope(action)?;
        let filter = character.filter(action)?;

        let eligible: Vec<CharacterId> = self
            .candidates(actor, scope)
            .into_iter()
            .filter(|&id| filter.admits(self, id))
            .collect();

        if eligible.is_empty() {
            return Err(ActionError::NoEligibleTargets {
                action: action.to_owned(),
            });
        }

        Ok(if scope.is_single() {
            TargetSelection::ChooseOne(eligible)
        } else {
            TargetSelection::All(eligible)
        })
    }
}
