//! Collaborators the engine calls out to.
//!
//! The engine owns no presentation and no content: it asks an
//! [`Interaction`] for every decision, a [`RuleSet`] for every new character,
//! and draws every random number from the match-owned [`MatchRng`].

mod interact;
mod rng;
mod rules;

pub use interact::Interaction;
pub use rng::MatchRng;
pub use rules::RuleSet;
