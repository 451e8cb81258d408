//! Turn-based party combat engine.
//!
//! `arena-core` defines the data model (attribute objects, characters,
//! parties, bound actions) and the match state machine that resolves one
//! action at a time against dynamically computed target sets. Presentation,
//! AI and content stay outside: the engine calls out to an
//! [`env::Interaction`] for every decision and to an [`env::RuleSet`] for
//! every new character.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{
    ActionContext, ActionDescriptor, ActionError, EffectFn, EquipError, Filter, Menu, MenuEntry,
    ResourceCost, Scope, TargetSelection,
};
pub use config::GameConfig;
pub use engine::{EngineError, Game, MenuChoice, MenuCommand, Phase, TurnError};
pub use env::{Interaction, MatchRng, RuleSet};
pub use error::{ErrorSeverity, GameError};
pub use state::{Character, CharacterId, CharacterSnapshot, Item, Name, Party, Roster};
pub use stats::{AttributeFn, Object, Value, keys};
