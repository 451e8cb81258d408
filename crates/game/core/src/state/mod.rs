//! Match state: characters, parties and the roster that owns them.
//!
//! The roster exclusively owns every party and, through them, every
//! character. Everything else refers to characters by [`CharacterId`].

pub mod character;
pub mod item;
pub mod name;
pub mod party;
pub mod roster;

pub use character::{Character, CharacterSnapshot};
pub use item::Item;
pub use name::Name;
pub use party::Party;
pub use roster::{CharacterId, Roster};
