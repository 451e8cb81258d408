//! Attribute system.
//!
//! Every combatant is an attribute object: a bag of stored numbers plus
//! derived attributes that are recomputed from the stored ones on each read.
//!
//! ```text
//! [ Stored attributes ]  Experience, HP/Current, MP/Current, Attack, ...
//!      ↓ (read-only)
//! [ Function attributes ] Level, HP/Total, MP/Total, Alive, ...
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: only stored attributes are state; derived ones are never cached
//! 2. **Read-only derivation**: function attributes see `&Object`
//! 3. **Open key space**: rule sets invent their own keys; [`keys`] names the
//!    few the engine itself reads

pub mod keys;
pub mod object;
pub mod value;

pub use object::{AttributeFn, Object};
pub use value::Value;
