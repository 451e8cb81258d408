//! Rule sets: character factories that bind attributes and actions.

pub mod arena;
pub mod simple;

pub use arena::ArenaRules;
pub use simple::SimpleRules;
