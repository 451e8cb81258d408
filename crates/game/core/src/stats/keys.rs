//! Attribute keys the engine reads directly.
//!
//! Everything else is up to the rule set.

/// Current hit points. A character is alive while this is above zero.
pub const HP_CURRENT: &str = "HP/Current";

/// Hit point total, the cap for healing.
pub const HP_TOTAL: &str = "HP/Total";

/// Current magic points.
pub const MP_CURRENT: &str = "MP/Current";

/// Magic point total.
pub const MP_TOTAL: &str = "MP/Total";

/// Experience; summed up for victory rewards.
pub const EXPERIENCE: &str = "Experience";

/// Any positive value keeps an otherwise alive character from acting.
pub const INCAPACITATED: &str = "Incapacitated";
