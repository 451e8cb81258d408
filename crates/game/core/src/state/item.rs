//! Equipment and inventory items.

use std::fmt;

/// A piece of gear. Items are plain values; inventories may hold duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Equipment slot this item occupies when worn, e.g. `weapon`.
    pub slot: String,
}

impl Item {
    pub fn new(name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot: slot.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.slot)
    }
}
