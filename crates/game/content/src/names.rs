//! Character name tables.

use arena_core::{MatchRng, Name};

/// Given and family names to draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameTable {
    pub given: Vec<String>,
    pub family: Vec<String>,
}

const GIVEN: &[&str] = &[
    "Ada", "Bram", "Cora", "Dain", "Edda", "Finn", "Greta", "Hal", "Ines", "Jory", "Kara", "Lio",
    "Mira", "Nils", "Orla", "Pim", "Quinn", "Rhea", "Sten", "Tove", "Ulla", "Vik", "Wren", "Yara",
];

const FAMILY: &[&str] = &[
    "Ashdown", "Blackwood", "Carrow", "Dunmore", "Everly", "Fairholm", "Greaves", "Hollis",
    "Ironside", "Kestrel", "Lowell", "Marsh", "Northam", "Oakes", "Pryor", "Redfern", "Stroud",
    "Thorne", "Vance", "Whitlock",
];

impl NameTable {
    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            given: GIVEN.iter().map(|name| (*name).to_owned()).collect(),
            family: FAMILY.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    /// Draws a name. Empty tables fall back to "Nobody".
    pub fn generate(&self, rng: &mut MatchRng) -> Name {
        let given = rng
            .choose(&self.given)
            .cloned()
            .unwrap_or_else(|| String::from("Nobody"));
        match rng.choose(&self.family) {
            Some(family) => Name::new(given, family.clone()),
            None => Name::from(given),
        }
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_come_from_the_tables() {
        let table = NameTable::builtin();
        let mut rng = MatchRng::new(11);
        for _ in 0..20 {
            let name = table.generate(&mut rng);
            assert!(table.given.contains(&name.given));
            assert!(table.family.contains(name.family.as_ref().unwrap()));
        }
    }

    #[test]
    fn empty_tables_still_name_someone() {
        let table = NameTable {
            given: Vec::new(),
            family: Vec::new(),
        };
        let name = table.generate(&mut MatchRng::new(1));
        assert_eq!(name.full(), "Nobody");
    }
}
