/// Match phase, recomputed from the roster on every call and never stored.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum Phase {
    /// At most one party is left; the player may look around or pick a fight.
    Menu,
    /// Two or more parties, none of them defeated.
    Combat,
    /// The player party survived and another party was wiped out.
    Victory,
    /// The player party was wiped out.
    Defeat,
    /// Quit was requested.
    Exit,
}

impl Phase {
    /// Phases after which the outer loop stops.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::Defeat | Phase::Exit)
    }
}
