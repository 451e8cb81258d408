/// Match configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of parties the match is topped up to (player party included).
    pub parties: usize,

    /// Members per generated party.
    pub party_size: usize,

    /// Point budget handed to the rule set per generated party.
    pub party_points: i64,

    /// Seed for the match RNG. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Indentation of the "Inspect" status panel.
    pub inspect_indent: usize,

    /// Indentation of the single-target chooser.
    pub target_indent: usize,

    /// Selections an actor may cancel or fail before the engine gives up on
    /// the turn.
    pub max_retries: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PARTIES: usize = 2;
    pub const DEFAULT_PARTY_SIZE: usize = 4;
    pub const DEFAULT_PARTY_POINTS: i64 = 40;
    pub const DEFAULT_INSPECT_INDENT: usize = 30;
    pub const DEFAULT_TARGET_INDENT: usize = 8;
    pub const DEFAULT_MAX_RETRIES: usize = 64;

    pub fn new() -> Self {
        Self {
            parties: Self::DEFAULT_PARTIES,
            party_size: Self::DEFAULT_PARTY_SIZE,
            party_points: Self::DEFAULT_PARTY_POINTS,
            seed: None,
            inspect_indent: Self::DEFAULT_INSPECT_INDENT,
            target_indent: Self::DEFAULT_TARGET_INDENT,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    /// Same defaults with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
