//! Match state machine.
//!
//! [`Game`] owns the roster, the match RNG and the rule set. Its phase is a
//! pure function of the roster and the exit flag, so the outer loop simply
//! asks [`Game::phase`] after every step and dispatches on the answer:
//!
//! - `Menu` / `Combat`: [`Game::do_menu`] / [`Game::do_combat`] pick the next
//!   actor and resolve one action
//! - `Victory`: [`Game::do_victory`] collects loot, rewards the player party
//!   and removes the losers
//! - `Defeat` / `Exit`: terminal

mod errors;
mod phase;
mod resolve;
mod turns;
mod victory;

pub use errors::{EngineError, TurnError};
pub use phase::Phase;
pub use resolve::{MenuChoice, MenuCommand};

use crate::config::GameConfig;
use crate::env::{MatchRng, RuleSet};
use crate::state::{CharacterId, Party, Roster};
use crate::stats::Value;

/// A single match.
pub struct Game<R, N: Value = i64> {
    roster: Roster<N>,
    config: GameConfig,
    rng: MatchRng,
    rules: R,
    exit: bool,
}

impl<R, N> Game<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    /// Seeds the RNG from the config and tops the roster up to
    /// `config.parties`.
    pub fn new(config: GameConfig, rules: R) -> Self {
        let mut game = Self::with_roster(config, rules, Roster::new());
        let parties = game.config.parties;
        game.fill_roster(parties);
        game
    }

    /// Starts from a prepared roster without generating anything.
    pub fn with_roster(config: GameConfig, rules: R, roster: Roster<N>) -> Self {
        let rng = match config.seed {
            Some(seed) => MatchRng::new(seed),
            None => MatchRng::from_entropy(),
        };
        Self {
            roster,
            config,
            rng,
            rules,
            exit: false,
        }
    }

    pub fn roster(&self) -> &Roster<N> {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster<N> {
        &mut self.roster
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn rng_mut(&mut self) -> &mut MatchRng {
        &mut self.rng
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn request_exit(&mut self) {
        self.exit = true;
    }

    pub fn will_exit(&self) -> bool {
        self.exit
    }

    /// Current phase:
    /// 1. exit requested → `Exit`
    /// 2. one party or none → `Menu`
    /// 3. first defeated party in roster order decides: the player party →
    ///    `Defeat`, any other → `Victory`
    /// 4. nobody left able to act → `Defeat`, the player cannot win
    /// 5. otherwise `Combat`
    pub fn phase(&self) -> Phase {
        if self.exit {
            return Phase::Exit;
        }
        if self.roster.len() <= 1 {
            return Phase::Menu;
        }
        match self.roster.first_defeated() {
            Some(0) => Phase::Defeat,
            Some(_) => Phase::Victory,
            None if self.roster.able().is_empty() => Phase::Defeat,
            None => Phase::Combat,
        }
    }

    /// Characters in party 1 and up are driven by AI.
    pub fn uses_ai(&self, id: CharacterId) -> bool {
        id.party > 0
    }

    /// Generates parties until the roster holds `config.parties`, and
    /// always at least one opponent for the player party.
    ///
    /// Returns one line per new party.
    pub fn generate_parties(&mut self) -> String {
        let parties = self.config.parties.max(2);
        self.fill_roster(parties)
    }

    fn fill_roster(&mut self, parties: usize) -> String {
        let points = N::from_i64(self.config.party_points);
        let mut out = String::new();
        while self.roster.len() < parties {
            let party: Party<N> =
                self.rules
                    .generate_party(self.config.party_size, points, &mut self.rng);
            self.roster.push(party);
            out.push_str("a new party appeared!\n");
        }
        out
    }

    /// Text for a lost match.
    pub fn do_defeat(&self) -> String {
        String::from("The player party was defeated!")
    }
}
