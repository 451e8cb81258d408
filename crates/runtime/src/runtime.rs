//! High-level runtime orchestrator.
//!
//! The runtime owns a [`Game`] and the [`Session`] it talks to, drives the
//! outer flow loop one phase step at a time and persists the logbook once
//! the loop stops. Clients configure it through [`RuntimeBuilder`].

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use arena_core::{Game, GameConfig, Interaction, Phase, Roster, RuleSet, Value};

use crate::api::{DecisionProvider, ProviderKind, Result, RuntimeError};
use crate::repository::{Logbook, LogbookRepository};
use crate::session::Session;

/// Runtime configuration: the match itself plus how long and where to.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Flow steps before the loop gives up. `None` runs until the match ends.
    pub turn_limit: Option<usize>,
    /// Where the logbook is written. `None` leaves the choice to the caller.
    pub log_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Defaults overridden by `ARENA_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies whichever of these are set and parse:
    /// `ARENA_SEED`, `ARENA_PARTIES`, `ARENA_PARTY_SIZE`, `ARENA_TURN_LIMIT`,
    /// `ARENA_LOG_PATH`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(seed) = read_env::<u64>("ARENA_SEED") {
            self.game.seed = Some(seed);
        }
        if let Some(parties) = read_env::<usize>("ARENA_PARTIES") {
            self.game.parties = parties;
        }
        if let Some(size) = read_env::<usize>("ARENA_PARTY_SIZE") {
            self.game.party_size = size;
        }
        if let Some(limit) = read_env::<usize>("ARENA_TURN_LIMIT") {
            self.turn_limit = Some(limit);
        }
        if let Some(path) = read_env::<PathBuf>("ARENA_LOG_PATH") {
            self.log_path = Some(path);
        }
        self
    }

    /// Platform data directory, e.g. `~/.local/share/arena/logbook.json`.
    pub fn default_log_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "arena")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./arena_data"))
            .join("logbook.json")
    }

    /// The configured log path, or the platform default.
    pub fn log_path_or_default(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(Self::default_log_path)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// How a finished flow loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The player party was defeated.
    Defeat,
    /// The player quit.
    Exit,
}

/// Runs one match from its current phase to the end.
pub struct Runtime<R, N: Value = i64> {
    game: Game<R, N>,
    session: Session<N>,
    repository: Option<Box<dyn LogbookRepository<N>>>,
    turn_limit: Option<usize>,
    turns: usize,
}

impl<R, N> Runtime<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder<R, N> {
        RuntimeBuilder::new()
    }

    pub fn game(&self) -> &Game<R, N> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R, N> {
        &mut self.game
    }

    pub fn session(&self) -> &Session<N> {
        &self.session
    }

    pub fn logbook(&self) -> &Logbook<N> {
        self.session.logbook()
    }

    pub fn into_logbook(self) -> Logbook<N> {
        self.session.into_logbook()
    }

    /// Flow steps taken so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// One iteration of the flow loop.
    ///
    /// Menu, combat and victory steps log their text and return `None`;
    /// defeat logs its text and exit ends silently.
    pub fn step(&mut self) -> Result<Option<FlowOutcome>> {
        self.session.refresh(self.game.roster());

        let text = match self.game.phase() {
            Phase::Menu => self.game.do_menu(&mut self.session)?,
            Phase::Combat => self.game.do_combat(&mut self.session)?,
            Phase::Victory => self.game.do_victory(&mut self.session),
            Phase::Defeat => {
                let text = self.game.do_defeat();
                self.session.log(&text);
                return Ok(Some(FlowOutcome::Defeat));
            }
            Phase::Exit => return Ok(Some(FlowOutcome::Exit)),
        };

        self.session.log(&text);
        self.turns += 1;
        Ok(None)
    }

    /// Steps until the match ends, then saves the logbook.
    ///
    /// The logbook is saved even when the loop stops with an error.
    pub fn run(&mut self) -> Result<FlowOutcome> {
        let outcome = self.run_loop();
        self.save_logbook()?;
        outcome
    }

    fn run_loop(&mut self) -> Result<FlowOutcome> {
        let mut phase = self.game.phase();
        tracing::info!(seed = self.game.seed(), %phase, "match started");

        loop {
            if let Some(limit) = self.turn_limit
                && self.turns >= limit
            {
                tracing::warn!(turns = self.turns, "turn limit reached");
                return Err(RuntimeError::TurnLimitReached { turns: self.turns });
            }

            let span = tracing::debug_span!("step", turn = self.turns);
            let _entered = span.enter();

            if let Some(outcome) = self.step()? {
                tracing::info!(?outcome, turns = self.turns, "match finished");
                return Ok(outcome);
            }

            let next = self.game.phase();
            if next != phase {
                tracing::info!(from = %phase, to = %next, "phase changed");
                phase = next;
            }
        }
    }

    /// Writes the logbook to the configured repository, if any.
    pub fn save_logbook(&self) -> Result<()> {
        if let Some(repository) = &self.repository {
            repository.save(self.session.logbook())?;
        }
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder<R, N: Value = i64> {
    config: RuntimeConfig,
    rules: Option<R>,
    roster: Option<Roster<N>>,
    logbook: Option<Logbook<N>>,
    player_provider: Option<Box<dyn DecisionProvider<N>>>,
    npc_provider: Option<Box<dyn DecisionProvider<N>>>,
    repository: Option<Box<dyn LogbookRepository<N>>>,
}

impl<R, N> RuntimeBuilder<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rules: None,
            roster: None,
            logbook: None,
            player_provider: None,
            npc_provider: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the rule set new characters are generated with (required)
    pub fn rules(mut self, rules: R) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Start from a prepared roster instead of generating parties
    pub fn initial_roster(mut self, roster: Roster<N>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Continue an earlier logbook
    pub fn logbook(mut self, logbook: Logbook<N>) -> Self {
        self.logbook = Some(logbook);
        self
    }

    /// Set player decision provider (required)
    pub fn player_provider(mut self, provider: impl DecisionProvider<N> + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    /// Set NPC decision provider (required)
    pub fn npc_provider(mut self, provider: impl DecisionProvider<N> + 'static) -> Self {
        self.npc_provider = Some(Box::new(provider));
        self
    }

    /// Persist the logbook when the run ends
    pub fn repository(mut self, repository: impl LogbookRepository<N> + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime<R, N>> {
        let rules = self.rules.ok_or(RuntimeError::MissingRules)?;
        let player = self.player_provider.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Player,
        })?;
        let npc = self.npc_provider.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Npc,
        })?;

        let mut session = Session::new(player, npc);
        if let Some(logbook) = self.logbook {
            session = session.with_logbook(logbook);
        }

        let game = match self.roster {
            Some(roster) => Game::with_roster(self.config.game, rules, roster),
            None => Game::new(self.config.game, rules),
        };

        Ok(Runtime {
            game,
            session,
            repository: self.repository,
            turn_limit: self.config.turn_limit,
            turns: 0,
        })
    }
}
