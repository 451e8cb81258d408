//! Menu composition and the action resolution loop.

use std::collections::BTreeMap;

use crate::action::{ActionError, Menu, TargetSelection};
use crate::env::{Interaction, RuleSet};
use crate::error::GameError;
use crate::state::CharacterId;
use crate::stats::Value;

use super::{EngineError, Game, Phase};

/// Built-in entries every menu may carry next to character actions.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MenuCommand {
    /// `Quit/Yes`: request exit.
    Quit,
    /// `Quit/No`: change of heart, pick again.
    Stay,
    /// `Inspect`: show the actor's attributes, pick again.
    Inspect,
    /// `Fight`: bring in opposing parties.
    Fight,
}

impl MenuCommand {
    /// Where the command sits in the menu tree.
    pub const fn path(&self) -> &'static [&'static str] {
        match self {
            MenuCommand::Quit => &["Quit", "Yes"],
            MenuCommand::Stay => &["Quit", "No"],
            MenuCommand::Inspect => &["Inspect"],
            MenuCommand::Fight => &["Fight"],
        }
    }
}

/// Leaf payload of an actor's menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Command(MenuCommand),
    /// Full name of an action bound on the actor.
    Action(String),
}

/// Text of a command plus whether the actor picks again.
struct CommandOutcome {
    text: String,
    retry: bool,
}

impl<R, N> Game<R, N>
where
    R: RuleSet<N>,
    N: Value,
{
    // ========================================================================
    // Menu composition
    // ========================================================================

    /// Menu offered to `actor`: visible actions when allowed, then the
    /// commands a human gets (quit pair and inspect), then `Fight` while
    /// in the menu phase.
    pub fn menu_for(&self, actor: CharacterId, allow_character_actions: bool) -> Menu<MenuChoice> {
        let mut menu = Menu::new();

        if allow_character_actions {
            if let Some(character) = self.roster.character(actor) {
                for action in character.actions().filter(|action| action.is_visible()) {
                    menu.insert_path(
                        action.menu_path(),
                        MenuChoice::Action(action.name().to_owned()),
                    );
                }
            }
        }

        if !self.uses_ai(actor) {
            for command in [MenuCommand::Quit, MenuCommand::Stay, MenuCommand::Inspect] {
                menu.insert_path(command.path(), MenuChoice::Command(command));
            }
            if self.phase() == Phase::Menu {
                let fight = MenuCommand::Fight;
                menu.insert_path(fight.path(), MenuChoice::Command(fight));
            }
        }

        menu
    }

    // ========================================================================
    // Phase steps
    // ========================================================================

    /// One step of the menu phase: no character actions are offered.
    ///
    /// With nobody able to act the first member of the player party still
    /// gets the menu, so the player can always quit.
    pub fn do_menu(&mut self, interaction: &mut dyn Interaction<N>) -> Result<String, EngineError> {
        let actor = match self.next_character() {
            Ok(actor) => actor,
            Err(error) => self
                .roster
                .party_ids(0)
                .next()
                .ok_or(EngineError::Turn(error))?,
        };
        let menu = self.menu_for(actor, false);
        self.resolve(interaction, actor, &menu)
    }

    /// One combat turn: the next actor picks and resolves one action.
    pub fn do_combat(
        &mut self,
        interaction: &mut dyn Interaction<N>,
    ) -> Result<String, EngineError> {
        let actor = self.next_character()?;
        let menu = self.menu_for(actor, true);
        self.resolve(interaction, actor, &menu)
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Asks `actor` to pick from `menu` until something sticks.
    ///
    /// Cancelling at any level, commands that ask for a retry and
    /// recoverable action errors all loop back to the menu; recoverable
    /// errors are reported through [`Interaction::notice`] first. Each of
    /// them spends one of `config.max_retries`; once they run out the actor
    /// hesitates and the turn passes.
    pub fn resolve(
        &mut self,
        interaction: &mut dyn Interaction<N>,
        actor: CharacterId,
        menu: &Menu<MenuChoice>,
    ) -> Result<String, EngineError> {
        if menu.is_empty() {
            return Ok(self.hesitation(actor));
        }

        let mut budget = self.config.max_retries;
        while budget > 0 {
            budget -= 1;

            let roster = &self.roster;
            let picked = menu
                .navigate(
                    &mut |labels: &[String]| interaction.query(roster, actor, labels),
                    &mut budget,
                )
                .cloned();

            let Some(choice) = picked else {
                continue;
            };

            match choice {
                MenuChoice::Command(command) => {
                    let outcome = self.run_command(interaction, actor, command);
                    if !outcome.retry {
                        return Ok(outcome.text);
                    }
                    interaction.notice(&outcome.text);
                }
                MenuChoice::Action(name) => match self.commit(interaction, actor, &name) {
                    Ok(description) => return Ok(description),
                    Err(error) if error.severity().is_recoverable() => {
                        interaction.notice(&error.to_string());
                    }
                    Err(error) => return Err(error.into()),
                },
            }
        }

        Ok(self.hesitation(actor))
    }

    fn hesitation(&self, actor: CharacterId) -> String {
        let name = self
            .roster
            .character(actor)
            .map(|character| character.name().display())
            .unwrap_or_else(|| actor.to_string());
        format!("{name} hesitates.")
    }

    /// Scope → filter → (single-target choice) for `action` bound on `actor`.
    pub fn resolve_targets(
        &self,
        interaction: &mut dyn Interaction<N>,
        actor: CharacterId,
        action: &str,
    ) -> Result<Vec<CharacterId>, ActionError> {
        match self.roster.eligible_targets(actor, action)? {
            TargetSelection::All(targets) => Ok(targets),
            TargetSelection::ChooseOne(candidates) => {
                let chosen = interaction
                    .choose_target(&self.roster, actor, &candidates, self.config.target_indent)
                    .filter(|chosen| candidates.contains(chosen))
                    .ok_or(ActionError::SelectionCancelled)?;
                Ok(vec![chosen])
            }
        }
    }

    /// Targets confirmed, costs checked, observers told, effect run.
    fn commit(
        &mut self,
        interaction: &mut dyn Interaction<N>,
        actor: CharacterId,
        action: &str,
    ) -> Result<String, ActionError> {
        let targets = self.resolve_targets(interaction, actor, action)?;
        self.roster
            .character(actor)
            .ok_or(ActionError::UnknownCharacter(actor))?
            .can_afford(action)?;

        interaction.action(&self.roster, action, actor, &targets);
        self.roster.invoke(actor, action, &targets, &mut self.rng)
    }

    fn run_command(
        &mut self,
        interaction: &mut dyn Interaction<N>,
        actor: CharacterId,
        command: MenuCommand,
    ) -> CommandOutcome {
        match command {
            MenuCommand::Quit => {
                self.exit = true;
                CommandOutcome {
                    text: String::from("Quit."),
                    retry: false,
                }
            }
            MenuCommand::Stay => CommandOutcome {
                text: String::from("Scratch that."),
                retry: true,
            },
            MenuCommand::Inspect => {
                let data: BTreeMap<String, String> = self
                    .roster
                    .character(actor)
                    .map(|character| {
                        character
                            .object()
                            .evaluate()
                            .into_iter()
                            .map(|(key, value)| (key, value.to_string()))
                            .collect()
                    })
                    .unwrap_or_default();
                interaction.display("Status", &data, self.config.inspect_indent);
                CommandOutcome {
                    text: String::from("Let's see..."),
                    retry: true,
                }
            }
            MenuCommand::Fight => CommandOutcome {
                text: self.generate_parties(),
                retry: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionDescriptor, Filter, Scope};
    use crate::config::GameConfig;
    use crate::state::{Character, Party, Roster};
    use crate::stats::keys;
    use crate::testing::{Recorder, TestRules, fighter};

    const ANN: CharacterId = CharacterId::new(0, 0);
    const BOB: CharacterId = CharacterId::new(1, 0);

    fn hero() -> Character {
        let mut hero = fighter("Ann", 10);
        hero.set(keys::MP_CURRENT, 3);
        hero.bind_descriptor(
            ActionDescriptor::new("Attack", |ctx| {
                for &target in ctx.targets() {
                    if let Some(foe) = ctx.character_mut(target) {
                        foe.add(keys::HP_CURRENT, -4);
                    }
                }
                String::from("hit")
            })
            .with_scope(Scope::Enemy)
            .with_filter(Filter::OnlyAlive),
        );
        hero.bind_descriptor(
            ActionDescriptor::new("Skill/Nova", |_| String::from("boom"))
                .with_scope(Scope::Enemies)
                .with_filter(Filter::OnlyAlive)
                .with_cost(keys::MP_CURRENT, 5),
        );
        hero.bind_descriptor(
            ActionDescriptor::new("Skill/Rest", |_| String::from("rested"))
                .with_scope(Scope::SelfOnly)
                .with_filter(Filter::OnlyHealthy),
        );
        hero
    }

    fn game() -> Game<TestRules> {
        let mut roster = Roster::new();
        roster.push(Party::from_members(vec![hero()]));
        roster.push(Party::from_members(vec![fighter("Bob", 10)]));
        Game::with_roster(GameConfig::with_seed(3), TestRules, roster)
    }

    fn hp(game: &Game<TestRules>, id: CharacterId) -> i64 {
        game.roster().character(id).unwrap().get(keys::HP_CURRENT)
    }

    #[test]
    fn menu_groups_actions_and_commands() {
        let game = game();
        let menu = game.menu_for(ANN, true);
        assert_eq!(menu.labels(), vec!["Attack", "Skill", "Quit", "Inspect"]);

        let npc_menu = game.menu_for(BOB, true);
        assert!(npc_menu.is_empty());

        let quiet = game.menu_for(ANN, false);
        assert_eq!(quiet.labels(), vec!["Quit", "Inspect"]);
    }

    #[test]
    fn fight_is_offered_only_in_menu_phase() {
        let mut roster = Roster::new();
        roster.push(Party::from_members(vec![hero()]));
        let game = Game::with_roster(GameConfig::with_seed(3), TestRules, roster);

        let menu = game.menu_for(ANN, false);
        assert_eq!(menu.labels(), vec!["Quit", "Inspect", "Fight"]);
    }

    #[test]
    fn single_party_config_can_still_fight() {
        let config = GameConfig {
            parties: 1,
            ..GameConfig::with_seed(3)
        };
        let mut game = Game::new(config, TestRules);
        assert_eq!(game.roster().len(), 1);
        assert_eq!(game.phase(), Phase::Menu);

        let actor = CharacterId::new(0, 0);
        let labels = game.menu_for(actor, false).labels();
        assert!(labels.iter().any(|label| label == "Fight"));

        let out = game.do_menu(&mut Recorder::new(&["Fight"], &[])).unwrap();
        assert_eq!(out, "a new party appeared!\n");
        assert_eq!(game.roster().len(), 2);
        assert_eq!(game.phase(), Phase::Combat);
    }

    #[test]
    fn attack_picks_a_target_and_applies() {
        let mut game = game();
        let mut ui = Recorder::new(&["Attack"], &[Some(BOB)]);
        let menu = game.menu_for(ANN, true);

        let out = game.resolve(&mut ui, ANN, &menu).unwrap();

        assert_eq!(out, "hit");
        assert_eq!(hp(&game, BOB), 6);
        assert_eq!(ui.actions, vec![(String::from("Attack"), ANN, vec![BOB])]);
    }

    #[test]
    fn cancelled_target_retries_without_mutation() {
        let mut game = game();
        let mut ui = Recorder::new(&["Attack", "Attack"], &[None, Some(BOB)]);
        let menu = game.menu_for(ANN, true);

        let out = game.resolve(&mut ui, ANN, &menu).unwrap();

        assert_eq!(out, "hit");
        assert_eq!(hp(&game, BOB), 6);
        assert_eq!(ui.notices, vec!["selection cancelled"]);
    }

    #[test]
    fn unaffordable_action_is_rejected_then_retried() {
        let mut game = game();
        let mut ui = Recorder::new(&["Skill", "Nova", "Quit", "Yes"], &[]);
        let menu = game.menu_for(ANN, true);

        let out = game.resolve(&mut ui, ANN, &menu).unwrap();

        assert_eq!(out, "Quit.");
        assert_eq!(game.phase(), Phase::Exit);
        assert_eq!(hp(&game, BOB), 10);
        assert_eq!(
            game.roster().character(ANN).unwrap().get(keys::MP_CURRENT),
            3
        );
        assert!(ui.actions.is_empty());
        assert_eq!(ui.notices.len(), 1);
        assert!(ui.notices[0].starts_with("not enough MP/Current"));
    }

    #[test]
    fn self_scope_targets_exactly_the_actor() {
        let mut game = game();
        let mut ui = Recorder::new(&[], &[]);
        assert_eq!(
            game.resolve_targets(&mut ui, ANN, "Skill/Rest").unwrap(),
            vec![ANN]
        );

        game.roster_mut()
            .character_mut(ANN)
            .unwrap()
            .set(keys::HP_CURRENT, 4);
        assert!(matches!(
            game.resolve_targets(&mut ui, ANN, "Skill/Rest"),
            Err(ActionError::NoEligibleTargets { .. })
        ));
    }

    #[test]
    fn quit_no_and_inspect_ask_again() {
        let mut game = game();
        let mut ui = Recorder::new(&["Quit", "No", "Inspect", "Quit", "Yes"], &[]);
        let menu = game.menu_for(ANN, true);

        let out = game.resolve(&mut ui, ANN, &menu).unwrap();

        assert_eq!(out, "Quit.");
        assert_eq!(ui.notices, vec!["Scratch that.", "Let's see..."]);
        assert_eq!(ui.panels.len(), 1);
        let (title, data, indent) = &ui.panels[0];
        assert_eq!(title, "Status");
        assert_eq!(*indent, 30);
        assert_eq!(data[keys::HP_CURRENT], "10");
    }

    #[test]
    fn cancel_inside_group_returns_to_root() {
        let mut game = game();
        let mut ui = Recorder::new(&["Skill", "Cancel", "Attack"], &[Some(BOB)]);
        let menu = game.menu_for(ANN, true);

        assert_eq!(game.resolve(&mut ui, ANN, &menu).unwrap(), "hit");
    }

    #[test]
    fn endless_cancelling_hesitates() {
        let mut game = game();
        let mut ui = Recorder::new(&[], &[]);
        let menu = game.menu_for(ANN, true);

        assert_eq!(game.resolve(&mut ui, ANN, &menu).unwrap(), "Ann hesitates.");
        assert_eq!(game.phase(), Phase::Combat);
    }

    #[test]
    fn repeated_unaffordable_picks_pass_the_turn() {
        let mut game = game();
        let mut script = [["Skill", "Nova"]; GameConfig::DEFAULT_MAX_RETRIES].concat();
        script.extend(["Quit", "Yes"]);
        let mut ui = Recorder::new(&script, &[]);
        let menu = game.menu_for(ANN, true);

        assert_eq!(game.resolve(&mut ui, ANN, &menu).unwrap(), "Ann hesitates.");
        assert_eq!(ui.notices.len(), GameConfig::DEFAULT_MAX_RETRIES);
        assert_eq!(game.phase(), Phase::Combat);

        // The next turn still gets a working menu.
        assert_eq!(game.resolve(&mut ui, ANN, &menu).unwrap(), "Quit.");
        assert_eq!(game.phase(), Phase::Exit);
    }

    #[test]
    fn cancelling_inside_a_group_counts_against_the_retries() {
        let mut game = game();
        let script: Vec<&str> = ["Skill", "Cancel"]
            .into_iter()
            .cycle()
            .take(4 * GameConfig::DEFAULT_MAX_RETRIES)
            .collect();
        let mut ui = Recorder::new(&script, &[]);
        let menu = game.menu_for(ANN, true);

        assert_eq!(game.resolve(&mut ui, ANN, &menu).unwrap(), "Ann hesitates.");
        assert!(ui.pending() > 0);
        assert_eq!(hp(&game, BOB), 10);
    }

    #[test]
    fn unknown_action_in_menu_is_a_hard_error() {
        let mut game = game();
        let mut ui = Recorder::new(&["Dance"], &[]);
        let mut menu = Menu::new();
        menu.insert_path(&["Dance"], MenuChoice::Action(String::from("Dance")));

        assert!(matches!(
            game.resolve(&mut ui, ANN, &menu),
            Err(EngineError::Action(ActionError::UnknownAction { .. }))
        ));
    }

    #[test]
    fn empty_menu_hesitates() {
        let mut game = game();
        let mut ui = Recorder::new(&[], &[]);
        let out = game.resolve(&mut ui, BOB, &Menu::new()).unwrap();
        assert_eq!(out, "Bob hesitates.");
    }

    #[test]
    fn do_menu_fight_generates_opponents() {
        let mut roster = Roster::new();
        roster.push(Party::from_members(vec![hero()]));
        let mut game = Game::with_roster(GameConfig::with_seed(3), TestRules, roster);
        let mut ui = Recorder::new(&["Fight"], &[]);

        let out = game.do_menu(&mut ui).unwrap();

        assert_eq!(out, "a new party appeared!\n");
        assert_eq!(game.phase(), Phase::Combat);
    }
}
