use arena_content::SimpleRules;
use arena_core::{Character, CharacterId, Filter, GameConfig, Party, Roster, Scope, keys};
use arena_runtime::{
    FileLogbookRepository, FirstChoiceProvider, FlowOutcome, InMemoryLogbookRepository, LogEntry,
    Logbook, LogbookRepository, Runtime, RuntimeConfig, RuntimeError, ScriptedProvider,
};
use tempfile::TempDir;

fn fighter(name: &str, hp: i64, able: bool) -> Character {
    let mut character = Character::new(name);
    character.set(keys::HP_TOTAL, 10);
    character.set(keys::HP_CURRENT, hp);
    character.set(keys::INCAPACITATED, i64::from(!able));
    character.bind(
        "Attack",
        true,
        |ctx| {
            for &target in ctx.targets() {
                if let Some(foe) = ctx.character_mut(target) {
                    foe.add(keys::HP_CURRENT, -3);
                }
            }
            String::from("hit")
        },
        Scope::Enemy,
        Filter::OnlyAlive,
        vec![],
    );
    character
}

fn duel() -> Roster {
    let mut roster = Roster::new();
    roster.push(Party::from_members(vec![fighter("Ann", 10, true)]));
    roster.push(Party::from_members(vec![fighter("Bob", 9, false)]));
    roster
}

fn runtime_with(
    repository: impl LogbookRepository + 'static,
    turn_limit: Option<usize>,
) -> Runtime<SimpleRules> {
    let player = ScriptedProvider::new()
        .with_labels(["Attack", "Quit", "Yes"])
        .with_targets([Some(CharacterId::new(1, 0))]);
    Runtime::builder()
        .config(RuntimeConfig {
            game: GameConfig::with_seed(9),
            turn_limit,
            log_path: None,
        })
        .rules(SimpleRules::default())
        .initial_roster(duel())
        .player_provider(player)
        .npc_provider(FirstChoiceProvider)
        .repository(repository)
        .build()
        .expect("runtime should build")
}

#[test]
fn finished_match_is_written_to_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("matches").join("logbook.json");
    let repository = FileLogbookRepository::new(&path).expect("repository");

    let mut runtime = runtime_with(repository, None);
    assert_eq!(runtime.run().expect("match should finish"), FlowOutcome::Exit);

    let reader = FileLogbookRepository::new(&path).expect("repository");
    let saved: Logbook = reader.load().expect("load").expect("logbook saved");
    assert_eq!(&saved, runtime.logbook());

    let text = std::fs::read_to_string(&path).expect("read logbook");
    let document: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    let log = document["log"].as_array().expect("log array");
    assert_eq!(log.len(), 3);
    assert_eq!(log[0]["action"], "Attack");
    assert_eq!(log[0]["source"]["name"], "Ann");
    assert_eq!(log[0]["target"][0]["attributes"]["HP/Current"], 9);
    assert_eq!(log[1], "hit");
    assert_eq!(log[2], "Quit.");
}

#[test]
fn logbook_is_saved_when_the_limit_hits() {
    let dir = TempDir::new().expect("temp dir");
    let repository = FileLogbookRepository::in_dir(dir.path()).expect("repository");
    let path = repository.path().to_path_buf();

    let mut runtime = runtime_with(repository, Some(1));
    let error = runtime.run().expect_err("limit should stop the match");
    assert!(matches!(error, RuntimeError::TurnLimitReached { turns: 1 }));

    let saved: Logbook = FileLogbookRepository::new(&path)
        .expect("repository")
        .load()
        .expect("load")
        .expect("logbook saved");
    assert_eq!(saved.actions().collect::<Vec<_>>(), vec!["Attack"]);
}

#[test]
fn resumed_logbook_keeps_earlier_entries() {
    let mut earlier = Logbook::new();
    earlier.push_message("a new party appeared!\n");

    let mut runtime: Runtime<SimpleRules> = Runtime::builder()
        .config(RuntimeConfig {
            game: GameConfig::with_seed(9),
            ..RuntimeConfig::default()
        })
        .rules(SimpleRules::default())
        .initial_roster(duel())
        .logbook(earlier)
        .player_provider(ScriptedProvider::new().with_labels(["Quit", "Yes"]))
        .npc_provider(FirstChoiceProvider)
        .repository(InMemoryLogbookRepository::new())
        .build()
        .expect("runtime should build");

    assert_eq!(runtime.run().expect("match should finish"), FlowOutcome::Exit);

    let entries = runtime.logbook().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], LogEntry::Message(String::from("a new party appeared!\n")));
    assert_eq!(entries[1], LogEntry::Message(String::from("Quit.")));
}
