use grid::{Command, Direction, GridError, Location};
use scenario::{ConfigurationError, ScenarioConfig};
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

const MINIMAL: &str = r#"{
    "width": 3,
    "height": 3,
    "avatar_object": "avatar",
    "objects": [{ "name": "avatar" }],
    "action_types": [{ "name": "move" }],
    "level": [{ "object": "avatar", "player": 1, "location": [1, 1] }]
}"#;

#[test]
fn parse_single_player_example() {
    let config = ScenarioConfig::from_path(scenario_path("single_player_single_action_type.json")).unwrap();
    assert_eq!((config.width, config.height), (5, 6));
    assert_eq!(config.player_count, 1);
    assert!(config.has_avatar());
    assert_eq!(config.channel_names(), ["avatar"]);
    assert_eq!(config.action_types[0].value_count(), 5);
}

#[test]
fn defaults_fill_in_missing_fields() {
    let config = ScenarioConfig::from_str(MINIMAL).unwrap();
    assert_eq!(config.player_count, 1);
    assert!(!config.multiple_actions);
    assert_eq!(config.max_steps, None);
    // Directional inputs are the default.
    assert_eq!(config.action_types[0].inputs.len(), 4);
    assert!(config.action_types[0].behaviours.is_empty());
}

#[test]
fn grid_from_coin_collector() {
    let config = ScenarioConfig::from_path(scenario_path("coin_collector.json")).unwrap();
    let grid = config.build_grid().unwrap();
    assert_eq!(grid.num_objects(), 8);
    assert_eq!(grid.object_count(0, "wall"), 4);
    let avatar = grid.avatar(2, "avatar").unwrap();
    assert_eq!(avatar.location, Location::new(4, 2));
    assert_eq!(avatar.orientation, Direction::Left);

    let rules = config.action_rules();
    assert_eq!(rules.avatar_object.as_deref(), Some("avatar"));
    assert_eq!(
        rules.action_types[0].behaviour("avatar", "coin").unwrap().commands,
        vec![Command::RemoveDestination, Command::Move, Command::Reward(1)]
    );
}

#[test]
fn zero_action_types_is_rejected() {
    let json = MINIMAL.replace(r#"[{ "name": "move" }]"#, "[]");
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::NoActionTypes)
    ));
}

#[test]
fn action_type_without_inputs_is_rejected() {
    let json = MINIMAL.replace(r#"{ "name": "move" }"#, r#"{ "name": "move", "inputs": [] }"#);
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::NoInputs(name)) if name == "move"
    ));
}

#[test]
fn degenerate_sizes_are_rejected() {
    let json = MINIMAL.replace(r#""width": 3"#, r#""width": 0"#);
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::Grid(GridError::EmptyGrid { .. }))
    ));
    let json = MINIMAL.replace(r#""height": 3,"#, r#""height": 3, "player_count": 0,"#);
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::NoPlayers)
    ));
}

#[test]
fn unknown_and_duplicate_objects_are_rejected() {
    let json = MINIMAL.replace(r#""object": "avatar""#, r#""object": "ghost""#);
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::UnknownObject { name, .. }) if name == "ghost"
    ));
    let json = MINIMAL.replace(
        r#"[{ "name": "avatar" }]"#,
        r#"[{ "name": "avatar" }, { "name": "avatar" }]"#,
    );
    assert!(matches!(
        ScenarioConfig::from_str(&json),
        Err(ConfigurationError::DuplicateObject(_))
    ));
}

#[test]
fn each_player_needs_exactly_one_avatar() {
    let json = MINIMAL.replace(r#""height": 3,"#, r#""height": 3, "player_count": 2,"#);
    let config = ScenarioConfig::from_str(&json).unwrap();
    assert!(matches!(
        config.build_grid(),
        Err(ConfigurationError::AvatarCount { player: 2, count: 0, .. })
    ));
}

#[test]
fn placements_are_checked_against_the_grid() {
    let json = MINIMAL.replace("[1, 1]", "[3, 1]");
    let config = ScenarioConfig::from_str(&json).unwrap();
    assert!(matches!(
        config.build_grid(),
        Err(ConfigurationError::Placement { source: GridError::OutOfBounds(_), .. })
    ));

    let json = MINIMAL.replace(r#""player": 1"#, r#""player": 3"#);
    let config = ScenarioConfig::from_str(&json).unwrap();
    assert!(matches!(
        config.build_grid(),
        Err(ConfigurationError::Placement { source: GridError::UnknownPlayer { .. }, .. })
    ));
}

#[test]
fn max_count_is_enforced() {
    let json = r#"{
        "width": 3,
        "height": 1,
        "objects": [{ "name": "box", "max_count": 1 }],
        "action_types": [{ "name": "push" }],
        "level": [
            { "object": "box", "player": 1, "location": [0, 0] },
            { "object": "box", "player": 1, "location": [2, 0] }
        ]
    }"#;
    let config = ScenarioConfig::from_str(json).unwrap();
    assert!(matches!(
        config.build_grid(),
        Err(ConfigurationError::MaxCountExceeded { max: 1, player: 1, .. })
    ));
}

#[test]
fn malformed_json_and_missing_file() {
    assert!(matches!(
        ScenarioConfig::from_str("{ not json"),
        Err(ConfigurationError::Parse(_))
    ));
    assert!(matches!(
        ScenarioConfig::from_path(scenario_path("does_not_exist.json")),
        Err(ConfigurationError::Io { .. })
    ));
}
