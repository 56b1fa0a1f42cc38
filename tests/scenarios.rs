//! End-to-end games driven by scripted commands

use spaceship_survival::config::PlacementQuotas;
use spaceship_survival::entities::{Entity, WeaponKind};
use spaceship_survival::game::{MessageCategory, ScriptedCommands};
use spaceship_survival::world::{Direction, RoomId};
use spaceship_survival::{ConfigError, Game, GameConfig, GameState};

fn map(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.chars().collect()).collect()
}

fn game(rows: &[&str]) -> Game {
    Game::from_map(&map(rows), &GameConfig::default()).expect("valid map")
}

fn game_with(rows: &[&str], config: &GameConfig) -> Game {
    Game::from_map(&map(rows), config).expect("valid map")
}

#[test]
fn alien_encounter_fires_before_next_command() {
    let mut game = game(&["+.#."]);
    assert_eq!(game.player().health(), 10);
    assert_eq!(
        game.player().weapon().map(|w| w.kind()),
        Some(WeaponKind::Knife)
    );

    let mut script = ScriptedCommands::from_keys("ee");
    game.play_turn(&mut script);
    game.play_turn(&mut script);
    assert_eq!(game.grid().id_to_xy(game.player().room()), (2, 0));
    assert!(game.grid().room(game.player().room()).entity().unwrap().is_alien());

    // third turn: the alien strikes before any command is read
    let mut script = ScriptedCommands::from_keys("x");
    game.play_turn(&mut script);
    assert_eq!(game.player().health(), 5);
    let first = &script.seen()[0];
    assert_eq!(first.category, MessageCategory::Combat);
    assert!(first.text.contains("lashes out"));
    assert_eq!(script.seen_before_command(0), Some(script.seen().len()));
}

#[test]
fn knife_cannot_kill_the_alien() {
    let mut game = game(&["+#"]);
    let outcome = game.run(&mut ScriptedCommands::from_keys("efffff"));
    assert_eq!(outcome.state, GameState::PlayerDead);
    // arrive (5 damage), stab uselessly, second strike kills
    assert_eq!(outcome.turns, 3);
    assert!(game
        .messages()
        .iter()
        .any(|m| m.text == "Your knife barely scratches the alien!"));
}

#[test]
fn gun_kills_the_alien() {
    let mut game = game(&["+>#"]);
    let outcome = game.run(&mut ScriptedCommands::from_keys("eefq"));
    assert_eq!(outcome.state, GameState::AlienDefeated);
    assert_eq!(outcome.turns, 3);
    assert_eq!(outcome.health, 5);

    let alien_room = game.grid().room(RoomId(2));
    assert!(alien_room.entity().is_none());
    assert_eq!(game.player().weapon().and_then(|w| w.ammo()), Some(2));
}

#[test]
fn repeated_knife_attacks_never_win() {
    let mut config = GameConfig::default();
    config.player.health = 100;
    let mut game = game_with(&["+#"], &config);
    let outcome = game.run(&mut ScriptedCommands::from_keys("effffffffff"));
    assert_eq!(outcome.state, GameState::Quit);
    assert_eq!(game.player().health(), 45);
    assert!(game.grid().room(RoomId(1)).entity().unwrap().is_alien());
}

#[test]
fn empty_gun_cannot_win() {
    let mut config = GameConfig::default();
    config.weapons.gun.ammo = Some(0);
    config.player.health = 100;
    let mut game = game_with(&["+>#"], &config);
    let outcome = game.run(&mut ScriptedCommands::from_keys("eeffff"));
    assert_eq!(outcome.state, GameState::Quit);
    assert!(game
        .messages()
        .iter()
        .any(|m| m.text == "Click. Your gun is out of ammo!"));
}

#[test]
fn ammo_reloads_an_empty_gun() {
    let mut config = GameConfig::default();
    config.weapons.gun.ammo = Some(0);
    let mut game = game_with(&["+>?#"], &config);
    let outcome = game.run(&mut ScriptedCommands::from_keys("eeef"));
    assert_eq!(outcome.state, GameState::AlienDefeated);
}

#[test]
fn hazard_damage_accumulates_per_turn() {
    // damage 5, health 10: dead on the second turn spent in the room
    let mut game = game(&["+@"]);
    let mut script = ScriptedCommands::from_keys("exxx");

    assert_eq!(game.play_turn(&mut script), GameState::Ongoing);
    assert_eq!(game.player().health(), 10);
    assert_eq!(game.play_turn(&mut script), GameState::Ongoing);
    assert_eq!(game.player().health(), 5);
    assert_eq!(game.play_turn(&mut script), GameState::PlayerDead);
    assert_eq!(game.player().health(), 0);
    assert_eq!(game.turn(), 3);
    assert_eq!(script.remaining(), 2);
}

#[test]
fn idling_costs_exactly_turns_times_damage() {
    let mut config = GameConfig::default();
    config.player.health = 30;
    config.hazards.exposed_wires.damage = 3;
    let mut game = game_with(&["+@"], &config);

    let mut script = ScriptedCommands::from_keys("exxxxxxxxxxxxx");
    game.play_turn(&mut script);
    for t in 1..=9 {
        assert_eq!(game.play_turn(&mut script), GameState::Ongoing);
        assert_eq!(game.player().health(), 30 - 3 * t);
    }
    assert_eq!(game.play_turn(&mut script), GameState::PlayerDead);
    assert_eq!(game.player().health(), 0);
}

#[test]
fn death_waits_for_the_threshold() {
    let mut config = GameConfig::default();
    config.placement = PlacementQuotas {
        exposed_wires: 0,
        ..PlacementQuotas::default()
    };
    // every hazard is low oxygen (4 damage): 10 -> 6 -> 2 -> dead
    let mut game = game_with(&["+@"], &config);
    let outcome = game.run(&mut ScriptedCommands::from_keys("ehhhhh"));
    assert_eq!(outcome.state, GameState::PlayerDead);
    assert_eq!(outcome.turns, 4);
    assert_eq!(
        game.messages()
            .iter()
            .filter(|m| m.category == MessageCategory::Hazard)
            .count(),
        3
    );
}

#[test]
fn moving_into_a_wall_changes_nothing() {
    let mut game = game(&["+.", ".."]);
    let start = game.player().room();
    let mut script = ScriptedCommands::from_keys("nw");
    game.play_turn(&mut script);
    game.play_turn(&mut script);

    assert_eq!(game.player().room(), start);
    assert_eq!(game.grid().occupied_rooms(), vec![start]);
    assert_eq!(game.state(), GameState::Ongoing);
}

#[test]
fn north_then_south_round_trip() {
    let mut game = game(&[".", ".", ".", "+"]);
    let start = game.player().room();
    let mut script = ScriptedCommands::from_keys("nnnsss");
    for _ in 0..3 {
        game.play_turn(&mut script);
    }
    assert_eq!(game.grid().id_to_xy(game.player().room()), (0, 0));
    for _ in 0..3 {
        game.play_turn(&mut script);
    }
    assert_eq!(game.player().room(), start);
    assert_eq!(game.grid().occupied_rooms(), vec![start]);
    assert_eq!(
        game.grid().room(start).occupant(),
        Some(game.player().id())
    );
}

#[test]
fn every_move_keeps_one_occupant() {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    let mut script = ScriptedCommands::from_keys("wwswnneeessswwq");
    while !game.state().is_terminal() {
        game.play_turn(&mut script);
        let occupied = game.grid().occupied_rooms();
        assert_eq!(occupied, vec![game.player().room()]);
    }
}

#[test]
fn survivors_are_counted() {
    let mut game = game(&["+!>#"]);
    let outcome = game.run(&mut ScriptedCommands::from_keys("eeef"));
    assert_eq!(outcome.state, GameState::AlienDefeated);
    assert_eq!(outcome.survivors_rescued, 1);
}

#[test]
fn weapon_pickup_replaces_knife() {
    let mut game = game(&["+>>"]);
    let mut script = ScriptedCommands::from_keys("eex");
    for _ in 0..3 {
        game.play_turn(&mut script);
    }
    assert_eq!(
        game.player().weapon().map(|w| w.kind()),
        Some(WeaponKind::Gun)
    );
    assert!(game
        .messages()
        .iter()
        .any(|m| m.text == "You picked up a gun and dropped your knife."));
    assert!(game.grid().rooms().all(|(_, room)| !matches!(room.entity(), Some(Entity::Weapon(_)))));
}

#[test]
fn default_ship_is_playable() {
    let game = Game::new(&GameConfig::default()).unwrap();
    assert_eq!(game.grid().width(), 6);
    assert_eq!(game.grid().height(), 5);
    assert_eq!(game.grid().id_to_xy(game.player().room()), (3, 0));
    let start = game.grid().room(game.player().room());
    assert!(start.neighbor(Direction::North).is_none());
    assert!(start.neighbor(Direction::South).is_some());
}

#[test]
fn bad_layouts_are_rejected() {
    let mut config = GameConfig::default();
    config.layout = vec![];
    assert!(matches!(Game::new(&config), Err(ConfigError::EmptyMap)));

    config.layout = vec!["+..".into(), "...".into(), ".".into()];
    assert!(matches!(
        Game::new(&config),
        Err(ConfigError::RaggedMap { row: 2, .. })
    ));

    config.layout = vec!["...".into()];
    assert!(matches!(
        Game::new(&config),
        Err(ConfigError::MissingPlayerStart)
    ));
}

#[test]
fn bad_entity_parameters_are_rejected() {
    let mut config = GameConfig::default();
    config.weapons.flamethrower.power = 0;
    assert!(matches!(
        Game::new(&config),
        Err(ConfigError::InvalidEntity { .. })
    ));
}

#[test]
fn huge_medkit_on_a_huge_player_does_not_overflow() {
    let mut config = GameConfig::default();
    config.player.health = i32::MAX;
    config.treasures.medkit.amount = u32::MAX;
    config.placement = PlacementQuotas {
        ammo: 0,
        ..PlacementQuotas::default()
    };
    let mut game = game_with(&["+@?"], &config);
    let outcome = game.run(&mut ScriptedCommands::from_keys("eexq"));
    assert_eq!(outcome.state, GameState::Quit);
    assert_eq!(outcome.health, i32::MAX);
    assert!(game
        .messages()
        .iter()
        .any(|m| m.text == "You used a medkit and restored 5 health."));
}
