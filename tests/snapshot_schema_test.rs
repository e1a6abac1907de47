//! Snapshot schema gate - pins the JSON shape external observers rely on.

use minefall::config::{BoardConfig, DuelConfig};
use minefall::core::snapshot::DuelSnapshot;
use minefall::core::Duel;
use minefall::types::{InputEvent, PlayerAction, PlayerId};

#[test]
fn board_snapshot_fields_are_stable() {
    let duel = Duel::new(DuelConfig::default()).unwrap();
    let json = serde_json::to_string(&duel.snapshot()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    let boards = v.get("boards").expect("boards field");
    assert_eq!(boards.as_array().unwrap().len(), 2);

    let board = &boards[0];
    assert_eq!(board["rows"], 12);
    assert_eq!(board["cols"], 8);
    assert_eq!(board["cells"].as_array().unwrap().len(), 96);
    assert_eq!(board["game_over"], false);

    let falling = board["falling"].as_array().unwrap();
    assert_eq!(falling.len(), 3);
    for cell in falling {
        assert!(cell.get("row").is_some());
        assert!(cell.get("col").is_some());
        let code = cell["material"].as_u64().unwrap();
        assert!((1..=5).contains(&code));
    }

    assert!(v["outcome"].is_null());
}

#[test]
fn outcome_serializes_as_snake_case() {
    let config = DuelConfig {
        board: BoardConfig {
            rows: 2,
            ..BoardConfig::default()
        },
        seeds: [5, 6],
    };
    let mut duel = Duel::new(config).unwrap();
    duel.handle_event(InputEvent::new(PlayerId::One, PlayerAction::HardDrop));

    let json = serde_json::to_string(&duel.snapshot()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["outcome"], "winner_two");
    assert_eq!(v["boards"][0]["game_over"], true);
}

#[test]
fn snapshot_round_trips_through_json() {
    let duel = Duel::new(DuelConfig::default()).unwrap();
    let snapshot = duel.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: DuelSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
