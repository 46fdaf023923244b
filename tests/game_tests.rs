//! Session tests - cursor handling, move counting, win gating, restart.

use tui_lightsout::core::{GameState, GridError};
use tui_lightsout::types::{Coord, GameAction, GameOutcome, GridConfig};

fn all_lit(rows: usize, cols: usize) -> GridConfig {
    GridConfig::new(rows, cols, 1.0)
}

#[test]
fn test_session_lifecycle() {
    let game = GameState::new(all_lit(3, 3), 42).unwrap();

    assert_eq!(game.cursor(), Coord::new(0, 0));
    assert_eq!(game.moves(), 0);
    assert_eq!(game.seed(), 42);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.grid().lit_count(), 9);
}

#[test]
fn test_invalid_config_fails_at_construction() {
    assert!(matches!(
        GameState::new(GridConfig::new(0, 3, 0.5), 1),
        Err(GridError::InvalidDimension { .. })
    ));
}

#[test]
fn test_cursor_moves_and_clamps() {
    let mut game = GameState::new(all_lit(3, 4), 1).unwrap();

    game.apply_action(GameAction::CursorDown).unwrap();
    game.apply_action(GameAction::CursorRight).unwrap();
    assert_eq!(game.cursor(), Coord::new(1, 1));

    for _ in 0..10 {
        game.apply_action(GameAction::CursorDown).unwrap();
        game.apply_action(GameAction::CursorRight).unwrap();
    }
    assert_eq!(game.cursor(), Coord::new(2, 3));

    for _ in 0..10 {
        game.apply_action(GameAction::CursorUp).unwrap();
        game.apply_action(GameAction::CursorLeft).unwrap();
    }
    assert_eq!(game.cursor(), Coord::new(0, 0));
}

#[test]
fn test_toggle_applies_at_the_cursor() {
    let mut game = GameState::new(all_lit(3, 3), 1).unwrap();
    game.apply_action(GameAction::CursorDown).unwrap();
    game.apply_action(GameAction::CursorRight).unwrap();
    game.apply_action(GameAction::Toggle).unwrap();

    // Center toggle on a fully lit 3x3 unlights the whole plus shape.
    assert_eq!(game.moves(), 1);
    assert_eq!(game.grid().lit_count(), 4);
    assert_eq!(game.grid().get(1, 1), Some(false));
    assert_eq!(game.grid().get(0, 0), Some(true));
}

#[test]
fn test_win_is_terminal_for_the_session() {
    let mut game = GameState::new(all_lit(1, 1), 1).unwrap();
    assert!(!game.won());

    game.apply_action(GameAction::Toggle).unwrap();
    assert!(game.won());
    assert_eq!(game.moves(), 1);

    // Further toggles are dropped by the session layer, not errored.
    game.apply_action(GameAction::Toggle).unwrap();
    game.toggle_at(Coord::new(0, 0)).unwrap();
    assert!(game.won());
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_toggle_at_out_of_bounds_is_an_error() {
    let mut game = GameState::new(all_lit(2, 2), 1).unwrap();
    assert!(matches!(
        game.toggle_at(Coord::new(5, 5)),
        Err(GridError::OutOfBounds { .. })
    ));
    // The failed toggle did not count as a move.
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_restart_deals_a_fresh_board() {
    let mut game = GameState::new(all_lit(2, 2), 1).unwrap();
    game.apply_action(GameAction::CursorDown).unwrap();
    game.apply_action(GameAction::Toggle).unwrap();
    assert_eq!(game.moves(), 1);

    game.apply_action(GameAction::Restart).unwrap();
    assert_eq!(game.moves(), 0);
    assert_eq!(game.cursor(), Coord::new(0, 0));
    assert_eq!(game.grid().lit_count(), 4);
}

#[test]
fn test_same_seed_reproduces_the_same_session() {
    let config = GridConfig::new(5, 5, 0.5);
    let a = GameState::new(config, 777).unwrap();
    let b = GameState::new(config, 777).unwrap();
    assert_eq!(a.grid(), b.grid());
}
