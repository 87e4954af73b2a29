//! Tests for the console game loop and replay.

use std::io::Cursor;
use tictacrl::{TictacrlConfig, play, replay};
use tictacrl_engine::{Cell, GameState, Position, Turn};

fn run(script: &str) -> (tictacrl_engine::Game, String) {
    let config = TictacrlConfig::from_toml("[display]\nshow_legend = false").unwrap();
    let mut output = Vec::new();
    let game = play(Cursor::new(script), &mut output, &config).expect("console loop");
    (game, String::from_utf8(output).unwrap())
}

fn moves(list: &[&str]) -> Vec<String> {
    list.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_play_until_x_wins() {
    let (game, output) = run("0,0\n0,1\n1,1\n1,0\n2,2\n");
    assert_eq!(game.game_state(), GameState::WinPlayerX);
    assert!(output.ends_with("\nXO_\nOX_\n__X\nPlayer X wins\n"));
}

#[test]
fn test_play_recovers_from_bad_input() {
    let (game, output) = run("hello\n5,5\n\n0,0\n0,0\n1 1\nquit\n");

    assert!(output.contains("Expected \"row,column\""));
    assert!(output.contains("Invalid board position (5, 5)"));
    assert!(output.contains("already a piece at (0, 0)"));
    assert!(output.ends_with("Game abandoned.\n"));

    let board = game.board_configuration();
    assert_eq!(board.check_cell_piece(Position::new(0, 0).unwrap()), Cell::X);
    assert_eq!(board.check_cell_piece(Position::new(1, 1).unwrap()), Cell::O);
    assert_eq!(game.turn(), Turn::PlayerX);
    assert_eq!(game.game_state(), GameState::NotOver);
}

#[test]
fn test_play_stops_at_end_of_input() {
    let (game, output) = run("1,1\n");
    assert_eq!(game.game_state(), GameState::NotOver);
    assert!(output.contains("O > "));
    assert!(output.ends_with("Game abandoned.\n"));
}

#[test]
fn test_play_ignores_input_after_game_over() {
    let (game, output) = run("0,0\n0,1\n0,2\n1,1\n1,2\n2,1\n2,2\n");
    assert_eq!(game.game_state(), GameState::WinPlayerO);
    assert_eq!(
        game.board_configuration().check_cell_piece(Position::new(2, 2).unwrap()),
        Cell::Empty
    );
    assert!(output.ends_with("Player O wins\n"));
}

#[test]
fn test_legend_is_shown_by_default() {
    let mut output = Vec::new();
    play(Cursor::new("quit\n"), &mut output, &TictacrlConfig::default()).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("00 01 02\n10 11 12\n20 21 22"));
}

#[test]
fn test_replay_draw() {
    let game = replay(&moves(&[
        "0,0", "0,1", "1,0", "2,0", "2,1", "2,2", "1,1", "1,2", "0,2",
    ]))
    .unwrap();
    assert_eq!(game.game_state(), GameState::Draw);
    assert_eq!(game.board_configuration().to_string(), "\nXOX\nXXO\nOXO\n");
}

#[test]
fn test_replay_rejects_occupied_cell() {
    let err = replay(&moves(&["0,0", "0,0"])).unwrap_err();
    assert!(err.to_string().contains("Move 2"));
}

#[test]
fn test_replay_rejects_bad_coordinate() {
    let err = replay(&moves(&["0,0", "0,3"])).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Move 2"));
    assert!(chain.contains("Invalid board position (0, 3)"));
}

#[test]
fn test_replay_ignores_moves_after_win() {
    let game = replay(&moves(&["0,0", "1,0", "0,1", "1,1", "0,2", "2,2", "nonsense"])).unwrap();
    assert_eq!(game.game_state(), GameState::WinPlayerX);
    assert_eq!(game.board_configuration().count(Cell::O), 2);
}
