//! Tests for headless play.

use tictactoe::{GameSettings, parse_moves, run_script};
use tictactoe_engine::Phase;

fn run(settings: &GameSettings, moves: &str) -> (String, tictactoe_engine::Snapshot) {
    let moves = parse_moves(moves).expect("Valid move list");
    let mut out = Vec::new();
    let snapshot = run_script(settings, &moves, &mut out).expect("Script runs");
    (String::from_utf8(out).expect("UTF-8 output"), snapshot)
}

#[test]
fn test_win_script_output() {
    let (out, snapshot) = run(&GameSettings::default(), "0,0 1,1 0,1 2,2 0,2");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "It's O's turn.",
            "It's X's turn.",
            "It's O's turn.",
            "It's X's turn.",
            "It's O's turn.",
            "Player O has won!!",
            "O|O|O",
            ".|X|.",
            ".|.|X",
        ]
    );
    assert!(matches!(snapshot.phase, Phase::Won { player: 0, .. }));
}

#[test]
fn test_draw_script_output() {
    let (out, snapshot) = run(
        &GameSettings::default(),
        "0,0 0,1 0,2 1,1 1,0 2,0 2,1 1,2 2,2",
    );
    assert!(out.contains("Game ended in a draw."));
    assert_eq!(snapshot.phase, Phase::Draw);
}

#[test]
fn test_rejected_moves_print_nothing() {
    let (out, snapshot) = run(&GameSettings::default(), "1,1 1,1 5,5");
    assert_eq!(out.lines().count(), 2 + 3);
    assert_eq!(snapshot.current_player, "X");
}
