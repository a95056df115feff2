//! Tests for the game engine lifecycle.

use tictactoe_engine::{
    Cell, ConfigError, Coord, Line, MoveError, MoveOutcome, Phase, StatusMessage, TicTacToe,
};

fn started(size: usize, players: &[&str]) -> TicTacToe {
    let mut game = TicTacToe::new();
    game.start(size, players.iter().copied()).expect("Valid start");
    game
}

fn play(game: &mut TicTacToe, moves: &[(usize, usize)]) -> MoveOutcome {
    let mut last = None;
    for &(row, col) in moves {
        last = Some(game.make_move(row, col).expect("Valid move"));
    }
    last.expect("At least one move")
}

#[test]
fn test_start_gives_empty_active_board() {
    for size in 2..=6 {
        for players in [vec!["O", "X"], vec!["A", "B", "C"], vec!["1", "2", "3", "4"]] {
            let game = started(size, &players);
            assert_eq!(game.board().empty_count(), size * size);
            assert!(game.is_active());
            assert_eq!(game.current_player(), 0);
        }
    }
}

#[test]
fn test_new_engine_rejects_moves() {
    let mut game = TicTacToe::new();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.make_move(0, 0), Err(MoveError::NotStarted));
    assert_eq!(game.current_status(), None);
}

#[test]
fn test_invalid_start_rejected_and_state_kept() {
    let mut game = started(3, &["O", "X"]);
    game.make_move(1, 1).unwrap();
    let before = game.clone();

    assert_eq!(game.start(0, ["O", "X"]), Err(ConfigError::InvalidSize(0)));
    assert_eq!(game.start(3, ["O"]), Err(ConfigError::TooFewPlayers(1)));
    assert_eq!(game.start(3, Vec::<String>::new()), Err(ConfigError::TooFewPlayers(0)));
    assert_eq!(game, before);
}

#[test]
fn test_huge_board_rejected_and_state_kept() {
    let mut game = started(3, &["O", "X"]);
    let before = game.clone();

    assert_eq!(
        game.start(1 << 31, ["O", "X"]),
        Err(ConfigError::InvalidSize(1 << 31))
    );
    assert_eq!(
        game.start(usize::MAX, ["O", "X"]),
        Err(ConfigError::InvalidSize(usize::MAX))
    );
    assert_eq!(game, before);
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    let mut game = started(3, &["O", "X"]);
    game.make_move(0, 0).unwrap();
    let before = game.clone();

    assert_eq!(
        game.make_move(0, 0),
        Err(MoveError::CellOccupied(Coord::new(0, 0)))
    );
    assert!(matches!(
        game.make_move(3, 0),
        Err(MoveError::OutOfBounds { size: 3, .. })
    ));
    assert!(matches!(
        game.make_move(0, usize::MAX),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), 1);
}

#[test]
fn test_row_win_scenario() {
    let mut game = started(3, &["O", "X"]);
    let outcome = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: 0,
            line: Line::Row(0)
        }
    );
    assert_eq!(game.status_message(&outcome).to_string(), "Player O has won!!");
    assert!(!game.is_active());
    assert_eq!(game.make_move(2, 0), Err(MoveError::GameOver));
}

#[test]
fn test_column_win() {
    let mut game = started(3, &["O", "X"]);
    let outcome = play(&mut game, &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 2)]);
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: 1,
            line: Line::Column(2)
        }
    );
}

#[test]
fn test_diagonal_wins() {
    let mut game = started(3, &["O", "X"]);
    let outcome = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: 0,
            line: Line::Diagonal
        }
    );

    let mut game = started(3, &["O", "X"]);
    let outcome = play(&mut game, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: 1,
            line: Line::AntiDiagonal
        }
    );
}

#[test]
fn test_draw_scenario_is_terminal() {
    let mut game = started(3, &["O", "X"]);
    // O X O / O X X / X O O
    let outcome = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    );

    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(game.status_message(&outcome).to_string(), "Game ended in a draw.");
    assert_eq!(game.phase(), Phase::Draw);
    assert!(!game.is_active());
    assert_eq!(game.current_status(), Some(StatusMessage::Draw));
}

#[test]
fn test_turn_order_cycles_and_wraps() {
    let mut game = started(4, &["A", "B", "C"]);
    let expected = [1, 2, 0, 1, 2, 0];
    let moves = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];

    for (&(row, col), &next) in moves.iter().zip(expected.iter()) {
        let outcome = game.make_move(row, col).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue { next_player: next });
    }
    assert_eq!(
        game.current_status().map(|m| m.to_string()),
        Some("It's A's turn.".to_string())
    );
}

#[test]
fn test_single_cell_board_won_by_first_move() {
    let mut game = started(1, &["O", "X"]);
    assert_eq!(
        game.make_move(0, 0),
        Ok(MoveOutcome::Win {
            player: 0,
            line: Line::Row(0)
        })
    );
}

#[test]
fn test_reset_reuses_size_and_players() {
    let mut game = TicTacToe::new();
    assert_eq!(game.reset(), Err(ConfigError::NeverStarted));

    game.start(4, ["A", "B", "C"]).unwrap();
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);

    game.reset().unwrap();
    assert_eq!(game.size(), 4);
    assert_eq!(game.players().labels(), ["A", "B", "C"]);
    assert_eq!(game.board().empty_count(), 16);
    assert_eq!(game.current_player(), 0);
    assert!(game.is_active());
}

#[test]
fn test_restart_after_win() {
    let mut game = started(3, &["O", "X"]);
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert!(game.phase().is_terminal());

    game.reset().unwrap();
    assert!(game.is_active());
    assert_eq!(game.board().get(Coord::new(0, 0)), Some(Cell::Empty));
}

#[test]
fn test_label_at_and_snapshot() {
    let mut game = started(2, &["O", "X"]);
    game.make_move(0, 1).unwrap();

    assert_eq!(game.label_at(0, 1), Some("O"));
    assert_eq!(game.label_at(0, 0), None);
    assert_eq!(game.label_at(9, 9), None);

    let snapshot = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(snapshot["size"], 2);
    assert_eq!(snapshot["cells"][0][1], "O");
    assert!(snapshot["cells"][0][0].is_null());
    assert_eq!(snapshot["current_player"], "X");
    assert_eq!(snapshot["phase"], "InProgress");
    assert_eq!(snapshot["status"], "It's X's turn.");
}
