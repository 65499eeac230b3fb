//! Tests for the round state machine through the public API.

use noughts_core::rules::{is_draw, winner};
use noughts_core::{BoardError, Cell, GameEngine, GameStatus, MoveError, Player, create_round};

fn play(moves: &[(usize, usize)]) -> GameEngine {
    GameEngine::replay(moves).expect("Valid move sequence")
}

#[test]
fn test_main_diagonal_win() {
    let mut round = create_round();
    let statuses: Vec<_> = [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]
        .into_iter()
        .map(|(row, col)| round.apply_move(row, col).expect("Valid move"))
        .collect();

    assert_eq!(
        statuses,
        vec![
            GameStatus::InProgress(Player::O),
            GameStatus::InProgress(Player::X),
            GameStatus::InProgress(Player::O),
            GameStatus::InProgress(Player::X),
            GameStatus::Won(Player::X),
        ]
    );
}

#[test]
fn test_row_win_with_empty_cells_left() {
    let round = play(&[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(round.status(), GameStatus::Won(Player::X));
    assert_eq!(round.board().empty_cells().count(), 4);
}

#[test]
fn test_o_can_win() {
    let round = play(&[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(round.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let round = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(round.status(), GameStatus::Draw);
    assert!(round.board().is_full());
    assert!(is_draw(round.board()));
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X O X
    // O X O
    // O X X   <- (2, 2) fills the board and completes the main diagonal
    let mut round = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
    ]);
    assert_eq!(round.status(), GameStatus::InProgress(Player::X));

    assert_eq!(round.apply_move(2, 2), Ok(GameStatus::Won(Player::X)));
    assert!(round.board().is_full());
    assert!(!is_draw(round.board()));
}

#[test]
fn test_occupied_cell_rejected() {
    let mut round = create_round();
    round.apply_move(0, 0).expect("Valid move");
    let before = round.board().snapshot();

    assert_eq!(
        round.apply_move(0, 0),
        Err(MoveError::InvalidMove(BoardError::CellOccupied { row: 0, col: 0 }))
    );
    assert_eq!(round.board().snapshot(), before);
    assert_eq!(round.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_out_of_range_rejected() {
    let mut round = create_round();

    assert_eq!(
        round.apply_move(3, 0),
        Err(MoveError::InvalidMove(BoardError::OutOfRange { row: 3, col: 0 }))
    );
    assert_eq!(round.board().snapshot(), [[Cell::Empty; 3]; 3]);
    assert_eq!(round.status(), GameStatus::InProgress(Player::X));
}

#[test]
fn test_invalid_move_error_exposes_reason() {
    use std::error::Error;

    let mut round = create_round();
    let err = round.apply_move(0, 9).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(err.source().is_some());
}

#[test]
fn test_new_round_after_finish_is_independent() {
    let finished = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(finished.is_over());

    let fresh = create_round();
    assert_eq!(fresh.status(), GameStatus::InProgress(Player::X));
    assert_eq!(fresh.board().empty_cells().count(), 9);
}

#[test]
fn test_status_serializes() {
    let json = serde_json::to_string(&GameStatus::Won(Player::O)).unwrap();
    let back: GameStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, GameStatus::Won(Player::O));
}

/// Walks every reachable round and checks the state machine at each node.
fn explore(round: &GameEngine, stats: &mut (usize, usize)) {
    let moves = round.history().len();
    let snapshot = round.board().snapshot();

    // Out-of-range and occupied moves never change anything.
    let mut probe = round.clone();
    assert!(probe.apply_move(3, 1).is_err());
    assert!(probe.apply_move(1, 3).is_err());
    if let Some(m) = round.history().last() {
        assert!(probe.apply_move(m.row, m.col).is_err());
    }
    assert_eq!(probe.board().snapshot(), snapshot);
    assert_eq!(probe.status(), round.status());

    match round.status() {
        GameStatus::InProgress(player) => {
            let expected = if moves % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(player, expected);
            assert_eq!(winner(round.board()), None);
            assert!(!round.board().is_full());

            for (row, col) in round.board().empty_cells() {
                let mut next = round.clone();
                next.apply_move(row, col).expect("Empty cell accepts a mark");
                explore(&next, stats);
            }
        }
        GameStatus::Won(player) => {
            stats.0 += 1;
            assert_eq!(winner(round.board()), Some(player));
            assert_eq!(probe.apply_move(0, 0), Err(MoveError::GameOver));
        }
        GameStatus::Draw => {
            stats.1 += 1;
            assert!(is_draw(round.board()));
            assert_eq!(probe.apply_move(0, 0), Err(MoveError::GameOver));
        }
    }
}

#[test]
fn test_every_reachable_round_is_consistent() {
    let mut stats = (0, 0);
    explore(&create_round(), &mut stats);

    let (wins, draws) = stats;
    assert_eq!(wins + draws, 255_168);
    assert_eq!(draws, 46_080);
}
