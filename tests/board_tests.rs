//! Board tests - placement, evaluation and reset

use tictactoe::core::Board;
use tictactoe::types::{Cell, InvalidMove, Line, Player, RoundOutcome, BOARD_SIZE};

const X: Cell = Some(Player::One);
const O: Cell = Some(Player::Two);
const E: Cell = None;

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(row, col), Some(None));
            assert!(board.is_available(row, col));
        }
    }
    assert!(!board.is_full());
    assert_eq!(board.evaluate(), RoundOutcome::InProgress);
}

#[test]
fn test_every_cell_places_exactly_once() {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let mut board = Board::new();
            assert_eq!(board.place(row, col, Player::One), Ok(()));
            assert_eq!(board.get(row, col), Some(Some(Player::One)));

            for player in [Player::One, Player::Two] {
                assert_eq!(
                    board.place(row, col, player),
                    Err(InvalidMove::Occupied { row, col }),
                    "second placement on ({}, {}) should fail",
                    row,
                    col
                );
            }
            assert_eq!(board.get(row, col), Some(Some(Player::One)));
        }
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut board = Board::new();
    for (row, col) in [(3, 0), (0, 3), (3, 3), (255, 1)] {
        assert_eq!(
            board.place(row, col, Player::Two),
            Err(InvalidMove::OutOfRange { row, col })
        );
    }
    assert_eq!(board, Board::new());
    assert_eq!(board.get(3, 0), None);
}

#[test]
fn test_top_row_win() {
    let board = Board::from_rows([[X, X, X], [E, E, E], [E, E, E]]);
    assert_eq!(
        board.evaluate(),
        RoundOutcome::Win {
            player: Player::One,
            line: Line::Row(0)
        }
    );
}

#[test]
fn test_diagonal_win() {
    let board = Board::from_rows([[O, E, E], [E, O, E], [E, E, O]]);
    assert_eq!(
        board.evaluate(),
        RoundOutcome::Win {
            player: Player::Two,
            line: Line::Diagonal
        }
    );
}

#[test]
fn test_every_line_detected_for_both_players() {
    for player in [Player::One, Player::Two] {
        for line in Line::ALL {
            let mut board = Board::new();
            for (row, col) in line.cells() {
                board.place(row, col, player).unwrap();
            }
            assert_eq!(
                board.evaluate(),
                RoundOutcome::Win { player, line },
                "{:?} on {:?}",
                player,
                line
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert!(board.is_full());
    assert_eq!(board.evaluate(), RoundOutcome::Draw);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, X]]);
    assert!(board.is_full());
    assert_eq!(
        board.evaluate(),
        RoundOutcome::Win {
            player: Player::One,
            line: Line::Diagonal
        }
    );
}

#[test]
fn test_partial_board_in_progress() {
    let board = Board::from_rows([[X, O, X], [E, O, E], [E, X, E]]);
    assert_eq!(board.evaluate(), RoundOutcome::InProgress);
}

#[test]
fn test_mixed_line_is_not_a_win() {
    let board = Board::from_rows([[X, X, O], [E, E, E], [E, E, E]]);
    assert_eq!(board.evaluate(), RoundOutcome::InProgress);
}

#[test]
fn test_reset_clears_every_cell() {
    let mut board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    board.reset();
    assert_eq!(board, Board::new());
    assert!(board.cells().iter().all(|c| c.is_none()));
}
