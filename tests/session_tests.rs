//! Round controller tests - turns, countdown, scores and round lifecycle

use tictactoe::core::{RoundState, Scores, Session, SessionConfig};
use tictactoe::types::{
    InvalidMove, Line, MoveRejected, Player, RoundOutcome, ROUND_OVER_DELAY_MS, TICK_MS,
    TURN_BUDGET_MS,
};

fn play(session: &mut Session, moves: &[(u8, u8)]) -> RoundOutcome {
    let mut last = RoundOutcome::InProgress;
    for &(row, col) in moves {
        last = session.handle_move(row, col).unwrap();
    }
    last
}

/// Player One takes the top row; Player Two plays (1,0), (1,1).
const P1_TOP_ROW: [(u8, u8); 5] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];

/// Player Two takes the middle column.
const P2_MIDDLE_COLUMN: [(u8, u8); 6] = [(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)];

/// Fills the board with no line for anyone.
const DRAW: [(u8, u8); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_end_to_end_player_one_wins_top_row() {
    let mut s = Session::default();

    for &(row, col) in &P1_TOP_ROW[..4] {
        assert_eq!(s.handle_move(row, col), Ok(RoundOutcome::InProgress));
    }
    assert_eq!(
        s.handle_move(0, 2),
        Ok(RoundOutcome::Win {
            player: Player::One,
            line: Line::Row(0)
        })
    );
    assert_eq!(s.scores().player1, 1);
    assert_eq!(s.scores().player2, 0);
    assert!(matches!(
        s.current_state(),
        RoundState::RoundOver {
            outcome: RoundOutcome::Win {
                player: Player::One,
                line: Line::Row(0)
            },
            ..
        }
    ));
}

#[test]
fn test_players_alternate() {
    let mut s = Session::default();
    assert_eq!(s.active_player(), Some(Player::One));
    s.handle_move(1, 1).unwrap();
    assert_eq!(s.active_player(), Some(Player::Two));
    s.handle_move(0, 0).unwrap();
    assert_eq!(s.active_player(), Some(Player::One));

    assert_eq!(s.board().get(1, 1), Some(Some(Player::One)));
    assert_eq!(s.board().get(0, 0), Some(Some(Player::Two)));
}

#[test]
fn test_mark_balance_invariant() {
    let mut s = Session::default();
    for &(row, col) in &DRAW {
        s.handle_move(row, col).unwrap();
        let diff = s.board().count(Player::One) as i32 - s.board().count(Player::Two) as i32;
        assert!(diff == 0 || diff == 1, "diff {}", diff);
    }
}

#[test]
fn test_player_two_win_scores_only_player_two() {
    let mut s = Session::default();
    let outcome = play(&mut s, &P2_MIDDLE_COLUMN);
    assert_eq!(
        outcome,
        RoundOutcome::Win {
            player: Player::Two,
            line: Line::Column(1)
        }
    );
    assert_eq!(
        s.scores(),
        Scores {
            player1: 0,
            player2: 1
        }
    );
}

#[test]
fn test_draw_leaves_scores_alone() {
    let mut s = Session::default();
    assert_eq!(play(&mut s, &DRAW), RoundOutcome::Draw);
    assert_eq!(s.scores(), Scores::default());
    assert!(matches!(
        s.current_state(),
        RoundState::RoundOver {
            outcome: RoundOutcome::Draw,
            ..
        }
    ));
}

#[test]
fn test_moves_rejected_while_round_over() {
    let mut s = Session::default();
    play(&mut s, &P1_TOP_ROW);
    let board = s.board().clone();

    assert_eq!(s.handle_move(2, 2), Err(MoveRejected::GameAlreadyOver));
    assert_eq!(s.board(), &board);
    assert_eq!(s.scores().player1, 1);
}

#[test]
fn test_invalid_move_reported() {
    let mut s = Session::default();
    s.handle_move(0, 0).unwrap();
    assert_eq!(
        s.handle_move(0, 0),
        Err(MoveRejected::InvalidMove(InvalidMove::Occupied {
            row: 0,
            col: 0
        }))
    );
    // Still Player Two's turn.
    assert_eq!(s.active_player(), Some(Player::Two));
}

#[test]
fn test_round_reset_keeps_scores() {
    let mut s = Session::default();
    play(&mut s, &P1_TOP_ROW);
    s.tick(ROUND_OVER_DELAY_MS);

    assert_eq!(
        s.current_state(),
        RoundState::AwaitingMove {
            active: Player::One,
            time_remaining_ms: TURN_BUDGET_MS
        }
    );
    assert!(s.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(s.scores().player1, 1);
    assert_eq!(s.round_number(), 2);

    // Second round, Player Two wins this time.
    play(&mut s, &P2_MIDDLE_COLUMN);
    assert_eq!(
        s.scores(),
        Scores {
            player1: 1,
            player2: 1
        }
    );
}

#[test]
fn test_start_next_round_directly() {
    let mut s = Session::default();
    s.handle_move(1, 1).unwrap();
    s.tick(1_234);
    s.start_next_round();
    assert_eq!(
        s.current_state(),
        RoundState::AwaitingMove {
            active: Player::One,
            time_remaining_ms: TURN_BUDGET_MS
        }
    );
    assert_eq!(s.board().count(Player::One), 0);
}

#[test]
fn test_timer_forfeit_switches_player_without_touching_board() {
    let mut s = Session::default();
    s.handle_move(0, 0).unwrap();
    let board = s.board().clone();

    s.tick(TURN_BUDGET_MS - 1);
    assert_eq!(s.active_player(), Some(Player::Two));
    s.tick(1);
    assert_eq!(
        s.current_state(),
        RoundState::AwaitingMove {
            active: Player::One,
            time_remaining_ms: TURN_BUDGET_MS
        }
    );
    assert_eq!(s.board(), &board);
    assert_eq!(s.scores(), Scores::default());
}

#[test]
fn test_tick_split_does_not_matter() {
    let mut frame_by_frame = Session::default();
    let mut one_shot = Session::default();

    let total = 3 * TURN_BUDGET_MS + 1_000;
    let mut left = total;
    while left > 0 {
        let step = left.min(TICK_MS);
        frame_by_frame.tick(step);
        left -= step;
    }
    one_shot.tick(total);

    assert_eq!(frame_by_frame.current_state(), one_shot.current_state());
    assert_eq!(frame_by_frame.forfeits(), 3);
    assert_eq!(one_shot.forfeits(), 3);
    assert_eq!(
        one_shot.current_state(),
        RoundState::AwaitingMove {
            active: Player::Two,
            time_remaining_ms: TURN_BUDGET_MS - 1_000
        }
    );
}

#[test]
fn test_celebration_overflow_carries_into_next_round() {
    let config = SessionConfig {
        turn_budget_ms: 2_000,
        round_over_delay_ms: 1_000,
    };
    let mut s = Session::new(config).unwrap();
    play(&mut s, &P1_TOP_ROW);
    s.tick(1_500);
    assert_eq!(
        s.current_state(),
        RoundState::AwaitingMove {
            active: Player::One,
            time_remaining_ms: 1_500
        }
    );
}

#[test]
fn test_zero_delay_resets_on_next_tick() {
    let config = SessionConfig {
        turn_budget_ms: 2_000,
        round_over_delay_ms: 0,
    };
    let mut s = Session::new(config).unwrap();
    play(&mut s, &DRAW);
    assert!(s.active_player().is_none());
    s.tick(0);
    assert_eq!(s.active_player(), Some(Player::One));
}
