use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::session::{RoundState, Scores};
use crate::types::{Cell, Player, RoundOutcome, BOARD_SIZE, CELL_COUNT, TURN_BUDGET_MS};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub board: [Cell; CELL_COUNT],
    pub state: RoundState,
    pub scores: Scores,
    pub round_number: u32,
    pub last_move: Option<(u8, u8)>,
    pub turn_budget_ms: u32,
}

impl SessionSnapshot {
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.board[row as usize * BOARD_SIZE as usize + col as usize]
    }

    pub fn active(&self) -> Option<Player> {
        match self.state {
            RoundState::AwaitingMove { active, .. } => Some(active),
            RoundState::RoundOver { .. } => None,
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        match self.state {
            RoundState::AwaitingMove { .. } => RoundOutcome::InProgress,
            RoundState::RoundOver { outcome, .. } => outcome,
        }
    }

    /// Whole seconds left on the active turn, rounded down.
    pub fn seconds_left(&self) -> u32 {
        match self.state {
            RoundState::AwaitingMove {
                time_remaining_ms, ..
            } => time_remaining_ms / 1000,
            RoundState::RoundOver { .. } => 0,
        }
    }

    /// Hash of what is visible on screen.
    ///
    /// The countdown only contributes whole seconds, so the fingerprint
    /// changes at most once a second while nobody moves.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.board.hash(&mut h);
        self.outcome().hash(&mut h);
        self.active().hash(&mut h);
        self.seconds_left().hash(&mut h);
        self.scores.hash(&mut h);
        self.round_number.hash(&mut h);
        self.last_move.hash(&mut h);
        h.finish()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [None; CELL_COUNT],
            state: RoundState::AwaitingMove {
                active: Player::One,
                time_remaining_ms: TURN_BUDGET_MS,
            },
            scores: Scores::default(),
            round_number: 1,
            last_move: None,
            turn_budget_ms: TURN_BUDGET_MS,
        }
    }
}
