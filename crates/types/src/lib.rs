//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable from the
//! rules engine, the round controller and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! The board is a fixed 3x3 grid, rows and columns indexed 0-2, stored
//! row-major.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TURN_BUDGET_MS` | 10000 | Time each player gets per turn |
//! | `ROUND_OVER_DELAY_MS` | 4750 | Celebration window before the next round |
//! | `CONFETTI_FALL_MS` | 750 | Time for confetti to fall the height of the grid |
//!
//! # Examples
//!
//! ```
//! use tictactoe_types::{Line, Player, BOARD_SIZE};
//!
//! assert_eq!(Player::One.other(), Player::Two);
//! assert_eq!(Player::One.mark(), 'X');
//!
//! // Lines enumerate their three cells
//! assert_eq!(Line::Row(1).cells(), [(1, 0), (1, 1), (1, 2)]);
//! assert_eq!(Line::ALL.len(), 8);
//!
//! assert_eq!(BOARD_SIZE, 3);
//! ```

use thiserror::Error;

/// Board side length in cells (3 rows, 3 columns)
pub const BOARD_SIZE: u8 = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Per-turn countdown budget (10 seconds)
pub const TURN_BUDGET_MS: u32 = 10_000;

/// Time for confetti to fall the full grid height
pub const CONFETTI_FALL_MS: u32 = 750;

/// Number of fixed animation steps the confetti fall takes (0.75s at 60 FPS)
pub const CONFETTI_STEPS: u32 = 45;

/// Number of confetti pieces spawned per win
pub const CONFETTI_PIECES: usize = 100;

/// Pause after a round ends before the board is cleared.
///
/// Confetti fall plus two 2-second celebration holds.
pub const ROUND_OVER_DELAY_MS: u32 = CONFETTI_FALL_MS + 2_000 + 2_000;


/// The two players.
///
/// - **One**: red crosses, moves first every round
/// - **Two**: blue noughts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Glyph used for this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// 1-based player number, for display.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell marked by that player
pub type Cell = Option<Player>;

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Horizontal line through row 0-2
    Row(u8),
    /// Vertical line through column 0-2
    Column(u8),
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Line {
    /// Every line, in evaluation order: rows, columns, then the two diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The `(row, col)` coordinates of the three cells on this line.
    pub fn cells(self) -> [(u8, u8); 3] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::Diagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    InProgress,
    Win { player: Player, line: Line },
    Draw,
}

impl RoundOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// A placement the board refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}

/// Why the round controller rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("round is over, moves are not accepted")]
    GameAlreadyOver,
}

/// Outcome of `Session::handle_move`.
pub type MoveResult = Result<RoundOutcome, MoveRejected>;

/// Discrete input events the game loop reacts to.
///
/// Produced by the input layer from raw terminal events. Pointer coordinates
/// are terminal cells; mapping them onto the board is the view's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed at (x, y)
    PointerPressed { x: u16, y: u16 },
    /// Pointer moved or dragged to (x, y), used for hover feedback
    PointerMoved { x: u16, y: u16 },
    /// Terminal resized to width x height
    Resize { width: u16, height: u16 },
    /// Close the game
    Quit,
}

/// Invalid controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("turn budget must be greater than zero")]
    ZeroTurnBudget,
}
