//! Board module - the 3x3 grid and its rules
//!
//! The board is a 3x3 grid where each cell is empty or marked by a player.
//! Uses a flat row-major array for zero-allocation access.
//! Coordinates: (row, col), both 0..=2, row 0 at the top.

use crate::types::{Cell, InvalidMove, Line, Player, RoundOutcome, BOARD_SIZE, CELL_COUNT};

/// The game board - 3 rows x 3 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some((row as usize) * (BOARD_SIZE as usize) + (col as usize))
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Mark (row, col) for `player`.
    ///
    /// Fails without touching the grid if the coordinates are off the board
    /// or the cell is already marked.
    pub fn place(&mut self, row: u8, col: u8, player: Player) -> Result<(), InvalidMove> {
        let idx = Self::index(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        if self.cells[idx].is_some() {
            return Err(InvalidMove::Occupied { row, col });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Check if position is within bounds and empty
    pub fn is_available(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of cells marked by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Evaluate the board.
    ///
    /// Lines are checked in `Line::ALL` order and the first complete one is
    /// reported. A board with no complete line is a draw when full.
    pub fn evaluate(&self) -> RoundOutcome {
        for line in Line::ALL {
            if let Some(player) = self.line_owner(line) {
                return RoundOutcome::Win { player, line };
            }
        }

        if self.is_full() {
            RoundOutcome::Draw
        } else {
            RoundOutcome::InProgress
        }
    }

    /// The player holding all three cells of `line`, if any.
    fn line_owner(&self, line: Line) -> Option<Player> {
        let [a, b, c] = line.cells().map(|(r, col)| self.get(r, col).flatten());
        match a {
            Some(p) if b == Some(p) && c == Some(p) => Some(p),
            _ => None,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Build a board from rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [None; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cells[r * BOARD_SIZE as usize + c] = *cell;
            }
        }
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
