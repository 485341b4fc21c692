//! Screen geometry shared by drawing and pointer hit-testing.
//!
//! The board is drawn as a 3x3 box grid with one-character grid lines:
//!
//! ```text
//! ┌─────┬─────┬─────┐
//! │     │     │     │   cell_w x cell_h interior per cell
//! ├─────┼─────┼─────┤
//! ...
//! └─────┴─────┴─────┘
//!  score line
//!  status / timer line
//!
//!      [ Close ]
//! ```
//!
//! The same [`BoardLayout`] decides where things are drawn and what a click
//! at a terminal coordinate hits, so the two never disagree.

use crate::types::BOARD_SIZE;

/// Rows below the board: score, status, spacer, close button.
pub const PANEL_HEIGHT: u16 = 4;

pub const CLOSE_LABEL: &str = "[ Close ]";

/// Largest cell interior height; keeps the board from growing absurdly on big terminals.
const MAX_CELL_H: u16 = 7;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell { row: u8, col: u8 },
    Close,
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub viewport: Viewport,
    /// Top-left corner of the outer border.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Cell interior size, grid lines excluded.
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Fit the largest board that leaves room for the panel.
    ///
    /// Cells are roughly twice as wide as tall to compensate for terminal
    /// glyph aspect ratio, and always at least 3x1 so a mark fits.
    pub fn fit(viewport: Viewport) -> Self {
        let n = BOARD_SIZE as u16;
        let lines = n + 1;

        let by_height = viewport
            .height
            .saturating_sub(PANEL_HEIGHT + lines)
            / n;
        let by_width = (viewport.width.saturating_sub(lines) / n).saturating_sub(1) / 2;
        let cell_h = by_height.min(by_width).clamp(1, MAX_CELL_H);
        let cell_w = cell_h * 2 + 1;

        let mut layout = Self {
            viewport,
            origin_x: 0,
            origin_y: 0,
            cell_w,
            cell_h,
        };
        let total_h = layout.frame_h() + PANEL_HEIGHT;
        layout.origin_x = viewport.width.saturating_sub(layout.frame_w()) / 2;
        layout.origin_y = viewport.height.saturating_sub(total_h) / 2;
        layout
    }

    /// Outer width including both border columns.
    pub fn frame_w(&self) -> u16 {
        BOARD_SIZE as u16 * (self.cell_w + 1) + 1
    }

    /// Outer height including both border rows.
    pub fn frame_h(&self) -> u16 {
        BOARD_SIZE as u16 * (self.cell_h + 1) + 1
    }

    /// x of the grid line left of `col` (`col == 3` is the right border).
    pub fn line_x(&self, col: u16) -> u16 {
        self.origin_x + col * (self.cell_w + 1)
    }

    /// y of the grid line above `row` (`row == 3` is the bottom border).
    pub fn line_y(&self, row: u16) -> u16 {
        self.origin_y + row * (self.cell_h + 1)
    }

    /// Interior of cell (row, col).
    pub fn cell_rect(&self, row: u8, col: u8) -> Rect {
        Rect {
            x: self.line_x(col as u16) + 1,
            y: self.line_y(row as u16) + 1,
            w: self.cell_w,
            h: self.cell_h,
        }
    }

    /// Middle of cell (row, col).
    pub fn cell_center(&self, row: u8, col: u8) -> (u16, u16) {
        let r = self.cell_rect(row, col);
        (r.x + r.w / 2, r.y + r.h / 2)
    }

    pub fn score_y(&self) -> u16 {
        self.origin_y + self.frame_h()
    }

    pub fn status_y(&self) -> u16 {
        self.score_y() + 1
    }

    pub fn close_button(&self) -> Rect {
        let w = CLOSE_LABEL.chars().count() as u16;
        Rect {
            x: self.viewport.width.saturating_sub(w) / 2,
            y: self.score_y() + PANEL_HEIGHT - 1,
            w,
            h: 1,
        }
    }

    /// Map a pointer press to a cell or the close button.
    ///
    /// Presses on grid lines or outside the board hit nothing.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        if self.close_button().contains(x, y) {
            return Some(Hit::Close);
        }
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cell_rect(row, col).contains(x, y) {
                    return Some(Hit::Cell { row, col });
                }
            }
        }
        None
    }
}
