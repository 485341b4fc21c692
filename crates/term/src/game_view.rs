//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Confetti, SessionSnapshot, CONFETTI_X_SCALE};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{BoardLayout, Rect, Viewport, CLOSE_LABEL};
use crate::types::{Line, Player, RoundOutcome, BOARD_SIZE, CONFETTI_STEPS};

/// Cosmetic state that lives outside the session.
#[derive(Debug, Clone, Copy)]
pub struct EffectsView<'a> {
    pub confetti: &'a Confetti,
    pub close_hovered: bool,
}

/// A lightweight terminal renderer for the Tic Tac Toe board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Outline occupied cells in their owner's color.
    lighting: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { lighting: true }
    }
}

/// Text or number, so panel lines can be composed without allocating.
#[derive(Debug, Clone, Copy)]
enum Seg<'a> {
    Text(&'a str, CellStyle),
    Num(u32, CellStyle),
}

impl Seg<'_> {
    fn width(&self) -> u16 {
        match self {
            Seg::Text(s, _) => s.chars().count() as u16,
            Seg::Num(n, _) => digit_count(*n),
        }
    }
}

pub fn player_color(player: Player) -> Rgb {
    match player {
        Player::One => Rgb::RED,
        Player::Two => Rgb::BLUE,
    }
}

impl GameView {
    pub fn new(lighting: bool) -> Self {
        Self { lighting }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_effects(snap, None, viewport, fb);
    }

    pub fn render_into_with_effects(
        &self,
        snap: &SessionSnapshot,
        effects: Option<&EffectsView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let layout = BoardLayout::fit(viewport);

        self.draw_grid(fb, &layout);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(player) = snap.cell(row, col) {
                    let rect = layout.cell_rect(row, col);
                    match player {
                        Player::One => self.draw_cross(fb, rect),
                        Player::Two => self.draw_nought(fb, rect),
                    }
                    if self.lighting {
                        self.light_cell(fb, &layout, row, col, player_color(player));
                    }
                }
            }
        }

        // Most recent placement gets a pale background.
        if let Some((row, col)) = snap.last_move {
            let r = layout.cell_rect(row, col);
            fb.shade_rect(r.x, r.y, r.w, r.h, Rgb::LAST_MOVE);
        }

        if let RoundOutcome::Win { player, line } = snap.outcome() {
            self.draw_win_line(fb, &layout, line, player);
        }

        let close_hovered = effects.map(|e| e.close_hovered).unwrap_or(false);
        self.draw_panel(fb, &layout, snap, close_hovered);

        if let Some(effects) = effects {
            self.draw_confetti(fb, &layout, effects.confetti);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_effects(
        &self,
        snap: &SessionSnapshot,
        effects: &EffectsView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_effects(snap, Some(effects), viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle::default().bold();
        let n = BOARD_SIZE as u16;
        let (x0, y0) = (layout.origin_x, layout.origin_y);
        let (w, h) = (layout.frame_w(), layout.frame_h());

        for r in 0..=n {
            let y = layout.line_y(r);
            for x in x0..x0 + w {
                fb.put_char(x, y, '─', style);
            }
        }
        for c in 0..=n {
            let x = layout.line_x(c);
            for y in y0..y0 + h {
                fb.put_char(x, y, '│', style);
            }
        }
        for r in 0..=n {
            for c in 0..=n {
                fb.put_char(layout.line_x(c), layout.line_y(r), junction(r, c, n), style);
            }
        }
    }

    /// Two strokes corner to corner, inset one column from the grid lines.
    fn draw_cross(&self, fb: &mut FrameBuffer, rect: Rect) {
        let style = CellStyle::default().with_fg(Rgb::RED).bold();
        if rect.h <= 1 {
            fb.put_char(rect.x + rect.w / 2, rect.y, Player::One.mark(), style);
            return;
        }

        let (ix, iw) = inset(rect);
        for dy in 0..rect.h {
            let off = dy * (iw - 1) / (rect.h - 1);
            let a = ix + off;
            let b = ix + iw - 1 - off;
            if a == b {
                fb.put_char(a, rect.y + dy, '╳', style);
            } else {
                fb.put_char(a, rect.y + dy, '╲', style);
                fb.put_char(b, rect.y + dy, '╱', style);
            }
        }
    }

    /// A rounded ring filling the cell height.
    fn draw_nought(&self, fb: &mut FrameBuffer, rect: Rect) {
        let style = CellStyle::default().with_fg(Rgb::BLUE).bold();
        if rect.h <= 1 {
            fb.put_char(rect.x + rect.w / 2, rect.y, Player::Two.mark(), style);
            return;
        }

        let (ix, iw) = inset(rect);
        let right = ix + iw - 1;
        let bottom = rect.y + rect.h - 1;
        for x in ix + 1..right {
            fb.put_char(x, rect.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in rect.y + 1..bottom {
            fb.put_char(ix, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(ix, rect.y, '╭', style);
        fb.put_char(right, rect.y, '╮', style);
        fb.put_char(ix, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
    }

    /// Recolor the four grid segments around a cell.
    fn light_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, row: u8, col: u8, color: Rgb) {
        let (r, c) = (row as u16, col as u16);
        let (left, right) = (layout.line_x(c), layout.line_x(c + 1));
        let (top, bottom) = (layout.line_y(r), layout.line_y(r + 1));
        for x in left..=right {
            fb.tint(x, top, color);
            fb.tint(x, bottom, color);
        }
        for y in top..=bottom {
            fb.tint(left, y, color);
            fb.tint(right, y, color);
        }
    }

    fn draw_win_line(&self, fb: &mut FrameBuffer, layout: &BoardLayout, line: Line, winner: Player) {
        let style = CellStyle::default().with_fg(player_color(winner)).bold();
        let left = layout.origin_x + 1;
        let top = layout.origin_y + 1;
        let right = layout.origin_x + layout.frame_w() - 2;
        let bottom = layout.origin_y + layout.frame_h() - 2;

        let (from, to, glyph) = match line {
            Line::Row(r) => {
                let (_, y) = layout.cell_center(r, 0);
                ((left, y), (right, y), '━')
            }
            Line::Column(c) => {
                let (x, _) = layout.cell_center(0, c);
                ((x, top), (x, bottom), '┃')
            }
            Line::Diagonal => ((left, top), (right, bottom), '╲'),
            Line::AntiDiagonal => ((right, top), (left, bottom), '╱'),
        };

        let (x0, y0) = (from.0 as i32, from.1 as i32);
        let (dx, dy) = (to.0 as i32 - x0, to.1 as i32 - y0);
        let steps = dx.abs().max(dy.abs()).max(1);
        for i in 0..=steps {
            let x = x0 + dx * i / steps;
            let y = y0 + dy * i / steps;
            fb.put_char(x as u16, y as u16, glyph, style);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        snap: &SessionSnapshot,
        close_hovered: bool,
    ) {
        let text = CellStyle::default();
        let red = text.with_fg(Rgb::RED).bold();
        let blue = text.with_fg(Rgb::BLUE).bold();
        let width = layout.viewport.width;

        let (p1, p2) = (snap.scores.player1, snap.scores.player2);
        let long = [
            Seg::Text("Player 1 (Red Crosses): ", red),
            Seg::Num(p1, text),
            Seg::Text(" | ", text),
            Seg::Text("Player 2 (Blue Noughts): ", blue),
            Seg::Num(p2, text),
        ];
        let short = [
            Seg::Text("X: ", red),
            Seg::Num(p1, text),
            Seg::Text(" | ", text),
            Seg::Text("O: ", blue),
            Seg::Num(p2, text),
        ];
        let score: &[Seg<'_>] = if segments_width(&long) <= width {
            &long
        } else {
            &short
        };
        put_segments_centered(fb, width, layout.score_y(), score);

        let status_y = layout.status_y();
        match snap.outcome() {
            RoundOutcome::InProgress => {
                if let Some(active) = snap.active() {
                    let who = if active == Player::One { red } else { blue };
                    let label = if active == Player::One {
                        "Player 1 (X)"
                    } else {
                        "Player 2 (O)"
                    };
                    put_segments_centered(
                        fb,
                        width,
                        status_y,
                        &[
                            Seg::Text(label, who),
                            Seg::Text("  Time Left: ", text),
                            Seg::Num(snap.seconds_left(), text),
                            Seg::Text(" seconds", text),
                        ],
                    );
                }
            }
            RoundOutcome::Win { player, .. } => {
                let style = if player == Player::One { red } else { blue };
                put_segments_centered(
                    fb,
                    width,
                    status_y,
                    &[
                        Seg::Text("Player ", style),
                        Seg::Num(player.number() as u32, style),
                        Seg::Text(" wins!", style),
                    ],
                );
            }
            RoundOutcome::Draw => {
                put_segments_centered(fb, width, status_y, &[Seg::Text("Draw!", text.bold())]);
            }
        }

        let button = layout.close_button();
        let bg = if close_hovered {
            Rgb::BUTTON_HOVER
        } else {
            Rgb::BUTTON
        };
        fb.put_str(button.x, button.y, CLOSE_LABEL, text.with_bg(bg));
    }

    /// Pieces start on the top border and come to rest on the bottom one.
    fn draw_confetti(&self, fb: &mut FrameBuffer, layout: &BoardLayout, confetti: &Confetti) {
        let Some(color) = confetti.color() else {
            return;
        };
        let style = CellStyle::default().with_fg(player_color(color));
        let span_x = layout.viewport.width.saturating_sub(1) as u32;
        let fall = (layout.frame_h() as u32 - 1) * confetti.step() / CONFETTI_STEPS;
        let y = layout.origin_y as u32 + fall;
        if y >= layout.viewport.height as u32 {
            return;
        }

        for &px in confetti.pieces() {
            let x = px as u32 * span_x / CONFETTI_X_SCALE as u32;
            fb.put_char(x as u16, y as u16, '■', style);
        }
    }
}

/// Box-drawing glyph where grid lines `r` and `c` cross on an `n`x`n` grid.
fn junction(r: u16, c: u16, n: u16) -> char {
    match (r == 0, r == n, c == 0, c == n) {
        (true, _, true, _) => '┌',
        (true, _, _, true) => '┐',
        (true, _, _, _) => '┬',
        (_, true, true, _) => '└',
        (_, true, _, true) => '┘',
        (_, true, _, _) => '┴',
        (_, _, true, _) => '├',
        (_, _, _, true) => '┤',
        _ => '┼',
    }
}

/// Horizontal interior used for marks: one column of air on each side when it fits.
fn inset(rect: Rect) -> (u16, u16) {
    if rect.w >= 5 {
        (rect.x + 1, rect.w - 2)
    } else {
        (rect.x, rect.w)
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

fn segments_width(segs: &[Seg<'_>]) -> u16 {
    segs.iter().map(Seg::width).sum()
}

fn put_segments_centered(fb: &mut FrameBuffer, width: u16, y: u16, segs: &[Seg<'_>]) {
    let mut x = width.saturating_sub(segments_width(segs)) / 2;
    for seg in segs {
        x = x.saturating_add(match *seg {
            Seg::Text(s, style) => fb.put_str(x, y, s, style),
            Seg::Num(n, style) => fb.put_u32(x, y, n, style),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junction_glyphs() {
        assert_eq!(junction(0, 0, 3), '┌');
        assert_eq!(junction(0, 3, 3), '┐');
        assert_eq!(junction(0, 1, 3), '┬');
        assert_eq!(junction(3, 0, 3), '└');
        assert_eq!(junction(3, 3, 3), '┘');
        assert_eq!(junction(3, 2, 3), '┴');
        assert_eq!(junction(1, 0, 3), '├');
        assert_eq!(junction(2, 3, 3), '┤');
        assert_eq!(junction(1, 2, 3), '┼');
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }
}
