//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BUTTON: Rgb = Rgb::new(200, 200, 200);
    pub const BUTTON_HOVER: Rgb = Rgb::new(170, 170, 170);
    pub const LAST_MOVE: Rgb = Rgb::new(255, 248, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub const fn with_bg(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }
}

impl Default for CellStyle {
    /// Black on white, the board's paper look.
    fn default() -> Self {
        Self::new(Rgb::BLACK, Rgb::WHITE)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Recolor a cell's foreground, keeping its glyph and background.
    pub fn tint(&mut self, x: u16, y: u16, fg: Rgb) {
        if let Some(i) = self.idx(x, y) {
            let cell = &mut self.cells[i];
            cell.style = cell.style.with_fg(fg).bold();
        }
    }

    pub fn clear(&mut self, style: CellStyle) {
        self.cells.fill(Cell { ch: ' ', style });
    }

    /// Write `s` starting at `x`, clipped at the right edge. Returns columns written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx - x
    }

    /// Write a decimal number without allocating. Returns columns written.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            self.put_char(x.saturating_add(i as u16), y, digits[len - 1 - i] as char, style);
        }
        len as u16
    }

    /// Recolor the background of a rectangle, keeping glyphs and foregrounds.
    pub fn shade_rect(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                if let Some(i) = self.idx(x.saturating_add(dx), y.saturating_add(dy)) {
                    self.cells[i].style.bg = bg;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn put_u32_writes_digits_in_order() {
        let mut fb = FrameBuffer::new(8, 1);
        let used = fb.put_u32(1, 0, 1207, CellStyle::default());
        assert_eq!(used, 4);
        assert_eq!(row(&fb, 0), " 1207   ");

        let used = fb.put_u32(6, 0, 0, CellStyle::default());
        assert_eq!(used, 1);
        assert_eq!(row(&fb, 0), " 1207 0 ");
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        assert_eq!(fb.put_str(2, 0, "abcdef", CellStyle::default()), 2);
        assert_eq!(row(&fb, 0), "  ab");
    }

    #[test]
    fn tint_keeps_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, '│', CellStyle::default());
        fb.tint(0, 0, Rgb::RED);
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, '│');
        assert_eq!(cell.style.fg, Rgb::RED);
        assert_eq!(cell.style.bg, Rgb::WHITE);
    }

    #[test]
    fn shade_rect_keeps_glyphs_and_clips() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(1, 1, 'X', CellStyle::default().with_fg(Rgb::RED));
        fb.shade_rect(1, 1, 5, 5, Rgb::LAST_MOVE);

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.style.fg, Rgb::RED);
        assert_eq!(cell.style.bg, Rgb::LAST_MOVE);
        assert_eq!(fb.get(2, 1).unwrap().style.bg, Rgb::LAST_MOVE);
        assert_eq!(fb.get(0, 1).unwrap().style.bg, Rgb::WHITE);
        assert_eq!(fb.get(1, 0).unwrap().style.bg, Rgb::WHITE);
    }
}
