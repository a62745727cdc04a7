//! Frame abstraction for drawing primitives
//!
//! An off-screen grid of character cells. Painting code writes here; the
//! runtime flushes the result to the terminal. Out-of-bounds writes are
//! clipped.
//!
//! A wide character takes two cells: the glyph itself and a [`WIDE_TAIL`]
//! cell after it that the terminal writer skips.

use crate::table::char_width;

/// Placeholder for the right half of a wide character
pub const WIDE_TAIL: char = '\0';

/// Visual role of a cell, mapped to terminal attributes by the runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Normal,
    Border,
    Header,
    Cursor,
    Status,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub fn is_wide_tail(&self) -> bool {
        self.ch == WIDE_TAIL
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::Normal,
        }
    }
}

/// Character cell buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    /// Where the terminal cursor should be shown, if anywhere
    pub caret: Option<(usize, usize)>,
}

impl Frame {
    /// Blank frame of `width` x `height` cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
            caret: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Set one cell. Overwriting either half of a wide character blanks
    /// the other half.
    pub fn put(&mut self, x: usize, y: usize, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y * self.width + x;
        if ch != WIDE_TAIL && self.cells[i].is_wide_tail() && x > 0 {
            self.cells[i - 1].ch = ' ';
        }
        if x + 1 < self.width && self.cells[i + 1].is_wide_tail() {
            self.cells[i + 1].ch = ' ';
        }
        self.cells[i] = Cell { ch, style };
    }

    /// Write `text` from (x, y) rightwards, returning the cells advanced.
    ///
    /// Zero-width characters are dropped; a wide character that would
    /// straddle the right edge is not written.
    pub fn put_str(&mut self, x: usize, y: usize, text: &str, style: Style) -> usize {
        let mut col = x;
        for ch in text.chars() {
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            if col + width > self.width {
                break;
            }
            self.put(col, y, ch, style);
            if width == 2 {
                self.put(col + 1, y, WIDE_TAIL, style);
            }
            col += width;
        }
        col - x
    }

    /// Fill a rectangle with blanks of `style`
    pub fn fill(&mut self, x: usize, y: usize, width: usize, height: usize, style: Style) {
        for row in y..(y + height).min(self.height) {
            for col in x..(x + width).min(self.width) {
                self.put(col, row, ' ', style);
            }
        }
    }

    /// Cells of one line, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Text of one line (for tests and debugging)
    pub fn row_text(&self, y: usize) -> String {
        self.row(y)
            .iter()
            .filter(|c| !c.is_wide_tail())
            .map(|c| c.ch)
            .collect()
    }
}
