// File: crates/graph-core/src/canvas.rs
// Summary: Backend seam (draw-a-glyph contract) plus an in-memory canvas.

use crate::types::{StyleId, COLS, ROWS};

/// The entire rendering backend contract. The engine never performs raw I/O;
/// a curses window, an ANSI writer, or a test buffer all fit behind this.
pub trait Canvas {
    /// Current size as (rows, cols). Re-queried every frame; terminals resize.
    fn size(&self) -> (usize, usize);
    /// Put one styled glyph at a cell. Out-of-range cells must be ignored,
    /// not treated as errors.
    fn draw_char(&mut self, row: usize, col: usize, glyph: char, style: StyleId);
    /// Reset the whole canvas to blanks.
    fn clear(&mut self);
}

/// One recorded `draw_char` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOp {
    pub row: usize,
    pub col: usize,
    pub glyph: char,
    pub style: StyleId,
}

/// Headless canvas keeping a glyph/style grid and the draw-call log of the
/// current frame. The log resets on `clear`, so after a redraw it holds
/// exactly that frame's sequence; two logs comparing equal is the
/// idempotence check.
pub struct BufferCanvas {
    rows: usize,
    cols: usize,
    glyphs: Vec<char>,
    styles: Vec<StyleId>,
    ops: Vec<DrawOp>,
}

impl BufferCanvas {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            glyphs: vec![' '; rows * cols],
            styles: vec![0; rows * cols],
            ops: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn glyph_at(&self, row: usize, col: usize) -> char {
        self.glyphs[row * self.cols + col]
    }

    pub fn style_at(&self, row: usize, col: usize) -> StyleId {
        self.styles[row * self.cols + col]
    }

    /// Draw calls recorded since the last `clear`.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Render the grid as text, one line per row, right-trimmed.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.glyph_at(row, col)).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for BufferCanvas {
    /// Terminal-sized default (24x80).
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

impl Canvas for BufferCanvas {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn draw_char(&mut self, row: usize, col: usize, glyph: char, style: StyleId) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        self.glyphs[row * self.cols + col] = glyph;
        self.styles[row * self.cols + col] = style;
        self.ops.push(DrawOp { row, col, glyph, style });
    }

    fn clear(&mut self) {
        self.glyphs.fill(' ');
        self.styles.fill(0);
        self.ops.clear();
    }
}

impl std::fmt::Display for BufferCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
