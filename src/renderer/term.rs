//! Terminal render sink
//!
//! Rasterizes the draw primitives into a character-cell back buffer and
//! presents it with queued crossterm commands. Field space is projected onto
//! the cell grid, so the court fills whatever terminal it is given; the
//! uneven cell aspect is absorbed by the per-axis scale factors.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetForegroundColor},
};

use super::{RenderSink, Rgb};

const BLOCK: char = '\u{2588}';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Rgb(0, 0, 0),
};

/// A [`RenderSink`] over a terminal of `cols` x `rows` character cells.
pub struct TermSink {
    cols: u16,
    rows: u16,
    field_width: f32,
    field_height: f32,
    cells: Vec<Cell>,
}

impl TermSink {
    pub fn new(cols: u16, rows: u16, field_width: f32, field_height: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            field_width,
            field_height,
            cells: vec![BLANK; cols.max(1) as usize * rows.max(1) as usize],
        }
    }

    /// Adopt a new terminal size, keeping the field projection.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![BLANK; self.cols as usize * self.rows as usize];
    }

    /// Field units per cell column
    fn scale_x(&self) -> f32 {
        self.field_width / self.cols as f32
    }

    /// Field units per cell row
    fn scale_y(&self) -> f32 {
        self.field_height / self.rows as f32
    }

    fn col_of(&self, x: f32) -> i32 {
        (x / self.scale_x()).floor() as i32
    }

    fn row_of(&self, y: f32) -> i32 {
        (y / self.scale_y()).floor() as i32
    }

    /// Map a terminal row back to the field y of its center; the front end
    /// uses this to turn mouse rows into pointer samples.
    pub fn field_y(&self, row: u16) -> f32 {
        (row as f32 + 0.5) * self.scale_y()
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = cell;
    }

    /// Flush the back buffer to the terminal.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        let mut active: Option<Rgb> = None;
        for row in 0..self.rows {
            queue!(out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.ch != ' ' && active != Some(cell.color) {
                    let Rgb(r, g, b) = cell.color;
                    queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                    active = Some(cell.color);
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        out.flush()
    }
}

impl RenderSink for TermSink {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        // Thin features still land on at least one cell
        let c0 = self.col_of(x);
        let c1 = self.col_of(x + w).max(c0 + 1);
        let r0 = self.row_of(y);
        let r1 = self.row_of(y + h).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, Cell { ch: BLOCK, color });
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        let c0 = self.col_of(cx - r);
        let c1 = self.col_of(cx + r).max(c0 + 1);
        let r0 = self.row_of(cy - r);
        let r1 = self.row_of(cy + r).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                // Cell center distance test in field space
                let x = (col as f32 + 0.5) * self.scale_x();
                let y = (row as f32 + 0.5) * self.scale_y();
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r * r {
                    self.put(col, row, Cell { ch: BLOCK, color });
                }
            }
        }
        // A very coarse grid can miss every cell center; keep the ball visible
        self.put(self.col_of(cx), self.row_of(cy), Cell { ch: BLOCK, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb, _size_px: f32) {
        let row = self.row_of(y);
        let col = self.col_of(x);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, Cell { ch, color });
        }
    }
}
