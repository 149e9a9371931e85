use crate::point::Point;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// Pixels covered by one terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    /// Cell size in pixels
    pub fn new(width: f64, height: f64) -> Self {
        CellSize { width, height }
    }

    /// Pixel at the center of a cell
    pub fn to_pixel(&self, column: u16, row: u16) -> Point {
        Point::new(
            (f64::from(column) + 0.5) * self.width,
            (f64::from(row) + 0.5) * self.height,
        )
    }

    /// Cell containing a pixel, as (column, row)
    pub fn to_cell(&self, p: &Point) -> (f64, f64) {
        ((p.x / self.width).floor(), (p.y / self.height).floor())
    }

    /// Pixel extent of a block of cells
    pub fn span(&self, columns: u16, rows: u16) -> (f64, f64) {
        (
            f64::from(columns) * self.width,
            f64::from(rows) * self.height,
        )
    }
}

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Reset,
    };
}

/// Character-cell frame buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Blank canvas of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at a column and row, `None` outside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes a cell, ignoring positions outside the canvas
    pub fn plot(&mut self, x: isize, y: isize, glyph: char, color: Color) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Cell { glyph, color };
        }
    }

    /// Draws a line between two cells using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, glyph: char, color: Color) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        let (mut x0, mut y0, x1, y1) = (
            x0.round() as isize,
            y0.round() as isize,
            x1.round() as isize,
            y1.round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.plot(x0, y0, glyph, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Connects consecutive cells; a single vertex is plotted on its own
    pub fn draw_polyline(&mut self, cells: &[(f64, f64)], glyph: char, color: Color) {
        match cells {
            [] => {}
            [(x, y)] => self.plot(x.round() as isize, y.round() as isize, glyph, color),
            _ => {
                for pair in cells.windows(2) {
                    let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
                    self.draw_line(x0, y0, x1, y1, glyph, color);
                }
            }
        }
    }

    /// Writes text left to right, clipped at the right edge
    pub fn draw_text(&mut self, x: isize, y: isize, text: &str, color: Color) {
        for (i, glyph) in text.chars().enumerate() {
            self.plot(x + i as isize, y, glyph, color);
        }
    }

    /// Text of one row, for inspection
    pub fn row_text(&self, y: usize) -> String {
        self.cells[y * self.width..(y + 1) * self.width]
            .iter()
            .map(|c| c.glyph)
            .collect()
    }

    /// Queues the whole canvas to a terminal, starting at the top-left corner
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for y in 0..self.height {
            queue!(out, MoveTo(0, y as u16))?;
            let mut current = None;
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if current != Some(cell.color) {
                    queue!(out, SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                queue!(out, Print(cell.glyph))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

#[cfg(test)]
#[path = "graphics_test.rs"]
mod tests;
