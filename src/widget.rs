use crate::graphics::{Canvas, CellSize};
use crate::math::{Mode, Viewport};
use crate::point::Point;
use crate::state::AppState;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::style::Color;
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Rows below the plot reserved for the report and the status line
pub const INFO_ROWS: u16 = 6;

/// Grid spacing in pixels
pub const GRID_STEP: f64 = 40.0;

/// Two presses on the same cell within this window form a double click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

const IDLE_POLL: Duration = Duration::from_millis(250);

const GRID_GLYPH: char = '·';
const CURVE_GLYPH: char = '•';
const CIRCLE_GLYPH: char = '∘';
const POINT_GLYPH: char = '●';
const NEAREST_GLYPH: char = '◉';

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A left press waiting to see whether a second one follows
#[derive(Debug, Clone, Copy)]
struct PendingClick {
    column: u16,
    row: u16,
    at: Instant,
}

/// Terminal plot widget
pub struct PlotWidget {
    cell: CellSize,
    /// Removal radius in pixels
    threshold: f64,
    columns: u16,
    rows: u16,
    pending_click: Option<PendingClick>,
    dirty: bool,
}

impl PlotWidget {
    pub fn new(cell: CellSize, threshold: f64, columns: u16, rows: u16) -> Self {
        PlotWidget {
            cell,
            threshold,
            columns,
            rows,
            pending_click: None,
            dirty: true,
        }
    }

    /// Rows available to the plot itself
    pub fn plot_rows(&self) -> u16 {
        self.rows.saturating_sub(INFO_ROWS)
    }

    /// Plot area in pixels
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.cell.span(self.columns, self.plot_rows());
        Viewport::new(width, height)
    }

    pub fn needs_paint(&self) -> bool {
        self.dirty
    }

    /// How long the event loop may block before [`PlotWidget::tick`] is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.pending_click {
            Some(pending) => DOUBLE_CLICK_WINDOW.saturating_sub(now.duration_since(pending.at)),
            None => IDLE_POLL,
        }
    }

    /// Turns a pending click into a point once the double-click window passed
    pub fn tick(&mut self, data: &mut AppState, now: Instant) {
        if let Some(pending) = self.pending_click {
            if now.duration_since(pending.at) >= DOUBLE_CLICK_WINDOW {
                self.pending_click = None;
                self.commit_click(pending, data);
            }
        }
    }

    /// One pass of the event loop: due pending clicks are committed before the
    /// event, if any, is handled
    pub fn step(&mut self, event: Option<&Event>, data: &mut AppState, now: Instant) -> Flow {
        self.tick(data, now);
        match event {
            Some(event) => self.event(event, data, now),
            None => Flow::Continue,
        }
    }

    /// Handle a terminal event
    pub fn event(&mut self, event: &Event, data: &mut AppState, now: Instant) -> Flow {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.flush_pending(data);
                return self.key(key, data);
            }
            Event::Mouse(mouse) => self.mouse(mouse, data, now),
            Event::Resize(columns, rows) => {
                self.columns = *columns;
                self.rows = *rows;
                let viewport = self.viewport();
                if let Err(err) = data.on_viewport_resize(viewport.width, viewport.height) {
                    warn!("{err}");
                }
                self.dirty = true;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn key(&mut self, key: &KeyEvent, data: &mut AppState) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('m' | 'M') => {
                data.toggle_mode();
            }
            KeyCode::Char('c' | 'C') => data.clear_all(),
            KeyCode::Char('o' | 'O') => {
                data.toggle_circles();
            }
            _ => return Flow::Continue,
        }
        self.dirty = true;
        Flow::Continue
    }

    fn mouse(&mut self, mouse: &MouseEvent, data: &mut AppState, now: Instant) {
        if mouse.row >= self.plot_rows() {
            return;
        }
        let p = self.cell.to_pixel(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Err(err) = data.pointer_moved(p.x, p.y) {
                    warn!("{err}");
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pending) = self.pending_click.take() {
                    let same_cell = pending.column == mouse.column && pending.row == mouse.row;
                    if same_cell && now.duration_since(pending.at) <= DOUBLE_CLICK_WINDOW {
                        debug!("double click at cell ({}, {})", mouse.column, mouse.row);
                        if let Err(err) = data.remove_nearest_at(p.x, p.y, self.threshold) {
                            warn!("{err}");
                        }
                        self.dirty = true;
                        return;
                    }
                    self.commit_click(pending, data);
                }
                self.pending_click = Some(PendingClick {
                    column: mouse.column,
                    row: mouse.row,
                    at: now,
                });
                return;
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if let Err(err) = data.remove_nearest_at(p.x, p.y, self.threshold) {
                    warn!("{err}");
                }
            }
            _ => return,
        }
        self.dirty = true;
    }

    fn flush_pending(&mut self, data: &mut AppState) {
        if let Some(pending) = self.pending_click.take() {
            self.commit_click(pending, data);
        }
    }

    fn commit_click(&mut self, pending: PendingClick, data: &mut AppState) {
        let p = self.cell.to_pixel(pending.column, pending.row);
        if let Err(err) = data.add_point_at(p.x, p.y) {
            warn!("{err}");
        }
        self.dirty = true;
    }

    /// Renders the full frame
    pub fn paint(&mut self, data: &mut AppState) -> Canvas {
        self.dirty = false;
        let mut canvas = Canvas::new(usize::from(self.columns), usize::from(self.rows));
        match data.mode() {
            Mode::Euclidean => self.draw_euclid(&mut canvas, data),
            Mode::Minkowski => self.draw_minkowski(&mut canvas, data),
        }
        self.draw_points(&mut canvas, data);
        self.draw_info(&mut canvas, data);
        canvas
    }

    fn line(&self, canvas: &mut Canvas, a: Point, b: Point, glyph: char, color: Color) {
        let (x0, y0) = self.cell.to_cell(&a);
        let (x1, y1) = self.cell.to_cell(&b);
        canvas.draw_line(x0, y0, x1, y1, glyph, color);
    }

    fn polyline(&self, canvas: &mut Canvas, points: &[Point], glyph: char, color: Color) {
        let mut cells: Vec<(f64, f64)> = points.iter().map(|p| self.cell.to_cell(p)).collect();
        cells.dedup();
        canvas.draw_polyline(&cells, glyph, color);
    }

    fn text_at(&self, canvas: &mut Canvas, p: Point, text: &str, color: Color) {
        let (x, y) = self.cell.to_cell(&p);
        canvas.draw_text(x as isize, y as isize, text, color);
    }

    fn draw_euclid(&self, canvas: &mut Canvas, data: &AppState) {
        let viewport = data.viewport();
        let mut gx = 0.0;
        while gx <= viewport.width {
            let (top, bottom) = (Point::new(gx, 0.0), Point::new(gx, viewport.height));
            self.line(canvas, top, bottom, GRID_GLYPH, Color::DarkGrey);
            gx += GRID_STEP;
        }
        let mut gy = 0.0;
        while gy <= viewport.height {
            let (left, right) = (Point::new(0.0, gy), Point::new(viewport.width, gy));
            self.line(canvas, left, right, GRID_GLYPH, Color::DarkGrey);
            gy += GRID_STEP;
        }

        for outline in data.circles() {
            self.polyline(canvas, &outline, CIRCLE_GLYPH, Color::Blue);
        }
    }

    fn draw_minkowski(&self, canvas: &mut Canvas, data: &mut AppState) {
        let viewport = data.viewport();
        let mapper = data.mapper();
        let center = viewport.center();
        let (cx, cy) = viewport.half_extents();
        let (width, height) = (viewport.width, viewport.height);

        // Grid anchored on the origin
        let reach_x = (cx / GRID_STEP).ceil() as i64;
        for k in -reach_x..=reach_x {
            let x = center.x + k as f64 * GRID_STEP;
            if (0.0..=width).contains(&x) {
                let (top, bottom) = (Point::new(x, 0.0), Point::new(x, height));
                self.line(canvas, top, bottom, GRID_GLYPH, Color::DarkGrey);
            }
        }
        let reach_y = (cy / GRID_STEP).ceil() as i64;
        for k in -reach_y..=reach_y {
            let y = center.y + k as f64 * GRID_STEP;
            if (0.0..=height).contains(&y) {
                let (left, right) = (Point::new(0.0, y), Point::new(width, y));
                self.line(canvas, left, right, GRID_GLYPH, Color::DarkGrey);
            }
        }

        // Axes and labels
        let (left, right) = (Point::new(0.0, center.y), Point::new(width, center.y));
        self.line(canvas, left, right, '─', Color::White);
        let (top, bottom) = (Point::new(center.x, 0.0), Point::new(center.x, height));
        self.line(canvas, top, bottom, '│', Color::White);
        self.text_at(canvas, Point::new(width - 20.0, center.y - 6.0), "x", Color::White);
        self.text_at(canvas, Point::new(center.x + 6.0, 18.0), "ct", Color::White);

        // Hyperbolas
        for path in data.hyperbola_geometry() {
            let color = if path.branch.is_timelike() {
                Color::Red
            } else {
                Color::Green
            };
            let screen: Vec<Point> = path.vertices.iter().map(|v| mapper.to_screen(v)).collect();
            self.polyline(canvas, &screen, CURVE_GLYPH, color);
        }

        // Origin
        let (ox, oy) = self.cell.to_cell(&center);
        canvas.plot(ox as isize, oy as isize, '┼', Color::White);
    }

    fn draw_points(&self, canvas: &mut Canvas, data: &AppState) {
        let highlighted = data.highlighted();
        for (i, p) in data.points().iter().enumerate() {
            let (x, y) = self.cell.to_cell(p);
            let (glyph, color) = if highlighted == Some(i) {
                (NEAREST_GLYPH, Color::Red)
            } else {
                (POINT_GLYPH, Color::DarkGreen)
            };
            canvas.plot(x as isize, y as isize, glyph, color);
        }
    }

    /// Report lines and status line, drawn over anything that spilled below
    /// the plot
    fn draw_info(&self, canvas: &mut Canvas, data: &AppState) {
        let top = self.plot_rows() as usize;
        let blank = " ".repeat(canvas.width());
        for y in top..canvas.height() {
            canvas.draw_text(0, y as isize, &blank, Color::Reset);
        }
        if canvas.height() == 0 {
            return;
        }

        let status_row = canvas.height() - 1;
        let lines = data.report().lines();
        let room = status_row.saturating_sub(top);
        for (i, line) in lines.iter().take(room).enumerate() {
            let text = if i + 1 == room && lines.len() > room {
                format!("... ({} more)", lines.len() - i)
            } else {
                line.clone()
            };
            canvas.draw_text(0, (top + i) as isize, &text, Color::White);
        }

        let status = format!(
            "Mode: {} | {} points | m: mode  c: clear  o: circles  q: quit",
            data.mode(),
            data.points().len()
        );
        canvas.draw_text(0, status_row as isize, &status, Color::DarkGrey);
    }
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
