use crate::curves::{circle_outline, CurveGenerator, CurvePath, CIRCLE_SEGMENTS};
use crate::error::PlotError;
use crate::invariant::InvariantEngine;
use crate::math::{CoordinateMapper, Mode, Viewport};
use crate::point::Point;
use crate::report::DisplayInfo;
use crate::store::PointStore;
use log::debug;

/// Default radius for removing a point with a double click, in pixels
pub const DEFAULT_REMOVE_THRESHOLD: f64 = 30.0;

/// Default radius of the optional Euclidean circles, in pixels
pub const DEFAULT_CIRCLE_RADIUS: f64 = 50.0;

/// Points present at startup
pub const SAMPLE_POINTS: [Point; 3] = [
    Point::new(100.0, 120.0),
    Point::new(240.0, 200.0),
    Point::new(400.0, 90.0),
];

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// User-placed points, screen coordinates
    points: PointStore,
    /// Active geometry
    mode: Mode,
    /// Current drawable area
    viewport: Viewport,
    /// Last pointer position, cleared after a removal or clear
    focus: Option<Point>,
    /// Circles around each point in Euclidean mode
    show_circles: bool,
    circle_radius: f64,
    generator: CurveGenerator,
    /// Hyperbolas for `viewport`, rebuilt lazily after a resize
    curves: Option<Vec<CurvePath>>,
}

impl AppState {
    /// Empty store, circles off, default magnitudes
    pub fn new(viewport: Viewport, mode: Mode) -> Self {
        AppState {
            points: PointStore::new(),
            mode,
            viewport,
            focus: None,
            show_circles: false,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            generator: CurveGenerator::default(),
            curves: None,
        }
    }

    /// Starts with the sample points
    pub fn with_samples(mut self) -> Self {
        self.points = SAMPLE_POINTS.into_iter().collect();
        self
    }

    /// Replaces the hyperbola magnitudes
    pub fn with_generator(mut self, generator: CurveGenerator) -> Self {
        self.generator = generator;
        self.curves = None;
        self
    }

    /// Circle visibility and radius in pixels
    pub fn with_circles(mut self, show: bool, radius: f64) -> Self {
        self.show_circles = show;
        self.circle_radius = radius;
        self
    }

    /// Active geometry
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches geometry; stored points are left alone
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Returns the new mode
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Moves the origin to the new center and drops cached curves.
    ///
    /// Negative or non-finite sizes are rejected and leave the state as it was.
    pub fn on_viewport_resize(&mut self, width: f64, height: f64) -> Result<(), PlotError> {
        let viewport = Viewport::try_new(width, height)?;
        if viewport != self.viewport {
            debug!("viewport resized to {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
            self.curves = None;
        }
        Ok(())
    }

    /// Mapper for the current viewport
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(&self.viewport)
    }

    /// Invariant engine for the current mode and viewport
    pub fn engine(&self) -> InvariantEngine {
        InvariantEngine::new(self.mode, &self.viewport)
    }

    /// Stored points in insertion order
    pub fn points(&self) -> &PointStore {
        &self.points
    }

    /// Stores a point; non-finite coordinates are refused
    pub fn add_point_at(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        self.points.add(Point::try_new(x, y)?);
        Ok(())
    }

    /// Removes the nearest point strictly within `threshold` pixels
    pub fn remove_nearest_at(
        &mut self,
        x: f64,
        y: f64,
        threshold: f64,
    ) -> Result<bool, PlotError> {
        let removed = self
            .points
            .remove_nearest_within(&Point::try_new(x, y)?, threshold);
        if removed {
            self.focus = None;
        }
        Ok(removed)
    }

    /// Drops every point and the pointer focus
    pub fn clear_all(&mut self) {
        self.points.clear();
        self.focus = None;
    }

    /// Records the pointer position and returns the report for it
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Result<DisplayInfo, PlotError> {
        let p = Point::try_new(x, y)?;
        self.focus = Some(p);
        Ok(self.query_nearest(Some(p)))
    }

    /// Last pointer position
    pub fn focus(&self) -> Option<Point> {
        self.focus
    }

    /// Zero-based index of the point nearest to the pointer, if any
    pub fn highlighted(&self) -> Option<usize> {
        self.focus
            .and_then(|focus| self.points.nearest(&focus))
            .map(|nearest| nearest.index)
    }

    /// Nearest-point report for `query`, or the no-pointer report for `None`
    pub fn query_nearest(&self, query: Option<Point>) -> DisplayInfo {
        self.engine().report(&self.points, query.as_ref())
    }

    /// Report for the last pointer position, or the full table when there is
    /// none
    pub fn report(&self) -> DisplayInfo {
        self.query_nearest(self.focus)
    }

    /// Hyperbola family for the current viewport
    pub fn hyperbola_geometry(&mut self) -> &[CurvePath] {
        let (generator, viewport) = (&self.generator, &self.viewport);
        self.curves
            .get_or_insert_with(|| generator.generate(viewport))
            .as_slice()
    }

    /// Whether circles are drawn in the Euclidean view
    pub fn show_circles(&self) -> bool {
        self.show_circles
    }

    pub fn set_show_circles(&mut self, show: bool) {
        self.show_circles = show;
    }

    /// Flips circle visibility and returns the new setting
    pub fn toggle_circles(&mut self) -> bool {
        self.show_circles = !self.show_circles;
        self.show_circles
    }

    /// Outlines around every point when circles are enabled
    pub fn circles(&self) -> Vec<Vec<Point>> {
        if !self.show_circles {
            return Vec::new();
        }
        self.points
            .iter()
            .map(|p| circle_outline(p, self.circle_radius, CIRCLE_SEGMENTS))
            .collect()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
