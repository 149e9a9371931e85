use crate::error::PlotError;

/// Point in screen-pixel space, as placed by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Builds a point, rejecting NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self, PlotError> {
        if x.is_finite() && y.is_finite() {
            Ok(Point { x, y })
        } else {
            Err(PlotError::NonFiniteCoordinate { x, y })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Minkowski coordinates relative to the viewport center, `t` pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacetimePoint {
    pub x: f64,
    pub t: f64,
}

impl SpacetimePoint {
    pub const ORIGIN: SpacetimePoint = SpacetimePoint { x: 0.0, t: 0.0 };

    pub const fn new(x: f64, t: f64) -> Self {
        SpacetimePoint { x, t }
    }
}
