use crate::error::PlotError;
use crate::point::{Point, SpacetimePoint};
use std::fmt;

/// |s²| below this is treated as lying on the light cone
pub const LIGHTLIKE_TOLERANCE: f64 = 1e-9;

/// Geometry used to interpret stored points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Euclidean,
    Minkowski,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Euclidean => Mode::Minkowski,
            Mode::Minkowski => Mode::Euclidean,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Euclidean => f.write_str("Euclidean"),
            Mode::Minkowski => f.write_str("Minkowski"),
        }
    }
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative sizes collapse to zero
    pub fn new(width: f64, height: f64) -> Self {
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn try_new(width: f64, height: f64) -> Result<Self, PlotError> {
        if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
            Ok(Viewport { width, height })
        } else {
            Err(PlotError::InvalidViewport { width, height })
        }
    }

    /// Minkowski origin
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// (cx, cy)
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Converts between screen pixels and mode-relative coordinates.
///
/// Built from the viewport in effect at the time of the call; a mapper must not
/// outlive a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    center: Point,
}

impl CoordinateMapper {
    pub fn new(viewport: &Viewport) -> Self {
        CoordinateMapper {
            center: viewport.center(),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Screen point to (x, t), flipping y so that t grows upward
    pub fn to_spacetime(&self, p: &Point) -> SpacetimePoint {
        SpacetimePoint::new(p.x - self.center.x, self.center.y - p.y)
    }

    /// Inverse of [`CoordinateMapper::to_spacetime`]
    pub fn to_screen(&self, s: &SpacetimePoint) -> Point {
        Point::new(s.x + self.center.x, self.center.y - s.t)
    }

    /// Mode-relative coordinates: identity for Euclidean, (x, t) for Minkowski
    pub fn relative(&self, mode: Mode, p: &Point) -> Point {
        match mode {
            Mode::Euclidean => *p,
            Mode::Minkowski => {
                let s = self.to_spacetime(p);
                Point::new(s.x, s.t)
            }
        }
    }
}

/// Euclidean distance between two screen points
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Squared Minkowski interval from the origin, s² = t² − x²
pub fn interval_sq(s: &SpacetimePoint) -> f64 {
    s.t * s.t - s.x * s.x
}

/// Causal character of a separation from the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    Timelike,
    Spacelike,
    Lightlike,
}

impl Separation {
    pub fn classify(s2: f64) -> Self {
        if s2.abs() <= LIGHTLIKE_TOLERANCE {
            Separation::Lightlike
        } else if s2 > 0.0 {
            Separation::Timelike
        } else {
            Separation::Spacelike
        }
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separation::Timelike => f.write_str("timelike"),
            Separation::Spacelike => f.write_str("spacelike"),
            Separation::Lightlike => f.write_str("lightlike"),
        }
    }
}

#[cfg(test)]
#[path = "math_test.rs"]
mod tests;
