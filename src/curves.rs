//! Sampled geometry for the overlays: the hyperbola family s² = t² − x² on the
//! spacetime diagram and circle outlines on the Euclidean plane.

use crate::error::PlotError;
use crate::math::Viewport;
use crate::point::{Point, SpacetimePoint};
use log::debug;
use std::f64::consts::PI;

/// Interval magnitudes drawn by default, in pixels
pub const DEFAULT_MAGNITUDES: [f64; 4] = [40.0, 80.0, 140.0, 220.0];

/// Segments used to approximate a circle outline
pub const CIRCLE_SEGMENTS: usize = 48;

/// One of the four branches of a hyperbola pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Opens upward along +t
    TimelikePositive,
    /// Opens downward along −t
    TimelikeNegative,
    /// Sampled along t: x = +sqrt(t² − s²) where t² ≥ s²
    SpacelikePositive,
    /// Sampled along t: x = −sqrt(t² − s²) where t² ≥ s²
    SpacelikeNegative,
}

impl Branch {
    pub const ALL: [Branch; 4] = [
        Branch::TimelikePositive,
        Branch::TimelikeNegative,
        Branch::SpacelikePositive,
        Branch::SpacelikeNegative,
    ];

    pub fn is_timelike(self) -> bool {
        matches!(self, Branch::TimelikePositive | Branch::TimelikeNegative)
    }

    /// Evaluates the branch at parameter `u` (x for timelike branches, t for
    /// spacelike ones). `None` inside the band |t| < s where the t-sampled
    /// branches are undefined.
    fn sample(self, magnitude: f64, u: f64) -> Option<SpacetimePoint> {
        match self {
            Branch::TimelikePositive => {
                Some(SpacetimePoint::new(u, (u * u + magnitude * magnitude).sqrt()))
            }
            Branch::TimelikeNegative => {
                Some(SpacetimePoint::new(u, -(u * u + magnitude * magnitude).sqrt()))
            }
            Branch::SpacelikePositive | Branch::SpacelikeNegative => {
                let val = u * u - magnitude * magnitude;
                if val < 0.0 {
                    return None;
                }
                let x = val.sqrt();
                let x = if self == Branch::SpacelikePositive { x } else { -x };
                Some(SpacetimePoint::new(x, u))
            }
        }
    }
}

/// A connected polyline in spacetime coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub branch: Branch,
    pub magnitude: f64,
    pub vertices: Vec<SpacetimePoint>,
}

/// Samples the hyperbola family at one unit per step across the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGenerator {
    magnitudes: Vec<f64>,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        CurveGenerator {
            magnitudes: DEFAULT_MAGNITUDES.to_vec(),
        }
    }
}

impl CurveGenerator {
    /// Magnitudes must be finite and positive
    pub fn new(magnitudes: Vec<f64>) -> Result<Self, PlotError> {
        if let Some(bad) = magnitudes.iter().find(|m| !(m.is_finite() && **m > 0.0)) {
            return Err(PlotError::Config(format!(
                "hyperbola magnitude must be positive, got {bad}"
            )));
        }
        Ok(CurveGenerator { magnitudes })
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// All branches of every magnitude for the given viewport
    pub fn generate(&self, viewport: &Viewport) -> Vec<CurvePath> {
        let (cx, cy) = viewport.half_extents();
        let paths: Vec<CurvePath> = self
            .magnitudes
            .iter()
            .flat_map(|&magnitude| {
                Branch::ALL
                    .into_iter()
                    .flat_map(move |branch| branch_paths(branch, magnitude, cx, cy))
            })
            .collect();
        debug!(
            "generated {} curve paths for {}x{} viewport",
            paths.len(),
            viewport.width,
            viewport.height
        );
        paths
    }
}

/// Samples one branch over [−half, half]. Each run of defined samples becomes
/// its own path, so nothing is drawn across a gap.
pub fn branch_paths(branch: Branch, magnitude: f64, cx: f64, cy: f64) -> Vec<CurvePath> {
    let half = if branch.is_timelike() { cx } else { cy };
    let mut paths = Vec::new();
    let mut run: Vec<SpacetimePoint> = Vec::new();
    for u in unit_steps(half) {
        match branch.sample(magnitude, u) {
            Some(vertex) => run.push(vertex),
            None if !run.is_empty() => paths.push(CurvePath {
                branch,
                magnitude,
                vertices: std::mem::take(&mut run),
            }),
            None => {}
        }
    }
    if !run.is_empty() {
        paths.push(CurvePath {
            branch,
            magnitude,
            vertices: run,
        });
    }
    paths
}

/// −half, −half + 1, … up to and including the last step not past +half
fn unit_steps(half: f64) -> impl Iterator<Item = f64> {
    let steps = (2.0 * half.max(0.0)).floor() as usize;
    (0..=steps).map(move |i| -half + i as f64)
}

/// Closed outline of a circle in screen space; the first vertex is repeated at
/// the end
pub fn circle_outline(center: &Point, radius: f64, segments: usize) -> Vec<Point> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = 2.0 * PI * (i % segments) as f64 / segments as f64;
            let (sin, cos) = angle.sin_cos();
            Point::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}

#[cfg(test)]
#[path = "curves_test.rs"]
mod tests;
