//! Point plotting on a Euclidean plane or a Minkowski spacetime diagram.
//!
//! Points are stored in raw screen pixels. The active [`Mode`] decides how they
//! are read: as plain positions with Euclidean distances, or as events relative
//! to the viewport center with the interval s² = t² − x².

pub mod config;
pub mod curves;
pub mod error;
pub mod graphics;
pub mod invariant;
pub mod math;
pub mod point;
pub mod report;
pub mod state;
pub mod store;
pub mod widget;

pub use curves::{Branch, CurveGenerator, CurvePath};
pub use error::PlotError;
pub use invariant::InvariantEngine;
pub use math::{distance, interval_sq, CoordinateMapper, Mode, Separation, Viewport};
pub use point::{Point, SpacetimePoint};
pub use report::{DisplayInfo, IntervalReport, Measure, TableRow};
pub use state::AppState;
pub use store::{Nearest, PointStore};
