use crate::curves::{CurveGenerator, DEFAULT_MAGNITUDES};
use crate::error::PlotError;
use crate::graphics::CellSize;
use crate::math::{Mode, Viewport};
use crate::state::{AppState, DEFAULT_CIRCLE_RADIUS, DEFAULT_REMOVE_THRESHOLD};
use clap::Parser;
use std::path::PathBuf;

/// Command line options
#[derive(Parser, Debug)]
#[command(
    name = "spacetime-plot",
    version,
    about = "Plot points on a Euclidean plane or a Minkowski spacetime diagram"
)]
pub struct Args {
    /// Geometry shown at startup
    #[arg(long, value_enum, default_value_t = Mode::Euclidean)]
    pub mode: Mode,

    /// Draw a circle around every point in Euclidean mode
    #[arg(long)]
    pub circles: bool,

    /// Circle radius in pixels
    #[arg(long, default_value_t = DEFAULT_CIRCLE_RADIUS)]
    pub circle_radius: f64,

    /// Interval magnitudes of the hyperbola family, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_MAGNITUDES)]
    pub magnitudes: Vec<f64>,

    /// Maximum distance in pixels for removing a point
    #[arg(long, default_value_t = DEFAULT_REMOVE_THRESHOLD)]
    pub threshold: f64,

    /// Pixels covered by one terminal column
    #[arg(long, default_value_t = 8)]
    pub cell_width: u16,

    /// Pixels covered by one terminal row
    #[arg(long, default_value_t = 16)]
    pub cell_height: u16,

    /// Start with an empty plane instead of the sample points
    #[arg(long)]
    pub no_samples: bool,

    /// Write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated settings
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub show_circles: bool,
    pub circle_radius: f64,
    pub generator: CurveGenerator,
    pub remove_threshold: f64,
    pub cell: CellSize,
    pub samples: bool,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn validate(self) -> Result<Config, PlotError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(PlotError::Config(format!(
                "cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if !(self.circle_radius.is_finite() && self.circle_radius > 0.0) {
            return Err(PlotError::Config(format!(
                "circle radius must be positive, got {}",
                self.circle_radius
            )));
        }
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(PlotError::Config(format!(
                "removal threshold must not be negative, got {}",
                self.threshold
            )));
        }
        Ok(Config {
            mode: self.mode,
            show_circles: self.circles,
            circle_radius: self.circle_radius,
            generator: CurveGenerator::new(self.magnitudes)?,
            remove_threshold: self.threshold,
            cell: CellSize::new(f64::from(self.cell_width), f64::from(self.cell_height)),
            samples: !self.no_samples,
            log_file: self.log_file,
        })
    }
}

impl Config {
    /// Initial application state for the given viewport
    pub fn build_state(&self, viewport: Viewport) -> AppState {
        let state = AppState::new(viewport, self.mode)
            .with_generator(self.generator.clone())
            .with_circles(self.show_circles, self.circle_radius);
        if self.samples {
            state.with_samples()
        } else {
            state
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
