/// Errors raised at the edges of the plotter: input validation, configuration
/// and the terminal.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
