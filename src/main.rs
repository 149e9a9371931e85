use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use log::{info, warn};
use spacetime_plot::config::Args;
use spacetime_plot::widget::{Flow, PlotWidget};
use spacetime_plot::{AppState, PlotError};
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Instant;

/// Sets up `log` output. Without a log file the UI hides stderr, so logging
/// stays off unless RUST_LOG asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<(), PlotError> {
    let default_filter = if log_file.is_some() { "warn" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

/// Terminal size as (columns, rows)
fn terminal_size() -> (u16, u16) {
    termsize::get()
        .map(|size| (size.cols, size.rows))
        .or_else(|| terminal::size().ok())
        .unwrap_or((80, 24))
}

fn run(out: &mut Stdout, widget: &mut PlotWidget, state: &mut AppState) -> Result<(), PlotError> {
    loop {
        if widget.needs_paint() {
            widget.paint(state).present(out)?;
        }
        let event = if event::poll(widget.poll_timeout(Instant::now()))? {
            Some(event::read()?)
        } else {
            None
        };
        if widget.step(event.as_ref(), state, Instant::now()) == Flow::Quit {
            return Ok(());
        }
    }
}

/// Main function
pub fn main() -> Result<(), PlotError> {
    let config = Args::parse().validate()?;
    init_logging(config.log_file.as_deref())?;

    let (columns, rows) = terminal_size();
    let mut widget = PlotWidget::new(config.cell, config.remove_threshold, columns, rows);
    let mut state = config.build_state(widget.viewport());
    info!(
        "starting in {} mode, {}x{} cells, viewport {:?}",
        state.mode(),
        columns,
        rows,
        state.viewport()
    );

    let mut out = io::stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut out, &mut widget, &mut state);

    // Restore the terminal even when the loop failed
    if let Err(e) = execute!(out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)
        .and_then(|()| disable_raw_mode())
        .and_then(|()| out.flush())
    {
        warn!("failed to restore terminal: {e}");
    }
    result
}
