//! Brainwave binary: parse flags, set up the terminal, run the automaton.
//!
//! The core never touches the command line, the logger, or raw mode; this
//! shim wires them together and reports why the run ended. Diagnostics go
//! to stderr via the logger so they never interleave with the frame stream
//! on stdout.

use std::io;
use std::time::Duration;

use brainwave::{
    config, CancelToken, Renderer, RunOutcome, Runner, SimConfig, Simulation, StopWatcher,
};
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use log::info;

/// How long the stop watcher waits for an event before checking shutdown.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

#[derive(Parser, Debug)]
#[command(
    name = "brainwave",
    version,
    about = "Animate the Brian's Brain cellular automaton in the terminal"
)]
struct Cli {
    /// Rows count (non-positive values fall back to the default)
    #[arg(short = 'r', long, default_value_t = config::DEFAULT_ROWS as i64)]
    rows: i64,

    /// Columns count (non-positive values fall back to the default)
    #[arg(short = 'c', long, default_value_t = config::DEFAULT_COLS as i64)]
    cols: i64,

    /// Sleep interval between generations in milliseconds
    #[arg(short = 'i', long, default_value_t = config::DEFAULT_INTERVAL_MS as i64)]
    interval: i64,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SimConfig::sanitized(cli.rows, cli.cols, cli.interval);

    let sim = Simulation::new(&config, &mut rand::thread_rng());
    let renderer = Renderer::for_dimensions(config.rows, config.cols);

    // Terminal state is restored before the outcome notice so the log line
    // lands on a sane screen.
    let outcome = run_in_terminal(sim, renderer)?;

    match outcome {
        RunOutcome::Frozen => info!("lives are frozen, simulation stopped"),
        RunOutcome::Cancelled => info!("stop requested, bye"),
    }

    Ok(())
}

/// Run the loop with the terminal in raw mode, restoring it on every exit
/// path.
fn run_in_terminal(sim: Simulation, renderer: Renderer) -> io::Result<RunOutcome> {
    let _guard = TerminalGuard::enter()?;

    let cancel = CancelToken::new();
    let watcher = StopWatcher::spawn(cancel.clone(), INPUT_POLL_TIMEOUT);

    let mut runner = Runner::new(sim, renderer, cancel);
    let outcome = runner.run(&mut io::stdout().lock());

    watcher.join();
    outcome
}

/// RAII guard for raw mode and cursor visibility.
///
/// Raw mode lets the stop watcher see `q`, `Esc`, and `Ctrl-C` as key
/// events; the guard puts the terminal back no matter how the run ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
