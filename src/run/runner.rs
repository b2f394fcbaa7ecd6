//! Runner: Drives the automaton until it freezes or is cancelled.

use std::io::{self, Write};
use std::thread;

use crate::automaton::Simulation;
use crate::render::Renderer;

use super::cancel::CancelToken;

/// Why a run ended.
///
/// The caller sees a normal return either way; only the reported reason
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A generation step changed nothing; the grid is dormant forever.
    Frozen,
    /// The cancellation token was observed at the top of an iteration.
    Cancelled,
}

/// Sequences the draw → step → sleep cycle.
///
/// The runner owns the simulation (and with it both grid arenas), the
/// renderer, and a cancellation token. Each iteration:
///
/// 1. polls the token, exiting with [`RunOutcome::Cancelled`] before
///    drawing if it latched;
/// 2. draws the current generation;
/// 3. steps the simulation, exiting with [`RunOutcome::Frozen`] if nothing
///    changed (no further draw, no further sleep);
/// 4. sleeps out the frame interval.
///
/// The sleep is a plain blocking pause of the whole flow; nothing else
/// runs in the meantime. Only a fully dormant generation freezes the run:
/// a grid stuck in periodic oscillation runs until cancelled.
#[derive(Debug)]
pub struct Runner {
    sim: Simulation,
    renderer: Renderer,
    cancel: CancelToken,
}

impl Runner {
    /// Create a runner from its three collaborators.
    pub const fn new(sim: Simulation, renderer: Renderer, cancel: CancelToken) -> Self {
        Self {
            sim,
            renderer,
            cancel,
        }
    }

    /// Run to a terminal state, writing frames to `out`.
    ///
    /// Clears the screen once, then loops until the simulation freezes or
    /// the token is observed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing a frame to `out` fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<RunOutcome> {
        self.renderer.clear_screen(out)?;

        loop {
            if self.cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled);
            }

            self.renderer.draw(self.sim.current(), out)?;

            if !self.sim.step() {
                return Ok(RunOutcome::Frozen);
            }

            thread::sleep(self.sim.interval());
        }
    }
}
