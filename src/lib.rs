//! # Brainwave
//!
//! A flicker-free terminal animator for the Brian's Brain cellular automaton.
//!
//! Brainwave steps a fixed-size grid of three-state cells
//! (Ready → Firing → Refractory → Ready) and paints each generation as a
//! grid of colored blocks, overwriting the previous frame in place so the
//! terminal shows a smooth animation instead of a scrolling log.
//!
//! ## Core Concepts
//!
//! - **Closed cell states**: A three-variant enum; invalid states cannot exist
//! - **Double-buffered stepping**: Two grid arenas, flipped by index each
//!   generation, so no allocation happens after construction
//! - **Single-write frames**: Each frame is accumulated into a reusable byte
//!   buffer and flushed in one write to prevent tearing
//! - **Cooperative cancellation**: The run-loop polls a latched token once per
//!   iteration, independent of how the stop request is delivered
//!
//! ## Example
//!
//! ```rust,ignore
//! use brainwave::{CancelToken, Renderer, Runner, SimConfig, Simulation};
//!
//! let config = SimConfig::default();
//! let sim = Simulation::new(&config, &mut rand::thread_rng());
//! let renderer = Renderer::for_dimensions(config.rows, config.cols);
//!
//! let mut runner = Runner::new(sim, renderer, CancelToken::new());
//! let outcome = runner.run(&mut std::io::stdout().lock())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod automaton;
pub mod config;
pub mod render;
pub mod run;

// Re-exports for convenience
pub use automaton::{Cell, Grid, Simulation};
pub use config::SimConfig;
pub use render::{FrameBuffer, Renderer};
pub use run::{CancelToken, RunOutcome, Runner, StopWatcher};
