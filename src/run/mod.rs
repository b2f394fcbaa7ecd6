//! Run module: The draw → step → sleep loop and its cancellation plumbing.
//!
//! This module contains:
//! - [`CancelToken`]: A latched, cloneable stop flag the loop polls
//! - [`Runner`]: Sequences drawing, stepping, and frame pacing until the
//!   simulation freezes or a cancellation is observed
//! - [`StopWatcher`]: A thread that trips the token on an operator stop key
//!
//! The loop itself is strictly sequential: one iteration draws the current
//! generation, computes the next one, and sleeps out the frame interval.
//! Cancellation is observed only at the top of an iteration, so its
//! granularity is one full cycle.

mod cancel;
mod runner;
mod watcher;

pub use cancel::CancelToken;
pub use runner::{RunOutcome, Runner};
pub use watcher::StopWatcher;
