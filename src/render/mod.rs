//! Render module: Turning a grid snapshot into a terminal frame.
//!
//! This module contains:
//! - [`FrameBuffer`]: A reusable byte buffer for ANSI sequences, flushed in
//!   a single write per frame
//! - [`Renderer`]: Maps cell states to colored blocks and manages cursor
//!   homing so frames overwrite in place

mod frame;
mod renderer;

pub use frame::FrameBuffer;
pub use renderer::Renderer;
