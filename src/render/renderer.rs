//! Renderer: Paints a grid snapshot as colored terminal blocks.
//!
//! Each cell becomes a two-column block whose background color encodes the
//! state. Frames overwrite each other in place: the screen is cleared once
//! before the first frame, and every draw starts by homing the cursor
//! instead of scrolling.

use std::io::{self, Write};

use crate::automaton::{Cell, Grid};

use super::frame::FrameBuffer;

/// 256-color background index for a ready cell (light gray).
const READY_BG: u8 = 252;
/// 256-color background index for a firing cell (green).
const FIRING_BG: u8 = 28;
/// 256-color background index for a refractory cell (yellow).
const REFRACTORY_BG: u8 = 220;

/// The two-column block drawn for every cell.
const BLOCK: &str = "  ";

/// Worst-case bytes per rendered cell: `CSI 48;5;NNN m`, the block, `CSI 0m`.
const CELL_BYTES: usize = 17;
/// Bytes per row terminator (`\r\n`; the terminal runs in raw mode).
const ROW_SUFFIX_BYTES: usize = 2;
/// Bytes for the cursor-home prefix.
const HOME_BYTES: usize = 6;

/// Renders grid snapshots to an output stream.
///
/// The renderer owns a private [`FrameBuffer`] that is reset at the start
/// of every draw and flushed in one write, so a frame never reaches the
/// terminal in pieces.
#[derive(Debug, Default)]
pub struct Renderer {
    /// Reusable frame scratch buffer.
    frame: FrameBuffer,
}

impl Renderer {
    /// Create a renderer with the default scratch capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer pre-sized for a `rows` x `cols` grid, so no frame
    /// ever reallocates the scratch buffer.
    pub fn for_dimensions(rows: usize, cols: usize) -> Self {
        let capacity = rows * (cols * CELL_BYTES + ROW_SUFFIX_BYTES) + HOME_BYTES;
        Self {
            frame: FrameBuffer::with_capacity(capacity),
        }
    }

    /// Emit the one-time full-screen clear.
    ///
    /// Call once before the first frame; afterwards frames overwrite in
    /// place via cursor homing.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn clear_screen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.frame.clear();
        self.frame.clear_screen();
        self.frame.flush_to(out)
    }

    /// Draw one generation as a complete frame.
    ///
    /// Homes the cursor, paints every cell as a colored block, terminates
    /// each row, and flushes the whole frame in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn draw<W: Write>(&mut self, grid: &Grid, out: &mut W) -> io::Result<()> {
        self.frame.clear();
        self.frame.cursor_home();

        for row in grid.row_slices() {
            for &cell in row {
                self.frame.set_bg_indexed(bg_index(cell));
                self.frame.write_str(BLOCK);
                self.frame.reset_attrs();
            }
            self.frame.write_str("\r\n");
        }

        self.frame.flush_to(out)
    }
}

/// Map a cell state to its background palette index.
///
/// The match is exhaustive over the closed [`Cell`] enum; an unknown state
/// cannot reach this function.
const fn bg_index(cell: Cell) -> u8 {
    match cell {
        Cell::Ready => READY_BG,
        Cell::Firing => FIRING_BG,
        Cell::Refractory => REFRACTORY_BG,
    }
}
