//! `FrameBuffer`: Single-write output buffer for ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building one frame of ANSI escape sequences.
///
/// All output for a frame is accumulated here, then flushed in a single
/// `write()` syscall to prevent visible tearing. The buffer is owned by the
/// renderer instance and reset at the start of each draw; it is never
/// shared.
#[derive(Debug)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a new frame buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a small frame (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to the top-left origin.
    #[inline]
    pub fn cursor_home(&mut self) {
        // CSI row ; col H (1-indexed)
        self.data.extend_from_slice(b"\x1b[1;1H");
    }

    /// Set the background to a 256-color palette index.
    #[inline]
    pub fn set_bg_indexed(&mut self, index: u8) {
        write!(self.data, "\x1b[48;5;{index}m").unwrap();
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
