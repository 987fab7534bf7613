//! FrameWriter: flushes composed frames to a terminal, repainting in place.
//!
//! Frames are plain text rows. After the last row the cursor is moved back up
//! by the frame height and returned to column 1, so the next frame overwrites
//! this one. Each frame is encoded into a buffer first and written with a
//! single `write_all`, so rows and the control sequence never interleave with
//! other output through the same writer.

use std::io::Write;

use anyhow::{Context, Result};

use crossterm::{cursor, style::Print, QueueableCommand};

use crate::core::Grid;

pub struct FrameWriter<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Print the circuit name as `[name]` on its own line.
    pub fn write_title(&mut self, name: &str) -> Result<()> {
        self.buf.clear();
        encode_title_into(name, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn write_frame(&mut self, frame: &Grid) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Convert a frame height to the cursor-move argument.
pub fn frame_height(height: usize) -> Result<u16> {
    u16::try_from(height).with_context(|| format!("frame height {height} exceeds terminal limits"))
}

pub fn encode_title_into(name: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(format!("[{name}]\n")))?;
    Ok(())
}

/// Encode every row of `frame` followed by the cursor-return sequence.
pub fn encode_frame_into(frame: &Grid, out: &mut Vec<u8>) -> Result<()> {
    let height = frame_height(frame.height())?;
    for row in frame.rows() {
        for &ch in row {
            out.queue(Print(ch))?;
        }
        out.queue(Print('\n'))?;
    }
    encode_cursor_return_into(height, out)
}

/// `ESC [ <lines> F` then carriage return.
pub fn encode_cursor_return_into(lines: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveToPreviousLine(lines))?;
    out.queue(Print('\r'))?;
    Ok(())
}
