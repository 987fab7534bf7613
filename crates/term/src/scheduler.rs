//! Render loop: polls the clock and repaints whenever a vehicle is due.
//!
//! Each poll reads milliseconds elapsed since the race started. If that value
//! is a multiple of any vehicle's cadence a frame is composed and written,
//! followed by a short sub-millisecond sleep. Polls that match no cadence, or
//! that land on the millisecond already drawn, are skipped immediately. There is no fixed frame rate: a slow vehicle whose
//! cadence does not divide a fast one's still repaints on its own ticks.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{Grid, Track};
use crate::renderer::{frame_height, FrameWriter};
use crate::types::POLL_INTERVAL_US;

/// Source of elapsed race time.
pub trait Clock {
    /// Milliseconds since the race started.
    fn elapsed_ms(&self) -> u64;
}

/// Wall clock started at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

pub struct RenderLoop<W: Write, C: Clock> {
    track: Track,
    writer: FrameWriter<W>,
    clock: C,
    frame: Grid,
    last_rendered: Option<u64>,
}

impl<W: Write, C: Clock> RenderLoop<W, C> {
    /// Fails if the track is too tall for the cursor-return sequence.
    pub fn new(track: Track, out: W, clock: C) -> Result<Self> {
        frame_height(track.height())?;
        let frame = track.background().clone();
        Ok(Self {
            track,
            writer: FrameWriter::new(out),
            clock,
            frame,
            last_rendered: None,
        })
    }

    pub fn writer(&self) -> &FrameWriter<W> {
        &self.writer
    }

    pub fn into_writer(self) -> FrameWriter<W> {
        self.writer
    }

    /// One poll. Returns whether a frame was written.
    pub fn tick(&mut self) -> Result<bool> {
        let elapsed = self.clock.elapsed_ms();
        if self.last_rendered == Some(elapsed) || !self.track.should_render(elapsed) {
            return Ok(false);
        }
        self.track.frame_into(elapsed, &mut self.frame);
        self.writer.write_frame(&self.frame)?;
        self.last_rendered = Some(elapsed);
        Ok(true)
    }

    /// Print the title, then repaint forever. Only returns on a write error.
    pub fn run(&mut self) -> Result<()> {
        self.writer.write_title(self.track.name())?;
        tracing::info!(
            name = self.track.name(),
            height = self.track.height(),
            cadences = ?self.track.cadences(),
            "render loop started"
        );
        loop {
            if self.tick()? {
                thread::sleep(Duration::from_micros(POLL_INTERVAL_US));
            }
        }
    }
}
