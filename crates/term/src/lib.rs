//! Terminal output module.
//!
//! This is the I/O half of the circuit. It takes the frames that `core`
//! composes and writes them to a terminal as plain text, repainting in place
//! with a cursor-return control sequence after every frame.
//!
//! It intentionally avoids raw mode and the alternate screen: the circuit is
//! drawn into the normal scrollback and Ctrl-C leaves the last frame visible.

pub mod renderer;
pub mod scheduler;

use std::io;

use anyhow::Result;

pub use tui_circuit_core as core;
pub use tui_circuit_types as types;

pub use renderer::{encode_cursor_return_into, encode_frame_into, encode_title_into, FrameWriter};
pub use scheduler::{Clock, RenderLoop, SystemClock};

/// Race `track` on stdout until the process is killed or a write fails.
pub fn start(track: core::Track) -> Result<()> {
    let mut render_loop = RenderLoop::new(track, io::stdout(), SystemClock::new())?;
    render_loop.run()
}
