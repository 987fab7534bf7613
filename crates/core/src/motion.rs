//! Motion model - where a vehicle sits at a given moment
//!
//! Position is a pure function of elapsed wall-clock time. A vehicle moves one
//! cell every `cadence` milliseconds, so after `elapsed_ms` it has taken
//! `step = elapsed_ms / cadence` steps. Steps never reset; instead the vehicle
//! sweeps back and forth over its runnable length:
//!
//! ```text
//! phase 0 (forward)   step 0..R     offset = step % R
//! phase 1 (backward)  step R..2R    offset = R - step % R
//! phase 2 (forward)   step 2R..3R   offset = step % R
//! ...
//! ```
//!
//! where `R` is the runnable length (track length minus sprite width). The
//! offset therefore ranges over `0..=R`, touching the right border exactly
//! at the first step of every backward phase.

use crate::types::MAX_SPEED;

/// Sweep direction of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Forward,
    /// Right to left.
    Backward,
}

/// Milliseconds per cell for a vehicle at `speed`.
///
/// Speeds outside `1..=MAX_SPEED` are clamped; tracks never store them.
pub fn cadence(speed: i64) -> u64 {
    (MAX_SPEED / speed.clamp(1, MAX_SPEED)) as u64
}

/// Cells travelled after `elapsed_ms` at the given cadence.
pub fn step(elapsed_ms: u64, cadence: u64) -> u64 {
    elapsed_ms / cadence.max(1)
}

/// Direction for `step` over a runnable length of `runnable`.
pub fn direction(step: u64, runnable: usize) -> Direction {
    if step == 0 || runnable == 0 {
        return Direction::Forward;
    }
    if (step / runnable as u64) % 2 == 0 {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Offset from the left edge after `step` steps.
///
/// A vehicle with nowhere to go (`runnable == 0`) stays at 0.
pub fn position_at_step(step: u64, runnable: usize) -> usize {
    if runnable == 0 {
        return 0;
    }
    let r = runnable as u64;
    let offset = step % r;
    let pos = match direction(step, runnable) {
        Direction::Forward => offset,
        Direction::Backward => r - offset,
    };
    pos as usize
}

/// Offset from the left edge for a vehicle at `speed` after `elapsed_ms`.
pub fn position(elapsed_ms: u64, speed: i64, runnable: usize) -> usize {
    position_at_step(step(elapsed_ms, cadence(speed)), runnable)
}
