//! Track - the circuit aggregate
//!
//! Owns the configuration, one lane per accepted vehicle (in arrival order),
//! the immutable background grid and the set of move cadences. All validation
//! happens in [`Track::add_vehicle`]; an accepted vehicle is reduced to its
//! sprite and speed, and rendering trusts those without further checks.

use std::collections::BTreeSet;

use crate::compose::{compose_into, Lane};
use crate::error::VehicleError;
use crate::grid::{build_track_grid, Grid};
use crate::motion;
use crate::types::{LANE_WIDTH, MAX_SPEED};
use crate::vehicle::{Sprite, Vehicle};

pub struct Track {
    name: String,
    length: usize,
    lane_count: usize,
    lanes: Vec<Lane>,
    background: Grid,
    cadences: BTreeSet<u64>,
}

impl Track {
    /// Create an empty track and build its background.
    ///
    /// `length` and `lane_count` are expected to be positive.
    pub fn new(name: impl Into<String>, length: usize, lane_count: usize) -> Self {
        let name = name.into();
        let background = build_track_grid(length, lane_count);
        tracing::debug!(%name, length, lane_count, "track created");
        Self {
            name,
            length,
            lane_count,
            lanes: Vec::new(),
            background,
            cadences: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full grid height including the border.
    pub fn height(&self) -> usize {
        self.lane_count * LANE_WIDTH + 2
    }

    /// Number of vehicles on the track.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lanes.len() >= self.lane_count
    }

    pub fn background(&self) -> &Grid {
        &self.background
    }

    /// Distinct move cadences (ms per cell) of the vehicles on the track.
    pub fn cadences(&self) -> &BTreeSet<u64> {
        &self.cadences
    }

    /// Add a vehicle to the next free lane.
    ///
    /// Returns `Ok(false)` without touching the track when every lane is
    /// taken. Otherwise the body and speed are validated, in that order, and
    /// the first failure is returned as an error.
    pub fn add_vehicle(&mut self, vehicle: Box<dyn Vehicle>) -> Result<bool, VehicleError> {
        if self.is_full() {
            return Ok(false);
        }

        let sprite = Sprite::from_body(vehicle.body(), self.length)?;

        let speed = vehicle.speed();
        if !(1..=MAX_SPEED).contains(&speed) {
            return Err(VehicleError::InvalidSpeed {
                speed,
                max: MAX_SPEED,
            });
        }

        let cadence = motion::cadence(speed);
        self.cadences.insert(cadence);
        tracing::debug!(
            lane = self.lanes.len(),
            speed,
            cadence,
            width = sprite.width(),
            "vehicle added"
        );
        self.lanes.push(Lane::new(sprite, speed));
        Ok(true)
    }

    /// Whether any vehicle is due to move at `elapsed_ms`.
    pub fn should_render(&self, elapsed_ms: u64) -> bool {
        self.cadences.iter().any(|&c| elapsed_ms % c == 0)
    }

    /// Compose the frame for `elapsed_ms` into a reusable buffer.
    pub fn frame_into(&self, elapsed_ms: u64, out: &mut Grid) {
        compose_into(&self.background, elapsed_ms, &self.lanes, out);
    }

    /// Compose the frame for `elapsed_ms`.
    pub fn frame_at(&self, elapsed_ms: u64) -> Grid {
        let mut out = self.background.clone();
        self.frame_into(elapsed_ms, &mut out);
        out
    }
}

impl std::fmt::Debug for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Track")
            .field("name", &self.name)
            .field("length", &self.length)
            .field("lane_count", &self.lane_count)
            .field("lanes", &self.lanes)
            .field("cadences", &self.cadences)
            .finish_non_exhaustive()
    }
}
