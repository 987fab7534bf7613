//! Errors raised when a vehicle is refused by a track.

/// Why a vehicle could not be added to a [`Track`](crate::Track).
///
/// A full track is not an error: `add_vehicle` returns `Ok(false)` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VehicleError {
    #[error("vehicle body must not be absent")]
    NullInput,

    #[error("invalid vehicle dimensions: {0}")]
    InvalidDimensions(Dimension),

    #[error("vehicle speed {speed} is out of range 1..={max}")]
    InvalidSpeed { speed: i64, max: i64 },
}

/// The dimension check a vehicle body failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Dimension {
    #[error("body is {rows} rows tall, a lane holds 1..={lane_width}")]
    Height { rows: usize, lane_width: usize },

    #[error("row {row} is {len} columns long, the circuit allows 1..={track_length}")]
    Length {
        row: usize,
        len: usize,
        track_length: usize,
    },
}
