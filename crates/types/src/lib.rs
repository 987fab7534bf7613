//! Core types module - shared constants and the vehicle catalog enum
//!
//! This module defines the fundamental values used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the pure circuit logic, the terminal layer and the binary alike.
//!
//! # Circuit Geometry
//!
//! A circuit is a bordered grid of lanes stacked top to bottom:
//!
//! - **Lane width**: 3 rows per lane (one vehicle per lane)
//! - **Interior**: `length` columns by `lane_count * LANE_WIDTH` rows
//! - **Border**: one cell on every side, so the full grid is
//!   `(lane_count * LANE_WIDTH + 2)` rows by `(length + 2)` columns
//!
//! ```text
//! ┌──────────┐
//! │..........│
//! │..........│
//! │..........│
//! └──────────┘
//! ```
//!
//! # Speed and Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_SPEED` | 1000 | Fastest allowed vehicle speed |
//! | `POLL_INTERVAL_US` | 100 | Sleep between render-loop polls (µs) |
//!
//! A vehicle's *cadence* is `MAX_SPEED / speed` milliseconds per cell, so a
//! vehicle at speed 1000 moves every millisecond and one at speed 4 moves
//! every 250ms.
//!
//! # Examples
//!
//! ```
//! use tui_circuit_types::{VehicleKind, LANE_WIDTH, MAX_SPEED};
//!
//! assert_eq!(VehicleKind::Wagon.default_speed(), 4);
//! assert_eq!(VehicleKind::ALL.len(), 3);
//!
//! assert_eq!(LANE_WIDTH, 3);
//! assert_eq!(MAX_SPEED, 1000);
//! ```

/// Rows per lane. A vehicle body may be at most this tall.
pub const LANE_WIDTH: usize = 3;

/// Highest speed a vehicle may declare.
pub const MAX_SPEED: i64 = 1000;

/// Fill character for the drivable interior of the circuit.
pub const BACKGROUND_CHAR: char = '.';

/// Border glyphs.
pub const BORDER_TOP_LEFT: char = '┌';
pub const BORDER_TOP_RIGHT: char = '┐';
pub const BORDER_BOTTOM_LEFT: char = '└';
pub const BORDER_BOTTOM_RIGHT: char = '┘';
pub const BORDER_VERTICAL: char = '│';
pub const BORDER_HORIZONTAL: char = '─';

/// Circuit name used when none is given on the command line.
pub const DEFAULT_CIRCUIT_NAME: &str = "鈴鹿 Circuit";

/// Interior length used when none is given on the command line.
pub const DEFAULT_CIRCUIT_LENGTH: usize = 180;

/// Lane count used when none is given on the command line.
pub const DEFAULT_LANE_COUNT: usize = 3;

/// Largest interior length the command line accepts.
pub const MAX_CIRCUIT_LENGTH: usize = u16::MAX as usize - 2;

/// Largest lane count whose full frame height still fits the `u16`
/// cursor-move argument.
pub const MAX_LANE_COUNT: usize = (u16::MAX as usize - 2) / LANE_WIDTH;

/// Render-loop yield between polls, in microseconds.
pub const POLL_INTERVAL_US: u64 = 100;


/// The built-in vehicle kinds
///
/// Each kind has a fixed 3-row sprite and a default speed:
/// - **Sedan**: compact car, speed 7
/// - **Wagon**: longer estate car, speed 4
/// - **Modern**: rounded modern car, speed 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Sedan,
    Wagon,
    Modern,
}

impl VehicleKind {
    /// Every kind, in catalog order.
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Sedan, VehicleKind::Wagon, VehicleKind::Modern];

    /// Speed a vehicle of this kind gets when none is given.
    pub fn default_speed(&self) -> i64 {
        match self {
            VehicleKind::Sedan => 7,
            VehicleKind::Wagon => 4,
            VehicleKind::Modern => 20,
        }
    }
}
