//! Core circuit logic module - pure, deterministic, and testable
//!
//! This module contains the vehicles, the circuit geometry, the motion model
//! and the frame compositor. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: A frame is a pure function of elapsed milliseconds
//! - **Testable**: Every position and every frame can be asserted exactly
//! - **Portable**: The same frames can be sent to any output
//! - **Fast**: Frames can be composed into a reused buffer without allocating
//!
//! # Module Structure
//!
//! - [`vehicle`]: The `Vehicle` capability and validated `Sprite`
//! - [`catalog`]: Built-in sedan, wagon and modern car
//! - [`grid`]: Character grid and the bordered background builder
//! - [`motion`]: Oscillating position from elapsed time and speed
//! - [`compose`]: Stamps lane sprites onto a copy of the background
//! - [`track`]: The circuit aggregate that validates and owns vehicles
//!
//! # Example
//!
//! ```
//! use tui_circuit_core::catalog::Sedan;
//! use tui_circuit_core::Track;
//!
//! let mut track = Track::new("Suzuka", 40, 2);
//! assert_eq!(track.add_vehicle(Box::new(Sedan::new())), Ok(true));
//!
//! // Sedan speed 7 moves one cell every 142ms.
//! assert!(track.should_render(142));
//! assert!(!track.should_render(143));
//!
//! let frame = track.frame_at(142);
//! assert_eq!(frame.height(), track.height());
//! ```
//!
//! # Timing
//!
//! Nothing in this crate reads a clock. Callers pass milliseconds elapsed
//! since the race started; [`Track::should_render`] tells them whether any
//! vehicle is due to move at that instant.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod grid;
pub mod motion;
pub mod track;
pub mod vehicle;

pub use tui_circuit_types as types;

// Re-export commonly used types for convenience
pub use compose::{compose, compose_into, Lane};
pub use error::{Dimension, VehicleError};
pub use grid::{build_track_grid, Grid};
pub use motion::{position, Direction};
pub use track::Track;
pub use vehicle::{Body, Sprite, Vehicle};
