//! Built-in vehicles.
//!
//! Every catalog vehicle is three rows tall and carries only its speed; the
//! sprite is fixed per kind.

use crate::types::VehicleKind;
use crate::vehicle::{body_from_rows, Body, Vehicle};

const SEDAN_ROWS: [&str; 3] = ["   ┌───┐  ", "┌──    ──┐", "└ ◉    ◉ ┘"];

const WAGON_ROWS: [&str; 3] = ["╭┉┉┉┉┉┉┉╮  ", "┊     □ ╰┉╮", "╰┉ⓞ     ⓞ┉╯"];

const MODERN_ROWS: [&str; 3] = ["   ╭┉┉╮    ", "╭┉┉╯  ╰┉┉┉╮", "╰┉ⓞ     ⓞ┉╯"];

macro_rules! catalog_vehicle {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $rows:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            speed: i64,
        }

        impl $name {
            /// Build with the kind's default speed.
            pub fn new() -> Self {
                Self::with_speed($kind.default_speed())
            }

            pub fn with_speed(speed: i64) -> Self {
                Self { speed }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Vehicle for $name {
            fn body(&self) -> Option<Body> {
                Some(body_from_rows(&$rows))
            }

            fn speed(&self) -> i64 {
                self.speed
            }
        }
    };
}

catalog_vehicle!(
    /// Compact sedan, 10 columns wide.
    Sedan,
    VehicleKind::Sedan,
    SEDAN_ROWS
);

catalog_vehicle!(
    /// Long wagon, 11 columns wide.
    Wagon,
    VehicleKind::Wagon,
    WAGON_ROWS
);

catalog_vehicle!(
    /// Rounded modern car, 11 columns wide.
    ModernCar,
    VehicleKind::Modern,
    MODERN_ROWS
);

/// Build a catalog vehicle, falling back to the kind's default speed.
pub fn build(kind: VehicleKind, speed: Option<i64>) -> Box<dyn Vehicle> {
    let speed = speed.unwrap_or_else(|| kind.default_speed());
    match kind {
        VehicleKind::Sedan => Box::new(Sedan::with_speed(speed)),
        VehicleKind::Wagon => Box::new(Wagon::with_speed(speed)),
        VehicleKind::Modern => Box::new(ModernCar::with_speed(speed)),
    }
}

/// Starting grid for `lane_count` lanes.
///
/// Always opens with a default sedan, a slow sedan (4) and a modern car (23).
/// Lanes beyond those three cycle through the catalog at default speeds.
pub fn lineup(lane_count: usize) -> Vec<Box<dyn Vehicle>> {
    let mut vehicles: Vec<Box<dyn Vehicle>> = vec![
        build(VehicleKind::Sedan, None),
        build(VehicleKind::Sedan, Some(4)),
        build(VehicleKind::Modern, Some(23)),
    ];
    let extra = lane_count.saturating_sub(vehicles.len());
    vehicles.extend(
        VehicleKind::ALL
            .iter()
            .cycle()
            .take(extra)
            .map(|&kind| build(kind, None)),
    );
    vehicles
}
