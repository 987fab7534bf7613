//! Track tests - lane capacity, vehicle validation and the motion model

use tui_circuit::core::catalog::{ModernCar, Sedan, Wagon};
use tui_circuit::core::motion::{position, position_at_step};
use tui_circuit::core::{build_track_grid, Body, Track, Vehicle, VehicleError};
use tui_circuit::types::{
    BACKGROUND_CHAR, BORDER_BOTTOM_LEFT, BORDER_BOTTOM_RIGHT, BORDER_HORIZONTAL, BORDER_TOP_LEFT,
    BORDER_TOP_RIGHT, BORDER_VERTICAL, MAX_SPEED,
};

/// Vehicle with an arbitrary shape and speed.
struct Probe {
    rows: Vec<String>,
    speed: i64,
}

fn probe(rows: &[&str], speed: i64) -> Box<dyn Vehicle> {
    Box::new(Probe {
        rows: rows.iter().map(|r| r.to_string()).collect(),
        speed,
    })
}

impl Vehicle for Probe {
    fn body(&self) -> Option<Body> {
        Some(self.rows.iter().map(|r| r.chars().collect()).collect())
    }

    fn speed(&self) -> i64 {
        self.speed
    }
}

#[test]
fn test_add_grows_by_one_until_full() {
    let mut track = Track::new("Test", 40, 3);
    let vehicles: [Box<dyn Vehicle>; 3] = [
        Box::new(Sedan::new()),
        Box::new(Wagon::new()),
        Box::new(ModernCar::new()),
    ];
    for (i, v) in vehicles.into_iter().enumerate() {
        assert_eq!(track.add_vehicle(v), Ok(true));
        assert_eq!(track.len(), i + 1);
    }
}

#[test]
fn test_full_track_returns_false_and_is_unchanged() {
    let mut track = Track::new("Test", 40, 2);
    track.add_vehicle(Box::new(Sedan::new())).unwrap();
    track.add_vehicle(Box::new(Sedan::with_speed(4))).unwrap();
    let cadences_before = track.cadences().clone();

    assert_eq!(track.add_vehicle(Box::new(ModernCar::with_speed(23))), Ok(false));
    assert_eq!(track.len(), 2);
    assert_eq!(track.cadences(), &cadences_before);
}

#[test]
fn test_body_height_must_fit_lane() {
    let mut track = Track::new("Test", 10, 1);
    assert!(matches!(
        track.add_vehicle(probe(&[], 10)),
        Err(VehicleError::InvalidDimensions(_))
    ));
    assert!(matches!(
        track.add_vehicle(probe(&["a", "b", "c", "d"], 10)),
        Err(VehicleError::InvalidDimensions(_))
    ));
    assert_eq!(track.add_vehicle(probe(&["a", "b", "c"], 10)), Ok(true));
}

#[test]
fn test_body_rows_must_fit_track() {
    let mut track = Track::new("Test", 4, 1);
    assert!(matches!(
        track.add_vehicle(probe(&["ab", ""], 10)),
        Err(VehicleError::InvalidDimensions(_))
    ));
    assert!(matches!(
        track.add_vehicle(probe(&["abcde"], 10)),
        Err(VehicleError::InvalidDimensions(_))
    ));
    assert!(track.is_empty());
    assert_eq!(track.add_vehicle(probe(&["abcd"], 10)), Ok(true));
}

#[test]
fn test_speed_range() {
    let mut track = Track::new("Test", 10, 5);
    for speed in [i64::MIN, -1, 0, MAX_SPEED + 1] {
        assert!(matches!(
            track.add_vehicle(probe(&["x"], speed)),
            Err(VehicleError::InvalidSpeed { .. })
        ));
    }
    for speed in [1, 500, MAX_SPEED] {
        assert_eq!(track.add_vehicle(probe(&["x"], speed)), Ok(true));
    }
}

#[test]
fn test_position_starts_at_zero() {
    for speed in 1..=MAX_SPEED {
        assert_eq!(position(0, speed, 10), 0);
    }
}

#[test]
fn test_direction_flips_at_runnable_length() {
    let forward: Vec<usize> = (0..10).map(|s| position_at_step(s, 10)).collect();
    assert_eq!(forward, (0..10).collect::<Vec<_>>());
    // First step of the backward phase sits at the far end.
    assert_eq!(position_at_step(10, 10), 10);
    assert_eq!(position_at_step(11, 10), 9);
}

#[test]
fn test_grid_builder_single_lane() {
    let grid = build_track_grid(5, 1);
    assert_eq!(grid.height(), 5);
    assert_eq!(grid.width(), 7);

    assert_eq!(grid.get(0, 0), Some(BORDER_TOP_LEFT));
    assert_eq!(grid.get(6, 0), Some(BORDER_TOP_RIGHT));
    assert_eq!(grid.get(0, 4), Some(BORDER_BOTTOM_LEFT));
    assert_eq!(grid.get(6, 4), Some(BORDER_BOTTOM_RIGHT));

    for x in 1..6 {
        assert_eq!(grid.get(x, 0), Some(BORDER_HORIZONTAL));
        assert_eq!(grid.get(x, 4), Some(BORDER_HORIZONTAL));
    }
    for y in 1..4 {
        assert_eq!(grid.get(0, y), Some(BORDER_VERTICAL));
        assert_eq!(grid.get(6, y), Some(BORDER_VERTICAL));
        for x in 1..6 {
            assert_eq!(grid.get(x, y), Some(BACKGROUND_CHAR));
        }
    }
}

#[test]
fn test_frames_do_not_touch_background() {
    let mut track = Track::new("Test", 30, 2);
    track.add_vehicle(Box::new(Sedan::with_speed(1000))).unwrap();
    track.add_vehicle(Box::new(Wagon::with_speed(500))).unwrap();
    let before = track.background().clone();

    let a = track.frame_at(3);
    let b = track.frame_at(17);
    assert_ne!(a, b);
    assert_eq!(track.background(), &before);
}

#[test]
fn test_end_to_end_positions() {
    let mut track = Track::new("T", 10, 1);
    track.add_vehicle(probe(&["ab"], 1000)).unwrap();
    assert_eq!(track.cadences().iter().copied().collect::<Vec<_>>(), vec![1]);

    let col_of_a = |elapsed: u64| {
        let frame = track.frame_at(elapsed);
        (0..frame.width())
            .find(|&x| frame.get(x, 1) == Some('a'))
            .map(|x| x - 1)
    };

    assert_eq!(col_of_a(0), Some(0));
    assert_eq!(col_of_a(1), Some(1));
    // runnable = 8: step 8 opens the backward phase at the right end.
    assert_eq!(col_of_a(7), Some(7));
    assert_eq!(col_of_a(8), Some(8));
    assert_eq!(col_of_a(9), Some(7));
    assert_eq!(col_of_a(16), Some(0));
}
