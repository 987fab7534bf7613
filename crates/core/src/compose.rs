//! Frame compositor: stamps every lane's sprite onto a copy of the background.
//!
//! This module is pure (no I/O). The background is only ever read.

use crate::grid::Grid;
use crate::motion;
use crate::types::LANE_WIDTH;
use crate::vehicle::Sprite;

/// What the compositor needs to draw one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    sprite: Sprite,
    speed: i64,
}

impl Lane {
    pub fn new(sprite: Sprite, speed: i64) -> Self {
        Self { sprite, speed }
    }

    /// Track length minus sprite width.
    pub fn runnable_length(&self, track_length: usize) -> usize {
        track_length.saturating_sub(self.sprite.width())
    }

    /// Offset of the sprite's left edge inside the border.
    pub fn position_at(&self, elapsed_ms: u64, track_length: usize) -> usize {
        motion::position(elapsed_ms, self.speed, self.runnable_length(track_length))
    }
}

/// Compose one frame into `out`, reusing its allocation.
///
/// Lane `i` occupies grid rows `i * LANE_WIDTH + 1 ..`; every row of a sprite
/// shares the same horizontal offset.
pub fn compose_into(background: &Grid, elapsed_ms: u64, lanes: &[Lane], out: &mut Grid) {
    out.copy_from(background);

    let track_length = background.width().saturating_sub(2);
    for (lane_idx, lane) in lanes.iter().enumerate() {
        let x = lane.position_at(elapsed_ms, track_length) + 1;
        for (r, row) in lane.sprite.rows().enumerate() {
            out.put_chars(x, lane_idx * LANE_WIDTH + r + 1, row);
        }
    }
}

/// Convenience helper that allocates a new frame.
pub fn compose(background: &Grid, elapsed_ms: u64, lanes: &[Lane]) -> Grid {
    let mut out = Grid::new(0, 0, ' ');
    compose_into(background, elapsed_ms, lanes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_track_grid;
    use crate::vehicle::body_from_rows;

    fn lane(rows: &[&str], speed: i64, track_length: usize) -> Lane {
        let sprite = Sprite::from_body(Some(body_from_rows(rows)), track_length).unwrap();
        Lane::new(sprite, speed)
    }

    #[test]
    fn stamps_sprite_after_border() {
        let bg = build_track_grid(10, 1);
        let frame = compose(&bg, 0, &[lane(&["ab"], 1000, 10)]);
        assert_eq!(frame.row_string(1).unwrap(), "│ab........│");
        assert_eq!(frame.row_string(2).unwrap(), "│..........│");
    }

    #[test]
    fn all_rows_share_one_offset() {
        let bg = build_track_grid(10, 1);
        let frame = compose(&bg, 3, &[lane(&["ab", "cdef", "g"], 1000, 10)]);
        // width of first row (2) sets runnable = 8, step 3 -> x = 3 + 1
        assert_eq!(frame.row_string(1).unwrap(), "│...ab.....│");
        assert_eq!(frame.row_string(2).unwrap(), "│...cdef...│");
        assert_eq!(frame.row_string(3).unwrap(), "│...g......│");
    }

    #[test]
    fn lanes_are_assigned_in_order() {
        let bg = build_track_grid(6, 2);
        let lanes = [lane(&["A"], 1000, 6), lane(&["B"], 1000, 6)];
        let frame = compose(&bg, 0, &lanes);
        assert_eq!(frame.get(1, 1), Some('A'));
        assert_eq!(frame.get(1, 4), Some('B'));
    }

    #[test]
    fn background_is_left_untouched() {
        let bg = build_track_grid(10, 1);
        let before = bg.clone();
        let lanes = [lane(&["xx", "yy", "zz"], 1000, 10)];
        let _ = compose(&bg, 1, &lanes);
        let _ = compose(&bg, 5, &lanes);
        assert_eq!(bg, before);
    }

    #[test]
    fn full_width_sprite_never_moves() {
        let bg = build_track_grid(3, 1);
        let frame = compose(&bg, 777, &[lane(&["abc"], 1000, 3)]);
        assert_eq!(frame.row_string(1).unwrap(), "│abc│");
    }
}
