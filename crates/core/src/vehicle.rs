//! Vehicle capability and the validated sprite a track keeps for each lane.
//!
//! A vehicle only has to answer two questions: what it looks like and how
//! fast it goes. The track checks both once, when the vehicle is added, and
//! stores the body as a [`Sprite`] so rendering never has to ask again.

use arrayvec::ArrayVec;

use crate::error::{Dimension, VehicleError};
use crate::types::LANE_WIDTH;

/// Rows of a vehicle body, top to bottom.
pub type Body = Vec<Vec<char>>;

/// Anything that can drive on a circuit.
pub trait Vehicle {
    /// The sprite rows, or `None` when the vehicle has no shape.
    ///
    /// Must return the same rows every time it is called.
    fn body(&self) -> Option<Body>;

    /// Cells per second, scaled so that [`MAX_SPEED`](crate::types::MAX_SPEED)
    /// moves one cell every millisecond.
    fn speed(&self) -> i64;
}

/// Build a [`Body`] from string rows.
pub fn body_from_rows(rows: &[&str]) -> Body {
    rows.iter().map(|row| row.chars().collect()).collect()
}

/// A vehicle body that passed the lane and track size checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: ArrayVec<Box<[char]>, LANE_WIDTH>,
}

impl Sprite {
    /// Validate `body` against the lane width and `track_length`.
    ///
    /// Checks run in order: presence, row count, then each row's length.
    pub fn from_body(body: Option<Body>, track_length: usize) -> Result<Self, VehicleError> {
        let body = body.ok_or(VehicleError::NullInput)?;

        if body.is_empty() || body.len() > LANE_WIDTH {
            return Err(VehicleError::InvalidDimensions(Dimension::Height {
                rows: body.len(),
                lane_width: LANE_WIDTH,
            }));
        }

        let mut rows = ArrayVec::new();
        for (row, chars) in body.into_iter().enumerate() {
            let len = chars.len();
            if len == 0 || len > track_length {
                return Err(VehicleError::InvalidDimensions(Dimension::Length {
                    row,
                    len,
                    track_length,
                }));
            }
            rows.push(chars.into_boxed_slice());
        }

        Ok(Self { rows })
    }

    /// Width of the first row, used as the sprite's width for motion.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(|row| &row[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rows_up_to_track_length() {
        let sprite = Sprite::from_body(Some(body_from_rows(&["ab", "cd", "ef"])), 2).unwrap();
        assert_eq!(sprite.width(), 2);
        assert_eq!(sprite.height(), 3);
        assert_eq!(sprite.rows().next(), Some(&['a', 'b'][..]));
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let sprite = Sprite::from_body(Some(body_from_rows(&["ⓞ┉╯"])), 3).unwrap();
        assert_eq!(sprite.width(), 3);
    }

    #[test]
    fn absent_body_is_null_input() {
        assert_eq!(Sprite::from_body(None, 10), Err(VehicleError::NullInput));
    }

    #[test]
    fn height_is_checked_before_row_length() {
        let body = body_from_rows(&["", "", "", ""]);
        assert_eq!(
            Sprite::from_body(Some(body), 10),
            Err(VehicleError::InvalidDimensions(Dimension::Height {
                rows: 4,
                lane_width: 3
            }))
        );
    }

    #[test]
    fn reports_first_bad_row() {
        let body = body_from_rows(&["ab", "abcdef"]);
        assert_eq!(
            Sprite::from_body(Some(body), 5),
            Err(VehicleError::InvalidDimensions(Dimension::Length {
                row: 1,
                len: 6,
                track_length: 5
            }))
        );
    }
}
