//! The [`Position`] type: an integer grid coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// A discrete 2D grid coordinate.
///
/// Positions are plain values: two positions are equal when both
/// coordinates are equal, and they hash accordingly, so a `Position`
/// can be used directly as a map key.
///
/// # Examples
///
/// ```
/// use gridex_core::Position;
///
/// let p = Position::new(3, 4);
/// assert_eq!(p + (1, -1), Position::new(4, 3));
/// assert_eq!(p.to_string(), "(3, 4)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row-major flat index of this position in a grid `width` cells wide.
    ///
    /// Returns `None` for negative coordinates, for `x >= width`, and when
    /// the index would overflow `usize`.
    pub fn to_index(self, width: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        if x >= width {
            return None;
        }
        y.checked_mul(width)?.checked_add(x)
    }

    /// Inverse of [`to_index`](Self::to_index).
    ///
    /// Returns `None` if `width` is zero or a coordinate does not fit in
    /// an `i32`.
    pub fn from_index(index: usize, width: usize) -> Option<Self> {
        if width == 0 {
            return None;
        }
        let x = i32::try_from(index % width).ok()?;
        let y = i32::try_from(index / width).ok()?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

/// Offset by `(dx, dy)`. Coordinates wrap on `i32` overflow.
impl Add<(i32, i32)> for Position {
    type Output = Position;

    fn add(self, (dx, dy): (i32, i32)) -> Position {
        Position::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl Sub for Position {
    type Output = (i32, i32);

    /// The `(dx, dy)` delta that takes `rhs` to `self`, wrapping on
    /// overflow so that `rhs + (self - rhs) == self` always holds.
    fn sub(self, rhs: Position) -> (i32, i32) {
        (self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Position::new(1, 2), Position::from((1, 2)));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn display_formats_as_pair() {
        assert_eq!(Position::new(-3, 7).to_string(), "(-3, 7)");
    }

    #[test]
    fn offset_and_delta_are_inverse() {
        let a = Position::new(2, 5);
        let b = a + (4, -2);
        assert_eq!(b, Position::new(6, 3));
        assert_eq!(b - a, (4, -2));
    }

    #[test]
    fn offset_wraps_at_coordinate_limits() {
        let edge = Position::new(i32::MAX, i32::MIN);
        let past = edge + (1, -1);
        assert_eq!(past, Position::new(i32::MIN, i32::MAX));
        let far = Position::new(i32::MIN, 0);
        let delta = far - edge;
        assert_eq!(edge + delta, far);
    }

    #[test]
    fn to_index_is_row_major() {
        assert_eq!(Position::new(0, 0).to_index(10), Some(0));
        assert_eq!(Position::new(3, 2).to_index(10), Some(23));
        assert_eq!(Position::new(10, 0).to_index(10), None);
        assert_eq!(Position::new(-1, 0).to_index(10), None);
    }

    #[test]
    fn from_index_rejects_zero_width() {
        assert_eq!(Position::from_index(5, 0), None);
        assert_eq!(Position::from_index(23, 10), Some(Position::new(3, 2)));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn index_conversion_inverts(x in 0i32..500, y in 0i32..500, extra in 1usize..500) {
                let width = x as usize + extra;
                let p = Position::new(x, y);
                let idx = p.to_index(width).unwrap();
                prop_assert_eq!(Position::from_index(idx, width), Some(p));
            }
        }
    }
}
