//! Geometry primitives: [`Point`] and [`Direction`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
///
/// `Point` is `Copy + Eq + Hash` and is used directly as a map/set key;
/// there is no string encoding of positions anywhere in this workspace.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four orthogonal neighbours, in order: left, right, up, down.
    ///
    /// The order is fixed so that neighbor expansion is reproducible.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
        ]
    }

    /// All eight neighbours: the four orthogonal (same order as
    /// [`neighbors_4`](Point::neighbors_4)) followed by up-left, up-right,
    /// down-right, down-left.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major order: by `y`, then by `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal facing direction.
///
/// Used as part of the search state in direction-sensitive searches
/// (e.g. a walk where turning in place has its own cost).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The unit delta for one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The point one step from `p` in this direction.
    #[inline]
    pub const fn step(self, p: Point) -> Point {
        let d = self.delta();
        Point::new(p.x + d.x, p.y + d.y)
    }

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub const fn rotate_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        self.rotate_left().rotate_left()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
        assert_eq!(a.shift(1, -1), Point::new(2, 1));
    }

    #[test]
    fn point_row_major_order() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 0), Point::new(2, 0)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(2, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn neighbors_4_order() {
        let n = Point::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(5, 6),
            ]
        );
    }

    #[test]
    fn neighbors_8_extends_orthogonal() {
        let n = Point::new(5, 5).neighbors_8();
        // First four match neighbors_4, diagonals appended.
        assert_eq!(&n[..4], &Point::new(5, 5).neighbors_4());
        assert_eq!(
            &n[4..],
            &[
                Point::new(4, 4),
                Point::new(6, 4),
                Point::new(6, 6),
                Point::new(4, 6),
            ]
        );
    }

    #[test]
    fn direction_step() {
        let p = Point::new(3, 3);
        assert_eq!(Direction::Up.step(p), Point::new(3, 2));
        assert_eq!(Direction::Right.step(p), Point::new(4, 3));
        assert_eq!(Direction::Down.step(p), Point::new(3, 4));
        assert_eq!(Direction::Left.step(p), Point::new(2, 3));
    }

    #[test]
    fn direction_rotations() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_left().rotate_right(), d);
            assert_eq!(d.rotate_right().rotate_right().rotate_right().rotate_right(), d);
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::Up.rotate_right(), Direction::Right);
        assert_eq!(Direction::Up.rotate_left(), Direction::Left);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn direction_round_trip() {
        for d in Direction::ALL {
            let json = serde_json::to_string(&d).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }
}
