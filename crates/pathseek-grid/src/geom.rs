//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;
use std::ops::{Add, Sub};

use pathseek::Position;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. X grows right, Y grows down.
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

    /// The four cardinal neighbours (right, down, left, up).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(-1, 0),
            self.shift(0, -1),
        ]
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (L∞) distance.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Position for Point {
    /// Manhattan distance: admissible for 4-way moves with costs ≥ 1.
    fn heuristic_distance(&self, other: &Self) -> f32 {
        self.manhattan(*other) as f32
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

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a range from two corners, swapping coordinates so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range `[0, w) × [0, h)`.
    #[inline]
    pub fn sized(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of points in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major index of `p`, or `None` if outside.
    #[inline]
    pub(crate) fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Iterate all points in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, -2);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
        assert_eq!(a.heuristic_distance(&b), 7.0);
        assert_eq!(a.heuristic_distance(&a), 0.0);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let p = Point::new(3, 3);
        for n in p.neighbors_4() {
            assert_eq!(p.manhattan(n), 1);
        }
        assert_eq!(p + Point::new(1, -1) - p, Point::new(1, -1));
    }

    #[test]
    fn range_canonical_and_contains() {
        let r = Range::new(5, 4, 1, 0);
        assert_eq!(
            r,
            Range {
                min: Point::new(1, 0),
                max: Point::new(5, 4),
            }
        );
        assert_eq!(r.len(), 16);
        assert!(r.contains(Point::new(1, 0)));
        assert!(!r.contains(Point::new(5, 0)));
        assert!(!r.contains(Point::new(0, 0)));
        assert!(Range::new(2, 2, 2, 9).is_empty());
    }

    #[test]
    fn index_and_points_agree() {
        let r = Range::new(2, 3, 5, 5);
        let pts: Vec<Point> = r.points().collect();
        assert_eq!(pts.len(), r.len());
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(r.index(*p), Some(i));
        }
        assert_eq!(r.index(Point::new(0, 0)), None);
    }
}
