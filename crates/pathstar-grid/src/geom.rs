//! Grid coordinates: [`Point`] and the [`Bounds`] of a map.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use pathstar::Planar;

/// A square on the map. `x` is the column, `y` the row, counted from the
/// top-left corner the way the text is written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The square `dx` columns and `dy` rows away.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Reading order: row first, then column.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
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
    fn add(self, step: Self) -> Self {
        self.shift(step.x, step.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, origin: Self) -> Self {
        self.shift(-origin.x, -origin.y)
    }
}

impl<D: From<i32>> Planar<D> for Point {
    #[inline]
    fn x(&self) -> D {
        D::from(self.x)
    }

    #[inline]
    fn y(&self) -> D {
        D::from(self.y)
    }
}

/// Width and height of a map anchored at (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Number of squares.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.area() == 0
    }

    /// Row-major offset of `p`, if it lies inside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Every square in reading order.
    pub fn points(self) -> impl ExactSizeIterator<Item = Point> + Clone {
        let width = self.width.max(1);
        (0..self.area() as i32).map(move |i| Point::new(i % width, i / width))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
