use std::ops::{Add, Sub};

use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::traits::Planar;

/// Numeric type used for edge costs, accumulated path costs, heuristic
/// estimates and frontier priorities.
///
/// Implemented for every primitive integer and float. Values are expected to
/// be non-negative.
pub trait Distance: Copy + PartialOrd + Add<Output = Self> + Zero + One {}

impl<T> Distance for T where T: Copy + PartialOrd + Add<Output = T> + Zero + One {}

#[inline]
fn abs_diff<D: Distance + Sub<Output = D>>(a: D, b: D) -> D {
    if a >= b { a - b } else { b - a }
}

/// Euclidean distance between two points, always as `f64`.
///
/// Coordinates that cannot be represented as `f64` give infinity.
pub fn as_the_crow_flies<D, P>(a: &P, b: &P) -> f64
where
    D: Distance + Sub<Output = D> + ToPrimitive,
    P: Planar<D>,
{
    let dx = abs_diff(a.x(), b.x()).to_f64().unwrap_or(f64::INFINITY);
    let dy = abs_diff(a.y(), b.y()).to_f64().unwrap_or(f64::INFINITY);
    dx.hypot(dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan<D, P>(a: &P, b: &P) -> D
where
    D: Distance + Sub<Output = D>,
    P: Planar<D>,
{
    abs_diff(a.x(), b.x()) + abs_diff(a.y(), b.y())
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev<D, P>(a: &P, b: &P) -> D
where
    D: Distance + Sub<Output = D>,
    P: Planar<D>,
{
    let dx = abs_diff(a.x(), b.x());
    let dy = abs_diff(a.y(), b.y());
    if dx >= dy { dx } else { dy }
}

/// Deviation of `node` from the straight line joining `start` and `goal`.
///
/// This is the magnitude of the cross product of `node → goal` and
/// `start → goal`. It is a tie-breaking bias to add to another estimate, not
/// an admissible heuristic on its own.
pub fn on_line_to_goal<D, P>(node: &P, start: &P, goal: &P) -> D
where
    D: Distance + Signed,
    P: Planar<D>,
{
    let (gx, gy) = (goal.x(), goal.y());
    let (dx1, dy1) = (gx - node.x(), gy - node.y());
    let (dx2, dy2) = (gx - start.x(), gy - start.y());
    (dx1 * dy2 - dx2 * dy1).abs()
}

/// Multiplier favouring straight paths.
///
/// Returns `weight` when the path turns on its way into `node`, that is when
/// `grandparent` shares neither coordinate with `node`. Otherwise returns one.
pub fn straight_line<D, P>(weight: D, node: &P, grandparent: Option<&P>) -> D
where
    D: Distance,
    P: Planar<D>,
{
    match grandparent {
        Some(g) if g.x() != node.x() && g.y() != node.y() => weight,
        _ => D::one(),
    }
}
