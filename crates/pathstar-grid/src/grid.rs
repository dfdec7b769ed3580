//! A terrain grid.
//!
//! [`Cell`] describes one square of terrain; [`Grid`] stores a rectangle of
//! them in row-major order.

use crate::geom::{Bounds, Point};

/// Terrain of a single grid square.
///
/// `Wall` is impassable. `Floor(w)` is passable, and entering it costs `w`
/// (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    Floor(u8),
}

impl Cell {
    /// Plain floor, cost 1.
    pub const FLOOR: Self = Self::Floor(1);

    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, Self::Floor(_))
    }

    /// Cost of entering this cell, or `None` for walls.
    #[inline]
    pub fn weight(self) -> Option<u8> {
        match self {
            Self::Wall => None,
            Self::Floor(w) => Some(w),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::FLOOR
    }
}

/// Terrain squares stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// A `width` x `height` grid of plain floor.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            cells: vec![Cell::FLOOR; bounds.area()],
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Terrain at `p`; `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Overwrite the terrain at `p`. Points outside the grid are ignored.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index_of(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// How many squares hold exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Squares with their terrain, in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.points().zip(self.cells.iter().copied())
    }
}
