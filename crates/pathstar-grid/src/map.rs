//! Maps drawn as ASCII art.
//!
//! An [`AsciiMap`] parses text such as
//!
//! ```text
//! S..#
//! .#.#
//! ...G
//! ```
//!
//! into a [`Grid`] and implements [`pathstar::Graph`] over it, so the search
//! can run directly on the drawing.
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | floor, cost 1 |
//! | `1`–`9` | floor, cost = digit |
//! | `S` | start marker on floor |
//! | `G` | goal marker on floor |

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use pathstar::{Distance, Graph};

use crate::geom::{Bounds, Point};
use crate::grid::{Cell, Grid};

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const OCTILE: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
];

/// Which squares count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// Cardinal plus diagonals. A diagonal step needs both squares it passes
    /// between to be passable.
    Octile,
}

/// A terrain grid parsed from ASCII art, with optional start and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    grid: Grid,
    start: Option<Point>,
    goal: Option<Point>,
    movement: Movement,
}

impl AsciiMap {
    /// Parse a map. See the [module docs](self) for the legend.
    ///
    /// Leading and trailing whitespace of the whole text is ignored; every
    /// line must have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        let mut grid = Grid::new(width as i32, lines.len() as i32);
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::FLOOR,
                    '1'..='9' => Cell::Floor(ch as u8 - b'0'),
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if let Some(first) = *slot {
                            return Err(MapError::DuplicateMarker {
                                marker: ch,
                                first,
                                second: pos,
                            });
                        }
                        *slot = Some(pos);
                        Cell::FLOOR
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos }),
                };
                grid.set(pos, cell);
            }
        }

        Ok(Self {
            grid,
            start,
            goal,
            movement: Movement::default(),
        })
    }

    /// Wrap an existing grid, without markers.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            goal: None,
            movement: Movement::default(),
        }
    }

    /// Use `movement` for neighbor enumeration.
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether `p` is inside the map and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(Cell::is_passable)
    }

    /// Cost of entering `p`, or `None` for walls and out-of-bounds squares.
    pub fn weight(&self, p: Point) -> Option<u8> {
        self.grid.at(p).and_then(Cell::weight)
    }

    pub fn set_wall(&mut self, p: Point) {
        self.grid.set(p, Cell::Wall);
    }

    fn can_step(&self, from: Point, to: Point) -> bool {
        if !self.is_passable(to) {
            return false;
        }
        let d = to - from;
        d.x == 0
            || d.y == 0
            || (self.is_passable(from.shift(d.x, 0)) && self.is_passable(from.shift(0, d.y)))
    }

    /// Draw the map back as text, marking `path` with `*`.
    ///
    /// The `S` and `G` markers stay visible on top of the path.
    pub fn render(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.grid.bounds().area() + self.grid.height() as usize);
        for (p, cell) in self.grid.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            let ch = if Some(p) == self.start {
                'S'
            } else if Some(p) == self.goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else {
                match cell {
                    Cell::Wall => '#',
                    Cell::Floor(1) => '.',
                    Cell::Floor(w) => char::from_digit(u32::from(w.min(9)), 10).unwrap_or('?'),
                }
            };
            out.push(ch);
        }
        out
    }
}

impl FromStr for AsciiMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

impl<D: Distance + From<u8>> Graph<Point, D> for AsciiMap {
    fn neighbors(&self, node: &Point) -> impl Iterator<Item = Point> {
        let dirs: &[Point] = match self.movement {
            Movement::Cardinal => &CARDINAL,
            Movement::Octile => &OCTILE,
        };
        let from = *node;
        dirs.iter()
            .map(move |&d| from + d)
            .filter(move |&to| self.can_step(from, to))
    }

    /// Entering a square costs its weight, diagonals included.
    fn cost(&self, _from: &Point, to: &Point) -> D {
        self.weight(*to).map_or_else(D::zero, D::from)
    }
}

/// Errors that can occur when parsing an [`AsciiMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text holds no map at all.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the legend.
    InvalidRune { ch: char, pos: Point },
    /// `S` or `G` appears more than once.
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(f, "map: marker {marker} at {second} already placed at {first}"),
        }
    }
}

impl std::error::Error for MapError {}
