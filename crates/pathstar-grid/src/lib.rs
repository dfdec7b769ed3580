//! **pathstar-grid** — integer grids and ASCII-art maps for `pathstar`.
//!
//! This crate provides the grid types the search is usually exercised on:
//! geometry primitives, a terrain grid, and [`AsciiMap`], which parses a text
//! drawing and implements [`pathstar::Graph`] so it can be searched directly.
//!
//! ```
//! use pathstar::{Simple, astar, manhattan};
//! use pathstar_grid::{AsciiMap, Point};
//!
//! let map = AsciiMap::parse("S.#\n..G").unwrap();
//! let h = Simple::new(|n: &Point, g: &Point| manhattan::<i32, _>(n, g));
//! let path: Vec<Point> = astar(&map, map.start().unwrap(), map.goal().unwrap(), h).collect();
//! assert_eq!(map.render(&path), "S*#\n.*G");
//! ```

pub mod geom;
pub mod grid;
pub mod map;

pub use geom::{Bounds, Point};
pub use grid::{Cell, Grid};
pub use map::{AsciiMap, MapError, Movement};
