//! Generic, graph-agnostic A* shortest-path search.
//!
//! This crate does not own any graph representation. Callers describe their
//! graph through [`Graph`] and pick one of the heuristic shapes; the crate
//! supplies the search itself:
//!
//! - **A\*** best-first search ([`astar`], [`Pathfinder::path`])
//! - **Dijkstra**, as A\* with the [`Uninformed`] heuristic ([`shortest_path`])
//! - heuristic helpers for planar nodes ([`manhattan`], [`chebyshev`],
//!   [`as_the_crow_flies`], [`on_line_to_goal`], [`straight_line`])
//!
//! A search is an iterator ([`Search`]) over the nodes of the cheapest path,
//! start first and goal last. Nothing runs until the first node is requested;
//! an unreachable goal yields an empty iterator.
//!
//! # Heuristic shapes
//!
//! | Shape | Closure signature |
//! |---|---|
//! | [`Uninformed`] | none, always zero |
//! | [`Simple`] | `(node, goal)` |
//! | [`WithContext`] | `(node, start, goal, predecessor)` |
//! | [`WithGrandparent`] | `(node, start, goal, predecessor, Option<grandparent>)` |

mod astar;
mod came_from;
mod distance;
mod frontier;
mod heuristic;
mod pathfinder;
mod traits;

pub use astar::{Search, astar, shortest_path};
pub use distance::{
    Distance, as_the_crow_flies, chebyshev, manhattan, on_line_to_goal, straight_line,
};
pub use heuristic::{
    Heuristic, HeuristicKind, Probe, Simple, Uninformed, WithContext, WithGrandparent,
};
pub use pathfinder::Pathfinder;
pub use traits::{Graph, Node, Planar};
