use crate::astar::Search;
use crate::distance::Distance;
use crate::heuristic::{Heuristic, HeuristicKind, Uninformed};
use crate::traits::{Graph, Node};

/// A graph and a heuristic bound together for repeated searches.
///
/// ```
/// use pathstar::{Graph, Pathfinder, Simple};
///
/// struct Line;
///
/// impl Graph<i32, u32> for Line {
///     fn neighbors(&self, node: &i32) -> impl Iterator<Item = i32> {
///         [node - 1, node + 1].into_iter()
///     }
///     fn cost(&self, _from: &i32, _to: &i32) -> u32 {
///         1
///     }
/// }
///
/// let finder = Pathfinder::new(Line)
///     .with_heuristic(Simple::new(|n: &i32, g: &i32| n.abs_diff(*g)));
/// let path: Vec<i32> = finder.path(2, 5).collect();
/// assert_eq!(path, vec![2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct Pathfinder<G, H = Uninformed> {
    graph: G,
    heuristic: H,
}

impl<G> Pathfinder<G> {
    /// Bind `graph` with no heuristic.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            heuristic: Uninformed,
        }
    }
}

impl<G, H> Pathfinder<G, H> {
    /// Replace the heuristic, keeping the graph.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> Pathfinder<G, H2> {
        Pathfinder {
            graph: self.graph,
            heuristic,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Give the graph back.
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// The shape of the bound heuristic.
    pub fn heuristic_kind<N, D>(&self) -> HeuristicKind
    where
        H: Heuristic<N, D>,
    {
        H::KIND
    }

    /// Search for the cheapest path from `start` to `goal`.
    pub fn path<N, D>(&self, start: N, goal: N) -> Search<&G, &H, N, D>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        N: Node,
        D: Distance,
    {
        Search::new(&self.graph, &self.heuristic, start, goal)
    }
}
