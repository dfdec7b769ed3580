use std::hash::Hash;

/// Identity of a graph node.
///
/// Blanket-implemented for every `Clone + Eq + Hash` type, so plain integers,
/// tuples and small coordinate structs work out of the box.
pub trait Node: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Node for T {}

/// Caller-owned graph: neighbor enumeration and edge costs.
pub trait Graph<N, D> {
    /// Nodes directly reachable from `node`.
    ///
    /// The sequence must be finite for every node a search actually reaches.
    fn neighbors(&self, node: &N) -> impl Iterator<Item = N>;

    /// Cost of moving from `from` to adjacent `to`. Must be >= 0 and must not
    /// change during a search.
    fn cost(&self, from: &N, to: &N) -> D;
}

impl<G: Graph<N, D>, N, D> Graph<N, D> for &G {
    fn neighbors(&self, node: &N) -> impl Iterator<Item = N> {
        (**self).neighbors(node)
    }

    fn cost(&self, from: &N, to: &N) -> D {
        (**self).cost(from, to)
    }
}

/// Two-dimensional coordinates, as consumed by the heuristic helpers.
pub trait Planar<D> {
    fn x(&self) -> D;
    fn y(&self) -> D;
}
