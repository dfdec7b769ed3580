use std::iter::FusedIterator;
use std::mem;

use crate::came_from::CameFrom;
use crate::distance::Distance;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, HeuristicKind, Probe, Uninformed};
use crate::traits::{Graph, Node};

enum State<N, D> {
    Pending {
        frontier: Frontier<N, D>,
        came_from: CameFrom<N, D>,
    },
    Streaming(std::vec::IntoIter<N>),
}

/// A single A* search, consumed as an iterator over the cheapest path.
///
/// Creating a `Search` does no work. The first call to [`next`](Iterator::next)
/// runs the search to completion; the path nodes are then handed out one per
/// call, start first and goal last. If the goal cannot be reached the
/// iterator is empty.
///
/// Dropping the iterator early releases the frontier and predecessor map.
pub struct Search<G, H, N, D> {
    graph: G,
    heuristic: H,
    start: N,
    goal: N,
    state: State<N, D>,
    cost: Option<D>,
    expanded: usize,
}

/// Search for the cheapest path from `start` to `goal` guided by `heuristic`.
pub fn astar<G, H, N, D>(graph: G, start: N, goal: N, heuristic: H) -> Search<G, H, N, D>
where
    G: Graph<N, D>,
    H: Heuristic<N, D>,
    N: Node,
    D: Distance,
{
    Search::new(graph, heuristic, start, goal)
}

/// Search for the cheapest path from `start` to `goal` without a heuristic.
pub fn shortest_path<G, N, D>(graph: G, start: N, goal: N) -> Search<G, Uninformed, N, D>
where
    G: Graph<N, D>,
    N: Node,
    D: Distance,
{
    Search::new(graph, Uninformed, start, goal)
}

impl<G, H, N, D> Search<G, H, N, D>
where
    G: Graph<N, D>,
    H: Heuristic<N, D>,
    N: Node,
    D: Distance,
{
    pub(crate) fn new(graph: G, heuristic: H, start: N, goal: N) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(start.clone(), D::zero(), D::zero());
        Self {
            graph,
            heuristic,
            start,
            goal,
            state: State::Pending {
                frontier,
                came_from: CameFrom::new(),
            },
            cost: None,
            expanded: 0,
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Whether the search itself has run.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Streaming(_))
    }

    /// Total cost of the path found, once the search has run.
    ///
    /// `None` before the first call to `next` and when the goal is unreachable.
    pub fn cost(&self) -> Option<D> {
        self.cost
    }

    /// Number of frontier elements expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Remaining path nodes, running the search first if needed.
    pub fn into_path(self) -> Vec<N> {
        self.collect()
    }

    fn resolve(&mut self) {
        if let State::Pending {
            frontier,
            came_from,
        } = &mut self.state
        {
            let frontier = mem::replace(frontier, Frontier::new());
            let came_from = mem::replace(came_from, CameFrom::new());
            let path = self.run(frontier, came_from);
            self.state = State::Streaming(path.into_iter());
        }
    }

    fn run(&mut self, mut frontier: Frontier<N, D>, mut came_from: CameFrom<N, D>) -> Vec<N> {
        while let Some(current) = frontier.pop() {
            // Skip elements superseded by a cheaper route.
            if came_from
                .cost_of(&current.node)
                .is_some_and(|c| c < current.cost)
            {
                continue;
            }
            self.expanded += 1;

            if current.node == self.goal {
                let path = came_from.path_to(&self.start, &self.goal);
                self.cost = Some(current.cost);
                log::debug!(
                    "astar: path of {} nodes found after {} expansions ({} discovered, frontier peak {})",
                    path.len(),
                    self.expanded,
                    came_from.len(),
                    frontier.peak(),
                );
                return path;
            }

            let grandparent = if <H as Heuristic<N, D>>::KIND == HeuristicKind::WithGrandparent {
                came_from.predecessor_of(&current.node).cloned()
            } else {
                None
            };

            let mut relaxed = 0usize;
            for next in self.graph.neighbors(&current.node) {
                // Nothing beats the zero-cost start.
                if next == self.start {
                    continue;
                }
                let next_cost = current.cost + self.graph.cost(&current.node, &next);
                if !came_from.relax(&next, &current.node, next_cost) {
                    continue;
                }
                let estimate = self.heuristic.estimate(&Probe {
                    node: &next,
                    start: &self.start,
                    goal: &self.goal,
                    predecessor: &current.node,
                    grandparent: grandparent.as_ref(),
                });
                frontier.push(next, next_cost + estimate, next_cost);
                relaxed += 1;
            }
            log::trace!(
                "astar: expansion {} relaxed {} neighbors, frontier at {}",
                self.expanded,
                relaxed,
                frontier.len(),
            );
        }

        log::debug!(
            "astar: goal unreachable after {} expansions ({} discovered)",
            self.expanded,
            came_from.len(),
        );
        Vec::new()
    }
}

impl<G, H, N, D> Iterator for Search<G, H, N, D>
where
    G: Graph<N, D>,
    H: Heuristic<N, D>,
    N: Node,
    D: Distance,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.resolve();
        match &mut self.state {
            State::Streaming(path) => path.next(),
            State::Pending { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Streaming(path) => path.size_hint(),
            State::Pending { .. } => (0, None),
        }
    }
}

impl<G, H, N, D> FusedIterator for Search<G, H, N, D>
where
    G: Graph<N, D>,
    H: Heuristic<N, D>,
    N: Node,
    D: Distance,
{
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::distance::manhattan;
    use crate::heuristic::{Simple, WithContext, WithGrandparent};
    use crate::traits::Planar;

    /// Directed graph given as an adjacency list.
    #[derive(Default)]
    struct Digraph {
        edges: HashMap<u32, Vec<(u32, u32)>>,
        calls: Cell<usize>,
    }

    impl Digraph {
        fn with(edges: &[(u32, u32, u32)]) -> Self {
            let mut g = Self::default();
            for &(a, b, w) in edges {
                g.edges.entry(a).or_default().push((b, w));
            }
            g
        }
    }

    impl Graph<u32, u32> for Digraph {
        fn neighbors(&self, node: &u32) -> impl Iterator<Item = u32> {
            self.calls.set(self.calls.get() + 1);
            self.edges
                .get(node)
                .into_iter()
                .flatten()
                .map(|&(to, _)| to)
        }

        fn cost(&self, from: &u32, to: &u32) -> u32 {
            self.edges[from]
                .iter()
                .filter(|&&(t, _)| t == *to)
                .map(|&(_, w)| w)
                .min()
                .unwrap()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Xy(i32, i32);

    impl Planar<i32> for Xy {
        fn x(&self) -> i32 {
            self.0
        }
        fn y(&self) -> i32 {
            self.1
        }
    }

    /// 4-connected grid with per-edge weights; missing edges are walls.
    struct Lattice {
        w: i32,
        h: i32,
        weights: HashMap<(Xy, Xy), i32>,
        scale: i32,
    }

    impl Lattice {
        fn random(rng: &mut StdRng, w: i32, h: i32) -> Self {
            let mut weights = HashMap::new();
            for y in 0..h {
                for x in 0..w {
                    let a = Xy(x, y);
                    for b in [Xy(x + 1, y), Xy(x, y + 1)] {
                        if b.0 >= w || b.1 >= h || rng.random_bool(0.2) {
                            continue;
                        }
                        weights.insert((a, b), rng.random_range(1..10));
                        weights.insert((b, a), rng.random_range(1..10));
                    }
                }
            }
            Self {
                w,
                h,
                weights,
                scale: 1,
            }
        }

        fn nodes(&self) -> impl Iterator<Item = Xy> + '_ {
            (0..self.h).flat_map(move |y| (0..self.w).map(move |x| Xy(x, y)))
        }

        /// Cheapest cost from `start` to every reachable node, by repeated
        /// relaxation until nothing changes.
        fn reference(&self, start: Xy) -> HashMap<Xy, i32> {
            let mut dist = HashMap::from([(start, 0)]);
            loop {
                let mut changed = false;
                for (&(a, b), &w) in &self.weights {
                    let Some(&da) = dist.get(&a) else { continue };
                    let nd = da + w * self.scale;
                    if dist.get(&b).is_none_or(|&db| nd < db) {
                        dist.insert(b, nd);
                        changed = true;
                    }
                }
                if !changed {
                    return dist;
                }
            }
        }
    }

    impl Graph<Xy, i32> for Lattice {
        fn neighbors(&self, node: &Xy) -> impl Iterator<Item = Xy> {
            let Xy(x, y) = *node;
            [Xy(x, y - 1), Xy(x + 1, y), Xy(x, y + 1), Xy(x - 1, y)]
                .into_iter()
                .filter(move |&n| self.weights.contains_key(&(Xy(x, y), n)))
        }

        fn cost(&self, from: &Xy, to: &Xy) -> i32 {
            self.weights[&(*from, *to)] * self.scale
        }
    }

    fn path_cost<G: Graph<N, D>, N, D: Distance>(g: &G, path: &[N]) -> D {
        path.windows(2)
            .fold(D::zero(), |acc, w| acc + g.cost(&w[0], &w[1]))
    }

    #[test]
    fn start_equals_goal() {
        let g = Digraph::with(&[(1, 2, 1)]);
        let mut s = shortest_path(&g, 1, 1);
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), None);
        assert_eq!(s.cost(), Some(0));
    }

    #[test]
    fn straight_chain() {
        let g = Digraph::with(&[(0, 1, 2), (1, 2, 3), (2, 3, 4)]);
        let path: Vec<_> = shortest_path(&g, 0, 3).collect();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let g = Digraph::with(&[(0, 1, 1), (1, 0, 1), (2, 3, 1)]);
        let mut s = shortest_path(&g, 0, 3);
        assert_eq!(s.next(), None);
        assert!(s.is_finished());
        assert_eq!(s.cost(), None);
        assert_eq!(s.expanded(), 2);
    }

    #[test]
    fn edges_are_directed() {
        let g = Digraph::with(&[(0, 1, 1)]);
        assert_eq!(shortest_path(&g, 0, 1).into_path(), vec![0, 1]);
        assert!(shortest_path(&g, 1, 0).into_path().is_empty());
    }

    #[test]
    fn prefers_cheaper_longer_route() {
        // 0 -> 4 directly costs 10; the detour through 1, 2, 3 costs 4.
        let g = Digraph::with(&[(0, 4, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let mut s = shortest_path(&g, 0, 4);
        let path: Vec<_> = s.by_ref().collect();
        assert_eq!(path, vec![0, 1, 2, 3, 4]);
        assert_eq!(s.cost(), Some(4));
    }

    #[test]
    fn later_cheaper_route_overwrites_predecessor() {
        // 3 is first discovered through 1 (cost 1 + 5), then through 2
        // (cost 4 + 1). The stale frontier copy must not win.
        let g = Digraph::with(&[(0, 1, 1), (0, 2, 4), (1, 3, 5), (2, 3, 1), (3, 9, 1)]);
        let mut s = shortest_path(&g, 0, 9);
        assert_eq!(s.by_ref().collect::<Vec<_>>(), vec![0, 2, 3, 9]);
        assert_eq!(s.cost(), Some(6));
    }

    #[test]
    fn cycles_back_into_start() {
        let g = Digraph::with(&[(0, 1, 1), (1, 0, 1), (1, 2, 1), (2, 0, 0)]);
        assert_eq!(shortest_path(&g, 0, 2).into_path(), vec![0, 1, 2]);
    }

    #[test]
    fn search_is_lazy() {
        let g = Digraph::with(&[(0, 1, 1), (1, 2, 1)]);
        let mut s = shortest_path(&g, 0, 2);
        assert_eq!(g.calls.get(), 0);
        assert!(!s.is_finished());
        assert_eq!(s.size_hint(), (0, None));

        assert_eq!(s.next(), Some(0));
        assert!(s.is_finished());
        let calls = g.calls.get();
        assert!(calls > 0);
        assert_eq!(s.size_hint(), (2, Some(2)));

        // Streaming does not touch the graph again.
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), Some(2));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
        assert_eq!(g.calls.get(), calls);
    }

    #[test]
    fn dropping_unstarted_search_does_nothing() {
        let g = Digraph::with(&[(0, 1, 1)]);
        drop(shortest_path(&g, 0, 1));
        assert_eq!(g.calls.get(), 0);
    }

    #[test]
    fn float_costs() {
        struct Line;
        impl Graph<i32, f64> for Line {
            fn neighbors(&self, node: &i32) -> impl Iterator<Item = i32> {
                [node - 1, node + 1].into_iter().filter(|n| (0..=5).contains(n))
            }
            fn cost(&self, _from: &i32, to: &i32) -> f64 {
                0.5 * *to as f64
            }
        }
        let h = Simple::new(|n: &i32, g: &i32| (g - n).abs() as f64 * 0.5);
        let mut s = astar(Line, 1, 4, h);
        assert_eq!(s.by_ref().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(s.cost(), Some(4.5));
    }

    #[test]
    fn grandparent_is_passed_from_predecessor_map() {
        let g = Digraph::with(&[(0, 1, 1), (1, 2, 1)]);
        let seen = RefCell::new(Vec::new());
        let h = WithGrandparent::new(
            |n: &u32, s: &u32, goal: &u32, p: &u32, gp: Option<&u32>| {
                seen.borrow_mut().push((*n, *s, *goal, *p, gp.copied()));
                0u32
            },
        );
        assert_eq!(astar(&g, 0, 2, &h).into_path(), vec![0, 1, 2]);
        assert_eq!(
            *seen.borrow(),
            vec![(1, 0, 2, 0, None), (2, 0, 2, 1, Some(0))]
        );
    }

    #[test]
    fn context_heuristic_sees_start_and_predecessor() {
        let g = Digraph::with(&[(5, 6, 1), (6, 7, 1)]);
        let seen = RefCell::new(Vec::new());
        let h = WithContext::new(|n: &u32, s: &u32, goal: &u32, p: &u32| {
            seen.borrow_mut().push((*n, *s, *goal, *p));
            0u32
        });
        astar(&g, 5, 7, h).for_each(drop);
        assert_eq!(*seen.borrow(), vec![(6, 5, 7, 5), (7, 5, 7, 6)]);
    }

    #[test]
    fn heuristic_steers_expansion_order() {
        // Two branches from 0; only branch 2 leads to the goal.
        let g = Digraph::with(&[(0, 1, 1), (0, 2, 1), (1, 3, 1), (3, 4, 1), (2, 9, 1)]);
        let mut blind = shortest_path(&g, 0, 9);
        blind.by_ref().for_each(drop);
        let guide = Simple::new(|n: &u32, _g: &u32| if *n == 2 || *n == 9 { 0 } else { 5 });
        let mut guided = astar(&g, 0, 9, guide);
        assert_eq!(guided.by_ref().collect::<Vec<_>>(), vec![0, 2, 9]);
        assert!(guided.expanded() < blind.expanded());
        assert_eq!(guided.cost(), blind.cost());
    }

    #[test]
    fn random_lattices_match_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let lat = Lattice::random(&mut rng, 6, 5);
            let start = Xy(rng.random_range(0..6), rng.random_range(0..5));
            let reference = lat.reference(start);
            for goal in lat.nodes() {
                let expected = reference.get(&goal).copied();

                let simple = Simple::new(|n: &Xy, g: &Xy| manhattan::<i32, _>(n, g));
                let ctx = WithContext::new(|n: &Xy, _s: &Xy, g: &Xy, _p: &Xy| {
                    manhattan::<i32, _>(n, g)
                });
                let gp = WithGrandparent::new(
                    |n: &Xy, _s: &Xy, g: &Xy, _p: &Xy, _gp: Option<&Xy>| manhattan::<i32, _>(n, g),
                );

                let runs = [
                    {
                        let mut s = shortest_path(&lat, start, goal);
                        (s.by_ref().collect::<Vec<_>>(), s.cost())
                    },
                    {
                        let mut s = astar(&lat, start, goal, simple);
                        (s.by_ref().collect::<Vec<_>>(), s.cost())
                    },
                    {
                        let mut s = astar(&lat, start, goal, ctx);
                        (s.by_ref().collect::<Vec<_>>(), s.cost())
                    },
                    {
                        let mut s = astar(&lat, start, goal, gp);
                        (s.by_ref().collect::<Vec<_>>(), s.cost())
                    },
                ];

                for (path, cost) in runs {
                    assert_eq!(cost, expected);
                    match expected {
                        None => assert!(path.is_empty()),
                        Some(c) => {
                            assert_eq!(path.first(), Some(&start));
                            assert_eq!(path.last(), Some(&goal));
                            assert_eq!(path_cost(&lat, &path), c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn scaling_costs_preserves_path() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut lat = Lattice::random(&mut rng, 5, 5);
            let start = Xy(0, 0);
            let goal = Xy(4, 4);
            let base = shortest_path(&lat, start, goal).into_path();
            let base_cost = path_cost(&lat, &base);
            lat.scale = 3;
            let mut scaled = shortest_path(&lat, start, goal);
            assert_eq!(scaled.by_ref().collect::<Vec<_>>(), base);
            if !base.is_empty() {
                assert_eq!(scaled.cost(), Some(3 * base_cost));
            }
        }
    }
}
