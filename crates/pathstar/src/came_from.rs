use std::collections::HashMap;

use crate::traits::Node;

/// Cheapest known way to reach a node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<N, D> {
    pub(crate) predecessor: N,
    pub(crate) cost: D,
}

/// Predecessor map of a single search.
///
/// The search never records an entry for its start node; path reconstruction
/// stops at the start without reading it.
pub(crate) struct CameFrom<N, D> {
    entries: HashMap<N, Entry<N, D>>,
}

impl<N: Node, D: Copy + PartialOrd> CameFrom<N, D> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn cost_of(&self, node: &N) -> Option<D> {
        self.entries.get(node).map(|e| e.cost)
    }

    pub(crate) fn predecessor_of(&self, node: &N) -> Option<&N> {
        self.entries.get(node).map(|e| &e.predecessor)
    }

    /// Record `predecessor` as the way into `node` if there is no entry yet or
    /// `cost` is strictly cheaper than the recorded one. Returns whether the
    /// entry changed.
    pub(crate) fn relax(&mut self, node: &N, predecessor: &N, cost: D) -> bool {
        if let Some(entry) = self.entries.get_mut(node) {
            if cost < entry.cost {
                entry.predecessor = predecessor.clone();
                entry.cost = cost;
                return true;
            }
            return false;
        }
        self.entries.insert(
            node.clone(),
            Entry {
                predecessor: predecessor.clone(),
                cost,
            },
        );
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Walk back from `goal` to `start` and return the route in travel order,
    /// both endpoints included.
    ///
    /// Returns an empty vector if the chain is broken, which only happens when
    /// `goal` was never reached.
    pub(crate) fn path_to(&self, start: &N, goal: &N) -> Vec<N> {
        let mut path = Vec::new();
        let mut cur = goal.clone();
        while cur != *start {
            let Some(entry) = self.entries.get(&cur) else {
                return Vec::new();
            };
            let prev = entry.predecessor.clone();
            path.push(std::mem::replace(&mut cur, prev));
        }
        path.push(cur);
        path.reverse();
        path
    }
}
