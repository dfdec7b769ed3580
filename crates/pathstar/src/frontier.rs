use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered node waiting in the frontier.
///
/// `cost` is the exact cost of the route that discovered it, `priority` adds
/// the heuristic estimate. The same node may sit in the frontier several
/// times; the copies superseded by a cheaper route are skipped when popped.
pub(crate) struct FrontierElem<N, D> {
    pub(crate) node: N,
    pub(crate) priority: D,
    pub(crate) cost: D,
    seq: u64,
}

impl<N, D: PartialOrd> Ord for FrontierElem<N, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // then the earliest pushed among equals. Incomparable priorities
        // (NaN) fall through to insertion order.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, D: PartialOrd> PartialOrd for FrontierElem<N, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, D: PartialOrd> PartialEq for FrontierElem<N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, D: PartialOrd> Eq for FrontierElem<N, D> {}

/// Min-priority queue of discovered nodes.
///
/// Ties between equal priorities are broken by insertion order: the element
/// pushed first is popped first.
pub(crate) struct Frontier<N, D> {
    heap: BinaryHeap<FrontierElem<N, D>>,
    next_seq: u64,
    peak: usize,
}

impl<N, D: PartialOrd> Frontier<N, D> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            peak: 0,
        }
    }

    pub(crate) fn push(&mut self, node: N, priority: D, cost: D) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierElem {
            node,
            priority,
            cost,
            seq,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierElem<N, D>> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier reached.
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}
