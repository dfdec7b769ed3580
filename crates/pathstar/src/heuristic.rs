//! Heuristic shapes.
//!
//! A heuristic estimates the remaining cost from a node to the goal. Callers
//! wrap a closure in the shape matching the context it needs; the search is
//! monomorphized over the shape, so the choice is made once per search type
//! rather than per expanded node.

use crate::distance::Distance;

/// The context a heuristic shape consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Uninformed,
    Simple,
    WithContext,
    WithGrandparent,
}

/// Everything the search knows when estimating `node`.
#[derive(Debug)]
pub struct Probe<'a, N> {
    /// Node being estimated.
    pub node: &'a N,
    pub start: &'a N,
    pub goal: &'a N,
    /// Node the search is expanding, through which `node` was reached.
    pub predecessor: &'a N,
    /// Predecessor of `predecessor`, if it has one. Only looked up for
    /// [`WithGrandparent`].
    pub grandparent: Option<&'a N>,
}

mod sealed {
    pub trait Sealed {}
}

/// Remaining-cost estimate. Implemented by the four shapes of this module.
pub trait Heuristic<N, D>: sealed::Sealed {
    const KIND: HeuristicKind;

    fn estimate(&self, probe: &Probe<'_, N>) -> D;
}

/// Always estimates zero; the search then behaves like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninformed;

/// `f(node, goal)`.
#[derive(Debug, Clone, Copy)]
pub struct Simple<F>(pub F);

/// `f(node, start, goal, predecessor)`.
#[derive(Debug, Clone, Copy)]
pub struct WithContext<F>(pub F);

/// `f(node, start, goal, predecessor, grandparent)`.
#[derive(Debug, Clone, Copy)]
pub struct WithGrandparent<F>(pub F);

impl<F> Simple<F> {
    /// Wrap `f`, fixing its argument types for closure inference.
    pub fn new<N, D>(f: F) -> Self
    where
        F: Fn(&N, &N) -> D,
    {
        Self(f)
    }
}

impl<F> WithContext<F> {
    /// Wrap `f`, fixing its argument types for closure inference.
    pub fn new<N, D>(f: F) -> Self
    where
        F: Fn(&N, &N, &N, &N) -> D,
    {
        Self(f)
    }
}

impl<F> WithGrandparent<F> {
    /// Wrap `f`, fixing its argument types for closure inference.
    pub fn new<N, D>(f: F) -> Self
    where
        F: Fn(&N, &N, &N, &N, Option<&N>) -> D,
    {
        Self(f)
    }
}

impl sealed::Sealed for Uninformed {}
impl<F> sealed::Sealed for Simple<F> {}
impl<F> sealed::Sealed for WithContext<F> {}
impl<F> sealed::Sealed for WithGrandparent<F> {}
impl<H: sealed::Sealed> sealed::Sealed for &H {}

impl<N, D: Distance> Heuristic<N, D> for Uninformed {
    const KIND: HeuristicKind = HeuristicKind::Uninformed;

    #[inline]
    fn estimate(&self, _probe: &Probe<'_, N>) -> D {
        D::zero()
    }
}

impl<N, D, F> Heuristic<N, D> for Simple<F>
where
    F: Fn(&N, &N) -> D,
{
    const KIND: HeuristicKind = HeuristicKind::Simple;

    #[inline]
    fn estimate(&self, probe: &Probe<'_, N>) -> D {
        (self.0)(probe.node, probe.goal)
    }
}

impl<N, D, F> Heuristic<N, D> for WithContext<F>
where
    F: Fn(&N, &N, &N, &N) -> D,
{
    const KIND: HeuristicKind = HeuristicKind::WithContext;

    #[inline]
    fn estimate(&self, probe: &Probe<'_, N>) -> D {
        (self.0)(probe.node, probe.start, probe.goal, probe.predecessor)
    }
}

impl<N, D, F> Heuristic<N, D> for WithGrandparent<F>
where
    F: Fn(&N, &N, &N, &N, Option<&N>) -> D,
{
    const KIND: HeuristicKind = HeuristicKind::WithGrandparent;

    #[inline]
    fn estimate(&self, probe: &Probe<'_, N>) -> D {
        (self.0)(
            probe.node,
            probe.start,
            probe.goal,
            probe.predecessor,
            probe.grandparent,
        )
    }
}

impl<N, D, H: Heuristic<N, D>> Heuristic<N, D> for &H {
    const KIND: HeuristicKind = H::KIND;

    #[inline]
    fn estimate(&self, probe: &Probe<'_, N>) -> D {
        (**self).estimate(probe)
    }
}
