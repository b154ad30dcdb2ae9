/*!
Cheapest-first traversal shared by Dijkstra's and Prim's algorithm.

Both algorithms repeatedly finalize the node with the smallest tentative cost and only differ in
how the cost of reaching a neighbor is computed. [`PrioritySearch`] implements the loop once and
takes the cost rule as a [`CostPolicy`].
*/

use std::{cmp::Ordering, collections::BinaryHeap, marker::PhantomData};

use super::*;

/// `MinScored<K, T>` holds a score `K` and a scored object `T` in a pair for use with a
/// `BinaryHeap`.
///
/// `MinScored` compares in reverse order by the score, so that we can use `BinaryHeap` as a
/// min-heap to extract the score-value pair with the least score. The object `T` never takes part
/// in comparisons.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord, T> Eq for MinScored<K, T> {}

impl<K: Ord, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<K: Ord, T> NodeSequencer<MinScored<K, T>> for BinaryHeap<MinScored<K, T>> {
    fn init(item: MinScored<K, T>) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: MinScored<K, T>) {
        BinaryHeap::push(self, item)
    }
    fn pop(&mut self) -> Option<MinScored<K, T>> {
        BinaryHeap::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Computes the priority of a neighbor `v` of a just finalized node `u`
pub trait CostPolicy {
    /// `cost_of_u` is the cost with which `u` was finalized, `weight` the weight of edge `(u, v)`
    fn cost(cost_of_u: Weight, weight: Weight) -> Weight;
}

/// Priority is the total cost of the path from the root (Dijkstra)
#[derive(Debug, Copy, Clone, Default)]
pub struct PathCost;

impl CostPolicy for PathCost {
    fn cost(cost_of_u: Weight, weight: Weight) -> Weight {
        cost_of_u.saturating_add(weight)
    }
}

/// Priority is the weight of the connecting edge alone (Prim)
#[derive(Debug, Copy, Clone, Default)]
pub struct EdgeCost;

impl CostPolicy for EdgeCost {
    fn cost(_: Weight, weight: Weight) -> Weight {
        weight
    }
}

/// Lazy cheapest-first search.
///
/// Yields `(node, cost)` in the order in which nodes are finalized, i.e. with non-decreasing cost
/// for [`PathCost`] and non-negative weights. Stale heap entries of already finalized nodes are
/// skipped on pop; nodes are never re-finalized.
pub struct PrioritySearch<'a, G, P>
where
    G: WeightedAdjacency,
    P: CostPolicy,
{
    graph: &'a G,
    finalized: NodeBitSet,
    heap: BinaryHeap<MinScored<Weight, Node>>,
    _policy: PhantomData<P>,
}

/// Search yielding nodes with their distance from the root
pub type DijkstraSearch<'a, G> = PrioritySearch<'a, G, PathCost>;

/// Search yielding nodes with the weight of the edge that attaches them to the tree
pub type PrimSearch<'a, G> = PrioritySearch<'a, G, EdgeCost>;

impl<'a, G, P> PrioritySearch<'a, G, P>
where
    G: WeightedAdjacency,
    P: CostPolicy,
{
    /// Creates the search with `start` as the only frontier entry (at cost `0`)
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        Self {
            graph,
            finalized: graph.vertex_bitset_unset(),
            heap: BinaryHeap::init(MinScored(0, start)),
            _policy: PhantomData,
        }
    }

    /// Returns *true* if `u` was already finalized
    pub fn is_finalized(&self, u: Node) -> bool {
        self.finalized.contains(u as usize)
    }

    /// Returns the number of finalized nodes
    pub fn number_of_finalized(&self) -> NumNodes {
        self.finalized.count_ones(..) as NumNodes
    }

    /// Returns the smallest node that was not finalized, if any
    pub fn first_unfinalized(&self) -> Option<Node> {
        self.finalized.zeroes().next().map(|u| u as Node)
    }
}

impl<G, P> Iterator for PrioritySearch<'_, G, P>
where
    G: WeightedAdjacency,
    P: CostPolicy,
{
    type Item = (Node, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let MinScored(cost, u) = self.heap.pop()?;
            if self.finalized.put(u as usize) {
                continue;
            }

            for (v, weight) in self.graph.weighted_neighbors_of(u) {
                if !self.finalized.contains(v as usize) {
                    self.heap.push(MinScored(P::cost(cost, weight), v));
                }
            }

            return Some((u, cost));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn min_scored_ignores_payload() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(5, 'a'));
        heap.push(MinScored(1, 'b'));
        heap.push(MinScored(3, 'c'));

        assert_eq!(MinScored(2, 'x'), MinScored(2, 'y'));
        assert_eq!(heap.pop().map(|x| x.1), Some('b'));
        assert_eq!(heap.pop().map(|x| x.1), Some('c'));
        assert_eq!(heap.pop().map(|x| x.1), Some('a'));
    }

    #[test]
    fn policies_on_triangle() {
        let graph = MatrixGraph::try_new(3, [(1, 2, 5), (2, 3, 7), (1, 3, 20)], false, true).unwrap();

        let dijkstra = DijkstraSearch::new(&graph, 0).collect_vec();
        assert_eq!(dijkstra, [(0, 0), (1, 5), (2, 12)]);

        let prim = PrimSearch::new(&graph, 0).collect_vec();
        assert_eq!(prim, [(0, 0), (1, 5), (2, 7)]);
    }

    #[test]
    fn stops_at_component_border() {
        let graph = MatrixGraph::try_new(4, [(1, 2, 3), (3, 4, 1)], false, true).unwrap();
        let mut search = PrimSearch::new(&graph, 1);

        assert_eq!(search.by_ref().count(), 2);
        assert!(search.is_finalized(0));
        assert_eq!(search.number_of_finalized(), 2);
        assert_eq!(search.first_unfinalized(), Some(2));
    }
}
