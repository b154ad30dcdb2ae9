/*!
Frontier-based graph traversal.

This module provides:
- The [`NodeSequencer`] abstraction over frontiers: [`VecDeque`] (FIFO, breadth-first),
  [`Vec`] (LIFO, depth-first) and, in [`priority`](super::priority), a binary min-heap.
- A generic traversal iterator [`TraversalSearch`] yielding nodes in the order they are
  *finalized*, optionally together with the predecessor that led to them.
- The [`Traversal`] trait exposing BFS/DFS directly as methods on graphs.

A node is finalized when it is popped from the frontier for the first time; later pops of the
same node are skipped. Only unvisited neighbors are pushed. In [discovery
mode](TraversalSearch::discovering) nodes are instead marked as soon as they are pushed, hence
every node enters the frontier at most once and its predecessor is the node that discovered it.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without a predecessor (used for roots).
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node. Hence a
/// self-loop never shows up as a predecessor relation.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier.
///
/// Different implementations determine the traversal order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
/// - [`BinaryHeap`](std::collections::BinaryHeap) of [`MinScored`] -> cheapest first
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Returns *true* if the frontier is exhausted
    fn is_exhausted(&self) -> bool {
        self.cardinality() == 0
    }
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Which edges a traversal may follow
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Only follow edges `(u, v)` from `u` to `v`
    #[default]
    Outgoing,
    /// Follow edges regardless of their orientation
    Both,
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier of items to visit and the set of finalized nodes.
/// Parameterized by the frontier type and the type of items yielded
/// (either `Node` or `PredecessorOfNode`).
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    direction: EdgeDirection,
    mark_on_push: bool,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting nodes in breadth-first order.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator visiting nodes in depth-first order.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> = TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let popped = self.sequencer.pop()?;
            let u = popped.item();

            // roots are pushed unmarked, also in discovery mode
            if self.visited.put(u as usize) && !self.mark_on_push {
                continue;
            }

            let graph = self.graph;
            match self.direction {
                EdgeDirection::Outgoing => {
                    for v in graph.neighbors_of(u) {
                        self.try_push(u, v);
                    }
                }
                EdgeDirection::Both => {
                    for v in graph.undirected_neighbors_of(u) {
                        self.try_push(u, v);
                    }
                }
            }

            return Some(popped);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            0,
            Some(self.graph.len() - self.visited.count_ones(..)),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::init(I::new_without_predecessor(start)),
            direction: EdgeDirection::Outgoing,
            mark_on_push: false,
            _item: PhantomData,
        }
    }

    fn try_push(&mut self, u: Node, v: Node) {
        let seen = if self.mark_on_push {
            self.visited.put(v as usize)
        } else {
            self.visited.contains(v as usize)
        };
        if !seen {
            self.sequencer.push(I::new_with_predecessor(u, v));
        }
    }

    /// Marks nodes when they are pushed instead of when they are popped.
    /// Must be set before the first call to `next`.
    pub fn discovering(mut self) -> Self {
        self.mark_on_push = true;
        self
    }

    /// Sets which edges the traversal may follow
    pub fn set_direction(&mut self, direction: EdgeDirection) {
        self.direction = direction;
    }

    /// Follow edges regardless of their orientation
    pub fn ignoring_direction(mut self) -> Self {
        self.set_direction(EdgeDirection::Both);
        self
    }

    /// Returns the set of finalized nodes
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Returns *true* if `u` was already finalized (or discovered in discovery mode)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.sequencer.is_exhausted());
        match self.visited.zeroes().next() {
            None => false,
            Some(x) => {
                self.sequencer.push(I::new_without_predecessor(x as Node));
                true
            }
        }
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure.
pub trait TraversalTree: Iterator<Item = PredecessorOfNode> + Sized {
    /// Consumes the iterator and returns a parent array of size `n` where
    /// each node is initially its own parent and every visited non-root node points
    /// to its predecessor in the traversal tree.
    fn parent_array(self, n: NumNodes) -> Vec<Node> {
        let mut tree: Vec<Node> = (0..n).collect();
        for item in self {
            if let Some(p) = item.predecessor() {
                tree[item.item() as usize] = p;
            }
        }
        tree
    }
}

impl<G, S> TraversalTree for TraversalSearch<'_, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Walks a parent array from `target` back to its root and returns the path `root..=target`.
/// Returns `None` if a cycle in the parent array is detected.
pub fn path_from_parent_array(parents: &[Node], target: Node) -> Option<Vec<Node>> {
    let mut path = vec![target];
    let mut node = target;
    while parents[node as usize] != node {
        node = parents[node as usize];
        path.push(node);
        if path.len() > parents.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Provides convenient traversal methods (BFS, DFS) directly on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(3, [(1, 2), (1, 3)], true, false).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        self.check_node(start)?;
        Ok(BFS::new(self, start))
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_new(3, [(1, 2), (1, 3)], true, false).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn dfs(&self, start: Node) -> Result<DFS<'_, Self>> {
        self.check_node(start)?;
        Ok(DFS::new(self, start))
    }

    /// Returns a BFS iterator in discovery mode starting from `start` that additionally
    /// yields the predecessor relation. Every predecessor is the node that discovered the item,
    /// hence the implied tree is a shortest-path tree with respect to the number of edges.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n`.
    fn bfs_with_predecessor(&self, start: Node) -> Result<BFSWithPredecessor<'_, Self>> {
        self.check_node(start)?;
        Ok(BFSWithPredecessor::new(self, start).discovering())
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n`.
    fn dfs_with_predecessor(&self, start: Node) -> Result<DFSWithPredecessor<'_, Self>> {
        self.check_node(start)?;
        Ok(DFSWithPredecessor::new(self, start))
    }

    /// Returns the path from `start` to `target` in the tree of a depth-first search, or `None`
    /// if `target` is not reachable. The path is a valid path of the graph but in general
    /// not a shortest one.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `start >= n` or `target >= n`.
    fn dfs_path(&self, start: Node, target: Node) -> Result<Option<Vec<Node>>> {
        self.check_node(target)?;
        let mut search = self.dfs_with_predecessor(start)?;
        let mut parents: Vec<Node> = self.vertices().collect();

        for item in search.by_ref() {
            if let Some(p) = item.predecessor() {
                parents[item.item() as usize] = p;
            }
            if item.item() == target {
                return Ok(path_from_parent_array(&parents, target));
            }
        }

        Ok(None)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = directed(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        {
            let order: Vec<Node> = graph.bfs(1).unwrap().collect();
            assert_eq!(order, [1, 0, 2, 5, 4, 3]);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = directed(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        {
            // neighbors are pushed in increasing order, hence the largest is popped first
            let order: Vec<Node> = DFS::new(&graph, 1).collect();
            assert_eq!(order, [1, 2, 0, 5, 4, 3]);
        }

        {
            let order: Vec<Node> = graph.dfs(5).unwrap().collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_skips_nodes_pushed_twice() {
        // 0 -> 1, 0 -> 2, 1 -> 2: node 2 is pushed twice but yielded once
        let graph = directed(3, [(0, 1), (0, 2), (1, 2)]);
        let order = graph.dfs(0).unwrap().collect_vec();
        assert_eq!(order.len(), 3);
        assert!(order.iter().all_unique());
    }

    #[test]
    fn dfs_tree() {
        let graph = directed(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        let tree = graph.dfs_with_predecessor(1).unwrap().parent_array(6);
        assert_eq!(tree, vec![1, 1, 1, 4, 5, 0]);
    }

    #[test]
    fn dfs_path_is_valid() {
        let graph = undirected(6, [(0, 1), (1, 2), (2, 3), (0, 3), (3, 4)]);
        let path = graph.dfs_path(0, 4).unwrap().unwrap();

        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&4));
        assert!(path.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v)));

        assert_eq!(graph.dfs_path(0, 5).unwrap(), None);
        assert_eq!(graph.dfs_path(2, 2).unwrap(), Some(vec![2]));
    }

    #[test]
    fn discovery_mode_pushes_once() {
        // 0 -> 1, 0 -> 2, 1 -> 2: node 2 is discovered by 0 and never pushed again
        let graph = directed(4, [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3)]);

        let mut bfs = graph.bfs_with_predecessor(0).unwrap();
        assert_eq!(bfs.next(), Some((0, 0)));
        // both neighbors of the root are marked before they are popped
        assert!(bfs.did_visit_node(1) && bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(3));
        assert_eq!(bfs.collect_vec(), [(0, 1), (0, 2), (2, 3)]);

        // in discovery mode DFS keeps the first predecessor of a node
        let tree = DFSWithPredecessor::new(&graph, 0).discovering().parent_array(4);
        assert_eq!(tree, [0, 0, 0, 2]);
    }

    #[test]
    fn bfs_tree_has_minimal_depth() {
        let graph = undirected(6, [(0, 1), (1, 2), (2, 3), (0, 4), (4, 3), (3, 5)]);
        let tree = graph.bfs_with_predecessor(0).unwrap().parent_array(6);
        assert_eq!(tree, [0, 0, 1, 4, 0, 3]);
        assert_eq!(path_from_parent_array(&tree, 5), Some(vec![0, 4, 3, 5]));
    }

    #[test]
    fn ignoring_direction() {
        let graph = directed(4, [(1, 0), (2, 1)]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), [0]);
        assert_eq!(
            graph.dfs(0).unwrap().ignoring_direction().sorted().collect_vec(),
            [0, 1, 2]
        );
    }

    #[test]
    fn restart() {
        let graph = directed(4, [(0, 1), (2, 3)]);
        let mut dfs = graph.dfs(0).unwrap();

        assert_eq!(dfs.by_ref().collect_vec(), [0, 1]);
        assert!(dfs.try_restart_at_unvisited());
        assert_eq!(dfs.by_ref().collect_vec(), [2, 3]);
        assert!(!dfs.try_restart_at_unvisited());
        assert!(dfs.did_visit_node(3));
    }

    #[test]
    fn out_of_range_start() {
        let graph = directed(2, [(0, 1)]);
        assert!(matches!(graph.bfs(2), Err(GraphError::OutOfRange { .. })));
        assert!(graph.dfs(7).is_err());
        assert!(graph.dfs_path(0, 2).is_err());
    }
}
