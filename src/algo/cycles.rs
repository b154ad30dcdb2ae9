use super::*;

/// Cycle detection by a depth-first search that tracks the nodes on the current path
pub trait CycleDetection: NeighborsSlice + GraphType + Sized {
    /// Returns *true* if the graph contains a cycle.
    ///
    /// In directed graphs, a cycle is a closed directed walk; in undirected graphs, the edge back
    /// to the node a search came from does not count. Self-loops are always cycles.
    /// Stops at the first cycle found.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = MatrixGraph::try_new(3, [(1, 2), (2, 3), (3, 1)], false, false).unwrap();
    /// assert!(triangle.has_cycle());
    ///
    /// let path = MatrixGraph::try_new(3, [(1, 2), (2, 3)], false, false).unwrap();
    /// assert!(!path.has_cycle());
    /// ```
    #[tracing::instrument(skip_all, level = "debug", ret)]
    fn has_cycle(&self) -> bool {
        let mut search = CycleSearch::new(self);
        self.vertices().any(|u| search.search_from(u))
    }

    /// Runs the cycle search only on the nodes reachable from `root` (the island of `root` for
    /// undirected graphs). Returns whether a cycle was found together with all nodes visited.
    /// If a cycle was found, the visited nodes only cover the part explored until then.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `root >= n`.
    fn island_has_cycle(&self, root: Node) -> Result<(bool, Vec<Node>)> {
        self.check_node(root)?;
        let mut search = CycleSearch::new(self);
        let found = search.search_from(root);
        Ok((found, search.visited_nodes().collect()))
    }
}

impl<G> CycleDetection for G where G: NeighborsSlice + GraphType + Sized {}

/// Returns the single character flag used in reports: `'S'` if a cycle exists, `'N'` otherwise
pub fn cycle_flag(has_cycle: bool) -> char {
    if has_cycle { 'S' } else { 'N' }
}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    parent: Option<Node>,
    next_neighbor: usize,
}

/// Iterative DFS keeping an explicit call stack. A node is *on the path* while its frame is on
/// the stack; reaching a node on the path closes a cycle. Nodes whose frame was popped are
/// finished and never entered again, also across multiple calls to [`CycleSearch::search_from`].
pub struct CycleSearch<'a, G>
where
    G: NeighborsSlice + GraphType,
{
    graph: &'a G,
    visited: NodeBitSet,
    on_path: NodeBitSet,
    call_stack: Vec<StackFrame>,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: NeighborsSlice + GraphType,
{
    /// Creates a search in which no node was visited yet
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            on_path: graph.vertex_bitset_unset(),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Returns an iterator over all nodes visited so far in increasing order
    pub fn visited_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.visited.ones().map(|u| u as Node)
    }

    /// Searches for a cycle among the nodes reachable from `root` that were not visited by an
    /// earlier call. Returns *true* if a cycle was found; the search can be continued from other
    /// roots afterwards.
    /// ** Panics if `root >= n` **
    pub fn search_from(&mut self, root: Node) -> bool {
        if self.visited.contains(root as usize) {
            return false;
        }
        self.enter(root, None);

        let skip_parent = self.graph.is_undirected();
        while let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;
            let Some(&v) = self
                .graph
                .as_neighbors_slice(u)
                .get(frame.next_neighbor)
            else {
                self.on_path.set(u as usize, false);
                self.call_stack.pop();
                continue;
            };
            frame.next_neighbor += 1;

            if skip_parent && frame.parent == Some(v) {
                continue;
            }

            if self.on_path.contains(v as usize) {
                tracing::trace!(from = u, to = v, "edge closes a cycle");
                self.abort();
                return true;
            }

            if !self.visited.contains(v as usize) {
                self.enter(v, Some(u));
            }
        }

        false
    }

    fn enter(&mut self, u: Node, parent: Option<Node>) {
        self.visited.insert(u as usize);
        self.on_path.insert(u as usize);
        self.call_stack.push(StackFrame {
            node: u,
            parent,
            next_neighbor: 0,
        });
    }

    /// Unwinds the call stack so that the search can be restarted elsewhere
    fn abort(&mut self) {
        for frame in self.call_stack.drain(..) {
            self.on_path.set(frame.node as usize, false);
        }
    }
}
