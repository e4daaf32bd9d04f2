//! Graph representations shared by the construction engines and the analyzer.
//!
//! Construction works on a mutable [`AdjacencyBuilder`] holding one ordered
//! neighbour set per node. Once a build completes the builder is frozen into a
//! [`ChordalGraph`], a compact immutable form with a canonical edge list and a
//! compressed adjacency index used read-only by the analyzer.

use std::collections::{BTreeSet, VecDeque};

use crate::error::GraphError;

/// A single undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates a canonical edge from two distinct endpoints in either order.
    ///
    /// # Examples
    /// ```
    /// use chordgen_core::Edge;
    ///
    /// let edge = Edge::new(4, 1);
    /// assert_eq!((edge.source(), edge.target()), (1, 4));
    /// ```
    #[must_use]
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert_ne!(left, right, "edges must join distinct nodes");
        Self {
            source: left.min(right),
            target: left.max(right),
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }
}

/// Mutable adjacency-set graph used while a construction engine runs.
///
/// Every edge is stored in both endpoints' sets. Self-loops are silently
/// ignored so callers can clique a node set without filtering the diagonal.
#[derive(Clone, Debug)]
pub struct AdjacencyBuilder {
    neighbours: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl AdjacencyBuilder {
    /// Creates an edgeless builder over `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            neighbours: vec![BTreeSet::new(); node_count],
            edge_count: 0,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the number of distinct undirected edges inserted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Inserts the undirected edge `{left, right}`.
    ///
    /// Returns `true` when the edge was not present before. Self-loops are
    /// ignored and report `false`.
    ///
    /// # Panics
    /// Panics if either endpoint is `>= node_count`.
    pub fn add_edge(&mut self, left: usize, right: usize) -> bool {
        if left == right {
            return false;
        }
        let inserted = self.neighbours[left].insert(right);
        self.neighbours[right].insert(left);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Returns `true` if `left` and `right` are adjacent.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        self.neighbours
            .get(left)
            .is_some_and(|set| set.contains(&right))
    }

    /// Iterates the neighbours of `node` with an id strictly greater than
    /// `node`, in ascending order.
    pub fn higher_neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbours
            .get(node)
            .into_iter()
            .flat_map(move |set| set.range(node.saturating_add(1)..).copied())
    }

    /// Inserts every missing edge between members of `nodes`.
    pub fn make_clique(&mut self, nodes: &BTreeSet<usize>) {
        for &left in nodes {
            for &right in nodes.range(left.saturating_add(1)..) {
                self.add_edge(left, right);
            }
        }
    }

    /// Freezes the builder into an immutable [`ChordalGraph`].
    ///
    /// Each undirected edge is emitted once, from the lower id to the higher
    /// one, and the edge list is sorted.
    #[must_use]
    pub fn finalize(self) -> ChordalGraph {
        let node_count = self.neighbours.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(self.edge_count * 2);
        let mut edges = Vec::with_capacity(self.edge_count);
        offsets.push(0);
        for (node, set) in self.neighbours.iter().enumerate() {
            targets.extend(set.iter().copied());
            offsets.push(targets.len());
            edges.extend(
                set.range(node.saturating_add(1)..)
                    .map(|&higher| Edge::new(node, higher)),
            );
        }
        ChordalGraph {
            node_count,
            edges,
            offsets,
            targets,
        }
    }
}

/// Immutable undirected simple graph on the dense node ids `[0, node_count)`.
///
/// # Examples
/// ```
/// use chordgen_core::ChordalGraph;
///
/// let graph = ChordalGraph::from_edges(3, [(0, 1), (1, 2)])?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbours(1), &[0, 2]);
/// assert_eq!(graph.connected_component_count(), 1);
/// # Ok::<(), chordgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordalGraph {
    node_count: usize,
    edges: Vec<Edge>,
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl ChordalGraph {
    /// Builds a graph from an external edge list.
    ///
    /// Duplicate edges (in either orientation) collapse into one.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when an endpoint is
    /// `>= node_count` and [`GraphError::SelfLoop`] for an edge `(v, v)`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut builder = AdjacencyBuilder::new(node_count);
        for (left, right) in edges {
            for node in [left, right] {
                if node >= node_count {
                    return Err(GraphError::InvalidNodeId { node, node_count });
                }
            }
            if left == right {
                return Err(GraphError::SelfLoop { node: left });
            }
            builder.add_edge(left, right);
        }
        Ok(builder.finalize())
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge once, sorted by `(source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the neighbours of `node` in ascending order.
    ///
    /// Unknown nodes have no neighbours.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        match (self.offsets.get(node), self.offsets.get(node + 1)) {
            (Some(&start), Some(&end)) => self.targets.get(start..end).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Returns the degree of `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    /// Returns `true` if `left` and `right` are adjacent.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        self.neighbours(left).binary_search(&right).is_ok()
    }

    /// Returns the edge density `2E / (N (N - 1))`.
    ///
    /// Graphs with fewer than two nodes have density `0.0`.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.node_count < 2 {
            return 0.0;
        }
        let pairs = (self.node_count as f64) * ((self.node_count - 1) as f64);
        2.0 * (self.edges.len() as f64) / pairs
    }

    /// Counts connected components with a breadth-first traversal.
    #[must_use]
    pub fn connected_component_count(&self) -> usize {
        let mut seen = vec![false; self.node_count];
        let mut queue = VecDeque::new();
        let mut components = 0;
        for start in 0..self.node_count {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            queue.push_back(start);
            while let Some(node) = queue.pop_front() {
                for &next in self.neighbours(node) {
                    if !seen[next] {
                        seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        components
    }
}
