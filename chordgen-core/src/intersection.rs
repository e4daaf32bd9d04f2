//! Subtree-intersection construction.
//!
//! Builds one random host tree, draws one subtree per output node with the
//! configured strategy, and joins two output nodes whenever their subtrees
//! share a tree node. Intersection graphs of subtrees of a common tree are
//! exactly the chordal graphs, so the result needs no further checking.

use rand::Rng;
use tracing::debug;

use crate::{
    error::{ChordalError, Result},
    graph::{AdjacencyBuilder, ChordalGraph},
    tree::{
        RandomTree, ShuffleCursor, Subtree, connecting_subtree, growing_subtree, pruned_subtree,
        sample_connection_count,
    },
};

/// Strategy used to draw subtrees from the host tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubtreeStrategy {
    /// Grow each subtree to a size drawn uniformly from
    /// `[1, max_subtree_size]`.
    Growing {
        /// Upper bound on the size of each grown subtree.
        max_subtree_size: usize,
    },
    /// Join a Poisson-distributed number of nodes with mean
    /// `threshold_prob * node_count`.
    Connecting {
        /// Scales the mean number of joined nodes.
        threshold_prob: f64,
    },
    /// Keep one component after deleting a fraction of tree edges.
    Pruned {
        /// Fraction of tree edges deleted per draw.
        edge_deletion: f64,
        /// Fraction of the smallest distinct component sizes excluded.
        selection_barrier: f64,
    },
}

/// Draws `count` subtrees from `tree` using `strategy`.
///
/// # Errors
/// Returns [`ChordalError`] when the strategy parameters cannot be satisfied
/// by `tree`.
pub fn draw_subtrees<R: Rng + ?Sized>(
    tree: &RandomTree,
    strategy: SubtreeStrategy,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Subtree>> {
    let node_count = tree.node_count();
    let mut subtrees = Vec::with_capacity(count);
    match strategy {
        SubtreeStrategy::Growing { max_subtree_size } => {
            if max_subtree_size == 0 || max_subtree_size > node_count {
                return Err(ChordalError::SubtreeSizeOutOfRange {
                    size: max_subtree_size,
                    node_count,
                });
            }
            for _ in 0..count {
                let size = rng.gen_range(1..=max_subtree_size);
                subtrees.push(growing_subtree(tree, size, rng)?);
            }
        }
        SubtreeStrategy::Connecting { threshold_prob } => {
            let mut cursor = ShuffleCursor::new(node_count);
            for _ in 0..count {
                let joined = sample_connection_count(threshold_prob, node_count, rng)?;
                subtrees.push(connecting_subtree(tree, &mut cursor, joined, rng)?);
            }
        }
        SubtreeStrategy::Pruned {
            edge_deletion,
            selection_barrier,
        } => {
            for _ in 0..count {
                subtrees.push(pruned_subtree(tree, edge_deletion, selection_barrier, rng));
            }
        }
    }
    Ok(subtrees)
}

/// Builds the intersection graph of `subtrees`: node `i` stands for
/// `subtrees[i]` and two nodes are adjacent iff their subtrees intersect.
///
/// # Examples
/// ```
/// use chordgen_core::{Subtree, intersection_graph};
///
/// let subtrees = [
///     Subtree::from_nodes([0, 1]),
///     Subtree::from_nodes([1, 2]),
///     Subtree::from_nodes([3]),
/// ];
/// let graph = intersection_graph(&subtrees);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.has_edge(0, 1));
/// ```
#[must_use]
pub fn intersection_graph(subtrees: &[Subtree]) -> ChordalGraph {
    let mut builder = AdjacencyBuilder::new(subtrees.len());
    for (left, first) in subtrees.iter().enumerate() {
        for (offset, second) in subtrees.iter().skip(left + 1).enumerate() {
            if first.intersects(second) {
                builder.add_edge(left, left + 1 + offset);
            }
        }
    }
    builder.finalize()
}

/// Builds a chordal graph on `node_count` nodes as the intersection graph of
/// `node_count` subtrees drawn from one random tree of the same size.
///
/// The tree and the subtrees are scratch state dropped before returning.
///
/// # Errors
/// Returns [`ChordalError`] when the strategy parameters are out of range.
pub fn build_subtree_intersection<R: Rng + ?Sized>(
    node_count: usize,
    strategy: SubtreeStrategy,
    rng: &mut R,
) -> Result<ChordalGraph> {
    let tree = RandomTree::build(node_count, rng);
    let subtrees = draw_subtrees(&tree, strategy, node_count, rng)?;
    let total_members: usize = subtrees.iter().map(Subtree::len).sum();
    let graph = intersection_graph(&subtrees);
    debug!(
        nodes = node_count,
        edges = graph.edge_count(),
        total_members,
        ?strategy,
        "subtree intersection graph built"
    );
    Ok(graph)
}
