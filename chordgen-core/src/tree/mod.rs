//! Random host trees and the subtree extraction strategies drawn from them.
//!
//! A [`RandomTree`] is a random recursive tree: node `0` is the root and every
//! later node `i` attaches to a parent chosen uniformly from `[0, i - 1]`. This
//! is not a uniform labelled spanning tree; early nodes accumulate higher
//! degrees.
//!
//! Three strategies carve subtrees out of a single host tree:
//!
//! - [`growing_subtree`] grows a connected node set from a random start node.
//! - [`connecting_subtree`] joins randomly drawn nodes along their tree paths.
//! - [`pruned_subtree`] deletes random edges and keeps one surviving
//!   component.
//!
//! Each returns a [`Subtree`], an opaque node-id set later tested for
//! intersection.

mod connecting;
mod growing;
mod pruned;
mod union_find;

use rand::Rng;

pub use self::{
    connecting::{ShuffleCursor, connecting_subtree, sample_connection_count},
    growing::growing_subtree,
    pruned::pruned_subtree,
};

/// A random recursive tree over the dense node ids `[0, node_count)`.
///
/// Edge `i` joins node `i + 1` to its parent, so the tree always has exactly
/// `node_count - 1` edges (none when `node_count <= 1`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomTree {
    parents: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl RandomTree {
    /// Builds a random recursive tree on `node_count` nodes.
    ///
    /// # Examples
    /// ```
    /// use chordgen_core::RandomTree;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let tree = RandomTree::build(10, &mut rng);
    /// assert_eq!(tree.node_count(), 10);
    /// assert_eq!(tree.edge_count(), 9);
    /// assert!(tree.parent(5).is_some_and(|parent| parent < 5));
    /// ```
    pub fn build<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Self {
        let mut parents = Vec::with_capacity(node_count.saturating_sub(1));
        let mut adjacency = vec![Vec::new(); node_count];
        for node in 1..node_count {
            let parent = rng.gen_range(0..node);
            parents.push(parent);
            adjacency[parent].push(node);
            adjacency[node].push(parent);
        }
        Self { parents, adjacency }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, always `node_count - 1` for a non-empty
    /// tree.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the parent of `node`, or `None` for the root and unknown ids.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        node.checked_sub(1)
            .and_then(|edge| self.parents.get(edge))
            .copied()
    }

    /// Returns the endpoints of edge `edge_id` as `(parent, child)`.
    #[must_use]
    pub fn edge(&self, edge_id: usize) -> Option<(usize, usize)> {
        self.parents
            .get(edge_id)
            .map(|&parent| (parent, edge_id + 1))
    }

    /// Returns the tree neighbours of `node`.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }
}

/// A node-id set drawn from a [`RandomTree`].
///
/// Stored sorted and deduplicated so membership probes are logarithmic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subtree {
    nodes: Vec<usize>,
}

impl Subtree {
    /// Builds a subtree from arbitrary node ids.
    ///
    /// # Examples
    /// ```
    /// use chordgen_core::Subtree;
    ///
    /// let left = Subtree::from_nodes([3, 1, 3]);
    /// let right = Subtree::from_nodes([5, 1]);
    /// assert_eq!(left.nodes(), &[1, 3]);
    /// assert!(left.intersects(&right));
    /// ```
    #[must_use]
    pub fn from_nodes<I: IntoIterator<Item = usize>>(nodes: I) -> Self {
        let mut nodes: Vec<usize> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();
        Self { nodes }
    }

    /// Returns the member node ids in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[usize] { &self.nodes }

    /// Returns the number of member nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the subtree has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` belongs to the subtree.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// Returns `true` if the two subtrees share at least one node.
    ///
    /// Iterates the smaller set and probes the larger one.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.nodes.iter().any(|&node| large.contains(node))
    }
}

#[cfg(test)]
mod tests;
