//! Connecting-nodes extraction.
//!
//! Draws `k` distinct tree nodes and reveals the subtree spanned by their
//! tree paths. Node draws come from a [`ShuffleCursor`] that keeps one node-id
//! pool alive across all draws against the same host tree.

use std::collections::VecDeque;

use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::error::{ChordalError, Result};

use super::{RandomTree, Subtree};

/// Persistent partial-shuffle state over the node ids `[0, node_count)`.
///
/// The pool keeps its permuted order between calls. Each [`Self::draw`]
/// restarts at position zero and runs a partial Fisher-Yates pass over the
/// first `k` positions, so every draw is a uniformly random `k`-subset
/// regardless of earlier draws. Nothing is consumed permanently.
///
/// # Examples
/// ```
/// use chordgen_core::ShuffleCursor;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let mut cursor = ShuffleCursor::new(8);
/// let picked = cursor.draw(3, &mut rng)?.to_vec();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|&node| node < 8));
/// # Ok::<(), chordgen_core::ChordalError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ShuffleCursor {
    pool: Vec<usize>,
}

impl ShuffleCursor {
    /// Creates a cursor over the identity permutation of `[0, node_count)`.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            pool: (0..node_count).collect(),
        }
    }

    /// Returns the current pool order.
    #[must_use]
    pub fn pool(&self) -> &[usize] {
        &self.pool
    }

    /// Draws `count` distinct node ids.
    ///
    /// The returned slice stays valid until the next call.
    ///
    /// # Errors
    /// Returns [`ChordalError::ConnectionCountOutOfRange`] unless
    /// `1 <= count <= node_count`.
    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<&[usize]> {
        let node_count = self.pool.len();
        if count == 0 || count > node_count {
            return Err(ChordalError::ConnectionCountOutOfRange { count, node_count });
        }
        for position in 0..count {
            let swap_with = rng.gen_range(position..node_count);
            self.pool.swap(position, swap_with);
        }
        Ok(&self.pool[..count])
    }
}

/// Samples how many nodes a connecting-nodes subtree should join.
///
/// Draws from a Poisson distribution with mean `threshold_prob * node_count`
/// and clamps the result to `[1, node_count]`.
///
/// # Errors
/// Returns [`ChordalError::PoissonRejected`] when the derived mean is not a
/// positive finite number.
pub fn sample_connection_count<R: Rng + ?Sized>(
    threshold_prob: f64,
    node_count: usize,
    rng: &mut R,
) -> Result<usize> {
    let lambda = threshold_prob * node_count as f64;
    let poisson = Poisson::new(lambda).map_err(|_| ChordalError::PoissonRejected { lambda })?;
    let drawn: f64 = poisson.sample(rng);
    // Float-to-int casts saturate, so huge draws land on usize::MAX before
    // clamping.
    Ok((drawn as usize).clamp(1, node_count.max(1)))
}

/// Draws `count` nodes via `cursor` and returns the union of the tree paths
/// joining the first drawn node to every other one.
///
/// With `count == 1` the subtree is the single drawn node.
///
/// # Errors
/// Propagates [`ShuffleCursor::draw`] range errors.
pub fn connecting_subtree<R: Rng + ?Sized>(
    tree: &RandomTree,
    cursor: &mut ShuffleCursor,
    count: usize,
    rng: &mut R,
) -> Result<Subtree> {
    let picked = cursor.draw(count, rng)?;
    let Some((&anchor, rest)) = picked.split_first() else {
        return Ok(Subtree::default());
    };
    if rest.is_empty() {
        return Ok(Subtree::from_nodes([anchor]));
    }

    let predecessors = bfs_predecessors(tree, anchor);
    let mut included = vec![false; tree.node_count()];
    included[anchor] = true;
    let mut members = vec![anchor];
    for &target in rest {
        // Every included node already has its whole path to the anchor
        // included, so the walk stops at the first one it meets.
        let mut current = target;
        while !included[current] {
            included[current] = true;
            members.push(current);
            match predecessors[current] {
                Some(previous) => current = previous,
                None => break,
            }
        }
    }
    Ok(Subtree::from_nodes(members))
}

fn bfs_predecessors(tree: &RandomTree, root: usize) -> Vec<Option<usize>> {
    let mut predecessors = vec![None; tree.node_count()];
    let mut seen = vec![false; tree.node_count()];
    seen[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for &next in tree.neighbours(node) {
            if !seen[next] {
                seen[next] = true;
                predecessors[next] = Some(node);
                queue.push_back(next);
            }
        }
    }
    predecessors
}
