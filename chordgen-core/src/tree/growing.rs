//! Growing-subtree extraction.
//!
//! The subtree grows outward from a random start node. Members that may still
//! extend the subtree live in an index-addressed frontier; each entry computes
//! its unvisited tree neighbours lazily on first pick. Picks and removals use
//! `swap_remove`, so every step is O(1) apart from the one-off neighbour scan.

use rand::Rng;

use crate::error::{ChordalError, Result};

use super::{RandomTree, Subtree};

#[derive(Debug)]
struct FrontierEntry {
    node: usize,
    open: Option<Vec<usize>>,
}

impl FrontierEntry {
    const fn new(node: usize) -> Self {
        Self { node, open: None }
    }

    fn open_neighbours(&mut self, tree: &RandomTree, visited: &[bool]) -> &mut Vec<usize> {
        let node = self.node;
        self.open.get_or_insert_with(|| {
            tree.neighbours(node)
                .iter()
                .copied()
                .filter(|&next| !visited[next])
                .collect()
        })
    }
}

/// Grows a connected subtree of exactly `target_size` nodes.
///
/// # Errors
/// Returns [`ChordalError::SubtreeSizeOutOfRange`] unless
/// `1 <= target_size <= tree.node_count()`; larger targets could never be
/// reached.
///
/// # Examples
/// ```
/// use chordgen_core::{RandomTree, growing_subtree};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let tree = RandomTree::build(20, &mut rng);
/// let subtree = growing_subtree(&tree, 6, &mut rng)?;
/// assert_eq!(subtree.len(), 6);
/// # Ok::<(), chordgen_core::ChordalError>(())
/// ```
pub fn growing_subtree<R: Rng + ?Sized>(
    tree: &RandomTree,
    target_size: usize,
    rng: &mut R,
) -> Result<Subtree> {
    let node_count = tree.node_count();
    if target_size == 0 || target_size > node_count {
        return Err(ChordalError::SubtreeSizeOutOfRange {
            size: target_size,
            node_count,
        });
    }

    let start = rng.gen_range(0..node_count);
    let mut visited = vec![false; node_count];
    visited[start] = true;
    let mut members = Vec::with_capacity(target_size);
    members.push(start);
    let mut frontier = vec![FrontierEntry::new(start)];

    while members.len() < target_size {
        // The tree is connected and the target does not exceed it, so some
        // frontier entry always has an open neighbour.
        debug_assert!(!frontier.is_empty(), "frontier exhausted before target");
        let picked = rng.gen_range(0..frontier.len());
        let open = frontier[picked].open_neighbours(tree, &visited);
        if open.is_empty() {
            frontier.swap_remove(picked);
            continue;
        }
        let choice = rng.gen_range(0..open.len());
        let next = open.swap_remove(choice);
        debug_assert!(!visited[next], "tree neighbours are reached once");
        visited[next] = true;
        members.push(next);
        frontier.push(FrontierEntry::new(next));
    }

    Ok(Subtree::from_nodes(members))
}
