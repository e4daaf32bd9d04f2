//! Pruned-tree extraction.
//!
//! Deletes a random fraction of the host tree's edges and keeps one of the
//! resulting components. Components are bucketed by size; the smallest
//! `selection_barrier` fraction of distinct sizes is excluded before a size
//! and then a component of that size are chosen uniformly.

use std::collections::BTreeMap;

use rand::{Rng, seq::SliceRandom};

use super::{RandomTree, Subtree, union_find::DisjointSet};

/// Returns the node set of a randomly selected component of the pruned tree.
///
/// `edge_deletion` and `selection_barrier` must lie in `[0, 1)`; the builder
/// validates both before generation starts.
///
/// # Examples
/// ```
/// use chordgen_core::{RandomTree, pruned_subtree};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(5);
/// let tree = RandomTree::build(12, &mut rng);
/// // Nothing deleted: the only component is the whole tree.
/// let subtree = pruned_subtree(&tree, 0.0, 0.5, &mut rng);
/// assert_eq!(subtree.len(), 12);
/// ```
pub fn pruned_subtree<R: Rng + ?Sized>(
    tree: &RandomTree,
    edge_deletion: f64,
    selection_barrier: f64,
    rng: &mut R,
) -> Subtree {
    let edge_count = tree.edge_count();
    let mut edge_ids: Vec<usize> = (0..edge_count).collect();
    edge_ids.shuffle(rng);
    let deleted = ((edge_deletion * edge_count as f64).floor() as usize).min(edge_count);

    let mut components = DisjointSet::new(tree.node_count());
    for &edge_id in &edge_ids[deleted..] {
        if let Some((parent, child)) = tree.edge(edge_id) {
            components.union(parent, child);
        }
    }

    let mut by_size: BTreeMap<usize, Vec<Vec<usize>>> = BTreeMap::new();
    for component in components.components() {
        by_size.entry(component.len()).or_default().push(component);
    }

    let class_count = by_size.len();
    if class_count == 0 {
        return Subtree::default();
    }
    let first_kept =
        ((selection_barrier * class_count as f64).floor() as usize).min(class_count - 1);
    let class = rng.gen_range(first_kept..class_count);
    by_size
        .into_values()
        .nth(class)
        .map(|mut same_size| {
            let pick = rng.gen_range(0..same_size.len());
            Subtree::from_nodes(same_size.swap_remove(pick))
        })
        .unwrap_or_default()
}
