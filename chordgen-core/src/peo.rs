//! Direct construction along a perfect elimination ordering.
//!
//! Node ids double as the elimination order. When node `i` is fixed, its
//! higher-indexed neighbourhood (fresh random picks plus every edge already
//! attached to `i`) is turned into a clique. Processed nodes therefore always
//! have a clique as their later neighbourhood, which is the defining property
//! of a perfect elimination ordering and hence of chordality.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::graph::{AdjacencyBuilder, ChordalGraph};

/// Builds a chordal graph on `node_count` nodes by simulating a perfect
/// elimination ordering.
///
/// For each node `i` the number of fresh higher neighbours is drawn from
/// `[1, ceil((node_count - i - 1) * upper_bound_coef)]`. When that count
/// leaves no room for a proper subset of the remaining nodes, all remaining
/// nodes are joined into one clique and construction stops.
///
/// `upper_bound_coef` must lie in `(0, 1]`; the builder validates it before
/// generation starts.
///
/// # Examples
/// ```
/// use chordgen_core::build_peo_based;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// assert_eq!(build_peo_based(1, 0.5, &mut rng).edge_count(), 0);
/// assert_eq!(build_peo_based(2, 0.5, &mut rng).edge_count(), 1);
/// ```
pub fn build_peo_based<R: Rng + ?Sized>(
    node_count: usize,
    upper_bound_coef: f64,
    rng: &mut R,
) -> ChordalGraph {
    let mut adjacency = AdjacencyBuilder::new(node_count);
    let mut completed_at = None;

    for node in 0..node_count.saturating_sub(1) {
        let remaining = node_count - node - 1;
        let upper = ((remaining as f64 * upper_bound_coef).ceil() as usize).clamp(1, remaining);
        let fresh = rng.gen_range(1..=upper);

        if fresh < remaining {
            let mut neighbourhood = BTreeSet::from([node]);
            while neighbourhood.len() < fresh + 1 {
                neighbourhood.insert(rng.gen_range(node + 1..node_count));
            }
            // Edges fixed by earlier nodes must join the clique too, or the
            // earlier nodes' later neighbourhoods would stop being cliques.
            neighbourhood.extend(adjacency.higher_neighbours(node).collect::<Vec<_>>());
            adjacency.make_clique(&neighbourhood);
        } else {
            let rest: BTreeSet<usize> = (node..node_count).collect();
            adjacency.make_clique(&rest);
            completed_at = Some(node);
            break;
        }
    }

    debug!(
        nodes = node_count,
        edges = adjacency.edge_count(),
        completed_at,
        "peo-based graph built"
    );
    adjacency.finalize()
}
