//! Benchmark parameter types.

use std::fmt;

use chordgen_core::GenerationMethod;

/// Node counts exercised by every benchmark group.
pub const NODE_COUNTS: &[usize] = &[100, 500, 2_000];

/// Parameters for one generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Construction method and its parameters.
    pub method: GenerationMethod,
    /// Number of nodes in the generated graph.
    pub node_count: usize,
}

impl GenerationBenchParams {
    /// Pairs every representative method with every node count in
    /// [`NODE_COUNTS`].
    #[must_use]
    pub fn grid() -> Vec<Self> {
        NODE_COUNTS
            .iter()
            .flat_map(|&node_count| {
                representative_methods(node_count)
                    .into_iter()
                    .map(move |method| Self { method, node_count })
            })
            .collect()
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.method.tag(), self.node_count)
    }
}

/// One moderately dense configuration per construction method.
///
/// The growing-subtree bound scales with `node_count` so density stays
/// comparable across sizes.
#[must_use]
pub fn representative_methods(node_count: usize) -> [GenerationMethod; 4] {
    [
        GenerationMethod::GrowingSubtree {
            max_subtree_size: (node_count / 10).max(1),
        },
        GenerationMethod::ConnectingNodes {
            threshold_prob: 0.05,
        },
        GenerationMethod::PrunedTree {
            edge_deletion: 0.8,
            selection_barrier: 0.5,
        },
        GenerationMethod::PeoBased {
            upper_bound_coef: 0.1,
        },
    ]
}
