//! Structural statistics for finished chordal graphs.
//!
//! [`analyze`] runs a modified maximum cardinality search over the graph to
//! recover a perfect elimination ordering and every maximal clique in one
//! linear pass, then derives density, component and clique-size statistics.
//!
//! The input is assumed chordal. On a non-chordal graph the clique list is
//! unspecified but the call still returns normally.

mod bucket;
mod mcs;

use tracing::{debug, instrument};

use crate::graph::ChordalGraph;

use self::mcs::{McsOutcome, modified_mcs};

/// Statistics describing one graph instance.
///
/// # Examples
/// ```
/// use chordgen_core::{ChordalGraph, analyze};
///
/// // Two triangles sharing the edge {1, 2}.
/// let graph = ChordalGraph::from_edges(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)])?;
/// let stats = analyze(&graph);
/// assert_eq!(stats.clique_count(), 2);
/// assert_eq!(stats.clique_size_histogram()[3], 2);
/// assert!((stats.density() - 5.0 / 6.0).abs() < 1e-12);
/// # Ok::<(), chordgen_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    node_count: usize,
    edge_count: usize,
    density: f64,
    connected_components: usize,
    elimination_order: Vec<usize>,
    maximal_cliques: Vec<Vec<usize>>,
    clique_of: Vec<usize>,
    min_clique_size: usize,
    max_clique_size: usize,
    mean_clique_size: f64,
    clique_size_stdev: f64,
    clique_size_histogram: Vec<usize>,
}

impl GraphStats {
    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `2E / (N (N - 1))`, or `0.0` when `N <= 1`.
    #[must_use]
    #[rustfmt::skip]
    pub fn density(&self) -> f64 { self.density }

    /// Returns the number of connected components.
    #[must_use]
    #[rustfmt::skip]
    pub fn connected_components(&self) -> usize { self.connected_components }

    /// Returns the elimination ordering found by the search: position `i`
    /// holds the node labelled `i`.
    #[must_use]
    #[rustfmt::skip]
    pub fn elimination_order(&self) -> &[usize] { &self.elimination_order }

    /// Returns the maximal cliques, each sorted ascending, in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn maximal_cliques(&self) -> &[Vec<usize>] { &self.maximal_cliques }

    /// Returns the index (into [`Self::maximal_cliques`]) of the clique the
    /// search assigned `node` to.
    #[must_use]
    pub fn clique_index_of(&self, node: usize) -> Option<usize> {
        self.clique_of.get(node).copied()
    }

    /// Returns the number of maximal cliques.
    #[must_use]
    pub fn clique_count(&self) -> usize {
        self.maximal_cliques.len()
    }

    /// Returns the smallest maximal clique size, `0` when there are none.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_clique_size(&self) -> usize { self.min_clique_size }

    /// Returns the largest maximal clique size, `0` when there are none.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_clique_size(&self) -> usize { self.max_clique_size }

    /// Returns the mean maximal clique size, `0.0` when there are none.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean_clique_size(&self) -> f64 { self.mean_clique_size }

    /// Returns the unbiased sample standard deviation of maximal clique
    /// sizes, `0.0` with fewer than two cliques.
    #[must_use]
    #[rustfmt::skip]
    pub fn clique_size_stdev(&self) -> f64 { self.clique_size_stdev }

    /// Returns clique counts indexed by clique size.
    ///
    /// The histogram has `node_count + 1` entries; entry `0` is always zero.
    #[must_use]
    #[rustfmt::skip]
    pub fn clique_size_histogram(&self) -> &[usize] { &self.clique_size_histogram }
}

/// Computes the statistics record for `graph`.
///
/// The result depends only on the graph, so repeated calls return identical
/// records.
#[instrument(
    name = "core.analyze",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
#[must_use]
pub fn analyze(graph: &ChordalGraph) -> GraphStats {
    let McsOutcome {
        order,
        cliques,
        clique_of,
    } = modified_mcs(graph);

    let node_count = graph.node_count();
    let mut histogram = vec![0; node_count + 1];
    for clique in &cliques {
        if let Some(slot) = histogram.get_mut(clique.len()) {
            *slot += 1;
        }
    }
    let sizes = SizeSummary::from_sizes(cliques.iter().map(Vec::len));

    let stats = GraphStats {
        node_count,
        edge_count: graph.edge_count(),
        density: graph.density(),
        connected_components: graph.connected_component_count(),
        elimination_order: order,
        maximal_cliques: cliques,
        clique_of,
        min_clique_size: sizes.min,
        max_clique_size: sizes.max,
        mean_clique_size: sizes.mean,
        clique_size_stdev: sizes.stdev,
        clique_size_histogram: histogram,
    };
    debug!(
        cliques = stats.clique_count(),
        max_clique = stats.max_clique_size,
        components = stats.connected_components,
        "analysis completed"
    );
    stats
}

#[derive(Debug, Default)]
struct SizeSummary {
    min: usize,
    max: usize,
    mean: f64,
    stdev: f64,
}

impl SizeSummary {
    fn from_sizes(sizes: impl Iterator<Item = usize> + Clone) -> Self {
        let count = sizes.clone().count();
        if count == 0 {
            return Self::default();
        }
        let min = sizes.clone().min().unwrap_or(0);
        let max = sizes.clone().max().unwrap_or(0);
        let total: usize = sizes.clone().sum();
        let mean = total as f64 / count as f64;
        let stdev = if count < 2 {
            0.0
        } else {
            let squares: f64 = sizes
                .map(|size| {
                    let delta = size as f64 - mean;
                    delta * delta
                })
                .sum();
            (squares / (count - 1) as f64).sqrt()
        };
        Self {
            min,
            max,
            mean,
            stdev,
        }
    }
}
