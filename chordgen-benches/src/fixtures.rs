//! Pre-generated graphs for the analysis benchmarks.

use chordgen_core::{ChordalGraph, ChordalGraphBuilder};

use crate::{error::BenchSetupError, params::GenerationBenchParams};

/// Seed used for every benchmark input.
pub const SEED: u64 = 42;

/// Builds the graph described by `params` with [`SEED`].
///
/// # Errors
/// Returns [`BenchSetupError::Generation`] when the configuration is
/// rejected.
pub fn seeded_graph(params: &GenerationBenchParams) -> Result<ChordalGraph, BenchSetupError> {
    let generator = ChordalGraphBuilder::new(params.method)
        .with_node_count(params.node_count)
        .with_seed(SEED)
        .build()?;
    Ok(generator.generate()?.into_graph())
}
