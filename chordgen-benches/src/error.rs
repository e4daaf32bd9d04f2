//! Benchmark setup error type.

use chordgen_core::ChordalError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generator was misconfigured or failed to build a graph.
    #[error("graph generation failed: {0}")]
    Generation(#[from] ChordalError),
}
