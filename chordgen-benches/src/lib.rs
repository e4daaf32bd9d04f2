//! Benchmark support crate for chordgen.
//!
//! Provides the parameter grids and graph fixtures shared by the Criterion
//! benchmarks for graph generation and maximal clique analysis.

pub mod error;
pub mod fixtures;
pub mod params;
