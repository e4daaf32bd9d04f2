//! Shared test utilities used across chordgen crates.
//!
//! Graph helpers take plain `(node_count, edges)` pairs rather than core
//! types so they stay independent of the code under test.

pub mod chordality;
pub mod fixtures;
pub mod proptest_profile;
pub mod tracing;
