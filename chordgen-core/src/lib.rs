//! Chordgen core library.
//!
//! Generates random chordal graphs with one of four construction methods and
//! analyses them with a linear-time maximal clique search.
//!
//! ```
//! use chordgen_core::{ChordalGraphBuilder, GenerationMethod, analyze};
//!
//! let generator = ChordalGraphBuilder::new(GenerationMethod::PrunedTree {
//!     edge_deletion: 0.6,
//!     selection_barrier: 0.3,
//! })
//! .with_node_count(50)
//! .with_seed(9)
//! .build()?;
//! let generated = generator.generate()?;
//! let stats = analyze(generated.graph());
//! assert_eq!(stats.node_count(), 50);
//! assert!(stats.clique_count() >= 1);
//! # Ok::<(), chordgen_core::ChordalError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod builder;
mod error;
mod generator;
mod graph;
mod intersection;
mod peo;
mod seed;
mod sink;
mod tree;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::{GraphStats, analyze},
    builder::{ChordalGraphBuilder, GenerationMethod},
    error::{ChordalError, ChordalErrorCode, GraphError, GraphErrorCode, Result},
    generator::{ChordalGenerator, GeneratedGraph},
    graph::{AdjacencyBuilder, ChordalGraph, Edge},
    intersection::{SubtreeStrategy, build_subtree_intersection, draw_subtrees, intersection_graph},
    peo::build_peo_based,
    seed::derive_instance_seed,
    sink::{GraphExporter, InstanceRecord, StatsWriter},
    tree::{
        RandomTree, ShuffleCursor, Subtree, connecting_subtree, growing_subtree, pruned_subtree,
        sample_connection_count,
    },
};
