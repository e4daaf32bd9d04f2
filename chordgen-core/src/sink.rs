//! Boundary traits for persisting generated graphs and their statistics.
//!
//! The core never touches storage. Exporters and statistics writers live in
//! downstream crates and plug in through these traits.

use std::time::Duration;

use crate::{analysis::GraphStats, builder::GenerationMethod, graph::ChordalGraph};

/// Persists a finished graph in some edge-list format.
///
/// # Examples
/// ```
/// use chordgen_core::{ChordalGraph, GraphExporter};
///
/// #[derive(Default)]
/// struct EdgeCounter(usize);
///
/// impl GraphExporter for EdgeCounter {
///     type Error = std::convert::Infallible;
///
///     fn export(&mut self, graph: &ChordalGraph) -> Result<(), Self::Error> {
///         self.0 += graph.edge_count();
///         Ok(())
///     }
/// }
///
/// let graph = ChordalGraph::from_edges(3, [(0, 1), (1, 2)])?;
/// let mut exporter = EdgeCounter::default();
/// exporter.export(&graph)?;
/// assert_eq!(exporter.0, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait GraphExporter {
    /// Failure raised by the underlying destination.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes `graph` to the destination.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the destination rejects the write.
    fn export(&mut self, graph: &ChordalGraph) -> Result<(), Self::Error>;
}

/// Appends one statistics row per generated instance.
pub trait StatsWriter {
    /// Failure raised by the underlying destination.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Appends the statistics described by `record`.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the destination rejects the write.
    fn append(&mut self, record: &InstanceRecord<'_>) -> Result<(), Self::Error>;
}

/// Everything a [`StatsWriter`] needs to describe one instance.
#[derive(Debug, Clone, Copy)]
pub struct InstanceRecord<'a> {
    instance: &'a str,
    method: GenerationMethod,
    stats: &'a GraphStats,
    build_duration: Duration,
}

impl<'a> InstanceRecord<'a> {
    /// Bundles the statistics of the instance identified by `instance`.
    #[must_use]
    pub const fn new(
        instance: &'a str,
        method: GenerationMethod,
        stats: &'a GraphStats,
        build_duration: Duration,
    ) -> Self {
        Self {
            instance,
            method,
            stats,
            build_duration,
        }
    }

    /// Returns the instance identifier, typically the exported file name.
    #[must_use]
    pub const fn instance(&self) -> &'a str {
        self.instance
    }

    /// Returns the method that produced the instance.
    #[must_use]
    pub const fn method(&self) -> GenerationMethod {
        self.method
    }

    /// Returns the analyzed statistics.
    #[must_use]
    pub const fn stats(&self) -> &'a GraphStats {
        self.stats
    }

    /// Returns the wall-clock construction time.
    #[must_use]
    pub const fn build_duration(&self) -> Duration {
        self.build_duration
    }
}
