//! Builder utilities for configuring chordal graph generation.
//!
//! Exposes the generation method selection surface and the validation that
//! runs before a [`ChordalGenerator`] is constructed. Every range check
//! happens here so the construction engines never see parameters that could
//! make them loop forever or index out of bounds.

use std::num::NonZeroUsize;

use crate::{Result, error::ChordalError, generator::ChordalGenerator};

/// Selects a construction algorithm and carries its parameters.
///
/// # Examples
/// ```
/// use chordgen_core::GenerationMethod;
///
/// let method = GenerationMethod::PeoBased { upper_bound_coef: 0.5 };
/// assert_eq!(method.tag(), "peo");
/// assert_eq!(method.name(), "peoBased");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationMethod {
    /// Intersection graph of randomly grown subtrees.
    GrowingSubtree {
        /// Upper bound on each subtree's size; sizes are drawn from
        /// `[1, max_subtree_size]`.
        max_subtree_size: usize,
    },
    /// Intersection graph of subtrees spanned by random node sets.
    ConnectingNodes {
        /// Mean fraction of tree nodes joined per subtree, in `(0, 1]`.
        threshold_prob: f64,
    },
    /// Intersection graph of components of randomly pruned trees.
    PrunedTree {
        /// Fraction of tree edges deleted per subtree, in `[0, 1)`.
        edge_deletion: f64,
        /// Fraction of the smallest distinct component sizes excluded, in
        /// `[0, 1)`.
        selection_barrier: f64,
    },
    /// Direct construction along a perfect elimination ordering.
    PeoBased {
        /// Scales the maximum number of fresh neighbours per node, in
        /// `(0, 1]`.
        upper_bound_coef: f64,
    },
}

impl GenerationMethod {
    /// Returns the short tag used for directory names and CLI subcommands.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::GrowingSubtree { .. } => "gs",
            Self::ConnectingNodes { .. } => "cn",
            Self::PrunedTree { .. } => "pt",
            Self::PeoBased { .. } => "peo",
        }
    }

    /// Returns the descriptive method name written to statistics records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GrowingSubtree { .. } => "growingSubtree",
            Self::ConnectingNodes { .. } => "connectingNodes",
            Self::PrunedTree { .. } => "prunedTree",
            Self::PeoBased { .. } => "peoBased",
        }
    }

    /// Returns the method's numeric parameters, in declaration order, as
    /// strings suitable for tabular output.
    #[must_use]
    pub fn parameter_values(&self) -> Vec<String> {
        match *self {
            Self::GrowingSubtree { max_subtree_size } => vec![max_subtree_size.to_string()],
            Self::ConnectingNodes { threshold_prob } => vec![threshold_prob.to_string()],
            Self::PrunedTree {
                edge_deletion,
                selection_barrier,
            } => vec![edge_deletion.to_string(), selection_barrier.to_string()],
            Self::PeoBased { upper_bound_coef } => vec![upper_bound_coef.to_string()],
        }
    }

    fn validate(&self, node_count: NonZeroUsize) -> Result<()> {
        match *self {
            Self::GrowingSubtree { max_subtree_size } => {
                if max_subtree_size == 0 || max_subtree_size > node_count.get() {
                    return Err(ChordalError::SubtreeSizeOutOfRange {
                        size: max_subtree_size,
                        node_count: node_count.get(),
                    });
                }
                Ok(())
            }
            Self::ConnectingNodes { threshold_prob } => {
                check_range("threshold_prob", threshold_prob, Interval::LeftOpenUnit)
            }
            Self::PrunedTree {
                edge_deletion,
                selection_barrier,
            } => {
                check_range("edge_deletion", edge_deletion, Interval::RightOpenUnit)?;
                check_range("selection_barrier", selection_barrier, Interval::RightOpenUnit)
            }
            Self::PeoBased { upper_bound_coef } => {
                check_range("upper_bound_coef", upper_bound_coef, Interval::LeftOpenUnit)
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Interval {
    /// `(0, 1]`
    LeftOpenUnit,
    /// `[0, 1)`
    RightOpenUnit,
}

fn check_range(parameter: &'static str, value: f64, interval: Interval) -> Result<()> {
    let (admissible, expected) = match interval {
        Interval::LeftOpenUnit => (value > 0.0 && value <= 1.0, "(0, 1]"),
        Interval::RightOpenUnit => ((0.0..1.0).contains(&value), "[0, 1)"),
    };
    if admissible {
        Ok(())
    } else {
        Err(ChordalError::ParameterOutOfRange {
            parameter,
            value,
            expected,
        })
    }
}

/// Configures and constructs [`ChordalGenerator`] instances.
///
/// # Examples
/// ```
/// use chordgen_core::{ChordalGraphBuilder, GenerationMethod};
///
/// let generator = ChordalGraphBuilder::new(GenerationMethod::GrowingSubtree {
///     max_subtree_size: 4,
/// })
/// .with_node_count(20)
/// .with_seed(42)
/// .build()
/// .expect("configuration is valid");
/// assert_eq!(generator.node_count().get(), 20);
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct ChordalGraphBuilder {
    method: GenerationMethod,
    node_count: usize,
    seed: Option<u64>,
}

impl ChordalGraphBuilder {
    /// Creates a builder for `method` with a single node and no fixed seed.
    #[must_use]
    pub fn new(method: GenerationMethod) -> Self {
        Self {
            method,
            node_count: 1,
            seed: None,
        }
    }

    /// Overrides the number of nodes in the generated graph.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Fixes the random seed so generation is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured method.
    #[must_use]
    pub fn method(&self) -> GenerationMethod {
        self.method
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Validates the configuration and constructs a [`ChordalGenerator`].
    ///
    /// # Errors
    /// Returns [`ChordalError::InvalidNodeCount`] for zero nodes,
    /// [`ChordalError::SubtreeSizeOutOfRange`] when the growing-subtree bound
    /// is outside `[1, node_count]`, and
    /// [`ChordalError::ParameterOutOfRange`] when a fractional parameter is
    /// outside its interval or not finite.
    pub fn build(self) -> Result<ChordalGenerator> {
        let node_count = NonZeroUsize::new(self.node_count).ok_or(
            ChordalError::InvalidNodeCount {
                got: self.node_count,
            },
        )?;
        self.method.validate(node_count)?;
        Ok(ChordalGenerator::new(self.method, node_count, self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn build(method: GenerationMethod, node_count: usize) -> Result<ChordalGenerator> {
        ChordalGraphBuilder::new(method)
            .with_node_count(node_count)
            .build()
    }

    #[test]
    fn rejects_zero_nodes() {
        let err = build(GenerationMethod::PeoBased { upper_bound_coef: 0.5 }, 0)
            .expect_err("zero nodes are rejected");
        assert_eq!(err, ChordalError::InvalidNodeCount { got: 0 });
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn rejects_subtree_bounds_outside_the_tree(#[case] max_subtree_size: usize) {
        let err = build(GenerationMethod::GrowingSubtree { max_subtree_size }, 10)
            .expect_err("bound is rejected");
        assert_eq!(err.code().as_str(), "CHORDAL_SUBTREE_SIZE_OUT_OF_RANGE");
    }

    #[rstest]
    #[case::cn_zero(GenerationMethod::ConnectingNodes { threshold_prob: 0.0 }, "threshold_prob")]
    #[case::cn_above(GenerationMethod::ConnectingNodes { threshold_prob: 1.5 }, "threshold_prob")]
    #[case::cn_nan(GenerationMethod::ConnectingNodes { threshold_prob: f64::NAN }, "threshold_prob")]
    #[case::pt_one(
        GenerationMethod::PrunedTree { edge_deletion: 1.0, selection_barrier: 0.1 },
        "edge_deletion",
    )]
    #[case::pt_negative_barrier(
        GenerationMethod::PrunedTree { edge_deletion: 0.2, selection_barrier: -0.1 },
        "selection_barrier",
    )]
    #[case::peo_zero(GenerationMethod::PeoBased { upper_bound_coef: 0.0 }, "upper_bound_coef")]
    #[case::peo_inf(GenerationMethod::PeoBased { upper_bound_coef: f64::INFINITY }, "upper_bound_coef")]
    fn rejects_fractions_outside_their_interval(
        #[case] method: GenerationMethod,
        #[case] expected_parameter: &str,
    ) {
        let err = build(method, 10).expect_err("parameter is rejected");
        match err {
            ChordalError::ParameterOutOfRange { parameter, .. } => {
                assert_eq!(parameter, expected_parameter);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case(GenerationMethod::GrowingSubtree { max_subtree_size: 10 })]
    #[case(GenerationMethod::ConnectingNodes { threshold_prob: 1.0 })]
    #[case(GenerationMethod::PrunedTree { edge_deletion: 0.0, selection_barrier: 0.99 })]
    #[case(GenerationMethod::PeoBased { upper_bound_coef: 1.0 })]
    fn accepts_interval_boundaries(#[case] method: GenerationMethod) {
        let generator = build(method, 10).expect("boundary values are admissible");
        assert_eq!(generator.method(), method);
    }

    #[test]
    fn parameter_values_follow_declaration_order() {
        let method = GenerationMethod::PrunedTree {
            edge_deletion: 0.25,
            selection_barrier: 0.5,
        };
        assert_eq!(method.parameter_values(), vec!["0.25", "0.5"]);
    }
}
