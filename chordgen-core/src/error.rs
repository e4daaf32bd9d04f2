//! Error types for the chordgen core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::ChordalGraph`] from an
/// external edge list.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("self-loop on node {node} is not allowed in a simple graph")]
    SelfLoop {
        /// The node carrying the loop.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Error type produced when configuring or running chordal graph generation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChordalError {
    /// The requested graph must contain at least one node.
    #[error("node_count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// A growing subtree cannot exceed the host tree.
    #[error("subtree size {size} must lie in [1, {node_count}]")]
    SubtreeSizeOutOfRange {
        /// Requested subtree size.
        size: usize,
        /// Number of nodes in the host tree.
        node_count: usize,
    },
    /// The number of nodes to connect cannot exceed the host tree.
    #[error("cannot connect {count} nodes on a tree with {node_count} nodes")]
    ConnectionCountOutOfRange {
        /// Requested number of nodes to connect.
        count: usize,
        /// Number of nodes in the host tree.
        node_count: usize,
    },
    /// A fractional parameter fell outside its admissible interval.
    #[error("{parameter} must lie in {expected} (got {value})")]
    ParameterOutOfRange {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the admissible interval.
        expected: &'static str,
    },
    /// The Poisson distribution rejected the derived mean.
    #[error("connection count distribution rejected mean {lambda}")]
    PoissonRejected {
        /// Mean derived from `threshold_prob * node_count`.
        lambda: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ChordalError`] variants.
    enum ChordalErrorCode for ChordalError {
        /// The requested graph must contain at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "CHORDAL_INVALID_NODE_COUNT",
        /// A growing subtree cannot exceed the host tree.
        SubtreeSizeOutOfRange => SubtreeSizeOutOfRange { .. } => "CHORDAL_SUBTREE_SIZE_OUT_OF_RANGE",
        /// The number of nodes to connect cannot exceed the host tree.
        ConnectionCountOutOfRange => ConnectionCountOutOfRange { .. } => "CHORDAL_CONNECTION_COUNT_OUT_OF_RANGE",
        /// A fractional parameter fell outside its admissible interval.
        ParameterOutOfRange => ParameterOutOfRange { .. } => "CHORDAL_PARAMETER_OUT_OF_RANGE",
        /// The Poisson distribution rejected the derived mean.
        PoissonRejected => PoissonRejected { .. } => "CHORDAL_POISSON_REJECTED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ChordalError>;
