use std::{io, path::PathBuf};

use chordgen_core::GraphError;
use thiserror::Error;

/// Errors raised while writing or reading persisted graphs and statistics.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Opening or creating a file failed.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing or reading an already open stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The CSV encoder rejected a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A line of an LGF document could not be interpreted.
    #[error("malformed LGF at line {line}: {reason}")]
    MalformedLgf {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// An edge referenced a node label missing from the `@nodes` section.
    #[error("edge at line {line} references unknown node `{label}`")]
    UnknownNode {
        /// One-based line number.
        line: usize,
        /// The unresolved label.
        label: String,
    },
    /// The parsed edge list does not form a simple graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
