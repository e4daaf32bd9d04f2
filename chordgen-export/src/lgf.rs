//! LEMON graph format (`.lgf`) writer and reader.
//!
//! The writer emits the layout LEMON's `graphWriter` produces for an
//! undirected graph without extra maps:
//!
//! ```text
//! @nodes
//! label
//! 0
//! 1
//! @edges
//!         label
//! 0       1       0
//! ```
//!
//! Every cell is followed by a tab, as LEMON does. The reader accepts any
//! whitespace between cells, skips blank lines, `#` comments and unknown
//! sections, and maps node labels to dense ids in order of appearance.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chordgen_core::{ChordalGraph, GraphExporter};
use tracing::debug;

use crate::errors::ExportError;

const LABEL_COLUMN: &str = "label";

/// Writes `graph` to `writer` in LGF layout.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use chordgen_core::ChordalGraph;
/// use chordgen_export::write_lgf;
///
/// let graph = ChordalGraph::from_edges(2, [(0, 1)])?;
/// let mut buffer = Vec::new();
/// write_lgf(&graph, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "@nodes\nlabel\t\n0\t\n1\t\n@edges\n\t\tlabel\t\n0\t1\t0\t\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_lgf(graph: &ChordalGraph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "@nodes")?;
    writeln!(writer, "{LABEL_COLUMN}\t")?;
    for node in 0..graph.node_count() {
        writeln!(writer, "{node}\t")?;
    }
    writeln!(writer, "@edges")?;
    writeln!(writer, "\t\t{LABEL_COLUMN}\t")?;
    for (id, edge) in graph.edges().iter().enumerate() {
        writeln!(writer, "{}\t{}\t{id}\t", edge.source(), edge.target())?;
    }
    writer.flush()
}

/// [`GraphExporter`] writing LGF documents to a byte sink.
#[derive(Debug)]
pub struct LgfExporter<W> {
    writer: W,
}

impl<W: Write> LgfExporter<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LgfExporter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    /// Returns [`ExportError::Open`] when the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GraphExporter for LgfExporter<W> {
    type Error = ExportError;

    fn export(&mut self, graph: &ChordalGraph) -> Result<(), Self::Error> {
        write_lgf(graph, &mut self.writer)?;
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Nodes,
    Edges,
    Skipped,
}

/// Parses an LGF document into a graph.
///
/// # Errors
/// Returns [`ExportError::MalformedLgf`] for rows that do not fit the
/// section layout, [`ExportError::UnknownNode`] for edges naming unlisted
/// nodes, [`ExportError::Graph`] for self-loops and [`ExportError::Io`]
/// when reading fails.
///
/// # Examples
/// ```
/// use chordgen_export::read_lgf;
///
/// let document = "@nodes\nlabel\n7\n3\n5\n@edges\n\t\tlabel\n7\t3\t0\n3\t5\t1\n";
/// let graph = read_lgf(document.as_bytes())?;
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.has_edge(0, 1));
/// assert!(graph.has_edge(1, 2));
/// # Ok::<(), chordgen_export::ExportError>(())
/// ```
pub fn read_lgf(reader: impl BufRead) -> Result<ChordalGraph, ExportError> {
    let mut section = Section::Preamble;
    let mut expect_header = false;
    let mut label_column = 0;
    let mut ids: HashMap<String, usize> = HashMap::new();
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix('@') {
            section = match name.split_whitespace().next() {
                Some("nodes") => Section::Nodes,
                Some("edges" | "arcs") => Section::Edges,
                _ => Section::Skipped,
            };
            expect_header = matches!(section, Section::Nodes | Section::Edges);
            continue;
        }

        let cells: Vec<&str> = trimmed.split_whitespace().collect();
        match (section, expect_header) {
            (Section::Nodes, true) => {
                label_column = cells
                    .iter()
                    .position(|&cell| cell == LABEL_COLUMN)
                    .ok_or_else(|| ExportError::MalformedLgf {
                        line: number,
                        reason: "@nodes header has no label column".to_owned(),
                    })?;
                expect_header = false;
            }
            (Section::Nodes, false) => {
                let label = cells.get(label_column).ok_or_else(|| ExportError::MalformedLgf {
                    line: number,
                    reason: format!("node row has no cell in column {label_column}"),
                })?;
                let next = ids.len();
                if ids.insert((*label).to_owned(), next).is_some() {
                    return Err(ExportError::MalformedLgf {
                        line: number,
                        reason: format!("duplicate node label `{label}`"),
                    });
                }
            }
            (Section::Edges, true) => expect_header = false,
            (Section::Edges, false) => {
                let [source, target, ..] = cells.as_slice() else {
                    return Err(ExportError::MalformedLgf {
                        line: number,
                        reason: "edge row needs two endpoint cells".to_owned(),
                    });
                };
                let resolve = |label: &str| {
                    ids.get(label).copied().ok_or_else(|| ExportError::UnknownNode {
                        line: number,
                        label: label.to_owned(),
                    })
                };
                edges.push((resolve(*source)?, resolve(*target)?));
            }
            (Section::Preamble, _) => {
                return Err(ExportError::MalformedLgf {
                    line: number,
                    reason: "content before the first section".to_owned(),
                });
            }
            (Section::Skipped, _) => {}
        }
    }

    let graph = ChordalGraph::from_edges(ids.len(), edges)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "lgf document parsed"
    );
    Ok(graph)
}

/// Opens and parses the LGF file at `path`.
///
/// # Errors
/// Returns [`ExportError::Open`] when the file cannot be opened, otherwise
/// the errors of [`read_lgf`].
pub fn read_lgf_path(path: impl AsRef<Path>) -> Result<ChordalGraph, ExportError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|source| ExportError::Open { path, source })?;
    read_lgf(BufReader::new(file))
}
