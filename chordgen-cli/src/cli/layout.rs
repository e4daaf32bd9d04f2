//! Output directory layout for generated instances.
//!
//! ```text
//! <root>/ChordalGraphs/<method>/<nodes>/chordalgr_<nodes>_<index>.lgf
//! <root>/ChordalGraphs/<method>/instance_info.csv
//! <root>/ChordalGraphs/<method>/clique_size_frequencies.csv
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::commands::CliError;

const MAIN_FOLDER: &str = "ChordalGraphs";

/// Resolves output paths beneath a root directory.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use chordgen_cli::cli::OutputLayout;
///
/// let layout = OutputLayout::new("/data");
/// assert_eq!(
///     layout.graph_path("pt", 50, 3),
///     Path::new("/data/ChordalGraphs/pt/50/chordalgr_50_3.lgf"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding every file for `method_tag`, including the CSV tables.
    #[must_use]
    pub fn method_dir(&self, method_tag: &str) -> PathBuf {
        self.root.join(MAIN_FOLDER).join(method_tag)
    }

    /// Directory holding the graphs of `method_tag` with `nodes` nodes.
    #[must_use]
    pub fn instance_dir(&self, method_tag: &str, nodes: usize) -> PathBuf {
        self.method_dir(method_tag).join(nodes.to_string())
    }

    /// Path of the LGF file for instance `index`.
    #[must_use]
    pub fn graph_path(&self, method_tag: &str, nodes: usize, index: u64) -> PathBuf {
        self.instance_dir(method_tag, nodes)
            .join(format!("chordalgr_{nodes}_{index}.lgf"))
    }

    /// Creates the instance directory and its parents.
    ///
    /// # Errors
    /// Returns [`CliError::CreateDir`] when a directory cannot be created.
    pub fn prepare(&self, method_tag: &str, nodes: usize) -> Result<PathBuf, CliError> {
        let dir = self.instance_dir(method_tag, nodes);
        create_dir_all(&dir)?;
        Ok(dir)
    }
}

fn create_dir_all(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
