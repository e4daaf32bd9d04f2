//! Append-only CSV tables of per-instance statistics.

use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use chordgen_core::{InstanceRecord, StatsWriter};
use csv::WriterBuilder;
use tracing::debug;

use crate::errors::ExportError;

/// File name of the per-instance summary table.
pub const INSTANCE_INFO_FILE_NAME: &str = "instance_info.csv";
/// File name of the per-instance clique size histogram table.
pub const CLIQUE_SIZE_FILE_NAME: &str = "clique_size_frequencies.csv";

/// [`StatsWriter`] appending one row per instance to two CSV files.
///
/// `instance_info.csv` receives
/// `instance, method, params..., nodes, density, edges, components,
/// cliques, max_size, min_size, mean_size, stdev, build_seconds`, and
/// `clique_size_frequencies.csv` receives `instance, freq[1], ..., freq[n]`.
/// Rows have no header and vary in width across methods and node counts.
#[derive(Debug, Clone)]
pub struct CsvStatsWriter {
    instance_info: PathBuf,
    clique_sizes: PathBuf,
}

impl CsvStatsWriter {
    /// Writes both tables under `dir` with their standard file names.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(INSTANCE_INFO_FILE_NAME),
            dir.join(CLIQUE_SIZE_FILE_NAME),
        )
    }

    /// Writes the two tables to explicit paths.
    #[must_use]
    pub fn new(instance_info: PathBuf, clique_sizes: PathBuf) -> Self {
        Self {
            instance_info,
            clique_sizes,
        }
    }

    /// Returns the path of the per-instance summary table.
    #[must_use]
    pub fn instance_info_path(&self) -> &Path {
        &self.instance_info
    }

    /// Returns the path of the clique size histogram table.
    #[must_use]
    pub fn clique_sizes_path(&self) -> &Path {
        &self.clique_sizes
    }

    fn append_row(path: &Path, row: &[String]) -> Result<(), ExportError> {
        let file = open_for_append(path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }
}

fn open_for_append(path: &Path) -> Result<File, ExportError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn instance_info_row(record: &InstanceRecord<'_>) -> Vec<String> {
    let stats = record.stats();
    let method = record.method();
    let mut row = vec![record.instance().to_owned(), method.name().to_owned()];
    row.extend(method.parameter_values());
    row.extend([
        stats.node_count().to_string(),
        stats.density().to_string(),
        stats.edge_count().to_string(),
        stats.connected_components().to_string(),
        stats.clique_count().to_string(),
        stats.max_clique_size().to_string(),
        stats.min_clique_size().to_string(),
        stats.mean_clique_size().to_string(),
        stats.clique_size_stdev().to_string(),
        record.build_duration().as_secs_f64().to_string(),
    ]);
    row
}

pub(crate) fn clique_size_row(record: &InstanceRecord<'_>) -> Vec<String> {
    std::iter::once(record.instance().to_owned())
        .chain(
            record
                .stats()
                .clique_size_histogram()
                .iter()
                .skip(1)
                .map(ToString::to_string),
        )
        .collect()
}

impl StatsWriter for CsvStatsWriter {
    type Error = ExportError;

    fn append(&mut self, record: &InstanceRecord<'_>) -> Result<(), Self::Error> {
        Self::append_row(&self.instance_info, &instance_info_row(record))?;
        Self::append_row(&self.clique_sizes, &clique_size_row(record))?;
        debug!(
            instance = record.instance(),
            table = %self.instance_info.display(),
            "statistics appended"
        );
        Ok(())
    }
}
