//! Persistence collaborators for generated chordal graphs.
//!
//! [`LgfExporter`] writes graphs in the LEMON graph format and [`read_lgf`]
//! parses them back. [`CsvStatsWriter`] appends per-instance statistics to
//! the two CSV tables kept beside each method's output directory.

mod csv_stats;
mod errors;
mod lgf;

pub use csv_stats::{CLIQUE_SIZE_FILE_NAME, CsvStatsWriter, INSTANCE_INFO_FILE_NAME};
pub use errors::ExportError;
pub use lgf::{LgfExporter, read_lgf, read_lgf_path, write_lgf};

#[cfg(test)]
mod tests;
