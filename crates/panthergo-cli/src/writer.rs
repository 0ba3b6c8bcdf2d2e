//! CSV output
//!
//! Results land in two sibling directories under the output root:
//!
//! ```text
//! <root>/significant_pantherGO_results/<experiment>_<GO-XX>_pantherGO.csv
//! <root>/all_pantherGO_results/<experiment>_<GO-XX>_pantherGO.csv
//! ```
//!
//! Existing files with the same name are overwritten.

use crate::error::{CliError, Result};
use crate::results::{FilteredResults, ResultRow, ResultTable, COLUMNS};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory holding the fdr-filtered tables
pub const SIGNIFICANT_DIR: &str = "significant_pantherGO_results";

/// Directory holding the complete tables
pub const ALL_DIR: &str = "all_pantherGO_results";

/// Output directory layout rooted at a user-supplied path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

/// Paths written by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub significant: PathBuf,
    pub all: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn significant_dir(&self) -> PathBuf {
        self.root.join(SIGNIFICANT_DIR)
    }

    pub fn all_dir(&self) -> PathBuf {
        self.root.join(ALL_DIR)
    }

    /// Create both result directories. Safe to call repeatedly.
    pub fn prepare(&self) -> Result<()> {
        for dir in [self.significant_dir(), self.all_dir()] {
            if !dir.is_dir() {
                std::fs::create_dir_all(&dir)?;
                debug!(path = %dir.display(), "Created output directory");
            }
        }
        Ok(())
    }

    /// `{experiment}_{short_name}_pantherGO.csv`
    pub fn file_name(experiment: &str, short_name: &str) -> String {
        format!("{}_{}_pantherGO.csv", experiment, short_name)
    }

    pub fn significant_path(&self, experiment: &str, short_name: &str) -> PathBuf {
        self.significant_dir()
            .join(Self::file_name(experiment, short_name))
    }

    pub fn all_path(&self, experiment: &str, short_name: &str) -> PathBuf {
        self.all_dir().join(Self::file_name(experiment, short_name))
    }

    /// Write both tables of a run
    pub fn write(
        &self,
        experiment: &str,
        short_name: &str,
        results: &FilteredResults,
    ) -> Result<WrittenFiles> {
        validate_experiment_name(experiment)?;

        let files = WrittenFiles {
            significant: self.significant_path(experiment, short_name),
            all: self.all_path(experiment, short_name),
        };

        write_table(&files.significant, &results.significant)?;
        write_table(&files.all, &results.all)?;

        info!(
            significant = %files.significant.display(),
            all = %files.all.display(),
            "Wrote result tables"
        );
        Ok(files)
    }
}

/// Experiment names become file name prefixes, so they must not be empty or
/// contain path separators.
pub fn validate_experiment_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::config("experiment name must not be empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(CliError::config(format!(
            "experiment name '{}' must not contain path separators",
            name
        )));
    }
    Ok(())
}

/// Write `table` as CSV with the fixed header, replacing any existing file
pub fn write_table(path: &Path, table: &ResultTable) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = table.len(), "Wrote CSV");
    Ok(())
}

/// Read a table written by [`write_table`]
///
/// Empty cells come back as `None`, so a text field holding `Some("")` does
/// not survive the trip. [`reshape`](crate::results::reshape) never produces
/// one.
pub fn read_table(path: &Path) -> Result<ResultTable> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers = rdr.headers()?;
    if !headers.iter().eq(COLUMNS) {
        return Err(CliError::malformed(format!(
            "unexpected columns in {}: {}",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    rdr.deserialize::<ResultRow>()
        .map(|row| row.map_err(CliError::from))
        .collect()
}
