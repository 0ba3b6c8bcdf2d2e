//! Gene list loading
//!
//! Reads a study or background gene list from disk. Two layouts are accepted:
//!
//! - `.txt`: one identifier per line; tab-separated fields on a line are
//!   treated as separate identifiers
//! - `.csv`: comma-separated fields in any arrangement, no header row
//!
//! Blank fields are skipped and the file order is preserved.

use crate::error::{CliError, Result};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Gene list file layout, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneListFormat {
    PlainText,
    Csv,
}

impl GeneListFormat {
    /// Detect the layout from the extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::PlainText),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Ordered list of gene identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneList {
    genes: Vec<String>,
}

impl GeneList {
    /// Build a list from identifiers, trimming and dropping blanks
    pub fn new<I, S>(genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let genes = genes
            .into_iter()
            .map(|g| g.as_ref().trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        Self { genes }
    }

    /// Load a gene list file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.is_file() {
            return Err(CliError::FileNotFound(shown));
        }

        let format = GeneListFormat::from_path(path)
            .ok_or_else(|| CliError::UnsupportedInputType(shown.clone()))?;

        let list = match format {
            GeneListFormat::PlainText => Self::parse_text(&std::fs::read_to_string(path)?),
            GeneListFormat::Csv => Self::parse_csv(std::fs::File::open(path)?)?,
        };

        if list.is_empty() {
            return Err(CliError::EmptyGeneList(shown));
        }

        debug!(path = %shown, ?format, genes = list.len(), "Loaded gene list");
        Ok(list)
    }

    /// Parse plain-text content
    pub fn parse_text(content: &str) -> Self {
        Self::new(content.lines().flat_map(|line| line.split('\t')))
    }

    /// Parse CSV content; rows may have any number of fields
    pub fn parse_csv<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut genes = Vec::new();
        for record in rdr.records() {
            let record = record?;
            genes.extend(record.iter().map(str::to_string));
        }

        Ok(Self::new(genes))
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    /// Comma-joined form sent to the service
    pub fn to_request_string(&self) -> String {
        self.genes.join(",")
    }
}

impl fmt::Display for GeneList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_request_string())
    }
}
