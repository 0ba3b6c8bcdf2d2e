//! Enrichment result tables
//!
//! Turns the service's nested result entries into flat [`ResultRow`]s and
//! splits a table into its significant and complete views.

use crate::api::RawResultEntry;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// FDR cut-off for the significant subset (exclusive)
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Output columns, in order
pub const COLUMNS: [&str; 9] = [
    "id",
    "label",
    "number_in_reference",
    "number_in_list",
    "expected",
    "fold_enrichment",
    "plus_minus",
    "pValue",
    "fdr",
];

/// One annotation term from an enrichment run.
///
/// Field order matches [`COLUMNS`]. A field the service did not send stays
/// `None` and is written as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: Option<String>,
    pub label: Option<String>,
    pub number_in_reference: Option<u64>,
    pub number_in_list: Option<u64>,
    pub expected: Option<f64>,
    pub fold_enrichment: Option<f64>,
    pub plus_minus: Option<String>,
    #[serde(rename = "pValue")]
    pub p_value: Option<f64>,
    pub fdr: Option<f64>,
}

impl ResultRow {
    /// Whether the row's fdr is strictly below `threshold`
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.fdr.is_some_and(|fdr| fdr < threshold)
    }

    // An empty CSV cell reads back as None, so empty text is stored that way.
    fn clear_empty_text(mut self) -> Self {
        for field in [&mut self.id, &mut self.label, &mut self.plus_minus] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
        self
    }
}

/// Ordered collection of result rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable ascending sort by fdr; rows without an fdr go last.
    pub fn sort_by_fdr(&mut self) {
        self.rows.sort_by(|a, b| compare_fdr(a.fdr, b.fdr));
    }

    /// Rows with fdr strictly below `threshold`, in current order
    pub fn significant(&self, threshold: f64) -> ResultTable {
        ResultTable::new(
            self.rows
                .iter()
                .filter(|row| row.is_significant(threshold))
                .cloned()
                .collect(),
        )
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn compare_fdr(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Both views of a filtered run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResults {
    /// Rows below [`SIGNIFICANCE_THRESHOLD`], sorted by fdr
    pub significant: ResultTable,
    /// Every row, sorted by fdr
    pub all: ResultTable,
}

/// Lift the fields of an entry's nested `term` object to the top level.
///
/// Term fields win on key collision. Entries without an object-valued `term`
/// are returned untouched.
pub fn flatten_entry(mut entry: RawResultEntry) -> RawResultEntry {
    match entry.remove("term") {
        Some(Value::Object(term)) => {
            for (key, value) in term {
                entry.insert(key, value);
            }
        }
        Some(other) => {
            entry.insert("term".to_string(), other);
        }
        None => {}
    }
    entry
}

/// Flatten raw service entries into a table, keeping their order.
///
/// Empty `id`, `label` and `plus_minus` strings become `None`.
pub fn reshape(entries: Vec<RawResultEntry>) -> Result<ResultTable> {
    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<ResultRow>(Value::Object(flatten_entry(entry)))
                .map(ResultRow::clear_empty_text)
                .map_err(CliError::from)
        })
        .collect()
}

/// Sort `table` by fdr and split off the significant rows
pub fn filter_results(mut table: ResultTable) -> FilteredResults {
    table.sort_by_fdr();
    FilteredResults {
        significant: table.significant(SIGNIFICANCE_THRESHOLD),
        all: table,
    }
}
