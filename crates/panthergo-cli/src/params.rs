//! Enrichment request parameters
//!
//! [`EnrichmentParams`] holds what the user asked for, as given.
//! [`EnrichmentParams::validate`] checks it against the supported organisms
//! and the ontology table and is the only way to obtain an
//! [`EnrichmentRequest`], so every request that reaches the client carries
//! whitelisted values.

use crate::api::SupportedOrganisms;
use crate::error::{CliError, Result};
use crate::gene_list::GeneList;
use crate::ontology::{OntologyEntry, OntologyTable};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default organism: Mus musculus
pub const DEFAULT_ORGANISM: u32 = 10090;

/// Default annotation data set: GO biological process
pub const DEFAULT_ANNOTATION: &str = "GO:0008150";

/// Statistical test run by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestType {
    #[default]
    Fisher,
    Binomial,
}

impl TestType {
    pub fn as_str(self) -> &'static str {
        match self {
            TestType::Fisher => "FISHER",
            TestType::Binomial => "BINOMIAL",
        }
    }
}

impl FromStr for TestType {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FISHER" => Ok(TestType::Fisher),
            "BINOMIAL" => Ok(TestType::Binomial),
            _ => Err(CliError::UnsupportedTestType(s.to_string())),
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiple testing correction applied to p-values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Correction {
    #[default]
    Fdr,
    Bonferroni,
    None,
}

impl Correction {
    pub fn as_str(self) -> &'static str {
        match self {
            Correction::Fdr => "FDR",
            Correction::Bonferroni => "BONFERRONI",
            Correction::None => "NONE",
        }
    }
}

impl FromStr for Correction {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FDR" => Ok(Correction::Fdr),
            "BONFERRONI" => Ok(Correction::Bonferroni),
            "NONE" => Ok(Correction::None),
            _ => Err(CliError::UnsupportedCorrection(s.to_string())),
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated query parameters
#[derive(Debug, Clone)]
pub struct EnrichmentParams {
    /// Genes of interest
    pub study: GeneList,
    /// Background (reference) genes
    pub background: GeneList,
    /// NCBI taxon ID, used for both lists
    pub organism: u32,
    /// Annotation data set identifier, e.g. `GO:0008150`
    pub annotation: String,
    pub test_type: String,
    pub correction: String,
}

impl EnrichmentParams {
    /// Validate against the service's organisms and the ontology table.
    ///
    /// Checks run in order organism, annotation, test type, correction; the
    /// first failure is returned.
    pub fn validate(
        self,
        supported: &SupportedOrganisms,
        ontologies: &OntologyTable,
    ) -> Result<EnrichmentRequest> {
        if !supported.contains(self.organism) {
            return Err(CliError::UnsupportedOrganism(self.organism));
        }

        let annotation = ontologies.get(&self.annotation).copied().ok_or_else(|| {
            CliError::UnsupportedAnnotation {
                requested: self.annotation.clone(),
                expected: ontologies.ids().collect::<Vec<_>>().join(", "),
            }
        })?;

        let test_type: TestType = self.test_type.parse()?;
        let correction: Correction = self.correction.parse()?;

        Ok(EnrichmentRequest {
            gene_input_list: self.study.to_request_string(),
            organism: self.organism,
            ref_input_list: self.background.to_request_string(),
            ref_organism: self.organism,
            annotation,
            test_type,
            correction,
        })
    }
}

/// Validated enrichment request, serialized as the service's form fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentRequest {
    #[serde(rename = "geneInputList")]
    gene_input_list: String,
    organism: u32,
    #[serde(rename = "refInputList")]
    ref_input_list: String,
    #[serde(rename = "refOrganism")]
    ref_organism: u32,
    #[serde(rename = "annotDataSet", serialize_with = "serialize_ontology_id")]
    annotation: OntologyEntry,
    #[serde(rename = "enrichmentTestType")]
    test_type: TestType,
    correction: Correction,
}

impl EnrichmentRequest {
    pub fn gene_input_list(&self) -> &str {
        &self.gene_input_list
    }

    pub fn ref_input_list(&self) -> &str {
        &self.ref_input_list
    }

    pub fn organism(&self) -> u32 {
        self.organism
    }

    pub fn annotation(&self) -> &OntologyEntry {
        &self.annotation
    }

    pub fn test_type(&self) -> TestType {
        self.test_type
    }

    pub fn correction(&self) -> Correction {
        self.correction
    }
}

fn serialize_ontology_id<S: Serializer>(
    entry: &OntologyEntry,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(entry.id)
}
