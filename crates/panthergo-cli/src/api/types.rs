//! PANTHER response types
//!
//! Only the key paths the tool reads are typed; everything else in the
//! payloads is ignored.

use crate::params::EnrichmentRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw enrichment result entry, exactly as the service sent it
pub type RawResultEntry = Map<String, Value>;

/// `GET supportedgenomes` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SupportedGenomesResponse {
    pub search: GenomeSearch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeSearch {
    pub output: GenomeOutput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeOutput {
    pub genomes: GenomeList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeList {
    #[serde(deserialize_with = "one_or_many")]
    pub genome: Vec<Genome>,
}

/// One organism known to PANTHER
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub taxon_id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Organisms the service accepts as `organism` / `refOrganism`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedOrganisms {
    genomes: Vec<Genome>,
}

impl SupportedOrganisms {
    pub fn new(genomes: Vec<Genome>) -> Self {
        Self { genomes }
    }

    /// Shorthand for tests and offline use: organisms known only by taxon ID
    pub fn from_taxon_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            ids.into_iter()
                .map(|taxon_id| Genome {
                    taxon_id,
                    name: None,
                    short_name: None,
                    long_name: None,
                    version: None,
                })
                .collect(),
        )
    }

    pub fn contains(&self, taxon_id: u32) -> bool {
        self.genomes.iter().any(|g| g.taxon_id == taxon_id)
    }

    pub fn get(&self, taxon_id: u32) -> Option<&Genome> {
        self.genomes.iter().find(|g| g.taxon_id == taxon_id)
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }
}

impl From<SupportedGenomesResponse> for SupportedOrganisms {
    fn from(response: SupportedGenomesResponse) -> Self {
        Self::new(response.search.output.genomes.genome)
    }
}

/// `POST enrich/overrep` response envelope
///
/// A successful call fills `results`; a rejected query comes back with HTTP
/// 200 and only `search.error` set.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentResponse {
    #[serde(default)]
    pub results: Option<EnrichmentResults>,
    #[serde(default)]
    pub search: Option<ServiceNotice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentResults {
    #[serde(default)]
    pub enrichment_test_type: Option<String>,
    #[serde(default)]
    pub correction: Option<String>,
    #[serde(default, rename = "annotDataSet")]
    pub annot_data_set: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub result: Vec<RawResultEntry>,
}

impl EnrichmentResults {
    /// Settings the service reports having used that differ from what
    /// `request` sent, as `(field, echoed value)` pairs.
    ///
    /// Fields the service did not echo are skipped.
    pub fn echo_mismatches<'a>(
        &'a self,
        request: &EnrichmentRequest,
    ) -> Vec<(&'static str, &'a str)> {
        let echoes = [
            (
                "enrichmentTestType",
                self.enrichment_test_type.as_deref(),
                request.test_type().as_str(),
            ),
            (
                "correction",
                self.correction.as_deref(),
                request.correction().as_str(),
            ),
            (
                "annotDataSet",
                self.annot_data_set.as_deref(),
                request.annotation().id,
            ),
        ];

        echoes
            .into_iter()
            .filter_map(|(field, echoed, sent)| match echoed {
                Some(echoed) if !echoed.eq_ignore_ascii_case(sent) => Some((field, echoed)),
                _ => None,
            })
            .collect()
    }
}

/// Message block the service uses to report query problems
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceNotice {
    #[serde(default)]
    pub error: Option<String>,
}

/// The service collapses single-element arrays into a bare object.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}
