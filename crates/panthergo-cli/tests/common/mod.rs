//! Shared fixtures for integration tests: a mock PANTHER service and
//! scratch gene list files.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const GENOMES_PATH: &str = "/services/oai/pantherdb/supportedgenomes";
pub const ENRICH_PATH: &str = "/services/oai/pantherdb/enrich/overrep";

/// Supported genomes: mouse and human
pub fn supported_genomes_response() -> Value {
    json!({
        "search": {
            "output": {
                "genomes": {
                    "genome": [
                        {"name": "mouse", "taxon_id": 10090, "short_name": "MOUSE", "version": "18.0"},
                        {"name": "human", "taxon_id": 9606, "short_name": "HUMAN", "version": "18.0"}
                    ]
                }
            }
        }
    })
}

/// Two terms, deliberately out of fdr order: fdr 0.2 first, fdr 0.01 second
pub fn two_term_response() -> Value {
    json!({
        "results": {
            "enrichment_test_type": "FISHER",
            "correction": "FDR",
            "annotDataSet": "GO:0008150",
            "result": [
                {
                    "number_in_list": 1,
                    "fold_enrichment": 1.5,
                    "fdr": 0.2,
                    "expected": 0.67,
                    "number_in_reference": 1,
                    "pValue": 0.09,
                    "plus_minus": "+",
                    "term": {"id": "GO:0000002", "label": "mitochondrial genome maintenance"}
                },
                {
                    "number_in_list": 2,
                    "fold_enrichment": 3.0,
                    "fdr": 0.01,
                    "expected": 0.67,
                    "number_in_reference": 2,
                    "pValue": 0.001,
                    "plus_minus": "+",
                    "term": {"id": "GO:0000001", "label": "mitochondrion inheritance"}
                }
            ]
        }
    })
}

/// Mount the supported-genomes endpoint
pub async fn mount_genomes(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(GENOMES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(supported_genomes_response()))
        .mount(server)
        .await;
}

/// Scratch workspace with a study list, a background list and an output dir
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub reference: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Study `G1,G2` and background `G1,G2,G3`, both as plain text
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("genes.txt");
        let reference = dir.path().join("background.txt");
        let output = dir.path().join("out");

        std::fs::write(&input, "G1\nG2\n").expect("Failed to write study list");
        std::fs::write(&reference, "G1\nG2\nG3\n").expect("Failed to write background list");
        std::fs::create_dir(&output).expect("Failed to create output dir");

        Self {
            dir,
            input,
            reference,
            output,
        }
    }

    pub fn significant_csv(&self, experiment: &str, short_name: &str) -> PathBuf {
        self.output
            .join("significant_pantherGO_results")
            .join(format!("{}_{}_pantherGO.csv", experiment, short_name))
    }

    pub fn all_csv(&self, experiment: &str, short_name: &str) -> PathBuf {
        self.output
            .join("all_pantherGO_results")
            .join(format!("{}_{}_pantherGO.csv", experiment, short_name))
    }
}
