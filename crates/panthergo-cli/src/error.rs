//! Error types for the PantherGO CLI
//!
//! Every failure the tool can hit maps to one variant here, with a message
//! that tells the user what to change before re-running.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Gene list file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Gene list file has an extension we cannot parse
    #[error("Unsupported gene list type for '{0}'. Gene lists must be .txt or .csv files.")]
    UnsupportedInputType(String),

    /// Gene list file parsed to nothing
    #[error("Gene list '{0}' contains no gene identifiers.")]
    EmptyGeneList(String),

    /// Taxon ID missing from the service's supported genomes
    #[error("Organism {0} is not supported by PANTHER. Check the taxon ID against the supported genomes list.")]
    UnsupportedOrganism(u32),

    /// Annotation data set outside the ontology table
    #[error("Annotation data set '{requested}' is not available. Expected one of: {expected}.")]
    UnsupportedAnnotation { requested: String, expected: String },

    /// Statistical test outside FISHER/BINOMIAL
    #[error("Statistical test '{0}' is not supported. Expected FISHER or BINOMIAL.")]
    UnsupportedTestType(String),

    /// Correction method outside FDR/BONFERRONI/NONE
    #[error("Multiple testing correction '{0}' is not supported. Expected FDR, BONFERRONI or NONE.")]
    UnsupportedCorrection(String),

    /// Server answered with a non-200 status
    #[error("Request to {url} failed with HTTP status {status}.")]
    RequestFailed { url: String, status: StatusCode },

    /// Server answered 200 but the body is not an enrichment result
    #[error("Malformed response from PANTHER: {0}")]
    MalformedResponse(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("Network request failed: {0}. Check your internet connection and server URL.")]
    Http(#[from] reqwest::Error),

    /// JSON decoding failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a request failure from the URL and status that produced it
    pub fn request_failed(url: impl Into<String>, status: StatusCode) -> Self {
        Self::RequestFailed {
            url: url.into(),
            status,
        }
    }

    /// Whether the error was raised by input validation, before any enrichment
    /// request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOrganism(_)
                | Self::UnsupportedAnnotation { .. }
                | Self::UnsupportedTestType(_)
                | Self::UnsupportedCorrection(_)
                | Self::UnsupportedInputType(_)
                | Self::EmptyGeneList(_)
        )
    }
}
