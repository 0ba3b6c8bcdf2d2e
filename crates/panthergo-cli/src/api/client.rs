//! HTTP client for the PANTHER web service
//!
//! Each method sends exactly one request. HTTP 200 is the only success
//! status; anything else becomes [`CliError::RequestFailed`].

use crate::api::{endpoints, types::*};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::params::EnrichmentRequest;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the PANTHER enrichment service
pub struct PantherClient {
    client: Client,
    base_url: String,
}

impl PantherClient {
    /// Create a new client rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("panthergo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Create from CLI configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.server_url(), config.timeout())
    }

    /// Fetch the organisms PANTHER can run enrichment against
    pub async fn supported_genomes(&self) -> Result<SupportedOrganisms> {
        let url = endpoints::supported_genomes_url(&self.base_url);
        debug!(%url, "Fetching supported genomes");

        let response = self.client.get(&url).send().await?;
        let body: SupportedGenomesResponse = Self::parse_ok(&url, response).await?;

        let organisms = SupportedOrganisms::from(body);
        debug!(count = organisms.len(), "Supported genomes loaded");
        Ok(organisms)
    }

    /// Submit an over-representation query
    ///
    /// Returns the `results` block of the response. A 200 response that does
    /// not carry one is reported as [`CliError::MalformedResponse`], using the
    /// service's own error text when it sent any.
    pub async fn enrich(&self, request: &EnrichmentRequest) -> Result<EnrichmentResults> {
        let url = endpoints::enrich_overrep_url(&self.base_url);
        debug!(
            %url,
            organism = request.organism(),
            annotation = request.annotation().id,
            test = %request.test_type(),
            correction = %request.correction(),
            "Submitting enrichment query"
        );

        let response = self.client.post(&url).form(request).send().await?;
        let body: EnrichmentResponse = Self::parse_ok(&url, response).await?;

        match body.results {
            Some(results) => {
                for (setting, echoed) in results.echo_mismatches(request) {
                    warn!(setting, echoed, "Service used a different setting");
                }
                info!(terms = results.result.len(), "Enrichment query returned successfully");
                Ok(results)
            }
            None => {
                let reason = body
                    .search
                    .and_then(|notice| notice.error)
                    .unwrap_or_else(|| "response has no 'results' block".to_string());
                Err(CliError::malformed(reason))
            }
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn parse_ok<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CliError::request_failed(url, status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
