//! PANTHER endpoint URL builders

/// Path prefix shared by all PANTHER web service endpoints
const SERVICE_PREFIX: &str = "/services/oai/pantherdb";

/// Build supported genomes URL
pub fn supported_genomes_url(base_url: &str) -> String {
    format!("{}{}/supportedgenomes", base_url, SERVICE_PREFIX)
}

/// Build over-representation enrichment URL
pub fn enrich_overrep_url(base_url: &str) -> String {
    format!("{}{}/enrich/overrep", base_url, SERVICE_PREFIX)
}
