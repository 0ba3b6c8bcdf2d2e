//! PANTHER API client module
//!
//! HTTP client for the PANTHER gene-ontology enrichment service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::PantherClient;
pub use types::*;
