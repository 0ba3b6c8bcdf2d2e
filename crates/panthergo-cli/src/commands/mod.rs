//! CLI command implementations

pub mod enrich;
