//! Enrichment run
//!
//! Loads both gene lists, validates the query against PANTHER's supported
//! organisms, submits it, and writes the significant and complete result
//! tables.

use crate::api::PantherClient;
use crate::config::Config;
use crate::error::Result;
use crate::gene_list::GeneList;
use crate::ontology::OntologyTable;
use crate::params::EnrichmentParams;
use crate::progress;
use crate::results::{filter_results, reshape, SIGNIFICANCE_THRESHOLD};
use crate::writer::{validate_experiment_name, OutputLayout, WrittenFiles};
use chrono::NaiveDate;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Everything one run needs besides the service configuration
#[derive(Debug, Clone)]
pub struct EnrichArgs {
    /// Genes of interest
    pub input: PathBuf,
    /// Background gene list
    pub reference: PathBuf,
    pub organism: u32,
    pub annotation: String,
    pub test_type: String,
    pub correction: String,
    pub experiment_name: String,
    pub output_dir: PathBuf,
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichOutcome {
    pub files: WrittenFiles,
    pub total_terms: usize,
    pub significant_terms: usize,
}

/// Default experiment name for a run started on `date`: `Exp_YYYY-MM-DD`
pub fn default_experiment_name(date: NaiveDate) -> String {
    format!("Exp_{}", date.format("%Y-%m-%d"))
}

/// Run one enrichment query end to end
#[instrument(skip_all, fields(experiment = %args.experiment_name))]
pub async fn run(
    config: &Config,
    ontologies: &OntologyTable,
    args: &EnrichArgs,
) -> Result<EnrichOutcome> {
    validate_experiment_name(&args.experiment_name)?;

    let study = GeneList::load(&args.input)?;
    let background = GeneList::load(&args.reference)?;
    info!(study = study.len(), background = background.len(), "Gene lists loaded");

    let client = PantherClient::from_config(config)?;
    let supported = client.supported_genomes().await?;

    let request = EnrichmentParams {
        study,
        background,
        organism: args.organism,
        annotation: args.annotation.clone(),
        test_type: args.test_type.clone(),
        correction: args.correction.clone(),
    }
    .validate(&supported, ontologies)?;

    let organism = supported
        .get(request.organism())
        .and_then(|genome| genome.long_name.as_deref().or(genome.name.as_deref()))
        .unwrap_or("unnamed");
    info!(
        taxon_id = request.organism(),
        organism,
        annotation = request.annotation().description,
        "Query validated"
    );

    let layout = OutputLayout::new(&args.output_dir);
    layout.prepare()?;

    let spinner = if config.is_verbose() {
        progress::hidden_spinner()
    } else {
        progress::create_spinner("Waiting for PANTHER enrichment results...")
    };
    let response = client.enrich(&request).await;
    spinner.finish_and_clear();

    let table = reshape(response?.result)?;
    let filtered = filter_results(table);

    let files = layout.write(
        &args.experiment_name,
        request.annotation().short_name,
        &filtered,
    )?;

    let outcome = EnrichOutcome {
        files,
        total_terms: filtered.all.len(),
        significant_terms: filtered.significant.len(),
    };
    info!(
        total = outcome.total_terms,
        significant = outcome.significant_terms,
        "Enrichment run complete"
    );
    Ok(outcome)
}

/// Print the user-facing summary of a finished run
pub fn print_summary(outcome: &EnrichOutcome) {
    println!(
        "{} {} term(s) returned, {} with FDR < {}",
        "✓".green(),
        outcome.total_terms,
        outcome.significant_terms.to_string().bold(),
        SIGNIFICANCE_THRESHOLD
    );
    println!("  Significant: {}", outcome.files.significant.display());
    println!("  All:         {}", outcome.files.all.display());
}
