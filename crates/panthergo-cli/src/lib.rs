//! PantherGO CLI Library
//!
//! Gene-set over-representation analysis against the PANTHER web service.
//!
//! # Overview
//!
//! One invocation runs a single query:
//!
//! - **Input**: load study and background gene lists (`.txt` or `.csv`)
//! - **Validation**: check organism, annotation data set, test and correction
//! - **Query**: POST the enrichment request to PANTHER
//! - **Results**: flatten, sort by FDR, split off significant terms
//! - **Output**: write `significant_pantherGO_results/` and
//!   `all_pantherGO_results/` CSV files

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gene_list;
pub mod ontology;
pub mod params;
pub mod progress;
pub mod results;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use gene_list::GeneList;
pub use ontology::OntologyTable;

use chrono::NaiveDate;
use clap::Parser;
use commands::enrich::{default_experiment_name, EnrichArgs};
use std::path::PathBuf;

/// PantherGO - GO enrichment via the PANTHER web service
#[derive(Parser, Debug)]
#[command(name = "panthergo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to input file containing genes of interest (.txt or .csv)
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Path to reference (background) gene list (.txt or .csv)
    #[arg(short = 'r', long)]
    pub reference: PathBuf,

    /// NCBI taxon ID of the organism
    #[arg(short = 'o', long, default_value_t = params::DEFAULT_ORGANISM)]
    pub organism: u32,

    /// Ontology to test for enrichment: GO:0008150 (GO-BP), GO:0003674 (GO-MF)
    /// or GO:0005575 (GO-CC)
    #[arg(short = 'a', long, default_value = params::DEFAULT_ANNOTATION)]
    pub annotation: String,

    /// Statistical test: FISHER or BINOMIAL
    #[arg(short = 's', long, default_value = "FISHER")]
    pub stats: String,

    /// Experiment name used as the output file prefix [default: Exp_<today>]
    #[arg(short = 'e', long, visible_alias = "experimentName")]
    pub experiment_name: Option<String>,

    /// Multiple testing correction: FDR, BONFERRONI or NONE
    #[arg(short = 'c', long, default_value = "FDR")]
    pub correction: String,

    /// Directory receiving the result folders
    #[arg(short = 'z', long = "outputdir")]
    pub output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// PANTHER server URL
    #[arg(long, env = config::SERVER_URL_ENV)]
    pub server_url: Option<String>,
}

impl Cli {
    /// Resolve the service configuration: environment first, then flags
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;
        if let Some(ref url) = self.server_url {
            config.set_server_url(url.as_str());
        }
        config.set_verbose(self.verbose);
        Ok(config)
    }

    /// Arguments for the enrichment command, filling in the experiment name
    /// from `today` when none was given
    pub fn enrich_args(&self, today: NaiveDate) -> EnrichArgs {
        EnrichArgs {
            input: self.input.clone(),
            reference: self.reference.clone(),
            organism: self.organism,
            annotation: self.annotation.clone(),
            test_type: self.stats.clone(),
            correction: self.correction.clone(),
            experiment_name: self
                .experiment_name
                .clone()
                .unwrap_or_else(|| default_experiment_name(today)),
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["panthergo", "-i", "g.txt", "-r", "bg.txt", "-z", "out"]).unwrap();
        assert_eq!(cli.organism, 10090);
        assert_eq!(cli.annotation, "GO:0008150");
        assert_eq!(cli.stats, "FISHER");
        assert_eq!(cli.correction, "FDR");
        assert!(!cli.verbose);

        let args = cli.enrich_args(today());
        assert_eq!(args.experiment_name, "Exp_2026-10-19");
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "panthergo",
            "--input",
            "study.csv",
            "--reference",
            "bg.csv",
            "-o",
            "9606",
            "-a",
            "GO:0005575",
            "-s",
            "BINOMIAL",
            "--experimentName",
            "knockout",
            "-c",
            "BONFERRONI",
            "--outputdir",
            "results",
        ])
        .unwrap();

        let args = cli.enrich_args(today());
        assert_eq!(args.input, PathBuf::from("study.csv"));
        assert_eq!(args.reference, PathBuf::from("bg.csv"));
        assert_eq!(args.organism, 9606);
        assert_eq!(args.annotation, "GO:0005575");
        assert_eq!(args.test_type, "BINOMIAL");
        assert_eq!(args.correction, "BONFERRONI");
        assert_eq!(args.experiment_name, "knockout");
    }

    #[test]
    fn test_required_flags() {
        assert!(Cli::try_parse_from(["panthergo", "-i", "g.txt", "-r", "bg.txt"]).is_err());
        assert!(Cli::try_parse_from(["panthergo", "-r", "bg.txt", "-z", "out"]).is_err());
    }

    #[test]
    fn test_organism_must_be_numeric() {
        assert!(
            Cli::try_parse_from(["panthergo", "-i", "g", "-r", "b", "-z", "o", "-o", "mouse"])
                .is_err()
        );
    }

    #[test]
    fn test_server_url_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "panthergo",
            "-i",
            "g.txt",
            "-r",
            "bg.txt",
            "-z",
            "out",
            "--server-url",
            "http://127.0.0.1:4000/",
        ])
        .unwrap();
        assert_eq!(cli.config().unwrap().server_url(), "http://127.0.0.1:4000");
    }
}
