//! PantherGO CLI - Main entry point

use clap::Parser;
use panthergo_cli::commands::enrich;
use panthergo_cli::{Cli, OntologyTable};
use panthergo_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet by default; --verbose turns on debug output
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("panthergo")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging, so a setup failure is not fatal
    let log_guard = init_logging(&log_config).ok();

    let code = match execute(&cli).await {
        Ok(outcome) => {
            enrich::print_summary(&outcome);
            0
        }
        Err(e) => {
            error!(error = %e, "Enrichment failed");
            eprintln!("Error: {}", e);
            if e.is_validation() {
                eprintln!("Run `panthergo --help` for accepted values.");
            }
            1
        }
    };

    drop(log_guard);
    process::exit(code);
}

async fn execute(cli: &Cli) -> panthergo_cli::Result<enrich::EnrichOutcome> {
    let config = cli.config()?;
    let args = cli.enrich_args(chrono::Local::now().date_naive());
    enrich::run(&config, &OntologyTable::GO_ROOTS, &args).await
}
