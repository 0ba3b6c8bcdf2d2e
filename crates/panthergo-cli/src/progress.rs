//! Terminal progress indicators
//!
//! The enrichment request can run for minutes; a spinner shows the tool is
//! still waiting. Indicators draw to stderr and hide themselves when stderr
//! is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

/// Create a spinner for a request of unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Create a spinner that never draws, for quiet or non-interactive runs
pub fn hidden_spinner() -> ProgressBar {
    ProgressBar::hidden()
}
