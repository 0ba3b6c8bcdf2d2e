//! PantherGO Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the PantherGO workspace members.
//!
//! # Overview
//!
//! - **Logging**: `tracing` subscriber setup driven by a [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use panthergo_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogGuard};
