//! Sevai - Entry Point
//!
//! Binary entry point for the Sevai assistant. Lives in the `sevai` facade
//! crate next to the library re-exports.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sevai ingest` | Index the configured corpus |
//! | `sevai ask "..."` | Answer one question |
//! | `sevai chat` | Interactive loop on stdin |
//! | `sevai stats` | Index statistics |

use anyhow::Context;
use clap::Parser;
use sevai::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli).await.context("sevai failed")
}
