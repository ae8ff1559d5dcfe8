//! CLI command definitions.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the master configuration and print it
    Plan {
        /// Settings file (defaults to $TRESTLE_SETTINGS)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Load settings, run the derivation, and report the outcome
    Validate {
        /// Settings file (defaults to $TRESTLE_SETTINGS)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// List the parsed worker registry
    Workers {
        /// Settings file (defaults to $TRESTLE_SETTINGS)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
