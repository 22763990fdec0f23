//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Text file to scan (`-` for stdin; defaults to `io.input_path`)
    pub input: Option<PathBuf>,

    /// JSON file to write (defaults to `io.output_path`)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write JSON to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Spaces per JSON indent level (0 for compact output)
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

/// Rules command arguments.
#[derive(Debug, Args)]
pub struct RulesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses default if not specified)
        file: Option<PathBuf>,
    },
}
