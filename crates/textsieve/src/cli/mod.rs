//! Command-line interface for textsieve.
//!
//! This module provides the CLI structure and the file I/O around the
//! extraction core for the `sieve` binary.

mod commands;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

pub use commands::{ConfigCommand, RulesCommand, RunCommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::ExtractionResult;

/// Path that stands for stdin.
pub const STDIN_PATH: &str = "-";

/// sieve - Extract and mask sensitive data in text
///
/// Finds emails, URLs, phone numbers, credit cards, times and hashtags,
/// masks emails and card numbers, and writes the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "sieve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract from a text file and write JSON
    Run(RunCommand),

    /// List the safety denylist
    Rules(RulesCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Where `sieve run` sends its JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to stdout.
    Stdout,
    /// Write to a file.
    File(PathBuf),
}

/// A fully resolved `sieve run` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Input file, or [`STDIN_PATH`].
    pub input: PathBuf,
    /// Output destination.
    pub output: OutputTarget,
    /// JSON indent width.
    pub indent: usize,
}

impl RunPlan {
    /// Merge command-line arguments over configuration.
    #[must_use]
    pub fn resolve(cmd: &RunCommand, config: &Config) -> Self {
        let input = cmd
            .input
            .clone()
            .unwrap_or_else(|| config.io.input_path.clone());

        let output = if cmd.stdout {
            OutputTarget::Stdout
        } else if let Some(path) = &cmd.output {
            OutputTarget::File(path.clone())
        } else if config.output.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(config.io.output_path.clone())
        };

        Self {
            input,
            output,
            indent: cmd.indent.unwrap_or(config.output.indent),
        }
    }
}

/// Read input text from a file or stdin.
///
/// # Errors
///
/// Returns [`Error::ReadInput`] if the source cannot be read as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String> {
    let read = if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };

    read.map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write rendered JSON to a file.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] if the file cannot be written.
pub fn write_output(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Execute a `sieve run` plan.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or input/output fails.
pub fn run(plan: &RunPlan, config: &Config) -> Result<ExtractionResult> {
    let extractor = config.extractor()?;
    let text = read_input(&plan.input)?;
    let result = extractor.extract(&text);
    let json = result.to_json(plan.indent)?;

    match &plan.output {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
        OutputTarget::File(path) => {
            write_output(path, &json)?;
            info!(
                input = %plan.input.display(),
                output = %path.display(),
                values = result.len(),
                "Extraction complete"
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_cmd(args: &[&str]) -> RunCommand {
        let mut argv = vec!["sieve", "run"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Run(cmd) => cmd,
            other => panic!("Expected run command, got {other:?}"),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("textsieve-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "sieve");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["sieve", "-q", "rules"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);

        let cli = Cli::try_parse_from(["sieve", "rules"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["sieve", "-v", "rules"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["sieve", "-vv", "rules"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["sieve", "-c", "/custom/config.toml", "rules"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["sieve", "config", "validate", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_plan_defaults_from_config() {
        let plan = RunPlan::resolve(&run_cmd(&[]), &Config::default());
        assert_eq!(plan.input, PathBuf::from("sample_input.txt"));
        assert_eq!(
            plan.output,
            OutputTarget::File(PathBuf::from("sample_output.json"))
        );
        assert_eq!(plan.indent, 4);
    }

    #[test]
    fn test_plan_args_override_config() {
        let plan = RunPlan::resolve(
            &run_cmd(&["notes.txt", "-o", "out.json", "--indent", "0"]),
            &Config::default(),
        );
        assert_eq!(plan.input, PathBuf::from("notes.txt"));
        assert_eq!(plan.output, OutputTarget::File(PathBuf::from("out.json")));
        assert_eq!(plan.indent, 0);
    }

    #[test]
    fn test_plan_stdout_from_config() {
        let mut config = Config::default();
        config.output.stdout = true;
        let plan = RunPlan::resolve(&run_cmd(&["-"]), &config);
        assert_eq!(plan.input, PathBuf::from(STDIN_PATH));
        assert_eq!(plan.output, OutputTarget::Stdout);

        let plan = RunPlan::resolve(&run_cmd(&["-o", "x.json"]), &config);
        assert_eq!(plan.output, OutputTarget::File(PathBuf::from("x.json")));
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
    }

    #[test]
    fn test_run_writes_json_file() {
        let input = temp_path("input.txt");
        let output = temp_path("output.json");
        std::fs::write(&input, "Ping joe@test.com at 10:30 AM #standup").unwrap();

        let plan = RunPlan {
            input: input.clone(),
            output: OutputTarget::File(output.clone()),
            indent: 4,
        };
        let result = run(&plan, &Config::default()).unwrap();
        assert_eq!(result.emails, ["j*e@test.com"]);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("{\n    \"emails\": [\n        \"j*e@test.com\""));
        let parsed: ExtractionResult = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, result);

        let _ = std::fs::remove_file(input);
        let _ = std::fs::remove_file(output);
    }

    #[test]
    fn test_run_unwritable_output() {
        let input = temp_path("unwritable-input.txt");
        std::fs::write(&input, "#tag").unwrap();

        let plan = RunPlan {
            input: input.clone(),
            output: OutputTarget::File(PathBuf::from("/nonexistent/dir/out.json")),
            indent: 4,
        };
        let err = run(&plan, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::WriteOutput { .. }));

        let _ = std::fs::remove_file(input);
    }
}
