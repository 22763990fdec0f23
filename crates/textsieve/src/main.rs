//! `sieve` - CLI for textsieve
//!
//! Reads text, extracts and masks sensitive values, and writes them as JSON.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use textsieve::cli::{self, Cli, Command, ConfigCommand, OutputTarget, RunCommand, RunPlan};
use textsieve::{init_logging, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Run(run_cmd) => handle_run(&config, &run_cmd, cli.quiet),
        Command::Rules(rules_cmd) => handle_rules(&config, rules_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_run(
    config: &Config,
    cmd: &RunCommand,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = RunPlan::resolve(cmd, config);
    cli::run(&plan, config)?;

    if let OutputTarget::File(path) = &plan.output {
        if !quiet {
            eprintln!("Extraction complete.");
            eprintln!("Output saved to {}", path.display());
        }
    }
    Ok(())
}

fn handle_rules(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = config.safety_filter()?;

    if json {
        let rules: Vec<_> = filter
            .rules()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.name,
                    "description": rule.description,
                    "pattern": rule.pattern(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules)?);
    } else {
        println!("Safety rules (email, url and phone candidates)");
        println!("----------------------------------------------");
        for rule in filter.rules() {
            println!("{:<16} {}", rule.name, rule.description);
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[IO]");
                println!("  Input path:         {}", config.io.input_path.display());
                println!("  Output path:        {}", config.io.output_path.display());
                println!();
                println!("[Output]");
                println!("  Indent:             {}", config.output.indent);
                println!("  Stdout:             {}", config.output.stdout);
                println!();
                println!("[Safety]");
                println!("  Extra rules:        {}", config.safety.extra_rules.len());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
