//! Config command implementation.
//!
//! Shows, locates and initialises the CLI configuration file.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{default_path, CliConfig};
use crate::output::{print_header, print_info, print_json, print_key_values, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default settings
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    config: &CliConfig,
    explicit: Option<&Path>,
    ctx: &Context,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(config, ctx),
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init) => execute_init(&init, explicit),
    }
}

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_path)
        .ok_or_else(|| anyhow!("Could not determine config directory"))
}

/// Show current configuration.
fn execute_show(config: &CliConfig, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Minimal => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("output.format", format!("{:?}", config.output.format).to_lowercase()),
                KeyValue::new("output.precision", config.output.precision.to_string()),
                KeyValue::new("solver.tolerance", format!("{:e}", config.solver.tolerance)),
                KeyValue::new("solver.max_iterations", config.solver.max_iterations.to_string()),
                KeyValue::new("solver.initial_guess", config.solver.initial_guess.to_string()),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Current Configuration");
            }
            print_key_values(&rows, ctx.format)
        }
    }
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: &InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    if path.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists; use --force to overwrite",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, CliConfig::default().to_toml()?)?;
    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
