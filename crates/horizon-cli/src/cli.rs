//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AttributeArgs, ConfigArgs, PriceArgs, RateArgs, SweepArgs};

/// Horizon - bond pricing and total-return attribution off zero curves
#[derive(Parser)]
#[command(name = "horizon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file setting, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to horizon.toml in the user config directory)
    #[arg(long, global = true, env = "HORIZON_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a bond off a zero curve
    Price(PriceArgs),

    /// Interpolate zero rates at given tenors
    Rate(RateArgs),

    /// Attribute a bond's return between two curves over a horizon
    Attribute(AttributeArgs),

    /// Attribute over several horizons at once
    Sweep(SweepArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
