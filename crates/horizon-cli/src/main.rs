//! Horizon CLI - bond pricing and return attribution off zero curves.
//!
//! # Usage
//!
//! ```bash
//! # Price a 10y 5% semi-annual bond on a flat 5% curve
//! horizon price --coupon 5 --maturity 10 --flat 5
//!
//! # Zero rates off a curve file
//! horizon rate --curve treasury.json --tenors 1,7,20
//!
//! # Attribute one year of return under a 25bp steepener
//! horizon attribute --coupon 4.5 --maturity 10 --curve-start treasury.json \
//!     --scenario steepener:25:25:5 --horizon 1
//!
//! # Same, across several horizons
//! horizon sweep --coupon 4.5 --maturity 10 --flat-start 4 --flat-end 4.5 --horizons 0.5,1,2,3
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;
use horizon_bonds::PricingEngine;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // `config init` may be pointed at a file that does not exist yet
    let config = match (&cli.command, cli.config.as_deref()) {
        (Commands::Config(_), Some(path)) if !path.exists() => CliConfig::default(),
        (_, explicit) => CliConfig::load(explicit)?,
    };
    let ctx = Context {
        format: cli.format.unwrap_or(config.output.format),
        precision: config.output.precision,
        quiet: cli.quiet,
        engine: PricingEngine::with_solver(config.solver.to_solver()),
    };

    // Execute command
    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Rate(args) => commands::rate::execute(args, &ctx)?,
        Commands::Attribute(args) => commands::attribute::execute(args, &ctx)?,
        Commands::Sweep(args) => commands::sweep::execute(args, &ctx)?,
        Commands::Config(args) => {
            commands::config::execute(args, &config, cli.config.as_deref(), &ctx)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
