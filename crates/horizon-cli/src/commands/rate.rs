//! Rate command implementation.
//!
//! Reads zero rates off an interpolated curve.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_list, Context, CurveSource};
use crate::output::{print_header, print_output};

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    #[command(flatten)]
    pub curve: CurveSource,

    /// Tenors to query in years (comma-separated, e.g., "1,2.5,7")
    #[arg(short, long)]
    pub tenors: String,
}

/// One interpolated rate.
#[derive(Debug, Serialize, Tabled)]
struct RateRow {
    #[tabled(rename = "Tenor")]
    tenor: f64,
    #[tabled(rename = "Zero Rate (%)")]
    rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

/// Execute the rate command.
pub fn execute(args: RateArgs, ctx: &Context) -> Result<()> {
    let curve = args.curve.load()?;
    let tenors = parse_list(&args.tenors)?;
    let p = ctx.precision;

    let rows = tenors
        .iter()
        .map(|&tenor| -> Result<RateRow> {
            Ok(RateRow {
                tenor,
                rate: format!("{:.p$}", curve.rate_at(tenor)?),
                discount_factor: format!("{:.p$}", curve.discount_factor(tenor)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if ctx.format == OutputFormat::Minimal {
        for row in &rows {
            println!("{}", row.rate);
        }
        return Ok(());
    }
    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Interpolated Zero Rates");
    }
    print_output(&rows, ctx.format)
}
