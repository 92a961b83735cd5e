//! Sweep command implementation.
//!
//! Runs the attribution at several horizons and prints one row each.

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use horizon_analytics::{ReturnAttributor, TotalReturnResult};

use crate::cli::OutputFormat;
use crate::commands::attribute::{warn_unreliable, CurvePair};
use crate::commands::{parse_list, BondArgs, Context};
use crate::output::{print_header, print_json, print_output};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub curves: CurvePair,

    /// Horizons in years (comma-separated, e.g., "0.5,1,2,3")
    #[arg(long)]
    pub horizons: String,
}

/// One horizon of a sweep.
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct SweepRow {
    #[tabled(rename = "Horizon")]
    horizon: f64,
    #[tabled(rename = "End Price")]
    end_price: String,
    #[tabled(rename = "Rolldown %")]
    rolldown: String,
    #[tabled(rename = "Duration %")]
    duration: String,
    #[tabled(rename = "Shape %")]
    shape: String,
    #[tabled(rename = "Income %")]
    income: String,
    #[tabled(rename = "Total %")]
    total: String,
    #[tabled(rename = "Annualized %")]
    annualized: String,
}

impl SweepRow {
    fn new(r: &TotalReturnResult, p: usize) -> Self {
        Self {
            horizon: r.horizon_years,
            end_price: format!("{:.p$}", r.end_price),
            rolldown: format!("{:.p$}", r.rolldown_return),
            duration: format!("{:.p$}", r.duration_return),
            shape: format!("{:.p$}", r.shape_return),
            income: format!("{:.p$}", r.coupon_return + r.reinvestment_return),
            total: format!("{:.p$}", r.total_return),
            annualized: format!("{:.p$}", r.annualized_return),
        }
    }
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond()?;
    let (start, end) = args.curves.load()?;
    let horizons = parse_list(&args.horizons)?;

    let results = ReturnAttributor::with_engine(ctx.engine)
        .attribute_horizons(&bond, &start, &end, &horizons)
        .into_iter()
        .zip(&horizons)
        .map(|(result, h)| result.with_context(|| format!("attribution failed at horizon {h}")))
        .collect::<Result<Vec<_>>>()?;

    for result in &results {
        warn_unreliable(result, ctx);
    }

    match ctx.format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Minimal => {
            for r in &results {
                println!("{}\t{:.prec$}", r.horizon_years, r.total_return, prec = ctx.precision);
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Horizon Sweep");
            }
            let rows: Vec<SweepRow> = results.iter().map(|r| SweepRow::new(r, ctx.precision)).collect();
            print_output(&rows, ctx.format)
        }
    }
}
