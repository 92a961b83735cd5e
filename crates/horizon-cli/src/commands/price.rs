//! Price command implementation.
//!
//! Prices a bond off a zero curve and reports yield and risk.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use horizon_bonds::{BondParameters, BondResult, YieldStatus};

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, Context, CurveSource};
use crate::output::{print_header, print_json, print_key_values, print_warning, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub curve: CurveSource,

    /// Years elapsed since issue (negative values price before issue)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub elapsed: f64,

    /// Credit spread added to every pillar (basis points)
    #[arg(long, allow_hyphen_values = true)]
    pub spread: Option<f64>,
}

/// JSON shape of a pricing run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PriceReport {
    bond: BondParameters,
    elapsed_years: f64,
    #[serde(flatten)]
    result: BondResult,
    modified_duration: f64,
    dv01: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond()?;
    let mut curve = args.curve.load()?;
    if let Some(bps) = args.spread {
        curve = curve.with_spread_bps(bps)?;
    }

    let result = ctx.engine.price(&bond, &curve, args.elapsed)?;

    if let YieldStatus::NotConverged { iterations, .. } = result.yield_status {
        if !ctx.quiet {
            print_warning(&format!(
                "yield did not converge after {iterations} iterations; showing best estimate"
            ));
        }
    }

    match ctx.format {
        OutputFormat::Json => print_json(&PriceReport {
            bond,
            elapsed_years: args.elapsed,
            result,
            modified_duration: result.modified_duration(),
            dv01: result.dv01(),
        }),
        OutputFormat::Minimal => {
            println!("{:.prec$}", result.clean_price, prec = ctx.precision);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Bond Pricing Results");
            }
            print_key_values(&rows(&bond, args.elapsed, &result, ctx.precision), ctx.format)
        }
    }
}

fn rows(bond: &BondParameters, elapsed: f64, result: &BondResult, p: usize) -> Vec<KeyValue> {
    vec![
        KeyValue::percent("Coupon", bond.coupon_rate, 3),
        KeyValue::new("Maturity", format!("{}y", bond.maturity_years)),
        KeyValue::new("Frequency", bond.frequency.to_string()),
        KeyValue::number("Face Value", bond.face_value, 2),
        KeyValue::new("Elapsed", format!("{elapsed}y")),
        KeyValue::separator(),
        KeyValue::number("Clean Price", result.clean_price, p),
        KeyValue::number("Dirty Price", result.dirty_price, p),
        KeyValue::number("Accrued Interest", result.accrued_interest, p),
        KeyValue::percent("Yield to Maturity", result.yield_to_maturity, p.min(6)),
        KeyValue::new("Yield Status", status_label(&result.yield_status)),
        KeyValue::number("Macaulay Duration", result.duration, p),
        KeyValue::number("Modified Duration", result.modified_duration(), p),
        KeyValue::number("Convexity", result.convexity, p),
        KeyValue::number("DV01", result.dv01(), p),
    ]
}

fn status_label(status: &YieldStatus) -> String {
    match status {
        YieldStatus::Converged { iterations } => format!("converged ({iterations} steps)"),
        YieldStatus::NotConverged { residual, .. } => format!("not converged (residual {residual:.2e})"),
        YieldStatus::Matured => "matured".to_string(),
    }
}
