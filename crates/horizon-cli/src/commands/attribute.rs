//! Attribute command implementation.
//!
//! Splits a bond's holding-period return into income, rolldown, duration
//! and shape components.

use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

use horizon_analytics::{ReturnAttributor, TotalReturnResult};
use horizon_curves::ZeroCurve;

use crate::cli::OutputFormat;
use crate::commands::{parse_scenario, BondArgs, Context, CurveSource};
use crate::output::{print_header, print_json, print_key_values, print_warning, KeyValue};

/// Start and end curves for an attribution.
///
/// The end curve is either given directly or built from the start curve
/// with a scenario.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("start").required(true).args(["curve_start", "points_start", "flat_start"])))]
#[command(group(ArgGroup::new("end").required(true).args(["curve_end", "points_end", "flat_end", "scenario"])))]
pub struct CurvePair {
    /// Start curve file
    #[arg(long)]
    pub curve_start: Option<PathBuf>,

    /// Start curve as inline tenor:rate pairs
    #[arg(long)]
    pub points_start: Option<String>,

    /// Flat start curve (percent)
    #[arg(long, allow_hyphen_values = true)]
    pub flat_start: Option<f64>,

    /// End curve file
    #[arg(long)]
    pub curve_end: Option<PathBuf>,

    /// End curve as inline tenor:rate pairs
    #[arg(long)]
    pub points_end: Option<String>,

    /// Flat end curve (percent)
    #[arg(long, allow_hyphen_values = true)]
    pub flat_end: Option<f64>,

    /// Move applied to the start curve: parallel:BPS, steepener:SHORT:LONG:PIVOT, flattener:SHORT:LONG:PIVOT
    #[arg(long, allow_hyphen_values = true)]
    pub scenario: Option<String>,
}

impl CurvePair {
    /// Loads the start curve and derives or loads the end curve.
    pub fn load(&self) -> Result<(ZeroCurve, ZeroCurve)> {
        let start = CurveSource {
            curve: self.curve_start.clone(),
            points: self.points_start.clone(),
            flat: self.flat_start,
        }
        .load()?;

        let end = match &self.scenario {
            Some(scenario) => parse_scenario(scenario)?.apply(&start)?,
            None => CurveSource {
                curve: self.curve_end.clone(),
                points: self.points_end.clone(),
                flat: self.flat_end,
            }
            .load()?,
        };

        Ok((start, end))
    }
}

/// Arguments for the attribute command.
#[derive(Args, Debug)]
pub struct AttributeArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub curves: CurvePair,

    /// Holding period in years
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub horizon: f64,
}

/// Execute the attribute command.
pub fn execute(args: AttributeArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond()?;
    let (start, end) = args.curves.load()?;

    let result = ReturnAttributor::with_engine(ctx.engine).attribute(&bond, &start, &end, args.horizon)?;
    warn_unreliable(&result, ctx);

    match ctx.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Minimal => {
            println!("{:.prec$}", result.total_return, prec = ctx.precision);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Total Return Attribution");
            }
            print_key_values(&rows(&result, ctx.precision), ctx.format)
        }
    }
}

/// Warns when either end of the attribution has an unconverged yield.
pub fn warn_unreliable(result: &TotalReturnResult, ctx: &Context) {
    if ctx.quiet {
        return;
    }
    if !result.start.yield_status.is_reliable() || !result.end.yield_status.is_reliable() {
        print_warning(&format!(
            "yield did not converge at horizon {}y; yields are best estimates",
            result.horizon_years
        ));
    }
}

fn rows(r: &TotalReturnResult, p: usize) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Horizon", format!("{}y", r.horizon_years)),
        KeyValue::number("Start Price", r.start_price, p),
        KeyValue::number("End Price", r.end_price, p),
        KeyValue::number("Rolldown Price", r.rolldown_price, p),
        KeyValue::number("Parallel Price", r.parallel_price, p),
        KeyValue::new("Parallel Shift", format!("{:.2} bps", r.parallel_shift * 100.0)),
        KeyValue::separator(),
        KeyValue::number("Coupon Income", r.coupon_income, p),
        KeyValue::number("Reinvestment Income", r.reinvestment_income, p),
        KeyValue::separator(),
        KeyValue::percent("Rolldown Return", r.rolldown_return, p),
        KeyValue::percent("Duration Return", r.duration_return, p),
        KeyValue::percent("Shape Return", r.shape_return, p),
        KeyValue::percent("Price Return", r.price_return, p),
        KeyValue::percent("Coupon Return", r.coupon_return, p),
        KeyValue::percent("Reinvestment Return", r.reinvestment_return, p),
        KeyValue::percent("Total Return", r.total_return, p),
        KeyValue::percent("Annualized Return", r.annualized_return, p),
    ]
}
