//! CLI command implementations.

pub mod attribute;
pub mod config;
pub mod price;
pub mod rate;
pub mod sweep;

pub use attribute::AttributeArgs;
pub use config::ConfigArgs;
pub use price::PriceArgs;
pub use rate::RateArgs;
pub use sweep::SweepArgs;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Deserialize;
use tracing::debug;

use horizon_bonds::{BondParameters, Frequency, PricingEngine};
use horizon_curves::{CurvePoint, ScenarioBump, ZeroCurve};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Decimal places for figures.
    pub precision: usize,
    /// Suppress warnings and headers.
    pub quiet: bool,
    /// Pricing engine with the configured yield solver.
    pub engine: PricingEngine,
}

/// Bond description shared by pricing and attribution commands.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Years from issue to maturity
    #[arg(short, long)]
    pub maturity: f64,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Face value
    #[arg(long, default_value = "100")]
    pub face: f64,
}

impl BondArgs {
    /// Builds and validates the bond.
    pub fn to_bond(&self) -> Result<BondParameters> {
        let frequency = Frequency::try_from(self.frequency)?;
        let bond = BondParameters::new(self.coupon, self.maturity, frequency).with_face_value(self.face);
        bond.validate()?;
        Ok(bond)
    }
}

/// One curve, from a file, inline pillars or a flat rate.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CurveSource {
    /// Curve file: JSON array of {"tenor", "rate"}, or TOML with a `points` array
    #[arg(long)]
    pub curve: Option<PathBuf>,

    /// Inline pillars as tenor:rate pairs, e.g. "0.5:4.1,2:4.3,10:4.6"
    #[arg(long)]
    pub points: Option<String>,

    /// Flat curve at this zero rate (percent)
    #[arg(long, allow_hyphen_values = true)]
    pub flat: Option<f64>,
}

impl CurveSource {
    /// Loads the curve this source describes.
    pub fn load(&self) -> Result<ZeroCurve> {
        if let Some(path) = &self.curve {
            return Ok(load_curve_file(path)?);
        }
        if let Some(points) = &self.points {
            return Ok(ZeroCurve::new(parse_points(points)?)?);
        }
        if let Some(rate) = self.flat {
            return Ok(ZeroCurve::flat(rate)?);
        }
        Err(CliError::InvalidPoints("no curve given".into()).into())
    }
}

#[derive(Deserialize)]
struct CurveFile {
    points: ZeroCurve,
}

/// Reads a curve file, TOML if the extension says so, JSON otherwise.
pub fn load_curve_file(path: &Path) -> CliResult<ZeroCurve> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str::<CurveFile>(&content)
            .map(|file| file.points)
            .map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<ZeroCurve>(&content).map_err(|e| e.to_string())
    };

    let curve = parsed.map_err(|reason| CliError::CurveFile {
        path: path.display().to_string(),
        reason,
    })?;
    debug!(path = %path.display(), pillars = curve.len(), "loaded curve");
    Ok(curve)
}

/// Parses `tenor:rate` pairs separated by commas.
pub fn parse_points(s: &str) -> CliResult<Vec<CurvePoint>> {
    s.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (tenor, rate) = pair
                .split_once(':')
                .ok_or_else(|| CliError::InvalidPoints(pair.to_string()))?;
            let tenor = tenor
                .trim()
                .parse()
                .map_err(|_| CliError::InvalidPoints(pair.to_string()))?;
            let rate = rate
                .trim()
                .parse()
                .map_err(|_| CliError::InvalidPoints(pair.to_string()))?;
            Ok(CurvePoint::new(tenor, rate))
        })
        .collect()
}

/// Parses a comma-separated list of numbers.
pub fn parse_list(s: &str) -> CliResult<Vec<f64>> {
    let values: Vec<f64> = s
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().map_err(|_| CliError::InvalidList(s.to_string())))
        .collect::<CliResult<_>>()?;
    if values.is_empty() {
        return Err(CliError::InvalidList(s.to_string()));
    }
    Ok(values)
}

/// Parses `parallel:BPS`, `steepener:SHORT:LONG:PIVOT` or `flattener:SHORT:LONG:PIVOT`.
pub fn parse_scenario(s: &str) -> CliResult<ScenarioBump> {
    let invalid = || CliError::InvalidScenario(s.to_string());
    let mut parts = s.split(':').map(str::trim);
    let kind = parts.next().ok_or_else(invalid)?.to_lowercase();
    let args: Vec<f64> = parts
        .map(|p| p.parse().map_err(|_| invalid()))
        .collect::<CliResult<_>>()?;

    match (kind.as_str(), args.as_slice()) {
        ("parallel", [bps]) => Ok(ScenarioBump::parallel(*bps)),
        ("steepener", [short, long, pivot]) if *pivot > 0.0 => {
            Ok(ScenarioBump::steepener(*short, *long, *pivot))
        }
        ("flattener", [short, long, pivot]) if *pivot > 0.0 => {
            Ok(ScenarioBump::flattener(*short, *long, *pivot))
        }
        _ => Err(invalid()),
    }
}
